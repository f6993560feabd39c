pub mod lfu;

#[cfg(feature = "concurrency")]
pub use lfu::ConcurrentLfuCache;
pub use lfu::LfuCache;
