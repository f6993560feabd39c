pub use crate::ds::{Arena, EntryId};
pub use crate::error::InvariantError;
#[cfg(feature = "metrics")]
pub use crate::metrics::LfuMetricsSnapshot;
#[cfg(feature = "concurrency")]
pub use crate::policy::lfu::ConcurrentLfuCache;
pub use crate::policy::lfu::LfuCache;
pub use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};
