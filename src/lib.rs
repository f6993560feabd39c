//! lfukit: an O(1) LFU cache with LRU tie-breaking.
//!
//! The core type is [`policy::lfu::LfuCache`], a fixed-capacity store that
//! evicts the least frequently used entry, breaking frequency ties by
//! least-recent use. Entries live in a slot arena and are threaded through
//! per-frequency intrusive lists; a chained bucket map keeps the minimum
//! frequency current without ever scanning.
//!
//! ```
//! use lfukit::prelude::*;
//!
//! let mut cache = LfuCache::new(2);
//! cache.insert(1, 1);
//! cache.insert(2, 2);
//! cache.get(&1);
//!
//! cache.insert(3, 3); // evicts key 2: lowest frequency, least recent
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&3), Some(&3));
//! ```

pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod traits;
