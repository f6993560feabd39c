//! Operation counters for the LFU cache (`metrics` feature).
//!
//! Counters record only on mutating call paths (`&mut self`), so plain
//! integer fields suffice and reads stay free of interior mutability.
//! [`LfuMetricsSnapshot`] is the copyable view handed to callers.

/// Internal counter block carried by the cache.
#[derive(Debug, Default)]
pub(crate) struct LfuMetrics {
    pub(crate) get_calls: u64,
    pub(crate) get_hits: u64,
    pub(crate) get_misses: u64,
    pub(crate) insert_calls: u64,
    pub(crate) insert_updates: u64,
    pub(crate) insert_new: u64,
    pub(crate) evicted_entries: u64,
    pub(crate) pop_lfu_calls: u64,
    pub(crate) remove_calls: u64,
}

impl LfuMetrics {
    pub(crate) fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    pub(crate) fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    pub(crate) fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }

    pub(crate) fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evicted_entries += 1;
    }

    pub(crate) fn record_pop_lfu(&mut self) {
        self.pop_lfu_calls += 1;
    }

    pub(crate) fn record_remove(&mut self) {
        self.remove_calls += 1;
    }
}

/// Point-in-time view of cache operation counters.
///
/// Obtained from
/// [`LfuCache::metrics_snapshot`](crate::policy::lfu::LfuCache::metrics_snapshot).
/// The `cache_len` and `capacity` gauges are captured at snapshot time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LfuMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evicted_entries: u64,
    pub pop_lfu_calls: u64,
    pub remove_calls: u64,

    pub cache_len: usize,
    pub capacity: usize,
}
