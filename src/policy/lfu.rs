//! LFU (Least Frequently Used) cache with LRU tie-breaking.
//!
//! Evicts the entry with the lowest access frequency when capacity is
//! reached; among entries sharing the lowest frequency, the least recently
//! touched one goes first. Both `get` and `insert` run in O(1).
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────────┐
//!   │                         LfuCache<K, V>                            │
//!   │                                                                   │
//!   │  index: FxHashMap<K, EntryId>     entries: Arena<Entry<K, V>>     │
//!   │  ┌─────────┬─────────┐           ┌──────┬──────────────────────┐  │
//!   │  │   Key   │ EntryId │           │ Slot │ freq, links, k, v    │  │
//!   │  ├─────────┼─────────┤           ├──────┼──────────────────────┤  │
//!   │  │  "a"    │  id_0   │──────────►│ id_0 │ freq:2, prev/next    │  │
//!   │  │  "b"    │  id_1   │──────────►│ id_1 │ freq:1, prev/next    │  │
//!   │  └─────────┴─────────┘           └──────┴──────────────────────┘  │
//!   │                                                                   │
//!   │  buckets: FxHashMap<u64, Bucket>   (frequency → intrusive list)   │
//!   │                                                                   │
//!   │  min_freq = 1                                                     │
//!   │       │                                                           │
//!   │       ▼                                                           │
//!   │  freq=1: head ──► [id_1] ◄── tail   (front = MRU, tail evicts)    │
//!   │  freq=2: head ──► [id_0] ◄── tail                                 │
//!   │                                                                   │
//!   │  Bucket chain: freq=1 ──next──► freq=2, freq=2 ──prev──► freq=1   │
//!   └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Access Flow
//!
//! A hit on `get`, and an overwrite on `insert`, both count as an access:
//! the entry's frequency rises by exactly 1 and the entry moves to the
//! front of the bucket for the new frequency. When the move empties the
//! minimum bucket, `min_freq` advances to the new frequency; a fresh
//! insertion always resets `min_freq` to 1. The minimum is never
//! recomputed by scanning.
//!
//! ## Operations
//!
//! | Operation    | Time | Notes                                     |
//! |--------------|------|-------------------------------------------|
//! | `insert`     | O(1) | May evict the LFU/LRU victim first        |
//! | `get`        | O(1) | Increments frequency, moves to MRU        |
//! | `peek`       | O(1) | No frequency side effect                  |
//! | `remove`     | O(1) | Repairs `min_freq` via the bucket chain   |
//! | `pop_lfu`    | O(1) | Explicit eviction of the current victim   |
//! | `peek_lfu`   | O(1) | Tail of the minimum-frequency bucket      |
//! | `frequency`  | O(1) | Observe an entry's access counter         |
//! | `clear`      | O(n) | Drop all entries                          |
//!
//! ## Example
//!
//! ```
//! use lfukit::policy::lfu::LfuCache;
//!
//! let mut cache = LfuCache::new(2);
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//! cache.get(&1);
//!
//! // Capacity reached: key 2 has the lowest frequency and is evicted.
//! cache.insert(3, "three");
//! assert!(!cache.contains(&2));
//! assert!(cache.contains(&1));
//! assert!(cache.contains(&3));
//! ```
//!
//! ## Thread Safety
//!
//! `LfuCache` is single-threaded. For shared use, wrap the whole structure
//! in one lock held across each call; [`ConcurrentLfuCache`] (feature
//! `concurrency`) does exactly that. The internal invariants span all three
//! substructures, so finer-grained locking is not offered.

use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;

use crate::ds::{Arena, EntryId};
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::{LfuMetrics, LfuMetricsSnapshot};
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

/// One cached entry. Link fields come first: they are rewritten on every
/// touch, while key and value are only read on lookup and eviction.
#[derive(Debug)]
#[repr(C)]
struct Entry<K, V> {
    prev: Option<EntryId>,
    next: Option<EntryId>,
    freq: u64,
    key: K,
    value: V,
}

/// Intrusive list of entries sharing one frequency, plus chain links to the
/// neighboring non-empty frequency buckets.
#[derive(Debug, Default)]
struct Bucket {
    head: Option<EntryId>,
    tail: Option<EntryId>,
    prev: Option<u64>,
    next: Option<u64>,
}

/// Fixed-capacity LFU cache with deterministic LRU tie-breaking.
///
/// See the module documentation for the internal layout. `capacity == 0` is
/// a valid degenerate configuration: every `insert` is a no-op and every
/// `get` is a miss.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
///
/// let mut cache: LfuCache<u64, u64> = LfuCache::new(128);
/// assert_eq!(cache.insert(1, 10), None);
/// assert_eq!(cache.get(&1), Some(&10));
/// assert_eq!(cache.get(&2), None);
/// ```
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    entries: Arena<Entry<K, V>>,
    index: FxHashMap<K, EntryId>,
    buckets: FxHashMap<u64, Bucket>,
    min_freq: u64,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arena::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            buckets: FxHashMap::default(),
            min_freq: 0,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        }
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` is present. Does not count as an access.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the access frequency recorded for `key`, if present.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(4);
    /// cache.insert(1, "a");
    /// cache.get(&1);
    ///
    /// assert_eq!(cache.frequency(&1), Some(2));
    /// assert_eq!(cache.frequency(&9), None);
    /// ```
    #[inline]
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let id = *self.index.get(key)?;
        self.entries.get(id).map(|entry| entry.freq)
    }

    /// Returns a reference to the value for `key` without counting an
    /// access: no frequency or recency state changes.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Gets a reference to the value for `key`.
    ///
    /// A hit counts as an access: the entry's frequency rises by 1 and it
    /// becomes the most recently used at its new frequency. A miss returns
    /// `None`; absence is a normal result, never an error and never a
    /// sentinel value.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.insert(1, -1);
    ///
    /// // A stored value of -1 is not confusable with a miss.
    /// assert_eq!(cache.get(&1), Some(&-1));
    /// assert_eq!(cache.get(&2), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(id) => *id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        self.touch(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Inserts or updates a key-value pair, returning the previous value if
    /// the key existed.
    ///
    /// Updating an existing key overwrites its value and counts as an
    /// access, exactly like a `get` hit. Inserting a new key at capacity
    /// first evicts the victim: the least recently touched entry within the
    /// minimum-frequency bucket. With `capacity == 0` this is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(4);
    /// assert_eq!(cache.insert(1, "one"), None);
    /// assert_eq!(cache.insert(1, "uno"), Some("one"));
    /// assert_eq!(cache.frequency(&1), Some(2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let entry = self.entries.get_mut(id).expect("lfu entry missing");
            let previous = mem::replace(&mut entry.value, value);
            self.touch(id);
            return Some(previous);
        }

        if self.capacity == 0 {
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.entries.len() >= self.capacity {
            if let Some((_key, _value)) = self.evict_victim() {
                #[cfg(feature = "metrics")]
                self.metrics.record_eviction();
            }
        }

        let id = self.entries.insert(Entry {
            prev: None,
            next: None,
            freq: 1,
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        if !self.buckets.contains_key(&1) {
            let next = if self.min_freq == 0 {
                None
            } else {
                Some(self.min_freq)
            };
            self.link_bucket(1, None, next);
        }
        self.push_front(1, id);
        self.min_freq = 1;

        None
    }

    /// Removes `key`, returning its value if present.
    ///
    /// Removal is the one path where `min_freq` may advance by more than a
    /// single step; the bucket chain supplies the next non-empty frequency.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let freq = self.entries.get(id).expect("lfu entry missing").freq;

        self.detach(freq, id);

        #[cfg(feature = "metrics")]
        self.metrics.record_remove();

        self.entries.remove(id).map(|entry| entry.value)
    }

    /// Removes and returns the current eviction victim.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(4);
    /// cache.insert(1, "a");
    /// cache.insert(2, "b");
    /// cache.get(&2);
    ///
    /// assert_eq!(cache.pop_lfu(), Some((1, "a")));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu();

        self.evict_victim()
    }

    /// Returns the current eviction victim without removing it.
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        if self.min_freq == 0 {
            return None;
        }
        let id = self.buckets.get(&self.min_freq)?.tail?;
        self.entries.get(id).map(|entry| (&entry.key, &entry.value))
    }

    /// Removes all entries and resets the minimum-frequency tracker.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.buckets.clear();
        self.min_freq = 0;
    }

    /// Unordered traversal of `(key, value, frequency)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V, u64)> {
        self.entries
            .iter()
            .map(|(_, entry)| (&entry.key, &entry.value, entry.freq))
    }

    /// Audits every structural invariant and reports the first violation.
    ///
    /// Checked: index/arena agreement, the capacity bound, `min_freq`
    /// correctness, bucket-chain consistency, intra-bucket link integrity,
    /// and that no empty bucket persists. Intended for tests and fuzz
    /// harnesses; a correct cache always returns `Ok(())`.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(8);
    /// cache.insert(1, "a");
    /// cache.get(&1);
    /// assert!(cache.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        fn ensure(cond: bool, msg: &str) -> Result<(), InvariantError> {
            if cond {
                Ok(())
            } else {
                Err(InvariantError::new(msg))
            }
        }

        ensure(
            self.entries.len() == self.index.len(),
            "index length does not match entry count",
        )?;
        ensure(
            self.entries.len() <= self.capacity,
            "entry count exceeds capacity",
        )?;

        if self.entries.is_empty() {
            ensure(self.min_freq == 0, "min_freq set on an empty cache")?;
            ensure(self.buckets.is_empty(), "empty cache retains buckets")?;
            return Ok(());
        }

        ensure(self.min_freq > 0, "min_freq unset on a non-empty cache")?;
        ensure(
            self.buckets.contains_key(&self.min_freq),
            "min_freq points at a missing bucket",
        )?;

        let mut population = 0usize;
        for (&freq, bucket) in &self.buckets {
            ensure(freq >= self.min_freq, "bucket exists below min_freq")?;
            match bucket.prev {
                Some(prev) => {
                    ensure(prev < freq, "bucket chain prev is not lower")?;
                    let neighbor = self
                        .buckets
                        .get(&prev)
                        .ok_or_else(|| InvariantError::new("bucket chain prev is missing"))?;
                    ensure(neighbor.next == Some(freq), "bucket chain prev/next disagree")?;
                },
                None => ensure(
                    freq == self.min_freq,
                    "non-minimum bucket has no lower neighbor",
                )?,
            }
            if let Some(next) = bucket.next {
                ensure(next > freq, "bucket chain next is not higher")?;
                let neighbor = self
                    .buckets
                    .get(&next)
                    .ok_or_else(|| InvariantError::new("bucket chain next is missing"))?;
                ensure(neighbor.prev == Some(freq), "bucket chain next/prev disagree")?;
            }

            ensure(bucket.head.is_some(), "empty bucket persists in the index")?;
            let mut current = bucket.head;
            let mut last = None;
            let mut count = 0usize;
            while let Some(id) = current {
                let entry = self
                    .entries
                    .get(id)
                    .ok_or_else(|| InvariantError::new("bucket references a freed entry"))?;
                ensure(entry.freq == freq, "entry frequency disagrees with its bucket")?;
                ensure(entry.prev == last, "intra-bucket back-link is broken")?;
                ensure(
                    self.index.get(&entry.key) == Some(&id),
                    "index does not map key to its entry",
                )?;
                last = Some(id);
                current = entry.next;
                count += 1;
            }
            ensure(bucket.tail == last, "bucket tail does not end the list")?;
            population += count;
        }
        ensure(
            population == self.entries.len(),
            "bucket population does not sum to len",
        )?;

        Ok(())
    }

    /// Increments `id`'s frequency and moves it to the MRU position of the
    /// bucket for the new frequency. Saturates at `u64::MAX`: a further
    /// access only refreshes recency.
    fn touch(&mut self, id: EntryId) {
        let freq = self.entries.get(id).expect("lfu entry missing").freq;
        if freq == u64::MAX {
            self.unlink(freq, id);
            self.push_front(freq, id);
            return;
        }
        let next_freq = freq + 1;

        let (chain_prev, chain_next) = {
            let bucket = self.buckets.get(&freq).expect("lfu bucket missing");
            (bucket.prev, bucket.next)
        };

        self.unlink(freq, id);
        let emptied = self.bucket_is_empty(freq);
        if emptied {
            self.unlink_bucket(freq, chain_prev, chain_next);
            if self.min_freq == freq {
                self.min_freq = chain_next.unwrap_or(0);
            }
        }

        if !self.buckets.contains_key(&next_freq) {
            let prev = if emptied { chain_prev } else { Some(freq) };
            self.link_bucket(next_freq, prev, chain_next);
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.freq = next_freq;
        }
        self.push_front(next_freq, id);
        if self.min_freq == 0 || next_freq < self.min_freq {
            self.min_freq = next_freq;
        }
    }

    /// Pops the tail of the minimum-frequency bucket and drops it from the
    /// index.
    fn evict_victim(&mut self) -> Option<(K, V)> {
        if self.min_freq == 0 {
            return None;
        }
        let freq = self.min_freq;
        let id = self.buckets.get(&freq)?.tail?;

        self.detach(freq, id);

        let entry = self.entries.remove(id)?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    /// Unlinks `id` from its bucket and repairs the bucket chain and
    /// `min_freq` if the bucket emptied. The entry itself stays allocated.
    fn detach(&mut self, freq: u64, id: EntryId) {
        let (chain_prev, chain_next) = {
            let bucket = self.buckets.get(&freq).expect("lfu bucket missing");
            (bucket.prev, bucket.next)
        };
        self.unlink(freq, id);
        if self.bucket_is_empty(freq) {
            self.unlink_bucket(freq, chain_prev, chain_next);
            if self.min_freq == freq {
                self.min_freq = chain_next.unwrap_or(0);
            }
        }
    }

    fn bucket_is_empty(&self, freq: u64) -> bool {
        self.buckets
            .get(&freq)
            .map(|bucket| bucket.head.is_none())
            .unwrap_or(true)
    }

    fn link_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        self.buckets.insert(
            freq,
            Bucket {
                head: None,
                tail: None,
                prev,
                next,
            },
        );

        if let Some(prev) = prev {
            if let Some(neighbor) = self.buckets.get_mut(&prev) {
                neighbor.next = Some(freq);
            }
        }
        if let Some(next) = next {
            if let Some(neighbor) = self.buckets.get_mut(&next) {
                neighbor.prev = Some(freq);
            }
        }
    }

    fn unlink_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        if let Some(prev) = prev {
            if let Some(neighbor) = self.buckets.get_mut(&prev) {
                neighbor.next = next;
            }
        }
        if let Some(next) = next {
            if let Some(neighbor) = self.buckets.get_mut(&next) {
                neighbor.prev = prev;
            }
        }
        self.buckets.remove(&freq);
    }

    fn push_front(&mut self, freq: u64, id: EntryId) {
        let bucket = self.buckets.get_mut(&freq).expect("lfu bucket missing");
        let old_head = bucket.head;

        if let Some(entry) = self.entries.get_mut(id) {
            entry.prev = None;
            entry.next = old_head;
        }
        if let Some(old_head) = old_head {
            if let Some(entry) = self.entries.get_mut(old_head) {
                entry.prev = Some(id);
            }
        } else {
            bucket.tail = Some(id);
        }
        bucket.head = Some(id);
    }

    fn unlink(&mut self, freq: u64, id: EntryId) {
        let (prev, next) = {
            let entry = self.entries.get(id).expect("lfu entry missing");
            (entry.prev, entry.next)
        };

        let bucket = self.buckets.get_mut(&freq).expect("lfu bucket missing");
        if let Some(prev) = prev {
            if let Some(entry) = self.entries.get_mut(prev) {
                entry.next = next;
            }
        } else {
            bucket.head = next;
        }
        if let Some(next) = next {
            if let Some(entry) = self.entries.get_mut(next) {
                entry.prev = prev;
            }
        } else {
            bucket.tail = prev;
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.prev = None;
            entry.next = None;
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Snapshots the operation counters plus current len/capacity gauges.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(4);
    /// cache.insert(1, "a");
    /// cache.get(&1);
    /// cache.get(&2);
    ///
    /// let snapshot = cache.metrics_snapshot();
    /// assert_eq!(snapshot.get_hits, 1);
    /// assert_eq!(snapshot.get_misses, 1);
    /// assert_eq!(snapshot.insert_new, 1);
    /// ```
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evicted_entries: self.metrics.evicted_entries,
            pop_lfu_calls: self.metrics.pop_lfu_calls,
            remove_calls: self.metrics.remove_calls,
            cache_len: self.entries.len(),
            capacity: self.capacity,
        }
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LfuCache::insert(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LfuCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LfuCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LfuCache::len(self)
    }

    fn capacity(&self) -> usize {
        LfuCache::capacity(self)
    }

    fn clear(&mut self) {
        LfuCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LfuCache::remove(self, key)
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lfu(&mut self) -> Option<(K, V)> {
        LfuCache::pop_lfu(self)
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        LfuCache::peek_lfu(self)
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        LfuCache::frequency(self, key)
    }
}

/// Mutex-guarded LFU cache for shared use (`concurrency` feature).
///
/// One lock protects the whole structure and is held for the duration of
/// each call, since every operation may mutate the index, a bucket, and the
/// minimum-frequency tracker together.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::ConcurrentLfuCache;
///
/// let cache: ConcurrentLfuCache<u64, String> = ConcurrentLfuCache::new(64);
/// cache.insert(1, "one".to_string());
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// ```
#[cfg(feature = "concurrency")]
#[derive(Debug)]
pub struct ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: parking_lot::Mutex<LfuCache<K, V>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: parking_lot::Mutex::new(LfuCache::new(capacity)),
        }
    }

    /// Inserts or updates a key-value pair.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    /// Gets an owned clone of the value for `key`. Counts as an access.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut cache = self.inner.lock();
        cache.get(key).cloned()
    }

    /// Applies `f` to the value for `key` under the lock. Counts as an
    /// access.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let mut cache = self.inner.lock();
        cache.get(key).map(f)
    }

    /// Returns `true` if `key` is present. Does not count as an access.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Removes `key`, returning its value if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Removes and returns the current eviction victim.
    pub fn pop_lfu(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lfu()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}
