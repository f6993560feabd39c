//! Cache trait hierarchy.
//!
//! Separates the operations every cache supports from the ones that only
//! make sense for a frequency-tracking policy:
//!
//! | Trait           | Extends        | Purpose                               |
//! |-----------------|----------------|---------------------------------------|
//! | `CoreCache`     | -              | Universal cache operations            |
//! | `MutableCache`  | `CoreCache`    | Arbitrary key-based removal           |
//! | `LfuCacheTrait` | `MutableCache` | Frequency observation and LFU popping |
//!
//! [`LfuCache`](crate::policy::lfu::LfuCache) implements all three; generic
//! callers can bound on the narrowest trait they need.

/// Core cache operations that any eviction policy supports.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::CoreCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LfuCache::new(16);
/// warm(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// existed. May evict an entry first when the cache is at capacity.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// Counts as an access: policies may update internal eviction state.
    /// Use [`contains`](Self::contains) for a side-effect-free existence
    /// check.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks whether a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a key-value pair, returning the value if the key existed.
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// Frequency-tracking caches with an observable LFU eviction candidate.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::{CoreCache, LfuCacheTrait};
///
/// let mut cache = LfuCache::new(4);
/// cache.insert(1, "a");
/// cache.insert(2, "b");
/// cache.get(&2);
///
/// // Key 1 was never re-accessed, so it is the eviction candidate.
/// assert_eq!(cache.peek_lfu(), Some((&1, &"a")));
/// assert_eq!(cache.frequency(&2), Some(2));
/// ```
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the current eviction victim: lowest frequency,
    /// least recently touched among ties.
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Returns the current eviction victim without removing it.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Returns the access frequency recorded for `key`, if present.
    fn frequency(&self, key: &K) -> Option<u64>;
}
