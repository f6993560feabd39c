// ==============================================
// LFU SEMANTICS TESTS (integration)
// ==============================================
//
// End-to-end behavior checks through the public API: the canonical
// eviction walkthroughs, deterministic tie-breaking, and a randomized
// comparison against a naive reference model.

use lfukit::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn eviction_walkthrough_capacity_two() {
    let mut cache = LfuCache::new(2);

    cache.insert(1, 1);
    cache.insert(2, 2);
    assert_eq!(cache.get(&1), Some(&1));

    // Key 2 is the frequency-1 victim.
    cache.insert(3, 3);
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&3), Some(&3));

    // Keys 1 and 3 both sit at frequency 2; key 1 is the staler one.
    cache.insert(4, 4);
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&3), Some(&3));
    assert_eq!(cache.get(&4), Some(&4));

    cache.check_invariants().unwrap();
}

#[test]
fn eviction_walkthrough_capacity_one() {
    let mut cache = LfuCache::new(1);

    cache.insert(1, 1);
    assert_eq!(cache.get(&1), Some(&1));

    cache.insert(2, 2);
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&2), Some(&2));
}

#[test]
fn capacity_zero_stays_permanently_empty() {
    let mut cache = LfuCache::new(0);

    cache.insert(1, 1);
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.len(), 0);
    cache.check_invariants().unwrap();
}

#[test]
fn misses_are_idempotent() {
    let mut cache = LfuCache::new(2);

    cache.insert(1, 1);
    cache.insert(2, 2);
    cache.insert(3, 3); // evicts key 1

    for _ in 0..5 {
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&99), None);
    }
}

#[test]
fn pop_order_is_frequency_then_reverse_touch() {
    let mut cache = LfuCache::new(4);

    cache.insert(1, 10);
    cache.insert(2, 20);
    cache.insert(3, 30);
    cache.insert(4, 40);

    cache.get(&2); // freq 2
    cache.get(&4); // freq 2
    cache.get(&4); // freq 3

    // Frequency-1 entries drain in touch order (1 before 3), then the
    // frequency-2 entry, then the hottest.
    assert_eq!(cache.pop_lfu(), Some((1, 10)));
    assert_eq!(cache.pop_lfu(), Some((3, 30)));
    assert_eq!(cache.pop_lfu(), Some((2, 20)));
    assert_eq!(cache.pop_lfu(), Some((4, 40)));
    assert_eq!(cache.pop_lfu(), None);
}

#[test]
fn generic_callers_can_bound_on_traits() {
    fn churn<C: LfuCacheTrait<u64, u64>>(cache: &mut C) -> Option<(u64, u64)> {
        for i in 0..8 {
            cache.insert(i, i * 10);
        }
        cache.get(&0);
        cache.remove(&1);
        cache.pop_lfu()
    }

    let mut cache = LfuCache::new(8);
    // Keys 0 and 1 are no longer candidates; key 2 is the stalest at freq 1.
    assert_eq!(churn(&mut cache), Some((2, 20)));
}

// Naive reference model: O(n) scan for the victim, same observable
// contract as the cache.
struct NaiveLfu {
    capacity: usize,
    entries: Vec<(u64, u64, u64, u64)>, // key, value, freq, last_touch
    tick: u64,
}

impl NaiveLfu {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
            tick: 0,
        }
    }

    fn get(&mut self, key: u64) -> Option<u64> {
        self.tick += 1;
        let tick = self.tick;
        let entry = self.entries.iter_mut().find(|e| e.0 == key)?;
        entry.2 += 1;
        entry.3 = tick;
        Some(entry.1)
    }

    fn insert(&mut self, key: u64, value: u64) {
        self.tick += 1;
        let tick = self.tick;
        if let Some(entry) = self.entries.iter_mut().find(|e| e.0 == key) {
            entry.1 = value;
            entry.2 += 1;
            entry.3 = tick;
            return;
        }
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            let victim = self
                .entries
                .iter()
                .enumerate()
                .min_by_key(|(_, e)| (e.2, e.3))
                .map(|(i, _)| i)
                .unwrap();
            self.entries.swap_remove(victim);
        }
        self.entries.push((key, value, 1, tick));
    }

    fn remove(&mut self, key: u64) -> Option<u64> {
        let pos = self.entries.iter().position(|e| e.0 == key)?;
        Some(self.entries.swap_remove(pos).1)
    }
}

#[test]
fn randomized_operations_match_naive_model() {
    let mut rng = StdRng::seed_from_u64(0xF00D);

    for &capacity in &[1usize, 2, 3, 8] {
        let mut cache = LfuCache::new(capacity);
        let mut model = NaiveLfu::new(capacity);

        for step in 0..4000u32 {
            let key = rng.gen_range(0..16u64);
            match rng.gen_range(0..10u32) {
                0..=4 => {
                    let value = u64::from(step);
                    cache.insert(key, value);
                    model.insert(key, value);
                },
                5..=8 => {
                    assert_eq!(cache.get(&key).copied(), model.get(key), "capacity {capacity}");
                },
                _ => {
                    assert_eq!(cache.remove(&key), model.remove(key), "capacity {capacity}");
                },
            }

            assert_eq!(cache.len(), model.entries.len());
            if step % 64 == 0 {
                cache.check_invariants().unwrap();
            }
        }
        cache.check_invariants().unwrap();
    }
}

#[cfg(feature = "concurrency")]
mod concurrent {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn wrapper_serializes_mixed_writers() {
        let cache = Arc::new(ConcurrentLfuCache::<u64, u64>::new(32));

        let mut handles = Vec::new();
        for t in 0..4u64 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                for i in 0..256u64 {
                    cache.insert(i % 48, t);
                    cache.get(&(i % 16));
                    if i % 32 == 0 {
                        cache.pop_lfu();
                    }
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= cache.capacity());
    }
}
