#![no_main]

use libfuzzer_sys::fuzz_target;
use lfukit::policy::lfu::LfuCache;

// Drives an arbitrary operation sequence against the cache and audits the
// structural invariants after every step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0] % 9);
    let mut cache: LfuCache<u8, u16> = LfuCache::new(capacity);

    for (step, chunk) in data[1..].chunks(2).enumerate() {
        if chunk.len() < 2 {
            break;
        }
        let op = chunk[0] % 6;
        let key = chunk[1] % 32;

        match op {
            0 | 1 => {
                cache.insert(key, step as u16);
            }
            2 | 3 => {
                let _ = cache.get(&key);
            }
            4 => {
                let _ = cache.remove(&key);
            }
            5 => {
                let _ = cache.pop_lfu();
            }
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        cache.check_invariants().unwrap();
    }
});
