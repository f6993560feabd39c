use lfukit::policy::lfu::LfuCache;

fn main() {
    let mut cache: LfuCache<&str, String> = LfuCache::new(2);

    cache.insert("a", "alpha".to_string());
    cache.insert("b", "beta".to_string());

    cache.get(&"a");
    cache.insert("c", "gamma".to_string());

    println!("contains a? {}", cache.contains(&"a"));
    println!("contains b? {}", cache.contains(&"b"));
}

// Expected output:
// contains a? true
// contains b? false
//
// Explanation: capacity=2; "a" is accessed before inserting "c", so "b" is
// the lowest-frequency entry and is evicted.
