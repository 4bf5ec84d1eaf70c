#![no_std]
extern crate alloc;
extern crate bounded_lru;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use bounded_lru::config::LruCacheConfig;
use bounded_lru::LruCache;

fn make_lru<K: core::hash::Hash + Eq, V>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig { capacity: cap }, None)
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);

    // Using String as it requires the alloc crate
    let key1 = String::from("key1");
    let key2 = String::from("key2");
    let key3 = String::from("key3");

    cache.put(key1.clone(), 1);
    cache.put(key2.clone(), 2);

    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert_eq!(*cache.get(&key2).unwrap(), 2);

    // key1 is least recent after the two gets
    cache.put(key3.clone(), 3);
    assert!(cache.get(&key1).is_err());
    assert_eq!(*cache.get(&key3).unwrap(), 3);

    let order: Vec<&String> = cache.iter().collect();
    assert_eq!(order, [&key3, &key2]);
}

#[test]
fn test_lru_formatting_in_no_std() {
    let mut cache = make_lru(3);
    for i in 0..3u8 {
        cache.put(i, format!("v{}", i));
    }
    assert_eq!(format!("{:?}", cache), "{2: \"v2\", 1: \"v1\", 0: \"v0\"}");

    let err = cache.remove(&9u8).unwrap_err();
    assert_eq!(format!("{}", err), "key not found: 9");
}
