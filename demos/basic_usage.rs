//! Basic LRU cache usage: inserts, lookups, eviction, resizing and metrics.
//!
//! Run with `cargo run --example basic_usage`.

use bounded_lru::config::LruCacheConfig;
use bounded_lru::metrics::CacheMetrics;
use bounded_lru::{CacheError, LruCache};

fn main() {
    let mut cache = LruCache::init(LruCacheConfig { capacity: 3 }, None);

    cache.put("A", 0);
    cache.put("B", 1);
    cache.put("C", 2);
    println!("after three puts: {:?}", cache);

    if let Some((key, value)) = cache.put("D", 3) {
        println!("inserting D evicted {}={}", key, value);
    }

    match cache.get(&"B") {
        Ok(value) => println!("B -> {}", value),
        Err(err) => println!("lookup failed: {}", err),
    }

    match cache.get(&"A") {
        Ok(value) => println!("A -> {}", value),
        Err(CacheError::KeyNotFound(key)) => println!("{} is no longer cached", key),
    }

    cache.put("C", 9);
    let order: Vec<_> = cache.iter().collect();
    println!("recency order (most recent first): {:?}", order);

    let evicted = cache.set_capacity(1);
    println!("shrinking to 1 evicted {} entries: {:?}", evicted, cache);

    if let Err(err) = cache.remove(&"zzz") {
        println!("remove: {}", err);
    }

    println!("{} metrics:", cache.algorithm_name());
    for (name, value) in cache.metrics() {
        println!("  {:<16} {}", name, value);
    }
}
