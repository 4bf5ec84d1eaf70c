//! Sharing one LRU cache between threads.
//!
//! Run with `cargo run --example shared_usage --features concurrent`.

use bounded_lru::metrics::CacheMetrics;
use bounded_lru::SharedLruCache;
use std::sync::Arc;
use std::thread;

fn main() {
    let cache: Arc<SharedLruCache<String, usize>> = Arc::new(SharedLruCache::new(100));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("key_{}", (t * 31 + i) % 150);
                    if cache.get(&key).is_err() {
                        cache.put(key, i);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker thread panicked");
        }
    }

    println!("entries: {} / {}", cache.len(), cache.capacity());

    // several operations under one lock
    {
        let mut guard = cache.lock();
        while guard.len() > 10 {
            guard.pop_lru();
        }
        println!("most recent after trim: {:?}", guard.most_recent());
    }

    let metrics = cache.metrics();
    println!(
        "hit rate: {:.2}, evictions: {}",
        metrics.get("hit_rate").copied().unwrap_or_default(),
        metrics.get("evictions").copied().unwrap_or_default()
    );
}
