//! Shared Cache Tests
//!
//! `SharedLruCache` serializes every operation behind one lock, so besides
//! staying within capacity under contention it must produce exactly the
//! recency order a single-threaded cache would.

#![cfg(feature = "concurrent")]

use bounded_lru::config::LruCacheConfig;
use bounded_lru::metrics::CacheMetrics;
use bounded_lru::{LruCache, SharedLruCache};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

const NUM_THREADS: usize = 8;
const OPS_PER_THREAD: usize = 2_000;

#[test]
fn test_shared_matches_single_threaded_order() {
    let shared = SharedLruCache::init(LruCacheConfig { capacity: 3 }, None);
    let mut local = LruCache::new(3);

    for (k, v) in [("A", 0), ("B", 1), ("C", 2), ("D", 3)] {
        assert_eq!(shared.put(k, v), local.put(k, v));
    }
    assert_eq!(shared.get(&"B"), local.get(&"B").cloned());
    shared.put("C", 9);
    local.put("C", 9);

    let local_order: Vec<_> = local.iter().copied().collect();
    assert_eq!(shared.keys(), local_order);
    assert_eq!(shared.keys(), vec!["C", "B", "D"]);
}

#[test]
fn test_shared_high_contention_stays_within_capacity() {
    let cache: Arc<SharedLruCache<usize, usize>> = Arc::new(SharedLruCache::new(64));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = (i * 7 + t) % 256;
                    match i % 4 {
                        0 | 1 => {
                            cache.put(key, i);
                        }
                        2 => {
                            let _ = cache.get(&key);
                        }
                        _ => {
                            let _ = cache.remove(&key);
                        }
                    }
                    assert!(cache.len() <= 64);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let guard = cache.lock();
    assert!(guard.len() <= 64);
    assert_eq!(guard.iter().count(), guard.len());
}

#[test]
fn test_shared_scoped_pool_counts_hits() {
    let cache = SharedLruCache::new(1024);
    for i in 0..512usize {
        cache.put(i, i * 2);
    }

    let hits = AtomicUsize::new(0);
    let mut pool = scoped_threadpool::Pool::new(4);
    pool.scoped(|scope| {
        for t in 0..4usize {
            let cache = &cache;
            let hits = &hits;
            scope.execute(move || {
                for i in (t * 128)..((t + 1) * 128) {
                    if cache.get_with(&i, |v| *v == i * 2) == Ok(true) {
                        hits.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    assert_eq!(hits.load(Ordering::Relaxed), 512);
    assert_eq!(cache.metrics().get("cache_hits"), Some(&512.0));
}

#[test]
fn test_shared_resize_while_writing() {
    let cache: Arc<SharedLruCache<usize, usize>> = Arc::new(SharedLruCache::new(128));

    let writer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            for i in 0..OPS_PER_THREAD {
                cache.put(i, i);
            }
        })
    };
    let resizer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            for cap in (0..=128).rev().step_by(8) {
                cache.set_capacity(cap);
                assert!(cache.len() <= cap);
            }
        })
    };

    writer.join().unwrap();
    resizer.join().unwrap();

    assert_eq!(cache.capacity(), 0);
    assert!(cache.is_empty());
}

#[test]
fn test_shared_cache_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SharedLruCache<String, Vec<u8>>>();
    assert_send_sync::<LruCache<String, Vec<u8>>>();
}
