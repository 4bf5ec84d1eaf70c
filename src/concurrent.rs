//! Shared LRU Cache
//!
//! [`LruCache`] assumes a single owner. `SharedLruCache` is the standard way
//! to hand one cache to several threads: the whole cache sits behind a single
//! `parking_lot::Mutex`, so every operation is serialized and the global
//! recency order is exactly what a single-threaded cache would produce.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │             SharedLruCache               │
//! │  ┌────────────────────────────────────┐  │
//! │  │ Mutex                              │  │
//! │  │  ┌──────────────────────────────┐  │  │
//! │  │  │ LruCache (one recency list)  │  │  │
//! │  │  └──────────────────────────────┘  │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Why Mutex Instead of RwLock?
//!
//! `get` moves the entry to the front of the recency list, so every lookup is
//! a write. An `RwLock` would hand out exclusive locks anyway.
//!
//! ## Why not lock striping?
//!
//! Sharding the key space across independently locked caches gives each shard
//! its own recency order, so the evicted entry is no longer the globally
//! least recently used one. This wrapper keeps exact LRU semantics instead.
//!
//! # Example
//!
//! ```rust
//! use bounded_lru::SharedLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(SharedLruCache::new(1000));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};
use parking_lot::{Mutex, MutexGuard};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache: one [`LruCache`] behind one lock.
///
/// Lookups return clones so the lock is never held past the call. Use
/// [`get_with`](Self::get_with) to borrow the value under the lock instead,
/// or [`lock`](Self::lock) to run several operations atomically.
pub struct SharedLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LruCache<K, V, S>>,
}

impl<K: Hash + Eq, V> SharedLruCache<K, V, DefaultHashBuilder> {
    /// Creates a shared cache from a configuration with an optional hasher.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::from_cache(LruCache::init(config, hasher))
    }

    /// Creates a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(LruCache::new(capacity))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> SharedLruCache<K, V, S> {
    /// Creates a shared cache with a custom hash builder.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::from_cache(LruCache::with_hasher(capacity, hash_builder))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LruCache<K, V, S>) -> Self {
        SharedLruCache {
            inner: Mutex::new(cache),
        }
    }

    /// Unwraps the inner cache.
    pub fn into_inner(self) -> LruCache<K, V, S> {
        self.inner.into_inner()
    }

    /// Locks the cache for a sequence of operations that must not interleave
    /// with other threads.
    ///
    /// ```rust
    /// use bounded_lru::SharedLruCache;
    ///
    /// let cache: SharedLruCache<&str, i32> = SharedLruCache::new(2);
    /// {
    ///     let mut guard = cache.lock();
    ///     if !guard.contains("a") {
    ///         guard.put("a", 1);
    ///     }
    /// }
    /// assert_eq!(cache.get("a"), Ok(1));
    /// ```
    pub fn lock(&self) -> MutexGuard<'_, LruCache<K, V, S>> {
        self.inner.lock()
    }

    /// Maximum number of entries kept after any operation.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns a clone of the value and marks the key most recently used.
    pub fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + Debug,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Applies `f` to the value while holding the lock, marking the key most
    /// recently used.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Result<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + Debug,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Applies `f` to a mutable reference to the value while holding the lock.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Result<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + Debug,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().get_mut(key).map(f)
    }

    /// Membership test without changing the recency order.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Removes `key`, failing with `KeyNotFound` if it is absent.
    pub fn remove<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + Debug,
    {
        self.inner.lock().remove(key)
    }

    /// Changes the capacity; returns the number of evicted entries.
    pub fn set_capacity(&self, capacity: usize) -> usize {
        self.inner.lock().set_capacity(capacity)
    }

    /// Removes every entry; capacity and metrics are kept.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Snapshot of the keys, most recently used first.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.lock().iter().cloned().collect()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> SharedLruCache<K, V, S> {
    /// Inserts or updates `key`. Same return contract as [`LruCache::put`].
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().put(key, value)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for SharedLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "SharedLRU"
    }
}

impl<K: Debug, V: Debug, S> Debug for SharedLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(guard) => f
                .debug_struct("SharedLruCache")
                .field("cache", &*guard)
                .finish(),
            None => f
                .debug_struct("SharedLruCache")
                .field("cache", &"<locked>")
                .finish(),
        }
    }
}
