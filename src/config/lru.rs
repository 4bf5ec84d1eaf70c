//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Capacity
//!
//! `capacity` is the maximum number of entries the cache holds after any
//! public operation completes. Zero is a legal value: such a cache accepts
//! writes but evicts them immediately, which is useful for switching caching
//! off without changing call sites.
//!
//! The capacity can be changed later with
//! [`LruCache::set_capacity`](crate::LruCache::set_capacity); shrinking evicts
//! from the least recently used end.
//!
//! # Examples
//!
//! ```
//! use bounded_lru::config::LruCacheConfig;
//! use bounded_lru::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.capacity(), 1000);
//!
//! // A disabled cache
//! let mut off: LruCache<&str, i32> = LruCache::init(LruCacheConfig { capacity: 0 }, None);
//! off.put("a", 1);
//! assert!(off.is_empty());
//! ```

use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed item whenever the number of entries
/// exceeds `capacity`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold. May be zero.
    pub capacity: usize,
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
