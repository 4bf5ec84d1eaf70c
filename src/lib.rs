#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Operation | Method | Recency effect | Fails with |
//! |-----------|--------|----------------|------------|
//! | get       | [`LruCache::get`] | promotes to most recent | [`CacheError::KeyNotFound`] |
//! | set       | [`LruCache::put`] | promotes / inserts at front, may evict | never |
//! | delete    | [`LruCache::remove`] | unlinks | [`CacheError::KeyNotFound`] |
//! | contains  | [`LruCache::contains`] | none | never |
//! | iterate   | [`LruCache::iter`] | none | never |
//! | resize    | [`LruCache::set_capacity`] | evicts from the back | never |
//!
//! ## Example
//!
//! ```rust
//! use bounded_lru::LruCache;
//! use bounded_lru::config::LruCacheConfig;
//!
//! let mut cache = LruCache::init(LruCacheConfig { capacity: 3 }, None);
//! cache.put("A", 0);
//! cache.put("B", 1);
//! cache.put("C", 2);
//! assert_eq!(cache.iter().copied().collect::<Vec<_>>(), ["C", "B", "A"]);
//!
//! cache.put("D", 3);                      // "A" evicted
//! assert_eq!(cache.iter().copied().collect::<Vec<_>>(), ["D", "C", "B"]);
//!
//! assert_eq!(cache.get(&"B"), Ok(&1));    // "B" becomes most recent
//! assert_eq!(cache.iter().copied().collect::<Vec<_>>(), ["B", "D", "C"]);
//!
//! cache.put("C", 9);
//! assert_eq!(cache.get(&"C"), Ok(&9));
//! assert_eq!(cache.iter().copied().collect::<Vec<_>>(), ["C", "B", "D"]);
//! ```
//!
//! ## Shared Access
//!
//! Enable the `concurrent` feature for [`SharedLruCache`], a single-lock
//! wrapper that keeps exact global LRU order:
//!
//! ```toml
//! [dependencies]
//! bounded-lru = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`config`]: Configuration structures
//! - [`error`]: Error type for missing keys
//! - [`metrics`]: Metrics collection for cache monitoring
//! - [`concurrent`]: Single-lock shared cache (requires `concurrent` feature)

#![no_std]

#[cfg(any(test, not(feature = "hashbrown"), feature = "std"))]
extern crate std;

/// Arena-backed doubly linked list used as the recency order.
///
/// Internal infrastructure; links are slot indices rather than pointers.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Error type returned by key-addressed operations.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-capacity cache that evicts the least recently used item
/// whenever an insertion or a resize leaves it over capacity.
pub mod lru;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions and evictions, reported through the
/// [`CacheMetrics`](metrics::CacheMetrics) trait.
pub mod metrics;

/// Thread-safe wrapper around a single [`LruCache`].
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use error::{CacheError, Result};
pub use lru::LruCache;

#[cfg(feature = "concurrent")]
pub use concurrent::SharedLruCache;
