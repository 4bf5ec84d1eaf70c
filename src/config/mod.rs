//! Cache Configuration Module
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//!
//! With the `concurrent` feature the same config builds a
//! [`SharedLruCache`](crate::SharedLruCache).
//!
//! # Examples
//!
//! ```
//! use bounded_lru::config::LruCacheConfig;
//! use bounded_lru::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! ```

pub mod lru;

pub use lru::LruCacheConfig;
