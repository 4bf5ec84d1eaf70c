//! Error types for cache lookups.
//!
//! Only key-addressed operations that require the key to be present can fail:
//! [`LruCache::get`](crate::LruCache::get),
//! [`LruCache::get_mut`](crate::LruCache::get_mut) and
//! [`LruCache::remove`](crate::LruCache::remove). Insertion, iteration and
//! resizing are total.
//!
//! ```
//! use bounded_lru::{CacheError, LruCache};
//!
//! let mut cache: LruCache<&str, i32> = LruCache::new(2);
//! let err = cache.get("missing").unwrap_err();
//! assert_eq!(err, CacheError::KeyNotFound("\"missing\"".into()));
//! assert_eq!(err.to_string(), "key not found: \"missing\"");
//! ```

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Debug;

/// Errors returned by cache operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// The requested key is not in the cache. Carries the `Debug` rendering
    /// of the key.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

impl CacheError {
    /// Builds a [`CacheError::KeyNotFound`] naming `key`.
    pub fn key_not_found<Q: Debug + ?Sized>(key: &Q) -> Self {
        CacheError::KeyNotFound(format!("{:?}", key))
    }
}

/// Result alias for fallible cache operations.
pub type Result<T, E = CacheError> = core::result::Result<T, E>;
