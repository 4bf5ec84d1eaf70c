//! Least Recently Used (LRU) Cache Implementation
//!
//! A fixed-capacity map that evicts the least recently used entry whenever an
//! insertion pushes it over capacity. Every common operation is O(1).
//!
//! # Algorithm
//!
//! Entries live in a recency list ordered from most to least recently used,
//! and a hash map points from each key to its list slot:
//!
//! ```text
//!   map: K ──▶ SlotId                 list (arena-backed, linked by SlotId)
//!   ┌─────┬──────┐
//!   │ "c" │  2   │──┐      head                                 tail
//!   │ "b" │  1   │──┼──▶   [c] ◀──▶ [b] ◀──▶ [a]
//!   │ "a" │  0   │──┘   most recent                       least recent
//!   └─────┴──────┘
//! ```
//!
//! - **get**: look the slot up, splice it to the head, return the value.
//! - **put** (existing key): replace the value in place, splice to the head.
//! - **put** (new key): attach at the head, then pop the tail while
//!   `len > capacity`.
//! - **set_capacity**: pop the tail until `len <= capacity`.
//!
//! Reads are mutating: `get` changes the recency order. Use [`LruCache::peek`]
//! or [`LruCache::contains`] to look without touching it.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!   - Iterate: O(n)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the number of live entries; removed slots are reused
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. All mutation goes through
//! `&mut self`. For shared access wrap it in a single lock, for example
//! [`SharedLruCache`](crate::SharedLruCache) with the `concurrent` feature.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::{CacheError, Result};
use crate::list::{self, List, SlotId};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::mem;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on the number of slots reserved up front, so that a huge
/// nominal capacity does not allocate eagerly.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache holds at most `capacity` entries after every public operation.
/// Capacity may be zero, in which case every write is evicted immediately.
///
/// Missing keys are reported as [`CacheError::KeyNotFound`] by [`get`],
/// [`get_mut`] and [`remove`]. Removing an absent key is an error, not a
/// no-op.
///
/// [`get`]: LruCache::get
/// [`get_mut`]: LruCache::get_mut
/// [`remove`]: LruCache::remove
///
/// # Examples
///
/// ```
/// use bounded_lru::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Ok(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert!(cache.get(&"banana").is_err());
/// assert_eq!(cache.iter().copied().collect::<Vec<_>>(), ["cherry", "apple"]);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    capacity: usize,
    list: List<(K, V)>,
    map: HashMap<K, SlotId, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates a new LRU cache from a configuration with an optional hasher.
    ///
    /// This is the **recommended** way to create an LRU cache.
    ///
    /// ```
    /// use bounded_lru::config::LruCacheConfig;
    /// use bounded_lru::LruCache;
    ///
    /// let config = LruCacheConfig { capacity: 100 };
    /// let cache: LruCache<u64, String> = LruCache::init(config, None);
    /// assert!(cache.is_empty());
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruCache::with_hasher(config.capacity, hasher.unwrap_or_default())
    }

    /// Creates a new LRU cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        LruCache::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        let reserve = capacity.min(MAX_PREALLOCATED_ENTRIES);
        LruCache {
            capacity,
            list: List::with_capacity(reserve),
            map: HashMap::with_capacity_and_hasher(reserve, hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    /// Maximum number of entries kept after any operation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently cached.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// # Errors
    ///
    /// [`CacheError::KeyNotFound`] if the key is absent. The recency order is
    /// left untouched in that case.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + Debug,
    {
        let Some(id) = self.map.get(key).copied() else {
            self.metrics.core.record_miss();
            return Err(CacheError::key_not_found(key));
        };

        self.list.move_to_front(id);
        self.metrics.core.record_hit();
        self.list
            .get(id)
            .map(|(_, v)| v)
            .ok_or_else(|| CacheError::key_not_found(key))
    }

    /// Like [`get`](Self::get), returning a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + Debug,
    {
        let Some(id) = self.map.get(key).copied() else {
            self.metrics.core.record_miss();
            return Err(CacheError::key_not_found(key));
        };

        self.list.move_to_front(id);
        self.metrics.core.record_hit();
        self.list
            .get_mut(id)
            .map(|(_, v)| v)
            .ok_or_else(|| CacheError::key_not_found(key))
    }

    /// Returns the value for `key` without changing the recency order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.map.get(key).copied()?;
        self.list.get(id).map(|(_, v)| v)
    }

    /// Membership test. Does not change the recency order.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Removes `key` and returns its value.
    ///
    /// # Errors
    ///
    /// [`CacheError::KeyNotFound`] if the key is absent; the cache is left
    /// unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + Debug,
    {
        let id = self
            .map
            .remove(key)
            .ok_or_else(|| CacheError::key_not_found(key))?;
        let (_, value) = self
            .list
            .remove(id)
            .ok_or_else(|| CacheError::key_not_found(key))?;
        self.metrics.core.record_removal();
        Ok(value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.pop_back()?;
        self.map.remove(&key);
        self.metrics.core.record_removal();
        Some((key, value))
    }

    /// The most recently used entry, without promoting it.
    pub fn most_recent(&self) -> Option<(&K, &V)> {
        let id = self.list.front()?;
        self.list.get(id).map(|(k, v)| (k, v))
    }

    /// The least recently used entry (the next eviction candidate).
    pub fn least_recent(&self) -> Option<(&K, &V)> {
        let id = self.list.back()?;
        self.list.get(id).map(|(k, v)| (k, v))
    }

    /// Changes the capacity, evicting least recently used entries until the
    /// cache fits. Returns the number of entries evicted.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        log::debug!(
            "lru capacity change {} -> {} (len {})",
            self.capacity,
            capacity,
            self.len()
        );
        self.capacity = capacity;
        self.metrics.record_resize();

        let mut evicted = 0;
        while self.len() > self.capacity && self.evict_lru().is_some() {
            evicted += 1;
        }
        evicted
    }

    /// Removes every entry. Capacity and metrics are kept.
    pub fn clear(&mut self) {
        log::debug!("lru clear ({} entries)", self.len());
        self.map.clear();
        self.list.clear();
    }

    /// Keys from most recently used to least recently used.
    ///
    /// Iterating borrows the cache immutably and never changes recency; call
    /// `iter` again for a fresh pass.
    pub fn iter(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.list.iter(),
        }
    }

    /// `(key, value)` pairs from most recently used to least recently used.
    pub fn iter_entries(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Counters for this cache instance.
    #[inline]
    pub fn lru_metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.pop_back()?;
        self.map.remove(&key);
        self.metrics.core.record_eviction();
        log::trace!(
            "lru evicted least recent entry (len {}, capacity {})",
            self.map.len(),
            self.capacity
        );
        Some((key, value))
    }

    #[cfg(test)]
    fn validate(&self) {
        self.list.validate();
        assert_eq!(self.list.len(), self.map.len());
        for (k, _) in self.list.iter() {
            assert!(self.map.contains_key(k));
        }
        assert!(self.len() <= self.capacity);
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// # Returns
    ///
    /// - `Some((key, old_value))` if the key was already present
    /// - `Some((evicted_key, evicted_value))` if inserting evicted an entry;
    ///   with capacity zero this is the pair just written
    /// - `None` otherwise
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&id) = self.map.get(&key) {
            self.list.move_to_front(id);
            self.metrics.core.record_update();
            return self
                .list
                .get_mut(id)
                .map(|(_, slot)| (key, mem::replace(slot, value)));
        }

        let id = self.list.push_front((key.clone(), value));
        self.map.insert(key, id);
        self.metrics.core.record_insertion();

        let mut evicted = None;
        while self.len() > self.capacity {
            match self.evict_lru() {
                Some(entry) => evicted = Some(entry),
                None => break,
            }
        }
        evicted
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> Extend<(K, V)> for LruCache<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Debug, V: Debug, S> Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.list.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

/// Iterator over cache keys, most recently used first.
///
/// Created by [`LruCache::iter`].
pub struct Keys<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Debug, V> Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Iterator over `(key, value)` pairs, most recently used first.
///
/// Created by [`LruCache::iter_entries`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Debug, V: Debug> Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
