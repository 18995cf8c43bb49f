use crate::cache::{Cache, CacheStats};
use linked_hash_map::LinkedHashMap;
use log::trace;
use std::hash::Hash;

/// LRUCache is a cache that uses the Least Recently Used (LRU) algorithm to evict items.
///
/// A cache built with [`LRUCache::unbounded`] never evicts and behaves as a plain memo table that lives as long as its owner.
pub struct LRUCache<K: Eq + Hash, V> {
    capacity: Option<u64>,
    key_value_map: LinkedHashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash, V> LRUCache<K, V> {
    /// Create a new LRUCache holding at most `capacity` items.
    pub fn new(capacity: u64) -> Self {
        LRUCache {
            capacity: Some(capacity),
            key_value_map: LinkedHashMap::with_capacity(capacity as usize),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a new LRUCache without a capacity limit.
    pub fn unbounded() -> Self {
        LRUCache {
            capacity: None,
            key_value_map: LinkedHashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.key_value_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_value_map.is_empty()
    }

    /// Clear the cache, removing all items. Hit and miss counters are kept.
    pub fn clear(&mut self) {
        self.key_value_map.clear();
    }

    /// Change the capacity of the cache, evicting the least recently used items until the size fits.
    pub fn change_capacity(&mut self, capacity: u64) {
        trace!("change_capacity({:?} -> {})", self.capacity, capacity);
        self.capacity = Some(capacity);
        self.evict_overflow();
    }

    fn evict_overflow(&mut self) {
        if let Some(capacity) = self.capacity {
            while self.key_value_map.len() as u64 > capacity {
                self.key_value_map.pop_front();
            }
        }
    }
}

impl<K: Eq + Hash, V> Default for LRUCache<K, V> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<K: Eq + Hash, V: Clone> Cache<K, V> for LRUCache<K, V> {
    fn get(&mut self, key: &K) -> Option<V> {
        match self.key_value_map.get_refresh(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    fn set(&mut self, key: K, value: V) {
        self.key_value_map.insert(key, value);
        self.evict_overflow();
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.key_value_map.len() as u64,
            capacity: self.capacity,
        }
    }
}
