/// CacheStats contains cache statistics
///
/// A `capacity` of `None` means the cache never evicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: u64,
    pub capacity: Option<u64>,
}

/// Cache trait defines the methods that a memo store should implement and provides a shared interface for different cache implementations
///
/// Lookups take `&mut self` because a lookup may restructure the store (a splay tree moves the accessed key to its root, an LRU cache refreshes recency).
/// What `set` does with a key that is already present is up to the implementation.
///
/// Example:
/// ```
/// use splaycache::{Cache, LRUCache, SplayTree};
///
/// fn do_something<C>(cache: &mut C)
/// where
///     C: Cache<u64, String>,
/// {
///     cache.set(1, "world".to_string());
///     if let Some(val) = cache.get(&1) {
///         println!("Got: {}", val);
///     }
/// }
///
/// fn main() {
///     let mut lru_cache = LRUCache::<u64, String>::new(2);
///     do_something(&mut lru_cache);
///
///     let mut splay_tree = SplayTree::<u64, String>::new();
///     do_something(&mut splay_tree);
/// }
/// ```
pub trait Cache<K, V> {
    fn get(&mut self, key: &K) -> Option<V>;
    fn set(&mut self, key: K, value: V);
    fn stats(&self) -> CacheStats;
}

pub mod lru;
pub mod splay;
