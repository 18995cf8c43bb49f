pub mod cache;
pub mod error;
pub mod fibonacci;
pub mod harness;
pub use crate::cache::lru::LRUCache;
pub use crate::cache::splay::SplayTree;
pub use crate::cache::{Cache, CacheStats};
pub use crate::error::HarnessError;
pub use crate::fibonacci::{fibonacci_lru, fibonacci_splay};
pub use crate::harness::{HarnessConfig, Measurement, Report};
