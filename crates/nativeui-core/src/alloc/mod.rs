//! Optimized collection types for nativeui.
//!
//! Re-exports AHash-backed hash collections so every crate in the workspace
//! hashes handles and property keys the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Type alias for the standard HashMap with AHash for better performance.
pub type AHashMap<K, V> = ahash::AHashMap<K, V>;

/// Type alias for the standard HashSet with AHash for better performance.
pub type AHashSet<T> = ahash::AHashSet<T>;
