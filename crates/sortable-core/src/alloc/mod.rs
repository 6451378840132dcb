//! Collection types used across Sortable.
//!
//! Item tables and transition bookkeeping are keyed by small integer ids,
//! so the AHash-backed maps are used everywhere instead of SipHash.

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert(7u64, "item");
        assert_eq!(map.get(&7), Some(&"item"));
        assert_eq!(map.remove(&7), Some("item"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        assert!(set.insert(42u64));
        assert!(!set.insert(42u64));
        assert!(set.contains(&42));
    }
}
