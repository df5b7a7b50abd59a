//! Hash collections backed by AHash.
//!
//! The widget keeps small per-instance lookup tables (tab keys to indices),
//! where AHash beats SipHash without any DoS exposure.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Type alias for the standard HashMap with AHash for better performance.
pub type AHashMap<K, V> = ahash::AHashMap<K, V>;

/// Type alias for the standard HashSet with AHash for better performance.
pub type AHashSet<T> = ahash::AHashSet<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("home", 0usize);
        assert_eq!(map.get("home"), Some(&0));
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        assert!(set.insert("home"));
        assert!(!set.insert("home"));
    }
}
