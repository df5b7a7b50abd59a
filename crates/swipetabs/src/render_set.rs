//! Which tab pages are mounted.

/// Set of mounted tab indices.
///
/// Grows only: once a page is mounted it stays mounted for the widget's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSet {
    mounted: Vec<bool>,
    lazy: bool,
    preload_adjacent: bool,
}

impl RenderSet {
    /// Build the initial set for `active` out of `tab_count` tabs.
    pub fn new(tab_count: usize, active: usize, lazy: bool, preload_adjacent: bool) -> Self {
        let mut set = Self {
            mounted: vec![!lazy; tab_count],
            lazy,
            preload_adjacent,
        };
        set.include(active);
        set
    }

    /// Mount whatever `active` requires. Returns the newly mounted indices, ascending.
    pub fn include(&mut self, active: usize) -> Vec<usize> {
        if !self.lazy || active >= self.mounted.len() {
            return Vec::new();
        }

        let mut wanted = vec![active];
        if self.preload_adjacent {
            if active > 0 {
                wanted.push(active - 1);
            }
            if active + 1 < self.mounted.len() {
                wanted.push(active + 1);
            }
        }
        wanted.sort_unstable();

        wanted
            .into_iter()
            .filter(|&i| !std::mem::replace(&mut self.mounted[i], true))
            .collect()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.mounted.get(index).copied().unwrap_or(false)
    }

    /// Mounted indices, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.mounted
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.mounted.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eager_mounts_everything() {
        let mut set = RenderSet::new(4, 0, false, true);
        assert_eq!(set.indices(), vec![0, 1, 2, 3]);
        assert!(set.include(2).is_empty());
    }

    #[test]
    fn test_lazy_with_preload() {
        let set = RenderSet::new(5, 0, true, true);
        assert_eq!(set.indices(), vec![0, 1]);

        let set = RenderSet::new(5, 2, true, true);
        assert_eq!(set.indices(), vec![1, 2, 3]);
    }

    #[test]
    fn test_lazy_without_preload() {
        let mut set = RenderSet::new(5, 0, true, false);
        assert_eq!(set.indices(), vec![0]);
        assert_eq!(set.include(3), vec![3]);
        assert_eq!(set.indices(), vec![0, 3]);
    }

    #[test]
    fn test_grows_only() {
        let mut set = RenderSet::new(5, 0, true, true);
        assert_eq!(set.include(2), vec![2, 3]);
        assert_eq!(set.indices(), vec![0, 1, 2, 3]);
        assert_eq!(set.include(4), vec![4]);
        assert_eq!(set.indices(), vec![0, 1, 2, 3, 4]);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut set = RenderSet::new(2, 0, true, true);
        assert!(set.include(7).is_empty());
        assert!(!set.contains(7));
    }
}
