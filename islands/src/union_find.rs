use std::cell::Cell;

/// A weighted quick-union forest with path compression over the
/// elements `0..len`.
///
/// Every element starts out as the root of its own singleton tree.
/// [`Self::find()`] and [`Self::connected()`] only need a shared reference:
/// path compression rewires parent links, but never changes which set an
/// element belongs to.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    /// `parent[x] == x` iff `x` is a root.
    parent: Vec<Cell<usize>>,
    /// Only meaningful for roots, where it is the size of the tree.
    weight: Vec<usize>,
    /// Number of distinct sets.
    count: usize,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).map(Cell::new).collect(),
            weight: vec![1; len],
            count: len,
        }
    }

    /// The number of elements, regardless of how they are grouped.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The number of distinct sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the tree containing `x`.
    ///
    /// Every node visited on the way up is pointed at its grandparent
    /// (path halving).
    ///
    /// Panics if `x` is not smaller than [`Self::len()`].
    pub fn find(&self, mut x: usize) -> usize {
        loop {
            let parent = self.parent[x].get();
            if parent == x {
                return x;
            }
            let grandparent = self.parent[parent].get();
            self.parent[x].set(grandparent);
            x = grandparent;
        }
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The root of the lighter tree is attached below the root of the
    /// heavier one. On a tie, `b`'s root goes below `a`'s root.
    ///
    /// Returns `false` if both were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (root, child) = if self.weight[root_a] < self.weight[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[child].set(root);
        self.weight[root] += self.weight[child];

        self.count -= 1;
        true
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// The size of the set containing `x`.
    pub fn weight(&self, x: usize) -> usize {
        self.weight[self.find(x)]
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn forest_from_pairs(len: usize, pairs: &[(usize, usize)]) -> DisjointSet {
        let mut forest = DisjointSet::new(len);
        for &(a, b) in pairs {
            forest.union(a % len, b % len);
        }
        forest
    }

    quickcheck! {
        fn find_is_idempotent(pairs: Vec<(usize, usize)>) -> bool {
            let forest = forest_from_pairs(32, &pairs);
            (0..32).all(|x| {
                let root = forest.find(x);
                forest.find(x) == root && forest.find(root) == root
            })
        }

        fn union_order_does_not_matter(pairs: Vec<(usize, usize)>) -> bool {
            let forward = forest_from_pairs(32, &pairs);
            let swapped: Vec<(usize, usize)> = pairs.iter().map(|&(a, b)| (b, a)).collect();
            let backward = forest_from_pairs(32, &swapped);
            pairs.iter().all(|&(a, b)| {
                forward.connected(a % 32, b % 32) && backward.connected(b % 32, a % 32)
            }) && (0..32).all(|x| {
                (0..32).all(|y| forward.connected(x, y) == backward.connected(x, y))
            }) && forward.count() == backward.count()
        }

        fn weights_add_up(pairs: Vec<(usize, usize)>) -> bool {
            let forest = forest_from_pairs(32, &pairs);
            let roots: Vec<usize> = (0..32).filter(|&x| forest.find(x) == x).collect();
            roots.len() == forest.count()
                && roots.iter().map(|&r| forest.weight(r)).sum::<usize>() == forest.len()
                && (0..32).all(|x| {
                    forest.weight(x) == (0..32).filter(|&y| forest.connected(x, y)).count()
                })
        }
    }

    #[test]
    fn singletons() {
        let forest = DisjointSet::new(5);
        assert_eq!(forest.count(), 5);
        for x in 0..5 {
            assert_eq!(forest.find(x), x);
            assert_eq!(forest.weight(x), 1);
        }
        assert!(!forest.connected(0, 1));
        assert!(DisjointSet::new(0).is_empty());
    }

    #[test]
    fn union_counts_merges() {
        let mut forest = DisjointSet::new(6);
        assert!(forest.union(0, 1));
        assert!(forest.union(2, 3));
        assert!(!forest.union(1, 0));
        assert_eq!(forest.count(), 4);
        assert!(forest.union(1, 3));
        assert_eq!(forest.count(), 3);
        assert!(forest.connected(0, 2));
        assert_eq!(forest.weight(3), 4);
        assert!(!forest.connected(0, 5));
    }

    #[test]
    fn tie_attaches_second_root_below_first() {
        let mut forest = DisjointSet::new(4);
        forest.union(0, 1);
        assert_eq!(forest.find(1), 0);
        forest.union(3, 2);
        assert_eq!(forest.find(2), 3);
        // Equal weights of two: 0's tree goes below 3's root
        forest.union(3, 0);
        assert_eq!(forest.find(1), 3);
    }

    #[test]
    fn lighter_tree_goes_below_heavier() {
        let mut forest = DisjointSet::new(4);
        forest.union(1, 2);
        forest.union(1, 3);
        // 0 is alone, so it ends up below 1 even though it's the first argument
        forest.union(0, 3);
        assert_eq!(forest.find(0), 1);
        assert_eq!(forest.weight(0), 4);
    }

    #[test]
    fn path_compression_flattens_chains() {
        let mut forest = DisjointSet::new(8);
        // Build a tree of height 3 below root 0
        forest.union(0, 1);
        forest.union(2, 3);
        forest.union(0, 2);
        forest.union(4, 5);
        forest.union(6, 7);
        forest.union(4, 6);
        forest.union(0, 4);
        let before = forest.parent[7].get();
        assert_eq!(forest.find(7), 0);
        assert_ne!(forest.parent[7].get(), before);
        assert_eq!(forest.find(7), 0);
        assert_eq!(forest.count(), 1);
    }
}
