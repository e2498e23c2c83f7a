use super::tree::Tree;
use super::Number;
use serde::{Deserialize, Serialize};

/// Range addition and range sum without pending-update bookkeeping.
///
/// `all[k]` is the amount added to every leaf under node `k`, `part[k]` the
/// total added by updates that only covered part of node `k`'s range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeAddTree<V> {
    all: Tree<V>,
    part: Tree<V>,
    leaf_count: usize,
}

impl<V> RangeAddTree<V> {
    pub(crate) fn is_well_formed(&self) -> bool {
        self.all.fits_leaf_count(self.leaf_count) && self.part.fits_leaf_count(self.leaf_count)
    }
}

impl<V: Number> RangeAddTree<V> {
    pub fn new(leaf_count: usize) -> Self {
        let all = Tree::new(V::zero(), leaf_count);
        log::trace!("range add tree: {} leaves padded to {}", leaf_count, all.width());
        Self {
            all,
            part: Tree::new(V::zero(), leaf_count),
            leaf_count,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count == 0
    }

    pub fn add(&mut self, begin: usize, end: usize, value: V) {
        if begin >= end {
            return;
        }
        debug_assert!(end <= self.leaf_count, "range end {end} out of range");
        self.add_in(begin, end, value, self.all.root(), 0, self.all.width());
    }

    fn add_in(
        &mut self,
        begin: usize,
        end: usize,
        value: V,
        node: usize,
        left: usize,
        right: usize,
    ) {
        if begin <= left && right <= end {
            self.all.set_value(node, self.all.value(node) + value);
        } else if left < end && begin < right {
            let overlap = end.min(right) - begin.max(left);
            self.part
                .set_value(node, self.part.value(node) + value.scale(overlap));
            let mid = (left + right) / 2;
            let (left_child, right_child) = self.all.children(node);
            self.add_in(begin, end, value, left_child, left, mid);
            self.add_in(begin, end, value, right_child, mid, right);
        }
    }

    pub fn sum(&self, begin: usize, end: usize) -> V {
        if begin >= end {
            return V::zero();
        }
        debug_assert!(end <= self.leaf_count, "range end {end} out of range");
        self.sum_in(begin, end, self.all.root(), 0, self.all.width())
    }

    fn sum_in(&self, begin: usize, end: usize, node: usize, left: usize, right: usize) -> V {
        if end <= left || right <= begin {
            V::zero()
        } else if begin <= left && right <= end {
            self.all.value(node).scale(right - left) + self.part.value(node)
        } else {
            let overlap = end.min(right) - begin.max(left);
            let mid = (left + right) / 2;
            let (left_child, right_child) = self.all.children(node);
            self.all.value(node).scale(overlap)
                + self.sum_in(begin, end, left_child, left, mid)
                + self.sum_in(begin, end, right_child, mid, right)
        }
    }

    pub fn get(&self, index: usize) -> V {
        self.sum(index, index + 1)
    }

    pub fn total(&self) -> V {
        self.sum(0, self.leaf_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_accumulate_per_leaf() {
        let mut tree = RangeAddTree::<i64>::new(6);
        tree.add(0, 4, 2);
        tree.add(2, 6, 5);
        assert_eq!(tree.sum(0, 6), 28);
        assert_eq!(tree.sum(2, 4), 14);
        assert_eq!(tree.get(0), 2);
        assert_eq!(tree.get(3), 7);
        assert_eq!(tree.get(5), 5);
        assert_eq!(tree.total(), 28);
    }

    #[test]
    fn empty_ranges_are_ignored() {
        let mut tree = RangeAddTree::<u32>::new(3);
        tree.add(1, 1, 9);
        assert_eq!(tree.total(), 0);
        assert_eq!(tree.sum(2, 2), 0);
        assert!(!tree.is_empty());
        assert!(RangeAddTree::<u32>::new(0).is_empty());
    }

    #[test]
    fn total_covers_exactly_the_leaves() {
        let mut tree = RangeAddTree::<i64>::new(5);
        tree.add(0, 5, 3);
        tree.add(4, 5, -1);
        let by_leaf: i64 = (0..5).map(|index| tree.get(index)).sum();
        assert_eq!(tree.total(), by_leaf);
        assert_eq!(tree.total(), 14);
        assert_eq!(tree.total(), tree.sum(0, tree.leaf_count()));
    }
}
