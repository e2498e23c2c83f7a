mod max_query;
mod min_query;
mod sum_query;

use super::tree::Tree;
pub use max_query::MaxQuery;
pub use min_query::MinQuery;
use serde::{Deserialize, Serialize};
pub use sum_query::SumQuery;

/// Monoid over leaf values. `identity()` is the value of an untouched leaf and
/// the answer for a range that covers no leaves.
pub trait Query<V> {
    fn identity() -> V;
    fn combine(lhs: V, rhs: V) -> V;
}

pub type MinTree<V> = QueryTree<V, MinQuery>;
pub type MaxTree<V> = QueryTree<V, MaxQuery>;
pub type SumTree<V> = QueryTree<V, SumQuery>;

/// Segment tree with point assignment and range queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "V: Serialize", deserialize = "V: Deserialize<'de>"))]
pub struct QueryTree<V, Q: Query<V>> {
    tree: Tree<V>,
    leaf_count: usize,
    _marker: std::marker::PhantomData<Q>,
}

impl<V, Q: Query<V>> QueryTree<V, Q> {
    pub(crate) fn is_well_formed(&self) -> bool {
        self.tree.fits_leaf_count(self.leaf_count)
    }
}

impl<V: Copy, Q: Query<V>> QueryTree<V, Q> {
    pub fn with_leaf_count(leaf_count: usize) -> Self {
        let tree = Tree::new(Q::identity(), leaf_count);
        log::trace!(
            "query tree: {} leaves padded to {}",
            leaf_count,
            tree.width()
        );
        Self {
            tree,
            leaf_count,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn from_leaves(leaves: &[V]) -> Self {
        let mut query_tree = Self::with_leaf_count(leaves.len());
        query_tree.tree.set_leaves(leaves);
        query_tree.tree.rebuild(Q::combine);
        query_tree
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count == 0
    }

    pub fn root_value(&self) -> V {
        self.tree.value(self.tree.root())
    }

    pub fn peek(&self, index: usize) -> V {
        debug_assert!(index < self.leaf_count, "leaf {index} out of range");
        self.tree.value(self.tree.leaf(index))
    }

    pub fn update_value(&mut self, index: usize, value: V) {
        debug_assert!(index < self.leaf_count, "leaf {index} out of range");
        let leaf = self.tree.leaf(index);
        self.tree.set_value(leaf, value);
        self.update_ancestors(leaf);
    }

    pub fn reset_value(&mut self, index: usize) {
        self.update_value(index, Q::identity());
    }

    /// Combines the leaves in `[begin, end)`.
    pub fn find(&self, begin: usize, end: usize) -> V {
        if begin >= end {
            return Q::identity();
        }
        debug_assert!(end <= self.leaf_count, "range end {end} out of range");
        self.find_in(begin, end, self.tree.root(), 0, self.tree.width())
    }

    fn find_in(&self, begin: usize, end: usize, node: usize, left: usize, right: usize) -> V {
        if end <= left || right <= begin {
            return Q::identity();
        }
        if begin <= left && right <= end {
            return self.tree.value(node);
        }
        let mid = (left + right) / 2;
        let (left_child, right_child) = self.tree.children(node);
        Q::combine(
            self.find_in(begin, end, left_child, left, mid),
            self.find_in(begin, end, right_child, mid, right),
        )
    }

    fn update_ancestors(&mut self, mut node: usize) {
        while let Some(parent) = self.tree.parent(node) {
            let (left, right) = self.tree.children(parent);
            let value = Q::combine(self.tree.value(left), self.tree.value(right));
            self.tree.set_value(parent, value);
            node = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_tree_tracks_point_updates() {
        let mut tree = MinTree::from_leaves(&[5i64, 3, 8, 1, 9]);
        assert_eq!(tree.root_value(), 1);
        assert_eq!(tree.find(0, 3), 3);

        tree.update_value(3, 7);
        assert_eq!(tree.find(0, 5), 3);
        assert_eq!(tree.find(2, 5), 7);
        assert_eq!(tree.peek(3), 7);

        tree.reset_value(1);
        assert_eq!(tree.find(0, 2), 5);
        assert_eq!(tree.peek(1), i64::MAX);
    }

    #[test]
    fn max_tree_ignores_padding() {
        let tree = MaxTree::from_leaves(&[-4i32, -2, -9]);
        assert_eq!(tree.find(0, 3), -2);
        assert_eq!(tree.find(2, 3), -9);
    }

    #[test]
    fn sum_tree_starts_at_zero() {
        let mut tree = SumTree::<u64>::with_leaf_count(6);
        assert_eq!(tree.find(0, 6), 0);
        for index in 0..6 {
            tree.update_value(index, index as u64 + 1);
        }
        assert_eq!(tree.root_value(), 21);
        assert_eq!(tree.find(1, 4), 9);
    }

    #[test]
    fn empty_range_returns_identity() {
        let tree = SumTree::from_leaves(&[1.5f64, 2.5]);
        assert_eq!(tree.find(1, 1), 0.0);
        let tree = MinTree::from_leaves(&[3u32]);
        assert_eq!(tree.find(0, 0), u32::MAX);
    }

    #[test]
    fn zero_leaves_does_not_panic() {
        let tree = MinTree::<i64>::with_leaf_count(0);
        assert!(tree.is_empty());
        assert_eq!(tree.find(0, 0), i64::MAX);
    }
}
