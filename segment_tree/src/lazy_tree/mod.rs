mod ops;
mod presets;

use super::tree::Tree;
pub use ops::{FnOps, LazyOps};
pub use presets::{AddMin, AddSum, AssignMin, AssignSum};
use serde::{Deserialize, Serialize};

/// Segment tree with range updates and range queries.
///
/// Updates stop at the highest nodes that lie fully inside the target range
/// and are pushed further down only when a later update or query walks
/// through those nodes, so both operations cost O(log n).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "O: Serialize, O::Value: Serialize, O::Lazy: Serialize",
    deserialize = "O: Deserialize<'de>, O::Value: Deserialize<'de>, O::Lazy: Deserialize<'de>"
))]
pub struct LazySegTree<O: LazyOps> {
    nodes: Tree<O::Value>,
    lazy: Vec<O::Lazy>,
    needs_eval: Vec<bool>,
    leaf_count: usize,
    ops: O,
}

impl<O: LazyOps> LazySegTree<O> {
    pub fn new(ops: O, leaf_count: usize) -> Self {
        let nodes = Tree::new(ops.identity(), leaf_count);
        log::trace!(
            "lazy segment tree: {} leaves padded to {}",
            leaf_count,
            nodes.width()
        );
        Self {
            lazy: vec![ops.lazy_identity(); nodes.len()],
            needs_eval: vec![false; nodes.len()],
            nodes,
            leaf_count,
            ops,
        }
    }

    pub fn from_leaves(ops: O, leaves: &[O::Value]) -> Self {
        let mut lazy_tree = Self::new(ops, leaves.len());
        lazy_tree.nodes.set_leaves(leaves);
        let ops = &lazy_tree.ops;
        lazy_tree.nodes.rebuild(|lhs, rhs| ops.combine(lhs, rhs));
        lazy_tree
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count == 0
    }

    /// Leaf count rounded up to a power of two.
    pub fn width(&self) -> usize {
        self.nodes.width()
    }

    pub fn ops(&self) -> &O {
        &self.ops
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.nodes.fits_leaf_count(self.leaf_count)
            && self.lazy.len() == self.nodes.len()
            && self.needs_eval.len() == self.nodes.len()
    }

    /// Applies `value` to every leaf in `[begin, end)`.
    pub fn update(&mut self, begin: usize, end: usize, value: O::Lazy) {
        if begin >= end {
            return;
        }
        debug_assert!(end <= self.leaf_count, "range end {end} out of range");
        self.update_in(begin, end, value, self.nodes.root(), 0, self.nodes.width());
    }

    pub fn update_point(&mut self, index: usize, value: O::Lazy) {
        self.update(index, index + 1, value);
    }

    /// Combines the leaves in `[begin, end)`.
    ///
    /// Takes `&mut self` since pending updates on the visited path are pushed
    /// down along the way.
    pub fn find(&mut self, begin: usize, end: usize) -> O::Value {
        if begin >= end {
            return self.ops.sentinel();
        }
        debug_assert!(end <= self.leaf_count, "range end {end} out of range");
        self.find_in(begin, end, self.nodes.root(), 0, self.nodes.width())
    }

    pub fn find_point(&mut self, index: usize) -> O::Value {
        self.find(index, index + 1)
    }

    pub fn find_all(&mut self) -> O::Value {
        self.find(0, self.leaf_count)
    }

    // must run on a node before its value is read or its children are visited
    fn eval(&mut self, node: usize, left: usize, right: usize) {
        if !self.needs_eval[node] {
            return;
        }
        let lazy = self.lazy[node];
        if right - left > 1 {
            let (left_child, right_child) = self.nodes.children(node);
            for child in [left_child, right_child] {
                self.lazy[child] = self.ops.push_down(self.lazy[child], lazy);
                self.needs_eval[child] = true;
            }
        }
        let value = self.ops.apply(self.nodes.value(node), lazy);
        self.nodes.set_value(node, value);
        self.needs_eval[node] = false;
        self.lazy[node] = self.ops.lazy_identity();
    }

    fn update_in(
        &mut self,
        begin: usize,
        end: usize,
        value: O::Lazy,
        node: usize,
        left: usize,
        right: usize,
    ) {
        self.eval(node, left, right);
        if end <= left || right <= begin {
            return;
        }
        if begin <= left && right <= end {
            self.lazy[node] = self.ops.compose(self.lazy[node], value, right - left);
            self.needs_eval[node] = true;
            self.eval(node, left, right);
        } else {
            let mid = (left + right) / 2;
            let (left_child, right_child) = self.nodes.children(node);
            self.update_in(begin, end, value, left_child, left, mid);
            self.update_in(begin, end, value, right_child, mid, right);
            let combined = self
                .ops
                .combine(self.nodes.value(left_child), self.nodes.value(right_child));
            self.nodes.set_value(node, combined);
        }
    }

    fn find_in(
        &mut self,
        begin: usize,
        end: usize,
        node: usize,
        left: usize,
        right: usize,
    ) -> O::Value {
        self.eval(node, left, right);
        if end <= left || right <= begin {
            return self.ops.sentinel();
        }
        if begin <= left && right <= end {
            return self.nodes.value(node);
        }
        let mid = (left + right) / 2;
        let (left_child, right_child) = self.nodes.children(node);
        let lhs = self.find_in(begin, end, left_child, left, mid);
        let rhs = self.find_in(begin, end, right_child, mid, right);
        self.ops.combine(lhs, rhs)
    }
}

impl<V, L, C, A, P, B> LazySegTree<FnOps<V, L, C, A, P, B>>
where
    V: Copy,
    L: Copy,
    C: Fn(V, V) -> V,
    A: Fn(V, L) -> V,
    P: Fn(L, L) -> L,
    B: Fn(L, L, usize) -> L,
{
    /// Builds a tree straight from the seven operations, see [`LazyOps`] for
    /// what each one has to do.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fns(
        leaf_count: usize,
        combine: C,
        apply: A,
        push_down: P,
        compose: B,
        identity: V,
        sentinel: V,
        lazy_identity: L,
    ) -> Self {
        let ops = FnOps::new(
            combine,
            apply,
            push_down,
            compose,
            identity,
            sentinel,
            lazy_identity,
        );
        Self::new(ops, leaf_count)
    }
}
