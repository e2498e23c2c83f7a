// Ready-made strategies for the common update/query pairs. In the sum presets
// a node's pending update is the total it adds over the node's whole range,
// which is why `push_down` halves it.

use super::{LazyOps, LazySegTree};
use crate::number::min;
use crate::Number;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Range assignment, range minimum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AssignMin<V>(PhantomData<V>);

/// Range addition, range sum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AddSum<V>(PhantomData<V>);

/// Range addition, range minimum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AddMin<V>(PhantomData<V>);

/// Range assignment, range sum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AssignSum<V>(PhantomData<V>);

impl<V: Number> LazyOps for AssignMin<V> {
    type Value = V;
    type Lazy = V;

    fn combine(&self, lhs: V, rhs: V) -> V {
        min(lhs, rhs)
    }
    fn apply(&self, _value: V, lazy: V) -> V {
        lazy
    }
    fn push_down(&self, _child: V, parent: V) -> V {
        parent
    }
    fn compose(&self, _lazy: V, update: V, _len: usize) -> V {
        update
    }
    fn identity(&self) -> V {
        V::infinity()
    }
    fn sentinel(&self) -> V {
        V::infinity()
    }
    fn lazy_identity(&self) -> V {
        V::zero()
    }
}

impl<V: Number> LazyOps for AddSum<V> {
    type Value = V;
    type Lazy = V;

    fn combine(&self, lhs: V, rhs: V) -> V {
        lhs + rhs
    }
    fn apply(&self, value: V, lazy: V) -> V {
        value + lazy
    }
    fn push_down(&self, child: V, parent: V) -> V {
        child + parent.halve()
    }
    fn compose(&self, lazy: V, update: V, len: usize) -> V {
        lazy + update.scale(len)
    }
    fn identity(&self) -> V {
        V::zero()
    }
    fn sentinel(&self) -> V {
        V::zero()
    }
    fn lazy_identity(&self) -> V {
        V::zero()
    }
}

// leaves start at zero rather than infinity so additions can't overflow
impl<V: Number> LazyOps for AddMin<V> {
    type Value = V;
    type Lazy = V;

    fn combine(&self, lhs: V, rhs: V) -> V {
        min(lhs, rhs)
    }
    fn apply(&self, value: V, lazy: V) -> V {
        value + lazy
    }
    fn push_down(&self, child: V, parent: V) -> V {
        child + parent
    }
    fn compose(&self, lazy: V, update: V, _len: usize) -> V {
        lazy + update
    }
    fn identity(&self) -> V {
        V::zero()
    }
    fn sentinel(&self) -> V {
        V::infinity()
    }
    fn lazy_identity(&self) -> V {
        V::zero()
    }
}

impl<V: Number> LazyOps for AssignSum<V> {
    type Value = V;
    type Lazy = V;

    fn combine(&self, lhs: V, rhs: V) -> V {
        lhs + rhs
    }
    fn apply(&self, _value: V, lazy: V) -> V {
        lazy
    }
    fn push_down(&self, _child: V, parent: V) -> V {
        parent.halve()
    }
    fn compose(&self, _lazy: V, update: V, len: usize) -> V {
        update.scale(len)
    }
    fn identity(&self) -> V {
        V::zero()
    }
    fn sentinel(&self) -> V {
        V::zero()
    }
    fn lazy_identity(&self) -> V {
        V::zero()
    }
}

impl<V: Number> LazySegTree<AssignMin<V>> {
    pub fn assign_min(leaf_count: usize) -> Self {
        Self::new(AssignMin(PhantomData), leaf_count)
    }

    pub fn assign_min_from(leaves: &[V]) -> Self {
        Self::from_leaves(AssignMin(PhantomData), leaves)
    }
}

impl<V: Number> LazySegTree<AddSum<V>> {
    pub fn add_sum(leaf_count: usize) -> Self {
        Self::new(AddSum(PhantomData), leaf_count)
    }

    pub fn add_sum_from(leaves: &[V]) -> Self {
        Self::from_leaves(AddSum(PhantomData), leaves)
    }
}

impl<V: Number> LazySegTree<AddMin<V>> {
    pub fn add_min(leaf_count: usize) -> Self {
        Self::new(AddMin(PhantomData), leaf_count)
    }

    pub fn add_min_from(leaves: &[V]) -> Self {
        Self::from_leaves(AddMin(PhantomData), leaves)
    }
}

impl<V: Number> LazySegTree<AssignSum<V>> {
    pub fn assign_sum(leaf_count: usize) -> Self {
        Self::new(AssignSum(PhantomData), leaf_count)
    }

    pub fn assign_sum_from(leaves: &[V]) -> Self {
        Self::from_leaves(AssignSum(PhantomData), leaves)
    }
}
