/// The operations a [`LazySegTree`](super::LazySegTree) is parameterized over.
///
/// `Value` is the aggregate kept in every node, `Lazy` is an update that has
/// been accepted by a node but not yet pushed to its children. For the tree to
/// answer queries as if every update had been applied leaf by leaf:
///
/// - `combine` must be associative;
/// - `apply` applied to a combined aggregate must equal combining the results
///   of applying `push_down`'s output to each half;
/// - `sentinel` must be neutral for `combine` over any value a query can
///   meet.
pub trait LazyOps {
    type Value: Copy;
    type Lazy: Copy;

    /// Merges the aggregates of two adjacent ranges.
    fn combine(&self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;

    /// Folds a node's pending update into its aggregate.
    fn apply(&self, value: Self::Value, lazy: Self::Lazy) -> Self::Value;

    /// Merges a parent's pending update into one child's pending update.
    fn push_down(&self, child: Self::Lazy, parent: Self::Lazy) -> Self::Lazy;

    /// Merges a freshly issued update into the pending update of a node that
    /// covers `len` leaves.
    fn compose(&self, lazy: Self::Lazy, update: Self::Lazy, len: usize) -> Self::Lazy;

    /// Value of every leaf before the first update.
    fn identity(&self) -> Self::Value;

    /// Answer for a range that covers no leaves.
    fn sentinel(&self) -> Self::Value;

    /// Pending update of a node with nothing pending.
    fn lazy_identity(&self) -> Self::Lazy;
}

/// [`LazyOps`] assembled from closures, for one-off trees that don't warrant a
/// dedicated type.
#[derive(Clone)]
pub struct FnOps<V, L, C, A, P, B> {
    combine: C,
    apply: A,
    push_down: P,
    compose: B,
    identity: V,
    sentinel: V,
    lazy_identity: L,
}

impl<V, L, C, A, P, B> FnOps<V, L, C, A, P, B>
where
    V: Copy,
    L: Copy,
    C: Fn(V, V) -> V,
    A: Fn(V, L) -> V,
    P: Fn(L, L) -> L,
    B: Fn(L, L, usize) -> L,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        combine: C,
        apply: A,
        push_down: P,
        compose: B,
        identity: V,
        sentinel: V,
        lazy_identity: L,
    ) -> Self {
        Self {
            combine,
            apply,
            push_down,
            compose,
            identity,
            sentinel,
            lazy_identity,
        }
    }
}

impl<V, L, C, A, P, B> LazyOps for FnOps<V, L, C, A, P, B>
where
    V: Copy,
    L: Copy,
    C: Fn(V, V) -> V,
    A: Fn(V, L) -> V,
    P: Fn(L, L) -> L,
    B: Fn(L, L, usize) -> L,
{
    type Value = V;
    type Lazy = L;

    fn combine(&self, lhs: V, rhs: V) -> V {
        (self.combine)(lhs, rhs)
    }

    fn apply(&self, value: V, lazy: L) -> V {
        (self.apply)(value, lazy)
    }

    fn push_down(&self, child: L, parent: L) -> L {
        (self.push_down)(child, parent)
    }

    fn compose(&self, lazy: L, update: L, len: usize) -> L {
        (self.compose)(lazy, update, len)
    }

    fn identity(&self) -> V {
        self.identity
    }

    fn sentinel(&self) -> V {
        self.sentinel
    }

    fn lazy_identity(&self) -> L {
        self.lazy_identity
    }
}
