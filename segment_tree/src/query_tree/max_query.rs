use super::Query;
use crate::number::max;
use crate::NegativeInfinity;

#[derive(Debug, Clone, Copy, Default)]
pub struct MaxQuery;

impl<V: Copy + NegativeInfinity + PartialOrd> Query<V> for MaxQuery {
    fn identity() -> V {
        V::negative_infinity()
    }
    fn combine(lhs: V, rhs: V) -> V {
        max(lhs, rhs)
    }
}
