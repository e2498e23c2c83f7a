use super::Query;
use crate::number::min;
use crate::Infinity;

#[derive(Debug, Clone, Copy, Default)]
pub struct MinQuery;

impl<V: Copy + Infinity + PartialOrd> Query<V> for MinQuery {
    fn identity() -> V {
        V::infinity()
    }
    fn combine(lhs: V, rhs: V) -> V {
        min(lhs, rhs)
    }
}
