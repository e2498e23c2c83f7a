use super::Query;
use crate::Zero;

#[derive(Debug, Clone, Copy, Default)]
pub struct SumQuery;

impl<V: Copy + Zero + std::ops::Add<Output = V>> Query<V> for SumQuery {
    fn identity() -> V {
        V::zero()
    }
    fn combine(lhs: V, rhs: V) -> V {
        lhs + rhs
    }
}
