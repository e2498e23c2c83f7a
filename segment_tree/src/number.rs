use super::{Infinity, NegativeInfinity, Scale, Zero};
use std::ops::Add;

pub trait Number:
    Zero + Infinity + NegativeInfinity + Scale + Copy + PartialOrd + Add<Output = Self>
{
}
impl<N> Number for N where
    N: Zero + Infinity + NegativeInfinity + Scale + Copy + PartialOrd + Add<Output = Self>
{
}

pub fn min<N: PartialOrd>(lhs: N, rhs: N) -> N {
    if rhs < lhs {
        rhs
    } else {
        lhs
    }
}

pub fn max<N: PartialOrd>(lhs: N, rhs: N) -> N {
    if lhs < rhs {
        rhs
    } else {
        lhs
    }
}
