pub trait Zero {
    fn zero() -> Self;
}

pub trait NegativeInfinity {
    fn negative_infinity() -> Self;
}

pub trait Infinity {
    fn infinity() -> Self;
}

/// Converts between a per-leaf update and the total it contributes to a range.
pub trait Scale {
    fn scale(self, len: usize) -> Self;
    fn halve(self) -> Self;
}

macro_rules! impl_integer_traits {
    ($($t:ty),*) => {
        $(
            impl Zero for $t {
                fn zero() -> Self {
                    0
                }
            }

            impl Infinity for $t {
                fn infinity() -> Self {
                    <$t>::MAX
                }
            }

            impl NegativeInfinity for $t {
                fn negative_infinity() -> Self {
                    <$t>::MIN
                }
            }

            impl Scale for $t {
                fn scale(self, len: usize) -> Self {
                    self * len as $t
                }
                fn halve(self) -> Self {
                    self / 2
                }
            }
        )*
    };
}

impl_integer_traits!(i32, i64, u32, u64, usize);

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Infinity for f64 {
    fn infinity() -> Self {
        f64::INFINITY
    }
}

impl NegativeInfinity for f64 {
    fn negative_infinity() -> Self {
        f64::NEG_INFINITY
    }
}

impl Scale for f64 {
    fn scale(self, len: usize) -> Self {
        self * len as f64
    }
    fn halve(self) -> Self {
        self / 2.0
    }
}
