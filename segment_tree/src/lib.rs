mod impls;
mod lazy_tree;
mod number;
mod query_tree;
mod range_add_tree;
mod traits;
mod tree;

pub use lazy_tree::{AddMin, AddSum, AssignMin, AssignSum, FnOps, LazyOps, LazySegTree};
pub use number::Number;
pub use query_tree::{MaxQuery, MaxTree, MinQuery, MinTree, Query, QueryTree, SumQuery, SumTree};
pub use range_add_tree::RangeAddTree;
pub use traits::{Infinity, NegativeInfinity, Scale, Zero};
