use ndarray::ScalarOperand;
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::str::FromStr;

/// Element type of sequences, weights and cost matrices.
pub trait LibData:
    'static
    + Unpin
    + Clone
    + Copy
    + Send
    + Default
    + Sync
    + Debug
    + Float
    + FromPrimitive
    + Sum
    + FromStr
    + ScalarOperand
    + Display
{
    const INFINITY: Self;
    const ZERO: Self;
}

impl LibData for f32 {
    const INFINITY: Self = Self::INFINITY;
    const ZERO: Self = 0.0;
}

impl LibData for f64 {
    const INFINITY: Self = Self::INFINITY;
    const ZERO: Self = 0.0;
}

/// Number of elements in a `rows × cols` buffer, `None` on overflow.
pub(crate) fn extent(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
}
