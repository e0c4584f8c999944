use num::{Float, NumCast};
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{AddAssign, SubAssign},
};

/// Float primitive the clustering engine can operate on.
pub trait Primitive: Float + NumCast + Sum + AddAssign + SubAssign
                + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static {}
impl Primitive for f32 {}
impl Primitive for f64 {}

/// Sample count as float. Exact up to the mantissa width of `T`, rounded beyond.
pub(crate) fn count_as<T: Primitive>(count: usize) -> T {
    T::from(count).unwrap_or_else(T::infinity)
}
