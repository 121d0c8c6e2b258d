//! The algebra a curve needs from its points and its parameter.
//!
//! A control point only has to be addable and scalable by the parameter
//! type. Both traits are blanket-implemented from the std operator traits,
//! so `f32`, `f64`, glam vectors and palette's linear colors qualify
//! without any adapter code.

use std::ops::{Add, Mul, Sub};

/// A point that can be blended in an affine combination.
pub trait ControlPoint<T>: Clone {
    /// Point addition.
    fn add(self, other: Self) -> Self;

    /// Multiplication by a scalar weight.
    fn scale(self, factor: T) -> Self;
}

impl<P, T> ControlPoint<T> for P
where
    P: Clone + Add<Output = P> + Mul<T, Output = P>,
{
    #[inline]
    fn add(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn scale(self, factor: T) -> Self {
        self * factor
    }
}

/// A curve parameter: supports `1 - t`, products, and the small integer
/// constants that appear in the Bernstein weights.
pub trait Parameter: Copy + Sub<Output = Self> + Mul<Output = Self> + From<u8> {}

impl<T> Parameter for T where T: Copy + Sub<Output = T> + Mul<Output = T> + From<u8> {}

/// A parameter that can be placed at a uniform fraction of `[0, 1]`.
pub trait SampleParameter: Parameter {
    /// `index / last`, with `last == 0` treated as 1.
    fn fraction(index: usize, last: usize) -> Self;
}

impl SampleParameter for f32 {
    fn fraction(index: usize, last: usize) -> Self {
        index as f32 / last.max(1) as f32
    }
}

impl SampleParameter for f64 {
    fn fraction(index: usize, last: usize) -> Self {
        index as f64 / last.max(1) as f64
    }
}
