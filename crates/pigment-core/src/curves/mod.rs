//! Curves: Bézier evaluation, spline lookup, and solver tunables.

pub mod affine;
pub mod config;
pub mod cubic;
pub mod spline;
