//! Pigment Core: curve math for the color picker.
//!
//! Generic cubic Bézier evaluation over any point type that can be added
//! and scaled, plus x-sorted Bézier splines read as `y(x)` lookup curves.
//! No GUI or color-space dependencies.

pub mod curves;
pub mod error;

// Re-exports for convenience.
pub use curves::affine::{ControlPoint, Parameter, SampleParameter};
pub use curves::config::SolverConfig;
pub use curves::cubic::{CubicBezier, bernstein_weights};
pub use curves::spline::BezierSpline;
pub use error::CurveError;
