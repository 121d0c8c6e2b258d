//! Tunables for inverting a spline segment's x(t).

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Default acceptable |x(t) − x| when solving for `t`.
const DEFAULT_TOLERANCE: f64 = 0.01;
/// Default iteration cap per segment solve.
const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Configuration for [`BezierSpline`](crate::curves::spline::BezierSpline) lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Stop once the evaluated x is within this distance of the target.
    pub tolerance: f64,
    /// Give up and return the latest estimate after this many steps.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Reject a non-positive tolerance or a zero iteration cap.
    pub fn validate(&self) -> Result<(), CurveError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(CurveError::InvalidConfig(
                "tolerance must be positive and finite",
            ));
        }
        if self.max_iterations == 0 {
            return Err(CurveError::InvalidConfig(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}
