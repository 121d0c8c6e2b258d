//! Piecewise cubic Bézier lookup curves read as `y(x)`.
//!
//! Each segment is a 2-D cubic whose x runs forward from `p0.x` to `p3.x`.
//! Looking up `y` for a given `x` means inverting x(t) on the segment
//! that covers `x`, then reading y at that parameter. Used for the hue
//! and channel tables of the color picker.
//!
//! # Algorithm
//! Start from the linear guess `t = (x − p0.x) / width` and refine:
//! ```text
//! d = x(t) − x
//! t ← clamp(t − d / width, 0, 1)
//! ```
//! until `|d| < tolerance` or the iteration cap is reached.
//!
//! # Complexity
//! - Lookup: O(N) segment scan + O(max_iterations) refinement
//! - Bake to 1D LUT: O(size × (N + max_iterations))

use glam::DVec2;

use crate::curves::config::SolverConfig;
use crate::curves::cubic::CubicBezier;
use crate::error::CurveError;

/// Maximum x mismatch allowed where one segment hands over to the next.
const JOIN_TOLERANCE: f64 = 1e-9;
/// Segments narrower than this are treated as vertical steps.
const MIN_SEGMENT_WIDTH: f64 = 1e-12;

/// An x-sorted chain of touching 2-D cubic segments.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSpline {
    segments: Vec<CubicBezier<DVec2>>,
    config: SolverConfig,
}

impl BezierSpline {
    /// Build a spline, checking that segments run forward in x and touch.
    ///
    /// Joins that miss by less than the join tolerance are snapped, so the
    /// next segment starts exactly where the previous one ends.
    pub fn new(mut segments: Vec<CubicBezier<DVec2>>) -> Result<Self, CurveError> {
        if segments.is_empty() {
            return Err(CurveError::EmptySpline);
        }

        for (index, segment) in segments.iter().enumerate() {
            if segment.points().iter().any(|p| !p.x.is_finite()) {
                return Err(CurveError::NonFiniteX { index });
            }
        }

        for next in 1..segments.len() {
            let index = next - 1;
            let end = segments[index].end().x;
            let next_start = segments[next].start().x;
            if (next_start - end).abs() > JOIN_TOLERANCE {
                return Err(CurveError::Gap {
                    index,
                    next,
                    end,
                    next_start,
                });
            }
            let mut points = *segments[next].points();
            points[0].x = end;
            segments[next].set_points(points);
        }

        for (index, segment) in segments.iter().enumerate() {
            let (start, end) = (segment.start().x, segment.end().x);
            if start > end {
                return Err(CurveError::ReversedSegment { index, start, end });
            }
        }

        Ok(Self {
            segments,
            config: SolverConfig::default(),
        })
    }

    /// Replace the solver configuration after validating it.
    pub fn with_config(mut self, config: SolverConfig) -> Result<Self, CurveError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The active solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Segments in x order.
    pub fn segments(&self) -> &[CubicBezier<DVec2>] {
        &self.segments
    }

    /// `(first p0.x, last p3.x)`.
    pub fn domain(&self) -> (f64, f64) {
        // `new` guarantees at least one segment.
        let min = self.segments.first().map_or(0.0, |s| s.start().x);
        let max = self.segments.last().map_or(0.0, |s| s.end().x);
        (min, max)
    }

    /// Look up `y` at `x`.
    ///
    /// The first segment covering `x` is used, so a shared endpoint
    /// belongs to the earlier segment. If the solver runs out of
    /// iterations the latest estimate is returned.
    pub fn evaluate_at_x(&self, x: f64) -> Result<f64, CurveError> {
        let segment = self
            .segments
            .iter()
            .find(|s| x >= s.start().x && x <= s.end().x)
            .ok_or_else(|| {
                let (min, max) = self.domain();
                CurveError::OutsideDomain { x, min, max }
            })?;

        Ok(self.solve_segment(segment, x))
    }

    /// Bake the spline into a 1D LUT over its domain.
    ///
    /// Returns `size` values at uniformly spaced x from the start of the
    /// domain to its end, both included.
    pub fn bake_1d_lut(&self, size: usize) -> Result<Vec<f64>, CurveError> {
        let (min, max) = self.domain();
        let last = size.saturating_sub(1).max(1) as f64;

        (0..size)
            .map(|i| {
                let x = (min + (max - min) * (i as f64 / last)).clamp(min, max);
                self.evaluate_at_x(x)
            })
            .collect()
    }

    fn solve_segment(&self, segment: &CubicBezier<DVec2>, x: f64) -> f64 {
        let start = *segment.start();
        let width = segment.end().x - start.x;
        if width < MIN_SEGMENT_WIDTH {
            return start.y;
        }

        let mut t = (x - start.x) / width;
        let mut point = start;
        for _ in 0..self.config.max_iterations {
            point = segment.evaluate(t);
            let d = point.x - x;
            if d.abs() < self.config.tolerance {
                return point.y;
            }
            t = (t - d / width).clamp(0.0, 1.0);
        }

        tracing::debug!(
            x,
            t,
            residual = point.x - x,
            "spline solve hit iteration limit"
        );
        point.y
    }
}
