//! Cubic Bézier curves over generic control points.
//!
//! # Algorithm
//! Direct Bernstein-basis expansion with `u = 1 − t`:
//! ```text
//! B(t) = P0×u³ + P1×3u²t + P2×3ut² + P3×t³
//! ```
//! `t` is never clamped. Values outside `[0, 1]` extrapolate the
//! polynomial, and non-finite parameters propagate through the
//! arithmetic of the point type.
//!
//! # Complexity
//! - Evaluate: O(1), four weights and four scaled additions
//! - Sample: O(count)

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::curves::affine::{ControlPoint, Parameter, SampleParameter};
use crate::error::CurveError;

/// Number of control points on a cubic curve.
const POINT_COUNT: usize = 4;

/// A cubic Bézier curve: endpoints `p0`/`p3`, tangent handles `p1`/`p2`.
///
/// A plain value. Assigning or cloning copies all four points, and the
/// only mutation is replacing the whole set with [`set_points`](Self::set_points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubicBezier<P> {
    points: [P; POINT_COUNT],
}

impl<P> CubicBezier<P> {
    /// Curve through `p0` and `p3` with handles `p1` and `p2`.
    pub const fn new(p0: P, p1: P, p2: P, p3: P) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Curve from `[p0, p1, p2, p3]`.
    pub const fn from_points(points: [P; POINT_COUNT]) -> Self {
        Self { points }
    }

    /// Consume the curve, returning its four points.
    pub fn into_points(self) -> [P; POINT_COUNT] {
        self.points
    }

    /// All four control points in order.
    pub const fn points(&self) -> &[P; POINT_COUNT] {
        &self.points
    }

    /// Control point `index`, or [`CurveError::IndexOutOfRange`] past `3`.
    pub fn get(&self, index: usize) -> Result<&P, CurveError> {
        self.points
            .get(index)
            .ok_or(CurveError::IndexOutOfRange { index })
    }

    /// Replace every control point at once.
    pub fn set_points(&mut self, points: [P; POINT_COUNT]) {
        self.points = points;
    }

    /// The start point `p0`.
    pub const fn start(&self) -> &P {
        &self.points[0]
    }

    /// The end point `p3`.
    pub const fn end(&self) -> &P {
        &self.points[POINT_COUNT - 1]
    }
}

impl<P: Clone> CubicBezier<P> {
    /// Evaluate the curve at parameter `t`.
    ///
    /// `t = 0` yields `p0` and `t = 1` yields `p3`. Any other value,
    /// including ones outside `[0, 1]`, is evaluated as-is.
    pub fn evaluate<T>(&self, t: T) -> P
    where
        T: Parameter,
        P: ControlPoint<T>,
    {
        let [w0, w1, w2, w3] = bernstein_weights(t);
        let [p0, p1, p2, p3] = &self.points;
        p0.clone()
            .scale(w0)
            .add(p1.clone().scale(w1))
            .add(p2.clone().scale(w2))
            .add(p3.clone().scale(w3))
    }

    /// Evaluate at `count` uniformly spaced parameters over `[0, 1]`,
    /// both ends included.
    ///
    /// A single sample is the start point; zero samples is empty.
    pub fn sample<T>(&self, count: usize) -> Vec<P>
    where
        T: SampleParameter,
        P: ControlPoint<T>,
    {
        let last = count.saturating_sub(1);
        (0..count)
            .map(|i| self.evaluate(T::fraction(i, last)))
            .collect()
    }
}

impl<P> Index<usize> for CubicBezier<P> {
    type Output = P;

    /// Panics past index `3`, like slice indexing. Use
    /// [`CubicBezier::get`] for a checked lookup.
    fn index(&self, index: usize) -> &P {
        &self.points[index]
    }
}

impl<P> From<[P; POINT_COUNT]> for CubicBezier<P> {
    fn from(points: [P; POINT_COUNT]) -> Self {
        Self::from_points(points)
    }
}

/// The cubic Bernstein weights `[u³, 3u²t, 3ut², t³]` at `t`, `u = 1 − t`.
///
/// They sum to one for every `t`.
pub fn bernstein_weights<T: Parameter>(t: T) -> [T; POINT_COUNT] {
    let three = T::from(3u8);
    let u = T::from(1u8) - t;
    [u * u * u, three * (u * u) * t, three * u * t * t, t * t * t]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn scalar_curve() -> CubicBezier<f64> {
        CubicBezier::new(0.2, 1.5, -0.7, 0.9)
    }

    /// Weighted sum written out longhand, independent of `bernstein_weights`.
    fn expanded(c: &CubicBezier<f64>, t: f64) -> f64 {
        let u = 1.0 - t;
        c[0] * u.powi(3)
            + c[1] * 3.0 * u.powi(2) * t
            + c[2] * 3.0 * u * t.powi(2)
            + c[3] * t.powi(3)
    }

    #[test]
    fn test_endpoints() {
        let c = scalar_curve();
        assert!((c.evaluate(0.0) - 0.2).abs() < EPSILON);
        assert!((c.evaluate(1.0) - 0.9).abs() < EPSILON);
    }

    #[test]
    fn test_midpoint_is_one_three_three_one_over_eight() {
        let c = scalar_curve();
        let expected = (0.2 + 3.0 * 1.5 + 3.0 * -0.7 + 0.9) / 8.0;
        assert!((c.evaluate(0.5) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_constant_curve() {
        let c = CubicBezier::new(0.25_f64, 0.25, 0.25, 0.25);
        for t in [-3.0, -0.5, 0.0, 0.3, 0.5, 1.0, 1.7, 4.0] {
            assert!((c.evaluate(t) - 0.25).abs() < 1e-9, "t = {t}");
        }
    }

    #[test]
    fn test_collinear_thirds_is_linear() {
        let (p0, p3) = (-2.0_f64, 4.0);
        let c = CubicBezier::new(p0, p0 + (p3 - p0) / 3.0, p0 + 2.0 * (p3 - p0) / 3.0, p3);
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let expected = p0 + t * (p3 - p0);
            assert!((c.evaluate(t) - expected).abs() < 1e-9, "t = {t}");
        }
    }

    #[test]
    fn test_extrapolation_matches_polynomial() {
        let c = scalar_curve();
        for t in [-1.0, 2.0, -0.25, 1.5] {
            let got = c.evaluate(t);
            assert!(got.is_finite());
            assert!((got - expanded(&c, t)).abs() < 1e-9, "t = {t}");
        }
    }

    #[test]
    fn test_non_finite_parameter_propagates() {
        assert!(scalar_curve().evaluate(f64::NAN).is_nan());
    }

    #[test]
    fn test_f32_parameter() {
        let c = CubicBezier::new(0.0_f32, 1.0, 1.0, 0.0);
        assert!((c.evaluate(0.5_f32) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_weights_sum_to_one() {
        for t in [-1.0, 0.0, 0.1, 0.5, 0.9, 1.0, 2.0] {
            let sum: f64 = bernstein_weights(t).iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "t = {t}");
        }
        assert_eq!(bernstein_weights(0.5), [0.125, 0.375, 0.375, 0.125]);
    }

    #[test]
    fn test_assignment_copies_points() {
        let mut a = scalar_curve();
        let b = a;
        let before: Vec<f64> = [0.0, 0.3, 0.8].map(|t| b.evaluate(t)).to_vec();

        a.set_points([9.0, 9.0, 9.0, 9.0]);

        assert!((a.evaluate(0.3) - 9.0).abs() < 1e-9);
        for (t, expected) in [0.0, 0.3, 0.8].into_iter().zip(before) {
            assert_eq!(b.evaluate(t), expected);
            assert_eq!(b.evaluate(t), scalar_curve().evaluate(t));
        }
    }

    #[test]
    fn test_checked_index() {
        let c = scalar_curve();
        assert_eq!(c.get(3), Ok(&0.9));
        assert_eq!(c.get(4), Err(CurveError::IndexOutOfRange { index: 4 }));
        assert_eq!(c[1], 1.5);
        assert_eq!(*c.start(), 0.2);
        assert_eq!(*c.end(), 0.9);
        assert_eq!(CubicBezier::from([0.2, 1.5, -0.7, 0.9]), c);
        assert_eq!(c.into_points(), [0.2, 1.5, -0.7, 0.9]);
    }

    #[test]
    #[should_panic]
    fn test_unchecked_index_panics() {
        let c = scalar_curve();
        let _point: f64 = c[4];
    }

    #[test]
    fn test_sample_counts() {
        let c = scalar_curve();
        assert!(c.sample::<f64>(0).is_empty());
        assert_eq!(c.sample::<f64>(1), vec![c.evaluate(0.0)]);

        let samples = c.sample::<f64>(5);
        assert_eq!(samples.len(), 5);
        assert!((samples[0] - 0.2).abs() < EPSILON);
        assert!((samples[2] - c.evaluate(0.5)).abs() < EPSILON);
        assert!((samples[4] - 0.9).abs() < EPSILON);
    }
}
