/// Errors raised outside of curve evaluation itself.
///
/// Evaluating a curve never fails; these cover indexed access, spline
/// construction and lookup, and solver configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("control point index {index} out of range (a cubic curve has 4)")]
    IndexOutOfRange { index: usize },
    #[error("spline needs at least one segment")]
    EmptySpline,
    #[error("segment {index} has a non-finite x coordinate")]
    NonFiniteX { index: usize },
    #[error("segment {index} runs backwards in x ({start} > {end})")]
    ReversedSegment { index: usize, start: f64, end: f64 },
    #[error("segment {next} starts at x = {next_start} but segment {index} ends at x = {end}")]
    Gap {
        index: usize,
        next: usize,
        end: f64,
        next_start: f64,
    },
    #[error("x = {x} is outside the spline domain [{min}, {max}]")]
    OutsideDomain { x: f64, min: f64, max: f64 },
    #[error("invalid solver config: {0}")]
    InvalidConfig(&'static str),
}
