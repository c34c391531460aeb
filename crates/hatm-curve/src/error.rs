//! Curve error types.

use thiserror::Error;

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while building or editing a curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A curve needs at least one control point.
    #[error("curve must have at least one control point")]
    Empty,

    /// Control point x values are not strictly increasing.
    #[error("control point {index} is not to the right of its predecessor")]
    NotAscending {
        /// Index of the first offending point
        index: usize,
    },

    /// Explicit slopes do not line up with the knots.
    #[error("expected {expected} slopes, found {found}")]
    SlopeCountMismatch {
        /// Number of knots
        expected: usize,
        /// Number of slopes supplied
        found: usize,
    },

    /// Editing index past the end of the curve.
    #[error("control point index {index} out of range for {len} points")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of points in the curve
        len: usize,
    },
}
