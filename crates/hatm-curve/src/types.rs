//! Core types for gain curves.

/// A single control point on a gain curve.
///
/// `y` is a log2 gain and `m` the slope `dy/dx` at the point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint {
    /// Input value (linear light).
    pub x: f64,
    /// Log2 gain at `x`.
    pub y: f64,
    /// Slope of the log2 gain at `x`.
    pub m: f64,
}

impl ControlPoint {
    /// Create a new control point.
    #[inline]
    pub const fn new(x: f64, y: f64, m: f64) -> Self {
        Self { x, y, m }
    }
}

/// Result of evaluating a curve at some input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Input the curve was evaluated at.
    pub x: f64,
    /// Log2 gain.
    pub y: f64,
    /// Slope of the log2 gain.
    pub m: f64,
}

impl CurveSample {
    /// Linear gain `2^y`.
    #[inline]
    pub fn gain(&self) -> f64 {
        self.y.exp2()
    }
}

impl From<CurveSample> for ControlPoint {
    #[inline]
    fn from(s: CurveSample) -> Self {
        Self::new(s.x, s.y, s.m)
    }
}

/// Where the slopes of a curve come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SlopeSource {
    /// One slope per knot, supplied by the caller.
    Explicit(Vec<f64>),
    /// Slopes synthesised with the shape-preserving PCHIP rule.
    Pchip,
}
