//! Piecewise cubic Hermite gain curve.
//!
//! Between control points the log2 gain follows a cubic Hermite segment.
//! Below the first point the gain is held at `y[0]`. Above the last point
//! the gain falls off so that `x * 2^y` stays constant, i.e. the output is
//! clamped at the value the last point produces.

use crate::editor::CurveEditor;
use crate::error::{CurveError, CurveResult};
use crate::pchip::populate_pchip_slopes;
use crate::types::{ControlPoint, CurveSample, SlopeSource};

/// Immutable piecewise cubic curve with at least one control point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<ControlPoint>", into = "Vec<ControlPoint>")
)]
pub struct PiecewiseCubic {
    points: Vec<ControlPoint>,
}

impl PiecewiseCubic {
    /// Builds a curve from control points with known slopes.
    ///
    /// Points are used in the order given. Use [`check_ascending`] to test
    /// whether they are sorted.
    ///
    /// [`check_ascending`]: Self::check_ascending
    pub fn new(points: Vec<ControlPoint>) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        Ok(Self { points })
    }

    /// Builds a curve from `(x, y)` knots and a slope source.
    pub fn from_knots(knots: &[(f64, f64)], slopes: SlopeSource) -> CurveResult<Self> {
        let mut points: Vec<ControlPoint> = knots.iter().map(|&(x, y)| ControlPoint::new(x, y, 0.0)).collect();
        match slopes {
            SlopeSource::Explicit(m) => {
                if m.len() != points.len() {
                    return Err(CurveError::SlopeCountMismatch {
                        expected: points.len(),
                        found: m.len(),
                    });
                }
                for (p, m) in points.iter_mut().zip(m) {
                    p.m = m;
                }
            }
            SlopeSource::Pchip => populate_pchip_slopes(&mut points),
        }
        Self::new(points)
    }

    /// Builds a curve from `(x, y)` knots with PCHIP slopes.
    pub fn with_pchip(knots: &[(f64, f64)]) -> CurveResult<Self> {
        Self::from_knots(knots, SlopeSource::Pchip)
    }

    /// A single zero-gain point at `x`.
    ///
    /// Gain is 1 up to `x` and clamps the output above it.
    pub fn unity(x: f64) -> Self {
        Self {
            points: vec![ControlPoint::new(x, 0.0, 0.0)],
        }
    }

    /// Control points in curve order.
    #[inline]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of control points (never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the index of the first point not strictly right of its
    /// predecessor, as an error.
    pub fn check_ascending(&self) -> CurveResult<()> {
        match self.points.windows(2).position(|w| !(w[0].x < w[1].x)) {
            Some(i) => Err(CurveError::NotAscending { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// True when control point x values are strictly increasing.
    #[inline]
    pub fn is_ascending(&self) -> bool {
        self.check_ascending().is_ok()
    }

    /// Evaluates the log2 gain and its slope at `x`.
    pub fn evaluate(&self, x: f64) -> CurveSample {
        evaluate_control_points(&self.points, x)
    }

    /// Linear gain `2^y` at `x`.
    #[inline]
    pub fn gain(&self, x: f64) -> f64 {
        self.evaluate(x).gain()
    }

    /// Starts an editing session on a copy of this curve.
    pub fn edit(&self) -> CurveEditor {
        CurveEditor::new(self)
    }
}

impl TryFrom<Vec<ControlPoint>> for PiecewiseCubic {
    type Error = CurveError;

    fn try_from(points: Vec<ControlPoint>) -> CurveResult<Self> {
        Self::new(points)
    }
}

impl From<PiecewiseCubic> for Vec<ControlPoint> {
    fn from(curve: PiecewiseCubic) -> Self {
        curve.points
    }
}

/// Evaluates a bare control point list the way [`PiecewiseCubic`] does.
///
/// An empty list evaluates to zero gain everywhere.
pub fn evaluate_control_points(points: &[ControlPoint], x: f64) -> CurveSample {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return CurveSample { x, y: 0.0, m: 0.0 };
    };

    if x <= first.x {
        return CurveSample { x, y: first.y, m: 0.0 };
    }
    if x >= last.x {
        return CurveSample {
            x,
            y: (last.y.exp2() * last.x / x).log2(),
            m: 0.0,
        };
    }

    // first.x < x < last.x, so there are at least two points.
    // Keep points[lo].x < x <= points[hi].x.
    let mut lo = 0;
    let mut hi = points.len() - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if x <= points[mid].x {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    hermite(&points[lo], &points[hi], x)
}

/// Cubic Hermite segment between `p0` and `p1`.
fn hermite(p0: &ControlPoint, p1: &ControlPoint, x: f64) -> CurveSample {
    let h = p1.x - p0.x;
    let t = (x - p0.x) / h;
    let c0 = p0.y;
    let c1 = h * p0.m;
    let c2 = 3.0 * (p1.y - p0.y) - h * (2.0 * p0.m + p1.m);
    let c3 = 2.0 * (p0.y - p1.y) + h * (p0.m + p1.m);

    let y = ((c3 * t + c2) * t + c1) * t + c0;
    let m = (c1 + t * (2.0 * c2 + 3.0 * c3 * t)) / h;
    CurveSample { x, y, m }
}
