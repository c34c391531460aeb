//! Quadratic Bezier axis warp.
//!
//! A [`QuadraticBezier`] is anchored at the origin and at `(x2, x2)`, with a
//! single free control point `(x1, y1)`. Curve editors use it to warp an
//! axis so that the interesting part of a tone curve gets more screen space.
//! Values at or beyond the terminal control point pass through unchanged.
//!
//! # Usage
//!
//! ```rust
//! use hatm_math::QuadraticBezier;
//!
//! let warp = QuadraticBezier::new(0.3, 0.6, 1.0);
//! let y = warp.evaluate(0.5);
//! assert!((warp.evaluate_inverse(y) - 0.5).abs() < 1e-9);
//! assert_eq!(warp.evaluate(2.0), 2.0);
//! ```

/// Quadratic Bezier through `(0, 0)`, `(x1, y1)` and `(x2, x2)`.
///
/// The terminal control point reuses `x2` for both coordinates, so the warp
/// joins the identity line at `x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticBezier {
    /// Free control point, input coordinate.
    pub x1: f64,
    /// Free control point, output coordinate.
    pub y1: f64,
    /// Terminal control point (used for both coordinates).
    pub x2: f64,
}

/// Power-basis coefficients `a t^2 + b t + c` of one Bezier coordinate.
///
/// The parameter runs from the terminal point (`t = 0`) to the origin
/// (`t = 1`).
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    fn from_controls(p: [f64; 3]) -> Self {
        Self {
            a: p[0] - 2.0 * p[1] + p[2],
            b: 2.0 * p[1] - 2.0 * p[2],
            c: p[2],
        }
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        (self.a * t + self.b) * t + self.c
    }

    #[inline]
    fn derivative_at(&self, t: f64) -> f64 {
        2.0 * self.a * t + self.b
    }

    /// Solves `at(t) == v`, taking the `(-b - sqrt(disc)) / 2a` root.
    ///
    /// Returns `None` when the coordinate is constant.
    fn parameter_for(&self, v: f64) -> Option<f64> {
        if self.a == 0.0 {
            if self.b == 0.0 {
                return None;
            }
            return Some((v - self.c) / self.b);
        }
        let disc = (self.b * self.b - 4.0 * self.a * (self.c - v)).max(0.0);
        Some((-self.b - disc.sqrt()) / (2.0 * self.a))
    }
}

impl QuadraticBezier {
    /// Creates a warp from its control scalars.
    #[inline]
    pub const fn new(x1: f64, y1: f64, x2: f64) -> Self {
        Self { x1, y1, x2 }
    }

    /// The identity warp on `[0, x2]`.
    #[inline]
    pub fn identity(x2: f64) -> Self {
        Self::new(0.5 * x2, 0.5 * x2, x2)
    }

    fn forward(&self) -> (Coefficients, Coefficients) {
        (
            Coefficients::from_controls([0.0, self.x1, self.x2]),
            Coefficients::from_controls([0.0, self.y1, self.x2]),
        )
    }

    fn backward(&self) -> (Coefficients, Coefficients) {
        (
            Coefficients::from_controls([0.0, self.y1, self.x2]),
            Coefficients::from_controls([0.0, self.x1, self.x2]),
        )
    }

    /// Maps an input coordinate through the warp.
    pub fn evaluate(&self, x: f64) -> f64 {
        let (cx, cy) = self.forward();
        Self::eval(x, self.x2, cx, cy)
    }

    /// Maps a warped coordinate back to the input axis.
    pub fn evaluate_inverse(&self, y: f64) -> f64 {
        let (cy, cx) = self.backward();
        Self::eval(y, self.x2, cy, cx)
    }

    /// Slope `d evaluate / dx` at `x`.
    ///
    /// Returns 1 on the pass-through region and for degenerate controls.
    pub fn derivative(&self, x: f64) -> f64 {
        if x >= self.x2 {
            return 1.0;
        }
        let (cx, cy) = self.forward();
        let Some(t) = cx.parameter_for(x) else {
            return 1.0;
        };
        let dx = cx.derivative_at(t);
        if dx == 0.0 {
            // vertical tangent
            return 1.0;
        }
        cy.derivative_at(t) / dx
    }

    fn eval(v: f64, terminal: f64, from: Coefficients, to: Coefficients) -> f64 {
        if v >= terminal {
            return v;
        }
        match from.parameter_for(v) {
            Some(t) => to.at(t),
            None => v,
        }
    }
}
