//! Display space for curve authoring.
//!
//! A curve editor plots a gain curve as input against output, where the
//! output of a point `(x, g)` is `x * 2^g`. Each axis can additionally be
//! warped by a [`QuadraticBezier`] so the dark end of the curve gets more
//! room. Going from the plot back to a control point means inverting that
//! map, which is done with a Newton solve seeded by the exact inverse warps.

use hatm_math::{Mat2, NewtonSolver, NewtonTarget, QuadraticBezier, Vec2};

/// Map from model points `(x, log2 gain)` to display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTransform {
    /// Warp applied to the input axis.
    pub input_warp: Option<QuadraticBezier>,
    /// Warp applied to the output axis.
    pub output_warp: Option<QuadraticBezier>,
    /// Newton settings used by [`to_model`](Self::to_model).
    #[cfg_attr(feature = "serde", serde(skip))]
    pub solver: NewtonSolver,
}

/// Model point recovered from display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPoint {
    /// Input value.
    pub x: f64,
    /// Log2 gain.
    pub g: f64,
    /// Slope of the log2 gain, when a display slope was given and could be
    /// mapped back.
    pub m: Option<f64>,
}

fn warp(b: &Option<QuadraticBezier>, v: f64) -> f64 {
    b.as_ref().map_or(v, |b| b.evaluate(v))
}

fn unwarp(b: &Option<QuadraticBezier>, v: f64) -> f64 {
    b.as_ref().map_or(v, |b| b.evaluate_inverse(v))
}

fn warp_slope(b: &Option<QuadraticBezier>, v: f64) -> f64 {
    b.as_ref().map_or(1.0, |b| b.derivative(v))
}

impl ViewTransform {
    /// Unwarped display: input against output, linear axes.
    pub fn linear() -> Self {
        Self::default()
    }

    /// Display with both axes warped.
    pub fn warped(input: QuadraticBezier, output: QuadraticBezier) -> Self {
        Self {
            input_warp: Some(input),
            output_warp: Some(output),
            solver: NewtonSolver::default(),
        }
    }

    /// Display coordinates of the model point `(x, g)`.
    pub fn to_view(&self, x: f64, g: f64) -> Vec2 {
        Vec2::new(warp(&self.input_warp, x), warp(&self.output_warp, x * g.exp2()))
    }

    /// Jacobian of [`to_view`](Self::to_view) with respect to `(x, g)`.
    pub fn jacobian(&self, x: f64, g: f64) -> Mat2 {
        let gain = g.exp2();
        let u = x * gain;
        let du = warp_slope(&self.output_warp, u);
        Mat2::from_rows([
            [warp_slope(&self.input_warp, x), 0.0],
            [du * gain, du * u * std::f64::consts::LN_2],
        ])
    }

    /// Starting point for the solve: exact when the warps are pure Beziers.
    fn initial_guess(&self, view: Vec2) -> Vec2 {
        let x = unwarp(&self.input_warp, view.x);
        let u = unwarp(&self.output_warp, view.y);
        let g = if x > 0.0 && u > 0.0 { (u / x).log2() } else { 0.0 };
        Vec2::new(x, g)
    }

    /// Finds the model point displayed at `target.value`.
    ///
    /// A display slope in `target.slope` is carried back to `dg/dx`.
    pub fn to_model(&self, target: NewtonTarget) -> ModelPoint {
        let guess = self.initial_guess(target.value);
        let solution = self.solver.solve(
            |p| self.to_view(p.x, p.y),
            |p| self.jacobian(p.x, p.y),
            target,
            Some(guess),
        );
        ModelPoint {
            x: solution.x.x,
            g: solution.x.y,
            m: solution.slope,
        }
    }
}
