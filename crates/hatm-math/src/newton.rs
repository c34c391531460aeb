//! Newton-Raphson solver for 2D systems.
//!
//! Solves `f(x) = target` for `x` in the plane given the Jacobian of `f`.
//! The default configuration runs a fixed number of iterations with no
//! residual check, so the same inputs always take the same path. A
//! tolerance-based early exit is available as an explicit opt-in.
//!
//! When the target carries a slope, the solver also maps that slope through
//! the inverse Jacobian at the solution: a view-space direction `(1, m)`
//! becomes a model-space direction whose `dy/dx` is returned.
//!
//! # Usage
//!
//! ```rust
//! use hatm_math::{Mat2, NewtonSolver, NewtonTarget, Vec2};
//!
//! let f = |p: Vec2| Vec2::new(p.x * p.x, p.y);
//! let grad = |p: Vec2| Mat2::diagonal(2.0 * p.x, 1.0);
//!
//! let solution = NewtonSolver::default().solve(
//!     f,
//!     grad,
//!     NewtonTarget::new(Vec2::new(4.0, 1.0)),
//!     Some(Vec2::new(1.0, 0.0)),
//! );
//! assert!((solution.x.x - 2.0).abs() < 1e-12);
//! ```

use crate::{Mat2, Vec2};

/// Iteration count of the default solver.
pub const DEFAULT_NEWTON_ITERATIONS: usize = 25;

/// Newton iteration settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSolver {
    /// Maximum number of update steps.
    pub iterations: usize,
    /// Stop early once `|target - f(x)|` is at most this value.
    ///
    /// `None` (the default) always runs every iteration.
    pub tolerance: Option<f64>,
}

impl Default for NewtonSolver {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_NEWTON_ITERATIONS,
            tolerance: None,
        }
    }
}

/// Value to solve for, with an optional slope at that value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonTarget {
    /// Target of `f(x)`.
    pub value: Vec2,
    /// Slope `dy/dx` in the output space of `f`, if one should be mapped back.
    pub slope: Option<f64>,
}

impl NewtonTarget {
    /// Target without a slope.
    #[inline]
    pub const fn new(value: Vec2) -> Self {
        Self { value, slope: None }
    }

    /// Target with a slope to back-solve.
    #[inline]
    pub const fn with_slope(value: Vec2, slope: f64) -> Self {
        Self {
            value,
            slope: Some(slope),
        }
    }
}

/// Result of [`NewtonSolver::solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSolution {
    /// Final estimate of `x`.
    pub x: Vec2,
    /// Slope `dy/dx` in the input space of `f`, when the target had one and
    /// the Jacobian at `x` is invertible.
    pub slope: Option<f64>,
    /// Number of update steps actually applied.
    pub iterations: usize,
}

impl NewtonSolver {
    /// Solver that stops once the residual drops to `tolerance`.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: Some(tolerance),
            ..Self::default()
        }
    }

    /// Solves `f(x) = target.value`.
    ///
    /// `x0` is the initial guess; `target.value` is used when it is `None`.
    /// Each step applies `x += grad_f(x)^-1 * (target - f(x))`. A singular
    /// Jacobian ends the iteration at the current estimate.
    pub fn solve<F, G>(&self, f: F, grad_f: G, target: NewtonTarget, x0: Option<Vec2>) -> NewtonSolution
    where
        F: Fn(Vec2) -> Vec2,
        G: Fn(Vec2) -> Mat2,
    {
        let mut x = x0.unwrap_or(target.value);
        let mut applied = 0;

        for _ in 0..self.iterations {
            let error = target.value - f(x);
            if let Some(tol) = self.tolerance {
                if error.length() <= tol {
                    break;
                }
            }
            let Some(inv) = grad_f(x).inverse() else {
                break;
            };
            x = x + inv * error;
            applied += 1;
        }

        let slope = target.slope.and_then(|m| {
            let inv = grad_f(x).inverse()?;
            let d = inv * Vec2::new(1.0, m);
            (d.x != 0.0).then(|| d.y / d.x)
        });

        NewtonSolution {
            x,
            slope,
            iterations: applied,
        }
    }
}

/// Runs the default fixed-iteration solver.
///
/// Shorthand for `NewtonSolver::default().solve(..)`.
pub fn newton_solve<F, G>(f: F, grad_f: G, target: NewtonTarget, x0: Option<Vec2>) -> NewtonSolution
where
    F: Fn(Vec2) -> Vec2,
    G: Fn(Vec2) -> Mat2,
{
    NewtonSolver::default().solve(f, grad_f, target, x0)
}
