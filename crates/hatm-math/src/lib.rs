//! # hatm-math
//!
//! Numeric toolkit for authoring headroom-adaptive gain curves.
//!
//! This crate provides the small amount of math that curve-authoring tools
//! need on top of the decoded metadata:
//!
//! - [`Vec2`] - points and directions in curve space
//! - [`Mat2`] - 2x2 Jacobians
//! - [`QuadraticBezier`] - axis warp with forward and inverse evaluation
//! - [`NewtonSolver`] - fixed-iteration 2D Newton-Raphson with slope back-solve
//! - Scalar helpers ([`lerp`], [`clamp`], [`saturate`])
//!
//! # Design
//!
//! [`Vec2`] and [`Mat2`] convert to and from [`glam`] double-precision
//! types. Matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use hatm_math::{Mat2, Vec2};
//!
//! let jacobian = Mat2::from_rows([[2.0, 0.0], [1.0, 1.0]]);
//! let step = jacobian.inverse().unwrap() * Vec2::new(2.0, 2.0);
//! assert_eq!(step, Vec2::new(1.0, 1.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - matrix inversion
//!
//! # Used By
//!
//! - `hatm-curve` - view-space curve authoring
//! - `hatm-metadata` - dequantization and adaptation weights

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bezier;
mod interp;
mod mat2;
mod newton;
mod vec2;

pub use bezier::*;
pub use interp::*;
pub use mat2::*;
pub use newton::*;
pub use vec2::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat2, DVec2};
}
