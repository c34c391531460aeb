//! # hatm-curve
//!
//! Gain curves for headroom-adaptive tone mapping.
//!
//! A gain curve maps a linear input value to a log2 gain. It is described by
//! up to 32 control points `{x, y, m}` joined by cubic Hermite segments:
//!
//! 1. **Below the first point** the gain is held at `y[0]`
//! 2. **Between points** the cubic Hermite segment through both values and
//!    slopes is used; the segment is found by binary search
//! 3. **Above the last point** the gain falls off as `log2(x_last / x)`, so
//!    the output never exceeds what the last point produces
//!
//! Slopes are either carried with the points or synthesised with the PCHIP
//! rule ([`populate_pchip_slopes`]), which never overshoots the data.
//!
//! # Usage
//!
//! ```rust
//! use hatm_curve::PiecewiseCubic;
//!
//! let curve = PiecewiseCubic::with_pchip(&[(0.0, 0.0), (1.0, -0.5), (4.0, -1.5)]).unwrap();
//! let sample = curve.evaluate(0.5);
//! assert!(sample.y < 0.0 && sample.y > -0.5);
//!
//! let mut editor = curve.edit();
//! editor.insert(2.0);
//! let edited = editor.into_curve().unwrap();
//! assert_eq!(edited.len(), 4);
//! ```
//!
//! # Dependencies
//!
//! - [`hatm-math`] - Bezier warps and the Newton solver used by [`ViewTransform`]
//! - [`thiserror`] - Error handling
//! - `serde` (optional) - Serialization of curves and control points
//!
//! # Used By
//!
//! - `hatm-metadata` - Gain curves of alternate images
//! - `hatm-cli` - Curve sampling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cubic;
mod editor;
mod error;
mod pchip;
mod types;
mod view;

pub use cubic::{PiecewiseCubic, evaluate_control_points};
pub use editor::CurveEditor;
pub use error::{CurveError, CurveResult};
pub use pchip::populate_pchip_slopes;
pub use types::{ControlPoint, CurveSample, SlopeSource};
pub use view::{ModelPoint, ViewTransform};

/// Most control points a curve can carry on the wire.
pub const MAX_CONTROL_POINTS: usize = 32;
