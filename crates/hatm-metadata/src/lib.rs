//! # hatm-metadata
//!
//! SMPTE ST 2094-50 Annex C headroom-adaptive tone map (HATM) metadata.
//!
//! The payload describes how an HDR baseline image is adapted to a display
//! with less (or more) headroom. Decoding happens in two stages:
//!
//! 1. **Syntax** ([`decode`]) - bit-exact parse of Tables C.1 to C.5 into a
//!    [`Syntax`] tree; [`encode`] writes it back
//! 2. **Semantics** ([`derive_transform`]) - dequantization, preset
//!    expansion, gain curve construction and the reference-white fallback,
//!    producing a [`ColorVolumeTransform`]
//!
//! At render time [`adapt`] picks the two alternate images that bracket the
//! display's headroom and [`RenderParams`] carries what a shader needs.
//!
//! # Usage
//!
//! ```rust
//! use hatm_metadata::parse;
//!
//! // Version 0, no custom reference white, no tone map
//! let cvt = parse(&[0x00, 0x00]).unwrap();
//! assert_eq!(cvt.hdr_reference_white, 203.0);
//! assert!(cvt.headroom_adaptive_tone_map.is_none());
//!
//! // Reference-white tone mapping at a baseline headroom of 2.0 stops
//! let bytes = [0x00, 0x40, 0x4e, 0x20, 0x80];
//! let hatm = parse(&bytes).unwrap().headroom_adaptive_tone_map.unwrap();
//! assert_eq!(hatm.alternate_images.len(), 2);
//! let params = hatm.render_params(1.0).unwrap();
//! let out = params.apply([0.5, 0.5, 0.5]);
//! assert!(out[0] <= 0.5);
//! ```
//!
//! # Dependencies
//!
//! - [`hatm-curve`] - Gain curves and PCHIP slopes
//! - [`hatm-math`] - Adaptation weight clamping
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Diagnostics for reserved bits and fallbacks
//! - `serde` (optional) - JSON export of syntax trees and derived metadata
//!
//! # Used By
//!
//! - `hatm-cli` - Inspection and encoding tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod chromaticities;
mod component_mix;
mod error;
mod model;
mod quantize;
mod render;
mod semantics;
mod syntax;
pub mod bits;

pub use adapt::{Adaptation, adapt, select_bracket};
pub use chromaticities::{Chromaticities, P3, REC709, REC2020};
pub use component_mix::{ComponentMix, ComponentMixSpec};
pub use error::{EncodeError, EncodeResult, Error, FormatError, FormatResult, Result};
pub use model::{AlternateImage, ColorGainFunction, ColorVolumeTransform, HeadroomAdaptiveToneMap};
pub use quantize::{Quantization, dequantize};
pub use render::{GainFunctionParams, RenderParams};
pub use semantics::{DEFAULT_HDR_REFERENCE_WHITE, derive_transform, reference_white_tone_map};
pub use syntax::{
    AdaptiveToneMapSyntax, AlternateImageSyntax, AlternateImagesSyntax, ChromaticitiesSyntax,
    ColorVolumeTransformSyntax, ComponentMixPreset, ComponentMixSyntax, CurveParamsSyntax, GainCurveSyntax,
    MAX_ALTERNATE_IMAGES, MAX_CURVE_POINTS, PerImage, Syntax, ToneMapModeSyntax, decode, encode,
};

pub use hatm_curve::{ControlPoint, CurveSample, PiecewiseCubic};

/// Decodes a payload and derives its color volume transform.
pub fn parse(bytes: &[u8]) -> Result<ColorVolumeTransform> {
    let syntax = decode(bytes)?;
    Ok(derive_transform(&syntax))
}
