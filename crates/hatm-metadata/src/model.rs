//! Decoded color volume transform.
//!
//! These are the values a renderer works with, derived from the syntax tree
//! by [`derive_transform`](crate::derive_transform). Gain curves are
//! immutable; authoring tools edit a [`CurveEditor`](hatm_curve::CurveEditor)
//! copy instead.

use hatm_curve::PiecewiseCubic;

use crate::chromaticities::Chromaticities;
use crate::component_mix::ComponentMixSpec;

/// Color volume transform (Clause C.3.3).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorVolumeTransform {
    /// Luminance of HDR reference white, in nits.
    pub hdr_reference_white: f64,
    /// Headroom-adaptive tone map, if the payload has one.
    pub headroom_adaptive_tone_map: Option<HeadroomAdaptiveToneMap>,
}

/// Headroom-adaptive tone map (Clause C.3.4).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadroomAdaptiveToneMap {
    /// Headroom of the baseline image, in stops.
    pub baseline_hdr_headroom: f64,
    /// Space the gains are applied in.
    pub gain_application_chromaticities: Chromaticities,
    /// Alternate images, expected in ascending headroom order.
    pub alternate_images: Vec<AlternateImage>,
}

/// One alternate image.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternateImage {
    /// Headroom of the display this image targets, in stops.
    pub hdr_headroom: f64,
    /// Gain that turns the baseline into this image.
    pub color_gain_function: ColorGainFunction,
}

/// Component mix plus gain curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorGainFunction {
    /// Mixing of R, G, B into the curve input.
    pub component_mix: ComponentMixSpec,
    /// Log2 gain as a function of the mixed value.
    pub gain_curve: PiecewiseCubic,
}

impl HeadroomAdaptiveToneMap {
    /// Headrooms of the alternate images, in order.
    pub fn headrooms(&self) -> Vec<f64> {
        self.alternate_images.iter().map(|a| a.hdr_headroom).collect()
    }
}
