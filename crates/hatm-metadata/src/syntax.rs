//! Bitstream syntax (Tables C.1 to C.5).
//!
//! The syntax tree mirrors the payload field for field. Flags that only gate
//! the presence of other fields are folded into the shape of the tree:
//! an absent reference white is `None`, a preset mix is its own variant, and
//! parameters shared with the first alternate image are
//! [`PerImage::SharedWithFirst`]. Reserved fields are kept so a decoded
//! payload re-encodes to the same bytes.
//!
//! # Layout
//!
//! ```text
//! C.1  application_version(3) minimum_application_version(3) reserved(2)
//! C.2  has_custom_hdr_reference_white(1) has_adaptive_tone_map(1) reserved(6)
//!      [hdr_reference_white(16)]
//! C.3  baseline_hdr_headroom(16) use_reference_white_tone_mapping(1)
//!      reference white:  reserved(7)
//!      alternates:       num_alternate_images(3) chromaticities_mode(2)
//!                        has_common_component_mix(1) has_common_curve(1)
//!                        [8 x chromaticity(16)]
//!                        per image: hdr_headroom(16) C.4 C.5
//! C.4  mixing_type(2) then reserved(6), or 6 x presence(1) + present coefficients(16)
//! C.5  [num_points_minus_1(5) use_pchip(1) reserved(2) N x x(16)]
//!      N x y(16) [N x theta(16)]
//! ```

use tracing::{debug, trace, warn};

use crate::bits::{BitReader, BitWriter};
use crate::error::{EncodeError, EncodeResult, FormatResult};

/// Alternate images carried on the wire; higher counts are reserved.
pub const MAX_ALTERNATE_IMAGES: usize = 4;

/// Control points per gain curve on the wire.
pub const MAX_CURVE_POINTS: usize = hatm_curve::MAX_CONTROL_POINTS;

/// Application identifier payload (Table C.1).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Syntax {
    /// 3-bit application version.
    pub application_version: u8,
    /// 3-bit minimum application version a decoder must support.
    pub minimum_application_version: u8,
    /// 2 reserved bits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reserved_zero_c1: u8,
    /// Color volume transform (Table C.2).
    pub color_volume_transform: ColorVolumeTransformSyntax,
}

/// Table C.2.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorVolumeTransformSyntax {
    /// 6 reserved bits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reserved_zero_c2: u8,
    /// Custom HDR reference white code, if present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hdr_reference_white: Option<u16>,
    /// Headroom-adaptive tone map, if present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub adaptive_tone_map: Option<AdaptiveToneMapSyntax>,
}

/// Table C.3.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveToneMapSyntax {
    /// Baseline image headroom code.
    pub baseline_hdr_headroom: u16,
    /// Reference-white mode or explicit alternates.
    pub mode: ToneMapModeSyntax,
}

/// Branch of Table C.3 selected by `use_reference_white_tone_mapping_flag`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ToneMapModeSyntax {
    /// Flag set: curves are synthesised from the baseline headroom.
    ReferenceWhite {
        /// 7 reserved bits.
        #[cfg_attr(feature = "serde", serde(default))]
        reserved_zero_c3: u8,
    },
    /// Flag clear: alternate images follow.
    Alternates(AlternateImagesSyntax),
}

/// Explicit alternate images of Table C.3.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternateImagesSyntax {
    /// Declared image count (3 bits). Only the first four are carried.
    pub num_alternate_images: u8,
    /// Gain application space.
    pub chromaticities: ChromaticitiesSyntax,
    /// Images after the first reuse its component mix.
    pub has_common_component_mix_params: bool,
    /// Images after the first reuse its curve x positions and slope mode.
    pub has_common_curve_params: bool,
    /// Materialised images, `min(num_alternate_images, 4)` of them.
    pub images: Vec<AlternateImageSyntax>,
}

/// Gain application space chromaticities (2-bit mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChromaticitiesSyntax {
    /// Mode 0.
    Rec709,
    /// Mode 1.
    P3,
    /// Mode 2.
    Rec2020,
    /// Mode 3: red, green, blue and white xy codes.
    Custom([u16; 8]),
}

impl ChromaticitiesSyntax {
    /// Wire mode value.
    pub fn mode(&self) -> u32 {
        match self {
            Self::Rec709 => 0,
            Self::P3 => 1,
            Self::Rec2020 => 2,
            Self::Custom(_) => 3,
        }
    }
}

/// Value that is either carried for this image or taken from image 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PerImage<T> {
    /// Carried in the payload for this image.
    Owned(T),
    /// Not carried; image 0's value applies.
    SharedWithFirst,
}

impl<T> PerImage<T> {
    /// The owned value, if any.
    pub fn owned(&self) -> Option<&T> {
        match self {
            Self::Owned(v) => Some(v),
            Self::SharedWithFirst => None,
        }
    }
}

/// One alternate image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternateImageSyntax {
    /// Headroom code of the display this image targets.
    pub hdr_headroom: u16,
    /// Table C.4.
    pub component_mix: PerImage<ComponentMixSyntax>,
    /// Table C.5.
    pub gain_curve: GainCurveSyntax,
}

/// Preset component mixes (mixing types 0 to 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComponentMixPreset {
    /// Type 0: maximum of R, G, B.
    Bypass,
    /// Type 1: each channel on its own.
    PureMax,
    /// Type 2: mean of the channels blended with their maximum.
    Average,
}

impl ComponentMixPreset {
    /// Wire mixing type.
    pub fn code(self) -> u32 {
        match self {
            Self::Bypass => 0,
            Self::PureMax => 1,
            Self::Average => 2,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Bypass),
            1 => Some(Self::PureMax),
            2 => Some(Self::Average),
            _ => None,
        }
    }
}

/// Table C.4.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComponentMixSyntax {
    /// Mixing types 0 to 2.
    Preset {
        /// Which preset.
        kind: ComponentMixPreset,
        /// 6 reserved bits.
        #[cfg_attr(feature = "serde", serde(default))]
        reserved_zero_c4: u8,
    },
    /// Mixing type 3: red, green, blue, max, min, component codes.
    /// `None` entries are not carried.
    Explicit {
        /// Coefficient codes.
        coefficients: [Option<u16>; 6],
    },
}

/// Table C.5.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GainCurveSyntax {
    /// Point count, slope mode and x codes.
    pub params: PerImage<CurveParamsSyntax>,
    /// Gain magnitude codes, one per point.
    pub y: Vec<u16>,
    /// Slope angle codes, present unless slopes are synthesised.
    #[cfg_attr(feature = "serde", serde(default))]
    pub theta: Option<Vec<u16>>,
}

/// Curve parameters that can be shared between images.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParamsSyntax {
    /// Slopes are synthesised instead of carried.
    pub use_pchip_slope: bool,
    /// 2 reserved bits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reserved_zero_c5: u8,
    /// Input codes; the point count is `x.len()` (1 to 32).
    pub x: Vec<u16>,
}

impl AlternateImagesSyntax {
    /// Component mix that applies to image `a`.
    pub fn component_mix(&self, a: usize) -> Option<&ComponentMixSyntax> {
        let image = self.images.get(a)?;
        match &image.component_mix {
            PerImage::Owned(mix) => Some(mix),
            PerImage::SharedWithFirst if a > 0 => self.images[0].component_mix.owned(),
            PerImage::SharedWithFirst => None,
        }
    }

    /// Curve parameters that apply to image `a`.
    pub fn curve_params(&self, a: usize) -> Option<&CurveParamsSyntax> {
        let image = self.images.get(a)?;
        match &image.gain_curve.params {
            PerImage::Owned(params) => Some(params),
            PerImage::SharedWithFirst if a > 0 => self.images[0].gain_curve.params.owned(),
            PerImage::SharedWithFirst => None,
        }
    }

    /// Images the payload carries for the declared count.
    #[inline]
    pub fn carried_images(&self) -> usize {
        usize::from(self.num_alternate_images).min(MAX_ALTERNATE_IMAGES)
    }
}

// ============================================================================
// Decode
// ============================================================================

/// Parses a payload into its syntax tree.
///
/// Only truncation is an error. Reserved bits and counts beyond the carried
/// range are kept as read.
pub fn decode(bytes: &[u8]) -> FormatResult<Syntax> {
    let mut r = BitReader::new(bytes);
    let syntax = read_syntax(&mut r)?;
    let left = r.bits_remaining();
    if left > 0 {
        debug!(bits = left, "trailing data after metadata payload");
    }
    debug!(
        bits = r.position(),
        version = syntax.application_version,
        tone_map = syntax.color_volume_transform.adaptive_tone_map.is_some(),
        "decoded metadata payload"
    );
    Ok(syntax)
}

fn warn_reserved(name: &str, value: u8) {
    if value != 0 {
        warn!(field = name, value, "reserved bits are not zero");
    }
}

fn read_syntax(r: &mut BitReader) -> FormatResult<Syntax> {
    let application_version = r.read_u8(3)?;
    let minimum_application_version = r.read_u8(3)?;
    let reserved_zero_c1 = r.read_u8(2)?;
    warn_reserved("reserved_zero_c1", reserved_zero_c1);
    Ok(Syntax {
        application_version,
        minimum_application_version,
        reserved_zero_c1,
        color_volume_transform: read_color_volume_transform(r)?,
    })
}

fn read_color_volume_transform(r: &mut BitReader) -> FormatResult<ColorVolumeTransformSyntax> {
    let has_custom_white = r.read_flag()?;
    let has_adaptive_tone_map = r.read_flag()?;
    let reserved_zero_c2 = r.read_u8(6)?;
    warn_reserved("reserved_zero_c2", reserved_zero_c2);
    trace!(has_custom_white, has_adaptive_tone_map, "color volume transform");

    let hdr_reference_white = if has_custom_white { Some(r.read_u16()?) } else { None };
    let adaptive_tone_map = if has_adaptive_tone_map {
        Some(read_adaptive_tone_map(r)?)
    } else {
        None
    };
    Ok(ColorVolumeTransformSyntax {
        reserved_zero_c2,
        hdr_reference_white,
        adaptive_tone_map,
    })
}

fn read_adaptive_tone_map(r: &mut BitReader) -> FormatResult<AdaptiveToneMapSyntax> {
    let baseline_hdr_headroom = r.read_u16()?;
    let use_reference_white = r.read_flag()?;
    trace!(baseline_hdr_headroom, use_reference_white, "adaptive tone map");

    let mode = if use_reference_white {
        let reserved_zero_c3 = r.read_u8(7)?;
        warn_reserved("reserved_zero_c3", reserved_zero_c3);
        ToneMapModeSyntax::ReferenceWhite { reserved_zero_c3 }
    } else {
        ToneMapModeSyntax::Alternates(read_alternate_images(r)?)
    };
    Ok(AdaptiveToneMapSyntax {
        baseline_hdr_headroom,
        mode,
    })
}

fn read_alternate_images(r: &mut BitReader) -> FormatResult<AlternateImagesSyntax> {
    let num_alternate_images = r.read_u8(3)?;
    let mode = r.read(2)?;
    let has_common_component_mix_params = r.read_flag()?;
    let has_common_curve_params = r.read_flag()?;

    let chromaticities = match mode {
        0 => ChromaticitiesSyntax::Rec709,
        1 => ChromaticitiesSyntax::P3,
        2 => ChromaticitiesSyntax::Rec2020,
        _ => {
            let mut codes = [0u16; 8];
            for code in codes.iter_mut() {
                *code = r.read_u16()?;
            }
            ChromaticitiesSyntax::Custom(codes)
        }
    };

    trace!(num_alternate_images, mode, "alternate images");
    let count = usize::from(num_alternate_images);
    if count > MAX_ALTERNATE_IMAGES {
        warn!(
            declared = count,
            carried = MAX_ALTERNATE_IMAGES,
            "alternate images beyond the fourth are reserved"
        );
    }
    let count = count.min(MAX_ALTERNATE_IMAGES);

    let mut images: Vec<AlternateImageSyntax> = Vec::with_capacity(count);
    // (point count, pchip) of image 0, used by images that share its params
    let mut first_params: Option<(usize, bool)> = None;

    for a in 0..count {
        let hdr_headroom = r.read_u16()?;

        let component_mix = if a == 0 || !has_common_component_mix_params {
            PerImage::Owned(read_component_mix(r)?)
        } else {
            PerImage::SharedWithFirst
        };

        let (params, (points, pchip)) = if a == 0 || !has_common_curve_params {
            let p = read_curve_params(r)?;
            let shape = (p.x.len(), p.use_pchip_slope);
            if a == 0 {
                first_params = Some(shape);
            }
            (PerImage::Owned(p), shape)
        } else {
            // image 0 always carries its params
            (PerImage::SharedWithFirst, first_params.unwrap_or((0, true)))
        };

        let y = read_codes(r, points)?;
        let theta = if pchip { None } else { Some(read_codes(r, points)?) };
        trace!(image = a, hdr_headroom, points, pchip, "alternate image");

        images.push(AlternateImageSyntax {
            hdr_headroom,
            component_mix,
            gain_curve: GainCurveSyntax { params, y, theta },
        });
    }

    Ok(AlternateImagesSyntax {
        num_alternate_images,
        chromaticities,
        has_common_component_mix_params,
        has_common_curve_params,
        images,
    })
}

fn read_component_mix(r: &mut BitReader) -> FormatResult<ComponentMixSyntax> {
    let mixing_type = r.read(2)?;
    match ComponentMixPreset::from_code(mixing_type) {
        Some(kind) => {
            let reserved_zero_c4 = r.read_u8(6)?;
            warn_reserved("reserved_zero_c4", reserved_zero_c4);
            Ok(ComponentMixSyntax::Preset { kind, reserved_zero_c4 })
        }
        None => {
            let mut present = [false; 6];
            for flag in present.iter_mut() {
                *flag = r.read_flag()?;
            }
            let mut coefficients = [None; 6];
            for (coef, present) in coefficients.iter_mut().zip(present) {
                if present {
                    *coef = Some(r.read_u16()?);
                }
            }
            Ok(ComponentMixSyntax::Explicit { coefficients })
        }
    }
}

fn read_curve_params(r: &mut BitReader) -> FormatResult<CurveParamsSyntax> {
    let points = r.read(5)? as usize + 1;
    let use_pchip_slope = r.read_flag()?;
    let reserved_zero_c5 = r.read_u8(2)?;
    warn_reserved("reserved_zero_c5", reserved_zero_c5);
    Ok(CurveParamsSyntax {
        use_pchip_slope,
        reserved_zero_c5,
        x: read_codes(r, points)?,
    })
}

fn read_codes(r: &mut BitReader, n: usize) -> FormatResult<Vec<u16>> {
    (0..n).map(|_| r.read_u16()).collect()
}

// ============================================================================
// Validate
// ============================================================================

fn invalid(msg: impl Into<String>) -> EncodeError {
    EncodeError::InvalidSyntax(msg.into())
}

fn check_width(name: &str, value: u8, bits: u32) -> EncodeResult<()> {
    if u32::from(value) >> bits != 0 {
        return Err(invalid(format!("{name} = {value} does not fit in {bits} bits")));
    }
    Ok(())
}

impl Syntax {
    /// Checks that the tree can be written.
    ///
    /// Every decoded tree passes. Hand-built trees fail when a field is too
    /// wide for its slot, when the image list disagrees with the declared
    /// count, when sharing disagrees with the common flags, or when per-point
    /// arrays disagree with the point count.
    pub fn validate(&self) -> EncodeResult<()> {
        check_width("application_version", self.application_version, 3)?;
        check_width("minimum_application_version", self.minimum_application_version, 3)?;
        check_width("reserved_zero_c1", self.reserved_zero_c1, 2)?;

        let cvt = &self.color_volume_transform;
        check_width("reserved_zero_c2", cvt.reserved_zero_c2, 6)?;

        let Some(atm) = &cvt.adaptive_tone_map else {
            return Ok(());
        };
        match &atm.mode {
            ToneMapModeSyntax::ReferenceWhite { reserved_zero_c3 } => {
                check_width("reserved_zero_c3", *reserved_zero_c3, 7)
            }
            ToneMapModeSyntax::Alternates(alt) => alt.validate(),
        }
    }
}

impl AlternateImagesSyntax {
    fn validate(&self) -> EncodeResult<()> {
        check_width("num_alternate_images", self.num_alternate_images, 3)?;
        if self.images.len() != self.carried_images() {
            return Err(invalid(format!(
                "{} alternate images declared but {} given",
                self.num_alternate_images,
                self.images.len()
            )));
        }

        for (a, image) in self.images.iter().enumerate() {
            let mix_shared = a > 0 && self.has_common_component_mix_params;
            match (&image.component_mix, mix_shared) {
                (PerImage::Owned(ComponentMixSyntax::Preset { reserved_zero_c4, .. }), false) => {
                    check_width("reserved_zero_c4", *reserved_zero_c4, 6)?
                }
                (PerImage::Owned(ComponentMixSyntax::Explicit { .. }), false) => {}
                (PerImage::SharedWithFirst, true) => {}
                (_, true) => return Err(invalid(format!("image {a}: component mix must be shared"))),
                (_, false) => return Err(invalid(format!("image {a}: component mix must be carried"))),
            }

            let params_shared = a > 0 && self.has_common_curve_params;
            match (&image.gain_curve.params, params_shared) {
                (PerImage::Owned(p), false) => {
                    check_width("reserved_zero_c5", p.reserved_zero_c5, 2)?;
                    if p.x.is_empty() || p.x.len() > MAX_CURVE_POINTS {
                        return Err(invalid(format!(
                            "image {a}: {} control points, expected 1 to {MAX_CURVE_POINTS}",
                            p.x.len()
                        )));
                    }
                }
                (PerImage::SharedWithFirst, true) => {}
                (_, true) => return Err(invalid(format!("image {a}: curve params must be shared"))),
                (_, false) => return Err(invalid(format!("image {a}: curve params must be carried"))),
            }

            let params = self
                .curve_params(a)
                .ok_or_else(|| invalid(format!("image {a}: no curve params")))?;
            let n = params.x.len();
            let curve = &image.gain_curve;
            if curve.y.len() != n {
                return Err(invalid(format!("image {a}: {} y codes for {n} points", curve.y.len())));
            }
            match (&curve.theta, params.use_pchip_slope) {
                (None, true) => {}
                (Some(theta), false) if theta.len() == n => {}
                (Some(theta), false) => {
                    return Err(invalid(format!("image {a}: {} theta codes for {n} points", theta.len())));
                }
                (None, false) => return Err(invalid(format!("image {a}: theta codes missing"))),
                (Some(_), true) => return Err(invalid(format!("image {a}: theta codes given with PCHIP slopes"))),
            }
        }
        Ok(())
    }
}

// ============================================================================
// Encode
// ============================================================================

/// Writes a syntax tree as a payload.
///
/// The tree is validated first; reserved fields are written as stored.
pub fn encode(syntax: &Syntax) -> EncodeResult<Vec<u8>> {
    syntax.validate()?;
    let mut w = BitWriter::new();
    write_syntax(&mut w, syntax)?;
    trace!(bits = w.bit_len(), "encoded metadata payload");
    w.finish()
}

fn write_syntax(w: &mut BitWriter, s: &Syntax) -> EncodeResult<()> {
    w.write(u32::from(s.application_version), 3)?;
    w.write(u32::from(s.minimum_application_version), 3)?;
    w.write(u32::from(s.reserved_zero_c1), 2)?;

    let cvt = &s.color_volume_transform;
    w.write_flag(cvt.hdr_reference_white.is_some())?;
    w.write_flag(cvt.adaptive_tone_map.is_some())?;
    w.write(u32::from(cvt.reserved_zero_c2), 6)?;
    if let Some(white) = cvt.hdr_reference_white {
        w.write(u32::from(white), 16)?;
    }
    if let Some(atm) = &cvt.adaptive_tone_map {
        write_adaptive_tone_map(w, atm)?;
    }
    Ok(())
}

fn write_adaptive_tone_map(w: &mut BitWriter, atm: &AdaptiveToneMapSyntax) -> EncodeResult<()> {
    w.write(u32::from(atm.baseline_hdr_headroom), 16)?;
    match &atm.mode {
        ToneMapModeSyntax::ReferenceWhite { reserved_zero_c3 } => {
            w.write_flag(true)?;
            w.write(u32::from(*reserved_zero_c3), 7)
        }
        ToneMapModeSyntax::Alternates(alt) => {
            w.write_flag(false)?;
            write_alternate_images(w, alt)
        }
    }
}

fn write_alternate_images(w: &mut BitWriter, alt: &AlternateImagesSyntax) -> EncodeResult<()> {
    w.write(u32::from(alt.num_alternate_images), 3)?;
    w.write(alt.chromaticities.mode(), 2)?;
    w.write_flag(alt.has_common_component_mix_params)?;
    w.write_flag(alt.has_common_curve_params)?;
    if let ChromaticitiesSyntax::Custom(codes) = &alt.chromaticities {
        write_codes(w, codes)?;
    }

    for image in &alt.images {
        w.write(u32::from(image.hdr_headroom), 16)?;

        if let PerImage::Owned(mix) = &image.component_mix {
            write_component_mix(w, mix)?;
        }

        let curve = &image.gain_curve;
        if let PerImage::Owned(params) = &curve.params {
            w.write(params.x.len() as u32 - 1, 5)?;
            w.write_flag(params.use_pchip_slope)?;
            w.write(u32::from(params.reserved_zero_c5), 2)?;
            write_codes(w, &params.x)?;
        }
        write_codes(w, &curve.y)?;
        if let Some(theta) = &curve.theta {
            write_codes(w, theta)?;
        }
    }
    Ok(())
}

fn write_component_mix(w: &mut BitWriter, mix: &ComponentMixSyntax) -> EncodeResult<()> {
    match mix {
        ComponentMixSyntax::Preset { kind, reserved_zero_c4 } => {
            w.write(kind.code(), 2)?;
            w.write(u32::from(*reserved_zero_c4), 6)
        }
        ComponentMixSyntax::Explicit { coefficients } => {
            w.write(3, 2)?;
            for coef in coefficients {
                w.write_flag(coef.is_some())?;
            }
            for code in coefficients.iter().flatten() {
                w.write(u32::from(*code), 16)?;
            }
            Ok(())
        }
    }
}

fn write_codes(w: &mut BitWriter, codes: &[u16]) -> EncodeResult<()> {
    for &code in codes {
        w.write(u32::from(code), 16)?;
    }
    Ok(())
}
