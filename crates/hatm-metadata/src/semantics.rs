//! Semantics (Clauses C.3.3 to C.3.8).
//!
//! Turns a syntax tree into a [`ColorVolumeTransform`]. Derivation never
//! fails: a tree produced by [`decode`](crate::decode) always derives
//! cleanly, and a hand-built tree with missing pieces degrades to something
//! renderable with a warning.

use hatm_curve::{ControlPoint, PiecewiseCubic, populate_pchip_slopes};
use tracing::{debug, warn};

use crate::chromaticities::Chromaticities;
use crate::component_mix::{ComponentMix, ComponentMixSpec};
use crate::model::{AlternateImage, ColorGainFunction, ColorVolumeTransform, HeadroomAdaptiveToneMap};
use crate::quantize::Quantization;
use crate::syntax::{
    AdaptiveToneMapSyntax, AlternateImagesSyntax, ChromaticitiesSyntax, ComponentMixPreset, ComponentMixSyntax,
    Syntax, ToneMapModeSyntax,
};

/// Reference white used when the payload does not carry one, in nits.
pub const DEFAULT_HDR_REFERENCE_WHITE: f64 = 203.0;

/// Reference-white tone mapping constants (Clause C.3.8).
mod rwtmo {
    /// Blend between the knee and the corner of the Bezier hull.
    pub const KAPPA: f64 = 0.65;
    /// Control points per synthesised curve.
    pub const POINTS: usize = 8;
    /// Headroom of the brighter synthesised image at full strength: log2(8/3).
    pub fn alternate_headroom() -> f64 {
        (8.0_f64 / 3.0).log2()
    }
    /// Baseline headroom at which the synthesis reaches full strength:
    /// log2(1000/203).
    pub fn full_strength_headroom() -> f64 {
        (1000.0_f64 / 203.0).log2()
    }
}

/// Derives the color volume transform of a syntax tree.
pub fn derive_transform(syntax: &Syntax) -> ColorVolumeTransform {
    let cvt = &syntax.color_volume_transform;
    let hdr_reference_white = cvt
        .hdr_reference_white
        .map_or(DEFAULT_HDR_REFERENCE_WHITE, |code| Quantization::HDR_REFERENCE_WHITE.dequantize(code));

    ColorVolumeTransform {
        hdr_reference_white,
        headroom_adaptive_tone_map: cvt.adaptive_tone_map.as_ref().map(derive_tone_map),
    }
}

fn derive_tone_map(atm: &AdaptiveToneMapSyntax) -> HeadroomAdaptiveToneMap {
    let baseline = Quantization::HEADROOM.dequantize(atm.baseline_hdr_headroom);
    match &atm.mode {
        ToneMapModeSyntax::ReferenceWhite { .. } => reference_white_tone_map(baseline),
        ToneMapModeSyntax::Alternates(alt) => HeadroomAdaptiveToneMap {
            baseline_hdr_headroom: baseline,
            gain_application_chromaticities: derive_chromaticities(&alt.chromaticities),
            alternate_images: (0..alt.images.len())
                .map(|a| derive_alternate_image(alt, a, atm.baseline_hdr_headroom))
                .collect(),
        },
    }
}

fn derive_chromaticities(c: &ChromaticitiesSyntax) -> Chromaticities {
    match c {
        ChromaticitiesSyntax::Rec709 => Chromaticities::Rec709,
        ChromaticitiesSyntax::P3 => Chromaticities::P3,
        ChromaticitiesSyntax::Rec2020 => Chromaticities::Rec2020,
        ChromaticitiesSyntax::Custom(codes) => {
            Chromaticities::Custom(codes.map(|code| Quantization::CHROMATICITY.dequantize(code)))
        }
    }
}

fn derive_alternate_image(alt: &AlternateImagesSyntax, a: usize, baseline_code: u16) -> AlternateImage {
    let image = &alt.images[a];
    AlternateImage {
        hdr_headroom: Quantization::HEADROOM.dequantize(image.hdr_headroom),
        color_gain_function: ColorGainFunction {
            component_mix: derive_component_mix(alt, a),
            gain_curve: derive_gain_curve(alt, a, image.hdr_headroom > baseline_code),
        },
    }
}

fn derive_component_mix(alt: &AlternateImagesSyntax, a: usize) -> ComponentMixSpec {
    match alt.component_mix(a) {
        Some(ComponentMixSyntax::Preset { kind, .. }) => match kind {
            ComponentMixPreset::Bypass => ComponentMixSpec::Bypass,
            ComponentMixPreset::PureMax => ComponentMixSpec::PureMax,
            ComponentMixPreset::Average => ComponentMixSpec::Average,
        },
        Some(ComponentMixSyntax::Explicit { coefficients }) => {
            let raw = coefficients.map(|c| Quantization::MIX_COEFFICIENT.dequantize(c.unwrap_or(0)));
            match ComponentMix::normalized(raw) {
                Some(mix) => ComponentMixSpec::Explicit(mix.to_array()),
                None => {
                    warn!(image = a, "explicit component mix has no weight, using bypass");
                    ComponentMixSpec::Bypass
                }
            }
        }
        None => {
            warn!(image = a, "no component mix for image, using bypass");
            ComponentMixSpec::Bypass
        }
    }
}

/// Gain curve of image `a` (Clause C.3.7).
///
/// `brightening` picks the sign of the gains: the payload carries magnitudes
/// only, positive when the image is brighter than the baseline.
fn derive_gain_curve(alt: &AlternateImagesSyntax, a: usize, brightening: bool) -> PiecewiseCubic {
    let unity = || PiecewiseCubic::unity(Quantization::CURVE_X.max_value());
    let Some(params) = alt.curve_params(a) else {
        warn!(image = a, "no curve parameters for image, using unity gain");
        return unity();
    };
    if params.x.is_empty() {
        warn!(image = a, "gain curve has no control points, using unity gain");
        return unity();
    }

    let curve = &alt.images[a].gain_curve;
    let n = params.x.len();
    if curve.y.len() < n {
        warn!(image = a, expected = n, found = curve.y.len(), "missing y codes read as zero");
    }
    let theta = if params.use_pchip_slope {
        None
    } else {
        let theta = curve.theta.as_deref().unwrap_or_default();
        if theta.len() < n {
            warn!(image = a, expected = n, found = theta.len(), "missing theta codes read as zero");
        }
        Some(theta)
    };

    let sign = if brightening { 1.0 } else { -1.0 };
    let mut points: Vec<ControlPoint> = (0..n)
        .map(|c| {
            let code = |codes: &[u16]| codes.get(c).copied().unwrap_or(0);
            ControlPoint {
                x: Quantization::CURVE_X.dequantize(params.x[c]),
                y: sign * Quantization::CURVE_Y.dequantize(code(&curve.y)),
                m: theta.map_or(0.0, |t| Quantization::CURVE_THETA.dequantize(code(t)).tan()),
            }
        })
        .collect();
    if params.use_pchip_slope {
        populate_pchip_slopes(&mut points);
    }

    let curve = PiecewiseCubic::new(points).unwrap_or_else(|_| unity());
    if !curve.is_ascending() {
        debug!(image = a, "gain curve control points are not ascending");
    }
    curve
}

/// Reference-white tone map for a baseline headroom (Clause C.3.8).
///
/// A baseline without headroom gets no alternate images. Otherwise two
/// images are synthesised, at headroom 0 and at up to `log2(8/3)` stops, each
/// with an 8-point curve sampled from a quadratic Bezier through the knee at
/// reference white, and a bypass component mix.
pub fn reference_white_tone_map(baseline_hdr_headroom: f64) -> HeadroomAdaptiveToneMap {
    let mut hatm = HeadroomAdaptiveToneMap {
        baseline_hdr_headroom,
        gain_application_chromaticities: Chromaticities::Rec2020,
        alternate_images: Vec::new(),
    };
    if baseline_hdr_headroom == 0.0 {
        return hatm;
    }

    let strength = (baseline_hdr_headroom / rwtmo::full_strength_headroom()).min(1.0);
    let headrooms = [0.0, rwtmo::alternate_headroom() * strength];

    for (a, &hdr_headroom) in headrooms.iter().enumerate() {
        let y_knee = if a == 1 { 1.0 } else { 1.0 - 0.5 * strength };
        let points = reference_white_curve(baseline_hdr_headroom, hdr_headroom, y_knee);
        hatm.alternate_images.push(AlternateImage {
            hdr_headroom,
            color_gain_function: ColorGainFunction {
                component_mix: ComponentMixSpec::Bypass,
                gain_curve: PiecewiseCubic::new(points)
                    .unwrap_or_else(|_| PiecewiseCubic::unity(Quantization::CURVE_X.max_value())),
            },
        });
    }
    hatm
}

/// Samples the knee-to-peak Bezier (Formulas C.2 to C.6) as log2 gains.
fn reference_white_curve(baseline: f64, alternate: f64, y_knee: f64) -> Vec<ControlPoint> {
    use rwtmo::{KAPPA, POINTS};

    let x_knee = 1.0;
    let x_max = baseline.exp2();
    let y_max = alternate.exp2();

    let x_mid = (1.0 - KAPPA) * x_knee + KAPPA * (x_knee * y_max / y_knee);
    let y_mid = (1.0 - KAPPA) * y_knee + KAPPA * y_max;

    let (xa, ya) = (x_knee - 2.0 * x_mid + x_max, y_knee - 2.0 * y_mid + y_max);
    let (xb, yb) = (2.0 * (x_mid - x_knee), 2.0 * (y_mid - y_knee));
    let (xc, yc) = (x_knee, y_knee);

    (0..POINTS)
        .map(|c| {
            let t = c as f64 / (POINTS - 1) as f64;
            let x = xc + t * (xb + t * xa);
            let y = yc + t * (yb + t * ya);
            let slope = (2.0 * ya * t + yb) / (2.0 * xa * t + xb);
            ControlPoint {
                x,
                y: (y / x).log2(),
                m: (x * slope - y) / (std::f64::consts::LN_2 * x * y),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{
        AlternateImageSyntax, ColorVolumeTransformSyntax, CurveParamsSyntax, GainCurveSyntax, PerImage,
    };
    use approx::assert_relative_eq;

    fn with_tone_map(baseline: u16, mode: ToneMapModeSyntax) -> Syntax {
        Syntax {
            application_version: 0,
            minimum_application_version: 0,
            reserved_zero_c1: 0,
            color_volume_transform: ColorVolumeTransformSyntax {
                reserved_zero_c2: 0,
                hdr_reference_white: None,
                adaptive_tone_map: Some(AdaptiveToneMapSyntax {
                    baseline_hdr_headroom: baseline,
                    mode,
                }),
            },
        }
    }

    fn single_image(headroom: u16, mix: ComponentMixSyntax, params: CurveParamsSyntax, y: Vec<u16>) -> AlternateImagesSyntax {
        let theta = (!params.use_pchip_slope).then(|| vec![18000; params.x.len()]);
        AlternateImagesSyntax {
            num_alternate_images: 1,
            chromaticities: ChromaticitiesSyntax::P3,
            has_common_component_mix_params: false,
            has_common_curve_params: false,
            images: vec![AlternateImageSyntax {
                hdr_headroom: headroom,
                component_mix: PerImage::Owned(mix),
                gain_curve: GainCurveSyntax {
                    params: PerImage::Owned(params),
                    y,
                    theta,
                },
            }],
        }
    }

    fn bypass() -> ComponentMixSyntax {
        ComponentMixSyntax::Preset {
            kind: ComponentMixPreset::Bypass,
            reserved_zero_c4: 0,
        }
    }

    fn tone_map(syntax: &Syntax) -> HeadroomAdaptiveToneMap {
        derive_transform(syntax).headroom_adaptive_tone_map.unwrap()
    }

    #[test]
    fn test_default_reference_white() {
        let mut syntax = with_tone_map(0, ToneMapModeSyntax::ReferenceWhite { reserved_zero_c3: 0 });
        assert_eq!(derive_transform(&syntax).hdr_reference_white, 203.0);
        syntax.color_volume_transform.hdr_reference_white = Some(500);
        assert_eq!(derive_transform(&syntax).hdr_reference_white, 100.0);
    }

    #[test]
    fn test_reference_white_without_headroom() {
        let hatm = tone_map(&with_tone_map(0, ToneMapModeSyntax::ReferenceWhite { reserved_zero_c3: 0 }));
        assert_eq!(hatm.baseline_hdr_headroom, 0.0);
        assert!(hatm.alternate_images.is_empty());
        assert_eq!(hatm.gain_application_chromaticities, Chromaticities::Rec2020);
    }

    #[test]
    fn test_reference_white_curves() {
        let baseline = 2.0;
        let hatm = reference_white_tone_map(baseline);
        assert_eq!(hatm.alternate_images.len(), 2);
        assert_eq!(hatm.alternate_images[0].hdr_headroom, 0.0);
        let strength = (baseline / (1000.0_f64 / 203.0).log2()).min(1.0);
        assert_relative_eq!(hatm.alternate_images[1].hdr_headroom, (8.0_f64 / 3.0).log2() * strength);

        for image in &hatm.alternate_images {
            let gain = &image.color_gain_function;
            assert_eq!(gain.component_mix, ComponentMixSpec::Bypass);
            let pts = gain.gain_curve.control_points();
            assert_eq!(pts.len(), 8);
            assert!(gain.gain_curve.is_ascending());
            // knee at reference white, peak maps baseline peak to the alternate peak
            assert_relative_eq!(pts[0].x, 1.0);
            assert_relative_eq!(pts[7].x, baseline.exp2(), epsilon = 1e-12);
            assert_relative_eq!(pts[7].x * pts[7].y.exp2(), image.hdr_headroom.exp2(), epsilon = 1e-12);
        }
        // the brighter image keeps reference white where it is
        assert_relative_eq!(hatm.alternate_images[1].color_gain_function.gain_curve.control_points()[0].y, 0.0);
    }

    #[test]
    fn test_reference_white_slopes_match_curve() {
        // stored slopes are d(log2 gain)/dx of the sampled Bezier
        let hatm = reference_white_tone_map(3.0);
        let pts = hatm.alternate_images[0].color_gain_function.gain_curve.control_points();
        for w in pts.windows(2) {
            let secant = (w[1].y - w[0].y) / (w[1].x - w[0].x);
            let lo = w[0].m.min(w[1].m) - 1e-9;
            let hi = w[0].m.max(w[1].m) + 1e-9;
            assert!(secant >= lo && secant <= hi, "{secant} not in [{lo}, {hi}]");
        }
    }

    #[test]
    fn test_gain_sign_follows_headroom() {
        let params = CurveParamsSyntax {
            use_pchip_slope: true,
            reserved_zero_c5: 0,
            x: vec![0, 1000, 2000],
        };
        let darker = single_image(0, bypass(), params.clone(), vec![0, 5000, 10000]);
        let hatm = tone_map(&with_tone_map(20000, ToneMapModeSyntax::Alternates(darker)));
        let ys: Vec<f64> = hatm.alternate_images[0].color_gain_function.gain_curve.control_points().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![-0.0, -0.5, -1.0]);

        let brighter = single_image(30000, bypass(), params, vec![0, 5000, 10000]);
        let hatm = tone_map(&with_tone_map(20000, ToneMapModeSyntax::Alternates(brighter)));
        let ys: Vec<f64> = hatm.alternate_images[0].color_gain_function.gain_curve.control_points().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 0.5, 1.0]);
        assert_eq!(hatm.gain_application_chromaticities, Chromaticities::P3);
    }

    #[test]
    fn test_theta_slopes() {
        let params = CurveParamsSyntax {
            use_pchip_slope: false,
            reserved_zero_c5: 0,
            x: vec![0, 1000],
        };
        let mut alt = single_image(0, bypass(), params, vec![0, 0]);
        // 18000 is a flat slope, 27000 is 45 degrees
        alt.images[0].gain_curve.theta = Some(vec![18000, 27000]);
        let hatm = tone_map(&with_tone_map(10000, ToneMapModeSyntax::Alternates(alt)));
        let pts = hatm.alternate_images[0].color_gain_function.gain_curve.control_points();
        assert_eq!(pts[0].m, 0.0);
        assert_relative_eq!(pts[1].m, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_explicit_mix_normalised() {
        let params = CurveParamsSyntax {
            use_pchip_slope: true,
            reserved_zero_c5: 0,
            x: vec![1000],
        };
        let mix = ComponentMixSyntax::Explicit {
            coefficients: [Some(10000), None, None, Some(30000), None, None],
        };
        let alt = single_image(0, mix, params.clone(), vec![0]);
        let hatm = tone_map(&with_tone_map(10000, ToneMapModeSyntax::Alternates(alt)));
        let ComponentMixSpec::Explicit(w) = hatm.alternate_images[0].color_gain_function.component_mix else {
            panic!("expected explicit mix");
        };
        for (got, want) in w.iter().zip([0.25, 0.0, 0.0, 0.75, 0.0, 0.0]) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }

        let zero = ComponentMixSyntax::Explicit { coefficients: [None; 6] };
        let alt = single_image(0, zero, params, vec![0]);
        let hatm = tone_map(&with_tone_map(10000, ToneMapModeSyntax::Alternates(alt)));
        assert_eq!(hatm.alternate_images[0].color_gain_function.component_mix, ComponentMixSpec::Bypass);
    }

    #[test]
    fn test_missing_codes_degrade() {
        let params = CurveParamsSyntax {
            use_pchip_slope: false,
            reserved_zero_c5: 0,
            x: vec![0, 1000],
        };
        let mut alt = single_image(0, bypass(), params, vec![5000]);
        alt.images[0].gain_curve.theta = None;
        let hatm = tone_map(&with_tone_map(10000, ToneMapModeSyntax::Alternates(alt)));
        let pts = hatm.alternate_images[0].color_gain_function.gain_curve.control_points();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1].y, -0.0);
        assert!(pts.iter().all(|p| p.m.is_finite()));

        let mut alt = single_image(0, bypass(), CurveParamsSyntax {
            use_pchip_slope: true,
            reserved_zero_c5: 0,
            x: vec![],
        }, vec![]);
        alt.images[0].component_mix = PerImage::SharedWithFirst;
        let hatm = tone_map(&with_tone_map(10000, ToneMapModeSyntax::Alternates(alt)));
        let gain = &hatm.alternate_images[0].color_gain_function;
        assert_eq!(gain.component_mix, ComponentMixSpec::Bypass);
        assert_eq!(gain.gain_curve, PiecewiseCubic::unity(64.0));
    }
}
