//! Integration tests for hatm-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the syntax, semantics, curve and adaptation layers.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use hatm_metadata::*;
    use tempfile::tempdir;

    /// Baseline at 2 stops with two darkening images that share a bypass
    /// mix and PCHIP curve positions.
    fn two_image_syntax() -> Syntax {
        let params = CurveParamsSyntax {
            use_pchip_slope: true,
            reserved_zero_c5: 0,
            x: vec![1000, 4000],
        };
        Syntax {
            application_version: 0,
            minimum_application_version: 0,
            reserved_zero_c1: 0,
            color_volume_transform: ColorVolumeTransformSyntax {
                reserved_zero_c2: 0,
                hdr_reference_white: Some(1500),
                adaptive_tone_map: Some(AdaptiveToneMapSyntax {
                    baseline_hdr_headroom: 20000,
                    mode: ToneMapModeSyntax::Alternates(AlternateImagesSyntax {
                        num_alternate_images: 2,
                        chromaticities: ChromaticitiesSyntax::Rec2020,
                        has_common_component_mix_params: true,
                        has_common_curve_params: true,
                        images: vec![
                            AlternateImageSyntax {
                                hdr_headroom: 0,
                                component_mix: PerImage::Owned(ComponentMixSyntax::Preset {
                                    kind: ComponentMixPreset::Bypass,
                                    reserved_zero_c4: 0,
                                }),
                                gain_curve: GainCurveSyntax {
                                    params: PerImage::Owned(params),
                                    y: vec![0, 10000],
                                    theta: None,
                                },
                            },
                            AlternateImageSyntax {
                                hdr_headroom: 10000,
                                component_mix: PerImage::SharedWithFirst,
                                gain_curve: GainCurveSyntax {
                                    params: PerImage::SharedWithFirst,
                                    y: vec![0, 5000],
                                    theta: None,
                                },
                            },
                        ],
                    }),
                }),
            },
        }
    }

    /// Full pipeline: encode -> decode -> derive -> adapt -> render
    #[test]
    fn test_payload_to_pixel() {
        let bytes = encode(&two_image_syntax()).expect("encode");
        let cvt = parse(&bytes).expect("parse");
        assert_relative_eq!(cvt.hdr_reference_white, 300.0);

        let hatm = cvt.headroom_adaptive_tone_map.expect("tone map");
        assert_relative_eq!(hatm.baseline_hdr_headroom, 2.0);
        assert_eq!(hatm.gain_application_chromaticities, Chromaticities::Rec2020);
        assert_eq!(hatm.headrooms(), vec![0.0, 1.0]);

        // shared mix and curve positions resolve to image 0's
        for image in &hatm.alternate_images {
            let gain = &image.color_gain_function;
            assert_eq!(gain.component_mix, ComponentMixSpec::Bypass);
            let xs: Vec<f64> = gain.gain_curve.control_points().iter().map(|p| p.x).collect();
            assert_eq!(xs, vec![1.0, 4.0]);
        }

        // images are darker than the baseline, so gains are negative
        let g0 = &hatm.alternate_images[0].color_gain_function.gain_curve;
        let g1 = &hatm.alternate_images[1].color_gain_function.gain_curve;
        assert_relative_eq!(g0.evaluate(4.0).y, -1.0);
        assert_relative_eq!(g1.evaluate(4.0).y, -0.5);

        let params = hatm.render_params(0.5).expect("render params");
        assert_eq!((params.i.index, params.j.index), (0, 1));
        assert_relative_eq!(params.weight_i, 0.5);
        assert_relative_eq!(params.weight_j, 0.5);

        // two-point PCHIP is the straight line, evaluated at max(R, G, B) = 2
        let rgb = [2.0, 1.0, 0.5];
        let expected = 0.5 * (-1.0 / 3.0) + 0.5 * (-1.0 / 6.0);
        let gain = params.log_gain(rgb);
        for g in gain {
            assert_relative_eq!(g, expected, epsilon = 1e-12);
        }
        let out = params.apply(rgb);
        for (o, c) in out.iter().zip(rgb) {
            assert_relative_eq!(*o, c * expected.exp2(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_byte_exact_roundtrip() {
        let bytes = encode(&two_image_syntax()).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, two_image_syntax());
        assert_eq!(encode(&decoded).unwrap(), bytes);
    }

    #[test]
    fn test_truncated_payload_fails() {
        let bytes = encode(&two_image_syntax()).unwrap();
        for len in [0, 1, 4, bytes.len() - 1] {
            let err = parse(&bytes[..len]).unwrap_err();
            assert!(
                matches!(err, Error::Format(FormatError::EndOfStream { .. })),
                "len {len}: {err:?}"
            );
        }
    }

    /// Syntax tree survives JSON on disk, the way the CLI encodes payloads
    #[test]
    fn test_syntax_json_file_roundtrip() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("syntax.json");
        let bin_path = dir.path().join("meta.bin");

        let syntax = two_image_syntax();
        std::fs::write(&json_path, serde_json::to_string_pretty(&syntax).unwrap()).unwrap();

        let text = std::fs::read_to_string(&json_path).unwrap();
        let loaded: Syntax = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded, syntax);

        std::fs::write(&bin_path, encode(&loaded).unwrap()).unwrap();
        let bytes = std::fs::read(&bin_path).unwrap();
        assert_eq!(decode(&bytes).unwrap(), syntax);
    }

    #[test]
    fn test_derived_transform_json_roundtrip() {
        let cvt = parse(&encode(&two_image_syntax()).unwrap()).unwrap();
        let json = serde_json::to_string(&cvt).unwrap();
        let back: ColorVolumeTransform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cvt);

        let params = cvt.headroom_adaptive_tone_map.unwrap().render_params(0.25).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        let back: RenderParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_reference_white_end_to_end() {
        // version 0, tone map present, baseline 2 stops, reference white flag
        let bytes = [0x00, 0x40, 0x4e, 0x20, 0x80];
        let cvt = parse(&bytes).unwrap();
        assert_eq!(cvt.hdr_reference_white, DEFAULT_HDR_REFERENCE_WHITE);
        let hatm = cvt.headroom_adaptive_tone_map.unwrap();
        assert_eq!(hatm, reference_white_tone_map(2.0));
        assert_eq!(hatm.alternate_images.len(), 2);
        assert_eq!(hatm.alternate_images[0].hdr_headroom, 0.0);

        // the brighter image leaves reference white alone
        let params = hatm.render_params(10.0).unwrap();
        assert_eq!(params.weight_j, 1.0);
        let out = params.apply([1.0, 1.0, 1.0]);
        assert_relative_eq!(out[0], 1.0, epsilon = 1e-9);

        // below reference white the darkest image applies a flat gain
        let params = hatm.render_params(0.0).unwrap();
        let dim = params.apply([0.25, 0.25, 0.25]);
        let knee = params.apply([0.5, 0.5, 0.5]);
        assert_relative_eq!(dim[0] * 2.0, knee[0], epsilon = 1e-12);
        assert!(knee[0] < 0.5);
    }

    #[test]
    fn test_reference_white_without_headroom() {
        let bytes = [0x00, 0x40, 0x00, 0x00, 0x80];
        let hatm = parse(&bytes).unwrap().headroom_adaptive_tone_map.unwrap();
        assert!(hatm.alternate_images.is_empty());
        assert!(hatm.render_params(1.0).is_none());
    }

    /// x codes past 64000 clamp to the same position as 64000
    #[test]
    fn test_repeated_curve_positions_stay_finite() {
        let mut syntax = two_image_syntax();
        let Some(atm) = syntax.color_volume_transform.adaptive_tone_map.as_mut() else {
            panic!("tone map expected");
        };
        let ToneMapModeSyntax::Alternates(alt) = &mut atm.mode else {
            panic!("alternates expected");
        };
        alt.num_alternate_images = 1;
        alt.images.truncate(1);
        alt.images[0].gain_curve = GainCurveSyntax {
            params: PerImage::Owned(CurveParamsSyntax {
                use_pchip_slope: true,
                reserved_zero_c5: 0,
                x: vec![0, 1000, 64000, 65000],
            }),
            y: vec![0, 1000, 4000, 6000],
            theta: None,
        };

        let hatm = parse(&encode(&syntax).unwrap()).unwrap().headroom_adaptive_tone_map.unwrap();
        let curve = &hatm.alternate_images[0].color_gain_function.gain_curve;
        for p in curve.control_points() {
            assert!(p.m.is_finite(), "slope at x = {}: {}", p.x, p.m);
        }
        for x in [0.5, 10.0, 63.0, 64.0, 100.0] {
            let s = curve.evaluate(x);
            assert!(s.y.is_finite() && s.m.is_finite(), "x = {x}: {s:?}");
        }

        let params = hatm.render_params(1.0).unwrap();
        let out = params.apply([10.0, 1.0, 1.0]);
        assert!(out.iter().all(|c| c.is_finite()), "{out:?}");
    }

    /// Derived curves can be edited and re-evaluated with the curve crate
    #[test]
    fn test_edit_decoded_curve() {
        use hatm_curve::ViewTransform;
        use hatm_math::{NewtonTarget, Vec2};

        let cvt = parse(&encode(&two_image_syntax()).unwrap()).unwrap();
        let curve = cvt.headroom_adaptive_tone_map.unwrap().alternate_images[0]
            .color_gain_function
            .gain_curve
            .clone();

        let mut editor = curve.edit();
        let index = editor.insert(2.0);
        assert_relative_eq!(editor.control_points()[index].y, curve.evaluate(2.0).y, epsilon = 1e-12);

        // drag the new point to output 1.0, i.e. a gain of -1 stop at x = 2
        let index = editor
            .place_in_view(index, &ViewTransform::linear(), NewtonTarget::new(Vec2::new(2.0, 1.0)))
            .unwrap();
        editor.smooth();
        let edited = editor.into_curve().unwrap();
        assert!(edited.is_ascending());
        assert_eq!(edited.len(), 3);
        assert_relative_eq!(edited.control_points()[index].y, -1.0, epsilon = 1e-9);
        assert_relative_eq!(edited.evaluate(2.0).y, -1.0, epsilon = 1e-9);
    }
}
