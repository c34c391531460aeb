//! Payload info command.
//!
//! Prints the reference white, the tone map mode and, per alternate image,
//! its headroom, component mix and gain curve size.

use crate::InfoArgs;
use anyhow::Result;
use hatm_metadata::{ColorVolumeTransform, Syntax, ToneMapModeSyntax};
use serde::Serialize;

#[derive(Serialize)]
struct InfoJson<'a> {
    syntax: &'a Syntax,
    transform: &'a ColorVolumeTransform,
}

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    let (syntax, cvt) = super::load_transform(&args.input)?;

    if args.json {
        let json = serde_json::to_string_pretty(&InfoJson {
            syntax: &syntax,
            transform: &cvt,
        })?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", args.input.display());
    println!(
        "  Version:          {} (minimum {})",
        syntax.application_version, syntax.minimum_application_version
    );
    let custom = if syntax.color_volume_transform.hdr_reference_white.is_some() {
        ""
    } else {
        " (default)"
    };
    println!("  Reference white:  {} nits{custom}", cvt.hdr_reference_white);

    let Some(hatm) = &cvt.headroom_adaptive_tone_map else {
        println!("  Tone map:         none");
        return Ok(());
    };

    let reference_white = matches!(
        syntax.color_volume_transform.adaptive_tone_map.as_ref().map(|atm| &atm.mode),
        Some(ToneMapModeSyntax::ReferenceWhite { .. })
    );
    println!(
        "  Tone map:         {}",
        if reference_white { "reference white" } else { "alternate images" }
    );
    println!("  Baseline:         {:.4} stops", hatm.baseline_hdr_headroom);
    println!("  Gain space:       {}", hatm.gain_application_chromaticities.name());
    println!("  Alternate images: {}", hatm.alternate_images.len());

    for (a, image) in hatm.alternate_images.iter().enumerate() {
        let gain = &image.color_gain_function;
        println!(
            "    [{a}] headroom {:.4}, mix {:?}, {} points",
            image.hdr_headroom,
            gain.component_mix,
            gain.gain_curve.len()
        );
        if verbose > 0 {
            for p in gain.gain_curve.control_points() {
                println!("        x {:>10.4}  y {:>8.4}  m {:>8.4}", p.x, p.y, p.m);
            }
        }
    }

    Ok(())
}
