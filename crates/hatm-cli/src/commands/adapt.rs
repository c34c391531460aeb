//! Headroom adaptation command.

use crate::AdaptArgs;
use anyhow::{Result, bail};

/// Prints the images and weights selected for a target headroom.
pub fn run(args: AdaptArgs, _verbose: u8) -> Result<()> {
    if !args.headroom.is_finite() {
        bail!("Target headroom must be finite, got {}", args.headroom);
    }
    let hatm = super::load_tone_map(&args.input)?;
    let Some(params) = hatm.render_params(args.headroom) else {
        if args.json {
            println!("null");
        } else {
            println!("No alternate images: no gain is applied");
        }
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    println!("Target headroom: {:.4}", args.headroom);
    println!("Baseline:        {:.4}", hatm.baseline_hdr_headroom);
    for (weight, image) in [(params.weight_i, &params.i), (params.weight_j, &params.j)] {
        let headroom = hatm.alternate_images[image.index].hdr_headroom;
        println!("  image {} (headroom {headroom:.4}): weight {weight:.6}", image.index);
    }
    Ok(())
}
