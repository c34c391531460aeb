//! Single-pixel tone map command.

use crate::ApplyArgs;
use anyhow::{Result, bail};
use tracing::debug;

/// Applies the tone map for a target headroom to one pixel.
pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    let [r, g, b] = args.rgb[..] else {
        bail!("Expected 3 components, got {}", args.rgb.len());
    };
    let hatm = super::load_tone_map(&args.input)?;
    let Some(params) = hatm.render_params(args.headroom) else {
        println!("{r:.6} {g:.6} {b:.6}");
        return Ok(());
    };

    let gain = params.log_gain([r, g, b]);
    debug!(?gain, "log2 gain");
    let out = params.apply([r, g, b]);
    if verbose > 0 {
        println!(
            "images {}/{} weights {:.4}/{:.4}",
            params.i.index, params.j.index, params.weight_i, params.weight_j
        );
        println!("log2 gain {:.6} {:.6} {:.6}", gain[0], gain[1], gain[2]);
    }
    println!("{:.6} {:.6} {:.6}", out[0], out[1], out[2]);
    Ok(())
}
