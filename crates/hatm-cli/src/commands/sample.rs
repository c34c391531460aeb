//! Gain curve sampling command.
//!
//! Tabulates one alternate image's gain curve on a log2-spaced grid, since
//! curve inputs span several stops.

use crate::SampleArgs;
use anyhow::{Result, bail};
use hatm_math::lerp;

/// Prints `x`, log2 gain, slope and linear gain for evenly spaced inputs.
pub fn run(args: SampleArgs, _verbose: u8) -> Result<()> {
    let hatm = super::load_tone_map(&args.input)?;
    let Some(image) = hatm.alternate_images.get(args.image) else {
        bail!(
            "Image {} out of range ({} alternate images)",
            args.image,
            hatm.alternate_images.len()
        );
    };
    let curve = &image.color_gain_function.gain_curve;
    let points = curve.control_points();

    let min = args.min.unwrap_or(points[0].x);
    let max = args.max.unwrap_or(points[points.len() - 1].x);
    if !(min.is_finite() && max.is_finite()) || min > max {
        bail!("Invalid sample range [{min}, {max}]");
    }

    println!("{:>12} {:>10} {:>10} {:>10}", "x", "log2 gain", "slope", "gain");
    for x in sample_grid(min, max, args.samples) {
        let s = curve.evaluate(x);
        println!("{:>12.6} {:>10.6} {:>10.6} {:>10.6}", x, s.y, s.m, s.gain());
    }
    Ok(())
}

/// At least two inputs from `min` to `max`, log2-spaced when the range is
/// positive.
fn sample_grid(min: f64, max: f64, samples: usize) -> Vec<f64> {
    let n = samples.max(2);
    let log_spaced = min > 0.0;
    (0..n)
        .map(|k| {
            let t = k as f64 / (n - 1) as f64;
            if log_spaced {
                lerp(min.log2(), max.log2(), t).exp2()
            } else {
                lerp(min, max, t)
            }
        })
        .collect()
}
