//! Renderer-facing parameters.
//!
//! A renderer needs, for the target headroom, the two selected images'
//! component mixes and gain curves plus the blend weights. [`RenderParams`]
//! bundles exactly that. Its [`apply`](RenderParams::apply) is a CPU
//! reference of the per-pixel shader work: pixels are expected to already be
//! in the gain application space.

use hatm_curve::{ControlPoint, evaluate_control_points};

use crate::adapt::adapt;
use crate::component_mix::ComponentMix;
use crate::model::{AlternateImage, HeadroomAdaptiveToneMap};

/// One selected alternate image, flattened for upload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GainFunctionParams {
    /// Index of the alternate image.
    pub index: usize,
    /// `[red, green, blue, max, min, component]`.
    pub component_mix: [f64; 6],
    /// Gain curve control points.
    pub gain_curve: Vec<ControlPoint>,
}

impl GainFunctionParams {
    fn new(index: usize, image: &AlternateImage) -> Self {
        let gain = &image.color_gain_function;
        Self {
            index,
            component_mix: gain.component_mix.weights().to_array(),
            gain_curve: gain.gain_curve.control_points().to_vec(),
        }
    }

    /// Per-channel log2 gain at `rgb`.
    pub fn log_gain(&self, rgb: [f64; 3]) -> [f64; 3] {
        let mix = ComponentMix::from_array(self.component_mix);
        let m = mix.evaluate(rgb);
        let curve = |x: f64| evaluate_control_points(&self.gain_curve, x).y;
        if mix.is_scalar() {
            [curve(m[0]); 3]
        } else {
            m.map(curve)
        }
    }
}

/// Everything a renderer needs for one target headroom.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderParams {
    /// Target headroom the parameters were selected for.
    pub target_headroom: f64,
    /// Gain application space as `[rx, ry, gx, gy, bx, by, wx, wy]`.
    pub gain_application_chromaticities: [f64; 8],
    /// Weight of image `i`.
    pub weight_i: f64,
    /// Weight of image `j`.
    pub weight_j: f64,
    /// Lower selected image.
    pub i: GainFunctionParams,
    /// Upper selected image.
    pub j: GainFunctionParams,
}

impl HeadroomAdaptiveToneMap {
    /// Selects and flattens the alternate images for `target_headroom`.
    ///
    /// `None` when there are no alternate images.
    pub fn render_params(&self, target_headroom: f64) -> Option<RenderParams> {
        let a = adapt(self, target_headroom)?;
        Some(RenderParams {
            target_headroom,
            gain_application_chromaticities: self.gain_application_chromaticities.values(),
            weight_i: a.weight_i,
            weight_j: a.weight_j,
            i: GainFunctionParams::new(a.i, &self.alternate_images[a.i]),
            j: GainFunctionParams::new(a.j, &self.alternate_images[a.j]),
        })
    }
}

impl RenderParams {
    /// Blended log2 gain for a pixel.
    ///
    /// Images with zero weight are skipped, so an infinite gain on an unused
    /// curve never leaks into the result.
    pub fn log_gain(&self, rgb: [f64; 3]) -> [f64; 3] {
        let mut total = [0.0; 3];
        for (weight, params) in [(self.weight_i, &self.i), (self.weight_j, &self.j)] {
            if weight <= 0.0 {
                continue;
            }
            let g = params.log_gain(rgb);
            for (t, g) in total.iter_mut().zip(g) {
                *t += weight * g;
            }
        }
        total
    }

    /// Tone maps a pixel: `rgb * 2^G`.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let g = self.log_gain(rgb);
        [rgb[0] * g[0].exp2(), rgb[1] * g[1].exp2(), rgb[2] * g[2].exp2()]
    }
}
