//! Component mixing (Clause C.3.6).
//!
//! The gain curve of an alternate image is driven by a value mixed from the
//! pixel's R, G and B:
//!
//! ```text
//! M = component * rgb + red * R + green * G + blue * B + max * max(R,G,B) + min * min(R,G,B)
//! ```
//!
//! With `component == 0` the result is the same for all three channels and a
//! single gain scales the whole pixel. Otherwise every channel gets its own
//! gain.

/// Weights of the mixing function.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentMix {
    /// Weight of R.
    pub red: f64,
    /// Weight of G.
    pub green: f64,
    /// Weight of B.
    pub blue: f64,
    /// Weight of the largest channel.
    pub max: f64,
    /// Weight of the smallest channel.
    pub min: f64,
    /// Weight of the channel itself.
    pub component: f64,
}

impl ComponentMix {
    /// Mixing type 0.
    pub const BYPASS: Self = Self::from_array([0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Mixing type 1.
    pub const PURE_MAX: Self = Self::from_array([0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

    /// Mixing type 2.
    pub const AVERAGE: Self = Self::from_array([1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0, 0.5, 0.0, 0.0]);

    /// Builds from `[red, green, blue, max, min, component]`.
    #[inline]
    pub const fn from_array(w: [f64; 6]) -> Self {
        Self {
            red: w[0],
            green: w[1],
            blue: w[2],
            max: w[3],
            min: w[4],
            component: w[5],
        }
    }

    /// Weights as `[red, green, blue, max, min, component]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 6] {
        [self.red, self.green, self.blue, self.max, self.min, self.component]
    }

    /// Scales raw weights to sum to 1; `None` when they sum to 0 or worse.
    pub fn normalized(raw: [f64; 6]) -> Option<Self> {
        let sum: f64 = raw.iter().sum();
        if !(sum > 0.0) || !sum.is_finite() {
            return None;
        }
        Some(Self::from_array(raw.map(|w| w / sum)))
    }

    /// True when every channel receives the same mixed value.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.component == 0.0
    }

    /// Mixed value for each channel.
    pub fn evaluate(&self, rgb: [f64; 3]) -> [f64; 3] {
        let [r, g, b] = rgb;
        let shared = self.red * r + self.green * g + self.blue * b + self.max * r.max(g).max(b) + self.min * r.min(g).min(b);
        rgb.map(|c| self.component * c + shared)
    }
}

/// Component mix of an alternate image.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComponentMixSpec {
    /// Largest channel.
    Bypass,
    /// Each channel on its own.
    PureMax,
    /// Channel mean blended with the largest channel.
    Average,
    /// Normalised `[red, green, blue, max, min, component]`.
    Explicit([f64; 6]),
}

impl ComponentMixSpec {
    /// Weights this mix evaluates with.
    pub fn weights(&self) -> ComponentMix {
        match self {
            Self::Bypass => ComponentMix::BYPASS,
            Self::PureMax => ComponentMix::PURE_MAX,
            Self::Average => ComponentMix::AVERAGE,
            Self::Explicit(w) => ComponentMix::from_array(*w),
        }
    }

    /// Mixed value for each channel.
    #[inline]
    pub fn evaluate(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.weights().evaluate(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [[f64; 3]; 5] = [
        [0.0, 0.0, 0.0],
        [0.2, 0.5, 0.1],
        [1.0, 0.25, 3.0],
        [4.0, 4.0, 4.0],
        [-0.1, 0.3, 0.0],
    ];

    #[test]
    fn test_bypass_is_max() {
        for rgb in SAMPLES {
            let m = rgb[0].max(rgb[1]).max(rgb[2]);
            assert_eq!(ComponentMixSpec::Bypass.evaluate(rgb), [m, m, m]);
        }
    }

    #[test]
    fn test_pure_max_is_per_channel() {
        for rgb in SAMPLES {
            assert_eq!(ComponentMixSpec::PureMax.evaluate(rgb), rgb);
        }
        assert!(!ComponentMix::PURE_MAX.is_scalar());
        assert!(ComponentMix::BYPASS.is_scalar());
    }

    #[test]
    fn test_average_of_grey() {
        let m = ComponentMixSpec::Average.evaluate([0.5, 0.5, 0.5]);
        for v in m {
            assert!((v - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalized() {
        let mix = ComponentMix::normalized([1.0, 1.0, 0.0, 2.0, 0.0, 0.0]).unwrap();
        assert_eq!(mix.to_array(), [0.25, 0.25, 0.0, 0.5, 0.0, 0.0]);
        assert!(ComponentMix::normalized([0.0; 6]).is_none());
    }

    #[test]
    fn test_preset_weights_sum_to_one() {
        for spec in [ComponentMixSpec::Bypass, ComponentMixSpec::PureMax, ComponentMixSpec::Average] {
            let sum: f64 = spec.weights().to_array().iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }
}
