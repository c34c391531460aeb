//! Gain application space chromaticities.
//!
//! Gains are applied in an RGB space chosen by the metadata. The space is
//! given by the CIE xy chromaticities of its primaries and white point,
//! either one of three presets or explicit values.
//!
//! | Mode | Space | Primary Use |
//! |------|-------|-------------|
//! | 0 | Rec.709 | HDTV, sRGB content |
//! | 1 | P3 (D65) | Wide gamut displays |
//! | 2 | Rec.2020 | UHDTV, HDR |
//! | 3 | Custom | Anything else |

/// Rec.709 primaries and D65 white: `[rx, ry, gx, gy, bx, by, wx, wy]`.
pub const REC709: [f64; 8] = [0.64, 0.33, 0.3, 0.6, 0.15, 0.06, 0.3127, 0.329];

/// P3 primaries with D65 white.
pub const P3: [f64; 8] = [0.68, 0.32, 0.265, 0.69, 0.15, 0.06, 0.3127, 0.329];

/// Rec.2020 primaries and D65 white.
pub const REC2020: [f64; 8] = [0.708, 0.292, 0.170, 0.797, 0.131, 0.046, 0.3127, 0.329];

/// Chromaticities of the gain application space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Chromaticities {
    /// ITU-R BT.709.
    Rec709,
    /// P3 with a D65 white point.
    P3,
    /// ITU-R BT.2020.
    Rec2020,
    /// Explicit `[rx, ry, gx, gy, bx, by, wx, wy]`.
    Custom([f64; 8]),
}

impl Chromaticities {
    /// Chromaticities as `[rx, ry, gx, gy, bx, by, wx, wy]`.
    pub fn values(&self) -> [f64; 8] {
        match self {
            Self::Rec709 => REC709,
            Self::P3 => P3,
            Self::Rec2020 => REC2020,
            Self::Custom(v) => *v,
        }
    }

    /// Red, green, blue and white as xy pairs.
    pub fn xy(&self) -> [(f64, f64); 4] {
        let v = self.values();
        [(v[0], v[1]), (v[2], v[3]), (v[4], v[5]), (v[6], v[7])]
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rec709 => "Rec.709",
            Self::P3 => "P3-D65",
            Self::Rec2020 => "Rec.2020",
            Self::Custom(_) => "Custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_share_d65() {
        for c in [Chromaticities::Rec709, Chromaticities::P3, Chromaticities::Rec2020] {
            assert_eq!(c.xy()[3], (0.3127, 0.329), "{}", c.name());
        }
    }

    #[test]
    fn test_custom_values() {
        let v = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
        assert_eq!(Chromaticities::Custom(v).values(), v);
        assert_eq!(Chromaticities::Custom(v).xy()[1], (0.3, 0.4));
    }
}
