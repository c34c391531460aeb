//! Code to value mapping.
//!
//! Every numeric field in the payload is a 16-bit code turned into a value
//! with one formula: clamp the code to its domain, subtract an offset and
//! divide by a scale.
//!
//! | Field | Domain | Offset | Scale | Unit |
//! |-------|--------|--------|-------|------|
//! | HDR reference white | 1 to 50000 | 0 | 5 | nits |
//! | Headroom | 0 to 60000 | 0 | 10000 | stops |
//! | Chromaticity | 0 to 50000 | 0 | 50000 | CIE xy |
//! | Mixing coefficient | 0 to 50000 | 0 | 50000 | - |
//! | Curve x | 0 to 64000 | 0 | 1000 | linear |
//! | Curve y | 0 to 60000 | 0 | 10000 | log2 gain |
//! | Curve theta | 1 to 35999 | 18000 | 36000/pi | radians |

use std::f64::consts::PI;

/// Clamp, offset and scale of one kind of field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantization {
    /// Smallest code used.
    pub min: u16,
    /// Largest code used.
    pub max: u16,
    /// Code that maps to 0.
    pub offset: f64,
    /// Codes per unit.
    pub scale: f64,
}

impl Quantization {
    /// HDR reference white in nits.
    pub const HDR_REFERENCE_WHITE: Self = Self::new(1, 50000, 0.0, 5.0);
    /// Baseline and alternate headroom in stops.
    pub const HEADROOM: Self = Self::new(0, 60000, 0.0, 10000.0);
    /// Chromaticity coordinate.
    pub const CHROMATICITY: Self = Self::new(0, 50000, 0.0, 50000.0);
    /// Component mixing coefficient before normalisation.
    pub const MIX_COEFFICIENT: Self = Self::new(0, 50000, 0.0, 50000.0);
    /// Control point input.
    pub const CURVE_X: Self = Self::new(0, 64000, 0.0, 1000.0);
    /// Control point gain magnitude.
    pub const CURVE_Y: Self = Self::new(0, 60000, 0.0, 10000.0);
    /// Control point slope angle; the poles at 0 and 36000 are excluded.
    pub const CURVE_THETA: Self = Self::new(1, 35999, 18000.0, 36000.0 / PI);

    /// Creates a quantization.
    pub const fn new(min: u16, max: u16, offset: f64, scale: f64) -> Self {
        Self { min, max, offset, scale }
    }

    /// Value of `code`.
    #[inline]
    pub fn dequantize(&self, code: u16) -> f64 {
        dequantize(code, self.min, self.max, self.offset, self.scale)
    }

    /// Largest value this field can carry.
    #[inline]
    pub fn max_value(&self) -> f64 {
        self.dequantize(self.max)
    }
}

/// `(clamp(code, min, max) - offset) / scale`.
#[inline]
pub fn dequantize(code: u16, min: u16, max: u16, offset: f64, scale: f64) -> f64 {
    (f64::from(code.clamp(min, max)) - offset) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_before_scaling() {
        assert_eq!(Quantization::HEADROOM.dequantize(65535), 6.0);
        assert_eq!(Quantization::HDR_REFERENCE_WHITE.dequantize(0), 0.2);
        assert_eq!(Quantization::HDR_REFERENCE_WHITE.dequantize(1015), 203.0);
        assert_eq!(Quantization::CURVE_X.max_value(), 64.0);
    }

    #[test]
    fn test_monotonic() {
        for q in [
            Quantization::HDR_REFERENCE_WHITE,
            Quantization::HEADROOM,
            Quantization::CHROMATICITY,
            Quantization::CURVE_X,
            Quantization::CURVE_Y,
            Quantization::CURVE_THETA,
        ] {
            let mut prev = f64::NEG_INFINITY;
            for code in (0..=u16::MAX).step_by(97).chain([u16::MAX]) {
                let v = q.dequantize(code);
                assert!(v >= prev, "{q:?} code {code}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_theta_range() {
        let q = Quantization::CURVE_THETA;
        assert_eq!(q.dequantize(18000), 0.0);
        // poles excluded, so tan stays finite
        assert!(q.dequantize(0) > -PI / 2.0);
        assert!(q.dequantize(u16::MAX) < PI / 2.0);
        assert!(q.dequantize(0).tan().is_finite());
    }
}
