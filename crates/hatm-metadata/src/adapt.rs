//! Headroom adaptation.
//!
//! A display with some target headroom renders the blend of the two
//! alternate images whose headrooms bracket the target. The bracket is found
//! by binary search, so alternate images must be in ascending headroom order;
//! they are not re-sorted here because that would change which image wins
//! among equal headrooms.

use tracing::debug;

use crate::model::HeadroomAdaptiveToneMap;

/// Selected pair of alternate images and their blend weights.
///
/// The log2 gain to apply is `weight_i * G_i + weight_j * G_j`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adaptation {
    /// Lower image.
    pub i: usize,
    /// Upper image (equal to `i` at either end of the range).
    pub j: usize,
    /// Weight of image `i`.
    pub weight_i: f64,
    /// Weight of image `j`.
    pub weight_j: f64,
}

/// Chooses the alternate images to blend for `target_headroom`.
///
/// Returns `None` when there are no alternate images, in which case no gain
/// is applied.
pub fn adapt(hatm: &HeadroomAdaptiveToneMap, target_headroom: f64) -> Option<Adaptation> {
    select_bracket(&hatm.headrooms(), target_headroom)
}

/// Bracket search over a plain list of headrooms.
///
/// Targets outside the list's range saturate to the nearest end.
pub fn select_bracket(headrooms: &[f64], target: f64) -> Option<Adaptation> {
    if headrooms.is_empty() {
        return None;
    }
    if headrooms.windows(2).any(|w| w[0] > w[1]) {
        debug!(?headrooms, "alternate image headrooms are not ascending");
    }

    let mut lo = 0;
    let mut hi = headrooms.len() - 1;
    while hi - lo > 1 {
        // midpoint rounded half up
        let mid = (lo + hi + 1) / 2;
        let h = headrooms[mid];
        let mut narrowed = false;
        if target <= h {
            hi = mid;
            narrowed = true;
        }
        if target >= h {
            lo = mid;
            narrowed = true;
        }
        if !narrowed {
            // NaN target or headroom
            break;
        }
    }

    let (h_lo, h_hi) = (headrooms[lo], headrooms[hi]);
    let (weight_i, weight_j) = if h_hi > h_lo {
        let w = hatm_math::saturate(hatm_math::inverse_lerp(h_lo, h_hi, target));
        (1.0 - w, w)
    } else {
        (1.0, 0.0)
    };

    Some(Adaptation {
        i: lo,
        j: hi,
        weight_i,
        weight_j,
    })
}
