//! PCHIP slope synthesis.
//!
//! Fills in the `m` of every control point from its neighbours: interior
//! slopes are a weighted harmonic mean of the adjacent secants and vanish
//! where the secants change sign, end slopes come from a one-sided
//! three-point formula.

use crate::types::ControlPoint;

/// Replaces the slopes of `points` with PCHIP slopes.
///
/// Points are assumed to be sorted by `x`. A single point gets slope 0, two
/// points share their secant. A segment without positive width counts as
/// flat, so repeated or unsorted `x` values never yield NaN or infinite
/// slopes.
pub fn populate_pchip_slopes(points: &mut [ControlPoint]) {
    let n = points.len();
    if n < 2 {
        for p in points.iter_mut() {
            p.m = 0.0;
        }
        return;
    }

    // Segment widths and secant slopes
    let mut h = Vec::with_capacity(n - 1);
    let mut s = Vec::with_capacity(n - 1);
    for pair in points.windows(2) {
        let dx = pair[1].x - pair[0].x;
        h.push(dx);
        s.push(if dx > 0.0 { (pair[1].y - pair[0].y) / dx } else { 0.0 });
    }

    if n == 2 {
        points[0].m = s[0];
        points[1].m = s[0];
        return;
    }

    points[0].m = end_slope(h[0], h[1], s[0], s[1]);
    points[n - 1].m = end_slope(h[n - 2], h[n - 3], s[n - 2], s[n - 3]);

    for i in 1..n - 1 {
        points[i].m = if s[i - 1] * s[i] <= 0.0 {
            0.0
        } else {
            let num = 3.0 * (h[i - 1] + h[i]) * s[i - 1] * s[i];
            let den = (2.0 * h[i - 1] + h[i]) * s[i - 1] + (h[i - 1] + 2.0 * h[i]) * s[i];
            if den == 0.0 { 0.0 } else { num / den }
        };
    }
}

/// One-sided three-point slope at an end of the curve.
///
/// `h0`/`s0` describe the end segment, `h1`/`s1` its neighbour.
#[inline]
fn end_slope(h0: f64, h1: f64, s0: f64, s1: f64) -> f64 {
    let den = h0 + h1;
    if den == 0.0 {
        return 0.0;
    }
    ((2.0 * h0 + h1) * s0 - h0 * s1) / den
}
