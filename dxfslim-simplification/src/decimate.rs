//! Uniform index decimation
//!
//! Points are kept at evenly spaced indices over the closed range
//! `[0, n - 1]`, which anchors the first and last point of every decimated
//! path. Sharp corners that fall between sampled indices are dropped; this
//! trades simplification quality for predictability and speed.

use crate::PolylineSimplifier;
use dxfslim_core::Polyline;

/// Decimator that keeps points at evenly spaced indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexDecimator;

impl IndexDecimator {
    pub fn new() -> Self {
        Self
    }
}

impl PolylineSimplifier for IndexDecimator {
    fn simplify(&self, polyline: &Polyline, percent: f64) -> Polyline {
        decimate(polyline, percent)
    }
}

/// Compute `count` indices evenly spaced over the closed range `[0, len - 1]`.
///
/// The first index is always `0` and the last is always `len - 1`.
/// Positions are rounded to the nearest integer; for `2 <= count <= len`
/// the spacing is at least one, so the result is strictly increasing.
pub fn evenly_spaced_indices(len: usize, count: usize) -> Vec<usize> {
    debug_assert!(count >= 2 && count <= len);
    let step = (len - 1) as f64 / (count - 1) as f64;
    (0..count).map(|i| (i as f64 * step).round() as usize).collect()
}

/// Decimate a polyline by a reduction percentage.
///
/// The surviving point count is `max(2, floor(n * (1 - percent / 100)))`,
/// sampled at evenly spaced indices in original order. Polylines with fewer
/// than 3 points are returned unchanged, as is any polyline whose computed
/// target would not actually shrink it.
///
/// `percent` is not clamped: values at or below 0 leave the polyline
/// untouched, values at or above 100 bottom out at the two endpoints.
#[must_use = "returns the decimated polyline"]
pub fn decimate(polyline: &Polyline, percent: f64) -> Polyline {
    let n = polyline.len();
    if n < 3 {
        return polyline.clone();
    }

    // Truncation matches floor here; a negative product saturates to 0
    // before the max(2, _) floor takes over.
    let target = usize::max(2, (n as f64 * (1.0 - percent / 100.0)) as usize);
    if target >= n {
        return polyline.clone();
    }

    evenly_spaced_indices(n, target)
        .into_iter()
        .map(|i| polyline[i])
        .collect()
}

/// Decimate each polyline independently, preserving input order.
#[must_use = "returns the decimated polylines"]
pub fn decimate_all(polylines: &[Polyline], percent: f64) -> Vec<Polyline> {
    polylines.iter().map(|p| decimate(p, percent)).collect()
}
