use harris_core::Field;
use rayon::prelude::*;
use crate::types::ScoredCorner;

/// Pixels this close to the border are never scanned
pub const SCAN_MARGIN: usize = 2;

/// Linearly map a field onto `[lo, hi]` using its global min/max.
///
/// Computed in double precision. A constant field (range below `f64::EPSILON`)
/// maps every sample to `lo`.
pub fn normalize_range(field: &Field, lo: f32, hi: f32) -> Field {
    if field.is_empty() {
        return field.clone();
    }

    let (min, max) = field
        .as_slice()
        .par_iter()
        .fold(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(mn, mx), &v| (mn.min(v as f64), mx.max(v as f64)),
        )
        .reduce(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |a, b| (a.0.min(b.0), a.1.max(b.1)),
        );

    let range = max - min;
    let scale = if range > f64::EPSILON {
        (hi as f64 - lo as f64) / range
    } else {
        0.0
    };

    let mut out = Field::new(field.width(), field.height());
    out.as_mut_slice()
        .par_iter_mut()
        .zip(field.as_slice().par_iter())
        .for_each(|(o, &v)| {
            let n = lo as f64 + (v as f64 - min) * scale;
            *o = (n as f32).clamp(lo, hi);
        });
    out
}

/// Min-max normalisation onto `[0, 1]`
pub fn normalize_min_max(field: &Field) -> Field {
    normalize_range(field, 0.0, 1.0)
}

/// True when no 8-connected neighbour exceeds the centre value.
///
/// Equal neighbours do not disqualify, so every pixel of a plateau passes.
/// Neighbours outside the field are ignored.
#[inline]
pub fn is_local_maximum(field: &Field, x: usize, y: usize) -> bool {
    let (w, h) = field.dimensions();
    let value = field.get(x, y);
    for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
        for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
            if (nx, ny) != (x, y) && field.get(nx, ny) > value {
                return false;
            }
        }
    }
    true
}

/// Ranked local maxima of an already normalised field.
///
/// Rows are collected in scan order and then stably sorted by descending
/// score, so equal scores keep row-major order.
pub fn local_maxima(normalized: &Field, threshold: f32, max_corners: usize) -> Vec<ScoredCorner> {
    let (w, h) = normalized.dimensions();
    if w <= 2 * SCAN_MARGIN || h <= 2 * SCAN_MARGIN || max_corners == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<ScoredCorner> = (SCAN_MARGIN..h - SCAN_MARGIN)
        .into_par_iter()
        .flat_map_iter(|y| {
            let mut row = Vec::new();
            for x in SCAN_MARGIN..w - SCAN_MARGIN {
                let value = normalized.get(x, y);
                if value > threshold && is_local_maximum(normalized, x, y) {
                    row.push(ScoredCorner::new(x, y, value));
                }
            }
            row
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(max_corners);
    candidates
}

/// Normalise a raw response field, then extract ranked local maxima above `threshold`
pub fn extract_candidates(response: &Field, threshold: f32, max_corners: usize) -> Vec<ScoredCorner> {
    local_maxima(&normalize_min_max(response), threshold, max_corners)
}
