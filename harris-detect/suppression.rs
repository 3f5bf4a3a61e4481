use crate::types::ScoredCorner;

/// Greedy rank-priority suppression.
///
/// Walks `ranked` in order; each still-valid candidate is accepted and
/// invalidates every later candidate closer than `min_distance`. Distances
/// exactly equal to `min_distance` are kept. Survivors keep their relative
/// order. Quadratic in the number of candidates, which the extractor caps.
pub fn suppress_close_corners(ranked: &[ScoredCorner], min_distance: f32) -> Vec<ScoredCorner> {
    if ranked.is_empty() {
        return Vec::new();
    }

    let min_distance_sq = min_distance as f64 * min_distance as f64;
    let mut valid = vec![true; ranked.len()];
    let mut kept = Vec::new();

    for i in 0..ranked.len() {
        if !valid[i] {
            continue;
        }
        let anchor = ranked[i];
        kept.push(anchor);

        for j in (i + 1)..ranked.len() {
            if valid[j] && anchor.corner.distance_squared(&ranked[j].corner) < min_distance_sq {
                valid[j] = false;
            }
        }
    }

    kept
}
