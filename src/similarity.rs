/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Cosine similarity between a sentence embedding and the anchor matrix.
//!
//! Scores are raw cosines in [-1.0, 1.0]; they are not clamped, so an
//! anti-correlated anchor scores below zero and can never win. A vector with
//! (near-)zero magnitude has no direction and scores 0.0 against everything.
//!
//! Embeddings arrive as `f32`; sums and norms accumulate in `f64`, so large
//! components cannot overflow and scores are reported as `f64`.

/// Magnitudes below this are treated as zero.
pub const MAGNITUDE_EPSILON: f64 = 1e-9;

/// Euclidean norm of `v`.
#[inline]
pub fn magnitude(v: &[f32]) -> f64 {
    v.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt()
}

/// Returns `true` when `v` has no usable direction.
#[inline]
pub fn is_degenerate(v: &[f32]) -> bool {
    magnitude(v) < MAGNITUDE_EPSILON
}

/// Cosine similarity of two equal-length vectors.
///
/// Returns 0.0 if either vector is degenerate, and 0.0 if the result is not
/// finite (a NaN or infinite component).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "cosine over vectors of different length");

    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum();
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);

    if norm_a < MAGNITUDE_EPSILON || norm_b < MAGNITUDE_EPSILON {
        return 0.0;
    }
    let cosine = dot / (norm_a * norm_b);
    if cosine.is_finite() { cosine } else { 0.0 }
}

/// Score one sentence embedding against every anchor embedding, in anchor order.
pub fn score_anchors<A: AsRef<[f32]>>(sentence: &[f32], anchors: &[A]) -> Vec<f64> {
    anchors
        .iter()
        .map(|anchor| cosine_similarity(sentence, anchor.as_ref()))
        .collect()
}

/// Index and value of the highest score; the earliest index wins ties.
///
/// Returns `None` for an empty slice.
pub fn best_score(scores: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best
}
