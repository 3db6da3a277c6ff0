//! Score fusion and ranking.

use std::cmp::Ordering;

use tracing::debug;

use super::model::Candidate;

/// Convex combination of the two relevance signals: `(1 - weight) * vector + weight * text_match`.
#[inline]
pub fn fuse_score(vector_score: f64, text_match_score: f64, weight: f64) -> f64 {
    (1.0 - weight) * vector_score + weight * text_match_score
}

/// Sets `fused_score` on every candidate and sorts by it, descending.
///
/// The sort is stable: candidates with equal fused scores keep their backend order.
pub fn rank_candidates(mut candidates: Vec<Candidate>, weight: f64) -> Vec<Candidate> {
    for candidate in &mut candidates {
        candidate.fused_score =
            fuse_score(candidate.vector_score, candidate.text_match_score, weight);
    }

    candidates.sort_by(|a, b| {
        b.fused_score
            .partial_cmp(&a.fused_score)
            .unwrap_or(Ordering::Equal)
    });

    if let Some(top) = candidates.first() {
        debug!(
            count = candidates.len(),
            top_score = top.fused_score,
            weight,
            "Ranked candidates"
        );
    }

    candidates
}
