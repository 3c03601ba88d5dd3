//! Deterministic ordering and top-K truncation of filtered candidates.

use crate::recommender::score::Candidate;

/// Sort by overlap (descending), then similarity (descending), then corpus
/// index (ascending) so equal-scored candidates keep a reproducible order.
/// Truncates to at most `top_k` entries.
pub fn rank(mut candidates: Vec<Candidate>, top_k: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.overlap
            .cmp(&a.overlap)
            .then_with(|| b.similarity.total_cmp(&a.similarity))
            .then_with(|| a.index.cmp(&b.index))
    });
    candidates.truncate(top_k);
    candidates
}
