//! Brute-force cosine top-k search over the vector store.

use lexivec_core::{ModelError, ModelResult, ScoredTerm};
use rayon::prelude::*;
use tracing::debug;

use crate::simd::dot_product_unchecked;
use crate::store::VectorStore;
use crate::topk::{Candidate, TopK};

/// Default neighborhood size for nearest-neighbor queries.
pub const DEFAULT_NEIGHBORHOOD: usize = 40;

/// Returns the best-scoring, non-excluded terms for a unit query vector.
///
/// Scores are `dot(target, vector_at(i))`, valid as cosine similarity
/// because both operands are unit vectors. Scoring shards the vocabulary
/// across Rayon workers; the per-shard selectors merge deterministically,
/// so the result is byte-identical to a sequential scan.
///
/// The reported sequence is sorted by descending score with ties broken by
/// ascending lexicographic term order. When fewer than `k` eligible
/// candidates exist, the result is exactly the eligible candidates — no
/// placeholder entries.
///
/// # Errors
///
/// Returns `ModelError::DimensionMismatch` when `target` does not match
/// the store dimension.
pub fn nearest(
    store: &VectorStore,
    target: &[f32],
    exclude: &[usize],
    k: usize,
) -> ModelResult<Vec<ScoredTerm>> {
    if target.len() != store.dimension() {
        return Err(ModelError::DimensionMismatch {
            expected: store.dimension(),
            found: target.len(),
        });
    }

    let selected = (0..store.word_count())
        .into_par_iter()
        .fold(
            || TopK::new(k),
            |mut selector, ordinal| {
                if !exclude.contains(&ordinal) {
                    selector.offer(Candidate {
                        ordinal,
                        score: dot_product_unchecked(target, store.vector_at(ordinal)),
                    });
                }
                selector
            },
        )
        .reduce(|| TopK::new(k), TopK::merge);

    let mut results: Vec<ScoredTerm> = selected
        .into_sorted()
        .into_iter()
        .map(|candidate| ScoredTerm::new(store.term_at(candidate.ordinal), candidate.score))
        .collect();
    results.sort_by(ScoredTerm::cmp_by_score_then_term);

    debug!(
        target: "lexivec",
        k,
        excluded = exclude.len(),
        result_count = results.len(),
        "nearest-neighbor scan complete"
    );
    Ok(results)
}
