use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single ranked search result: a vocabulary term and its cosine score.
///
/// Scores are raw cosine similarity values, in `[-1.0, 1.0]` for
/// unit-normalized inputs. The degenerate zero-raw-vector case can surface
/// NaN here; the comparator treats NaN as the worst possible score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    /// Vocabulary term.
    pub term: String,
    /// Cosine similarity against the query vector.
    pub score: f32,
}

impl ScoredTerm {
    /// Creates a scored result.
    #[must_use]
    pub fn new(term: impl Into<String>, score: f32) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }

    /// Reporting order: descending score, ties broken by ascending
    /// lexicographic term order.
    ///
    /// This is the contract for the *reported* sequence and is deliberately
    /// a stateless, explicit comparator rather than implicit container
    /// behavior. NaN maps to negative infinity so it sorts last.
    #[must_use]
    pub fn cmp_by_score_then_term(&self, other: &Self) -> Ordering {
        let a = nan_floor(self.score);
        let b = nan_floor(other.score);
        b.total_cmp(&a).then_with(|| self.term.cmp(&other.term))
    }
}

/// Maps NaN to negative infinity so it orders below every real score.
#[must_use]
pub fn nan_floor(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}
