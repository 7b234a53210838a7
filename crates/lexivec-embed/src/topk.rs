//! Bounded "keep the best k" selector, decoupled from the scoring loop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use lexivec_core::types::nan_floor;

/// A candidate tracked during selection: an ordinal and its raw score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Ordinal index into the vector store.
    pub ordinal: usize,
    /// Cosine similarity against the query vector.
    pub score: f32,
}

impl Candidate {
    /// Selection order: higher score wins; equal scores prefer the lower
    /// ordinal. This matches the original insertion-shift buffer, where a
    /// later candidate had to *strictly* beat the buffered worst, and makes
    /// sharded selection deterministic. NaN orders below every real score.
    #[must_use]
    pub fn cmp_selection(&self, other: &Self) -> Ordering {
        nan_floor(self.score)
            .total_cmp(&nan_floor(other.score))
            .then_with(|| other.ordinal.cmp(&self.ordinal))
    }
}

/// Min-heap guard entry: the heap's maximum is the *worst* kept candidate.
#[derive(Debug, Clone, Copy)]
struct GuardEntry(Candidate);

impl PartialEq for GuardEntry {
    fn eq(&self, other: &Self) -> bool {
        self.0.cmp_selection(&other.0) == Ordering::Equal
    }
}

impl Eq for GuardEntry {}

impl PartialOrd for GuardEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GuardEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap::peek() returns the worst kept candidate.
        other.0.cmp_selection(&self.0)
    }
}

/// Size-bounded selector keeping the k best candidates seen so far.
///
/// Implemented as a `BinaryHeap` guard: a candidate enters only while the
/// buffer has room or when it beats the current worst entry. The original
/// insertion-shift buffer is behaviorally equivalent; only the final top-k
/// set and per-rank scores are contractual.
#[derive(Debug)]
pub struct TopK {
    k: usize,
    heap: BinaryHeap<GuardEntry>,
}

impl TopK {
    /// Creates a selector that keeps at most `k` candidates.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k.saturating_add(1)),
        }
    }

    /// Offers one candidate; keeps it only if it ranks among the best k.
    pub fn offer(&mut self, candidate: Candidate) {
        if self.k == 0 {
            return;
        }
        if self.heap.len() < self.k {
            self.heap.push(GuardEntry(candidate));
            return;
        }
        if let Some(worst) = self.heap.peek() {
            if candidate.cmp_selection(&worst.0) == Ordering::Greater {
                self.heap.pop();
                self.heap.push(GuardEntry(candidate));
            }
        }
    }

    /// Merges another selector into this one; the result is identical to
    /// offering every candidate through a single selector.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for entry in other.heap {
            self.offer(entry.0);
        }
        self
    }

    /// Number of candidates currently kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when no candidate has been kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consumes the selector, yielding kept candidates best-first in
    /// selection order. Note reporting order is a separate contract and is
    /// applied by the caller.
    #[must_use]
    pub fn into_sorted(self) -> Vec<Candidate> {
        let mut kept: Vec<Candidate> = self.heap.into_iter().map(|entry| entry.0).collect();
        kept.sort_by(|a, b| b.cmp_selection(a));
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer_all(k: usize, scores: &[f32]) -> Vec<Candidate> {
        let mut selector = TopK::new(k);
        for (ordinal, &score) in scores.iter().enumerate() {
            selector.offer(Candidate { ordinal, score });
        }
        selector.into_sorted()
    }

    #[test]
    fn keeps_the_best_k() {
        let kept = offer_all(3, &[0.1, 0.9, 0.5, 0.7, 0.3]);
        let ordinals: Vec<usize> = kept.iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, vec![1, 3, 2]);
    }

    #[test]
    fn fewer_candidates_than_k_keeps_all() {
        let kept = offer_all(40, &[0.2, 0.1]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].ordinal, 0);
    }

    #[test]
    fn zero_k_keeps_nothing() {
        let kept = offer_all(0, &[0.9, 0.8]);
        assert!(kept.is_empty());
    }

    #[test]
    fn boundary_ties_prefer_the_lower_ordinal() {
        // Three candidates share the boundary score; only the earliest two
        // ordinals survive with k=2, as with the insertion-shift buffer.
        let kept = offer_all(2, &[0.5, 0.5, 0.5]);
        let ordinals: Vec<usize> = kept.iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1]);
    }

    #[test]
    fn nan_scores_lose_to_real_scores() {
        let kept = offer_all(2, &[f32::NAN, -0.9, 0.1]);
        let ordinals: Vec<usize> = kept.iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, vec![2, 1]);
    }

    #[test]
    fn merge_equals_single_selector() {
        let scores = [0.31, 0.72, 0.72, -0.4, 0.99, 0.05, 0.72, 0.31];
        let sequential = offer_all(4, &scores);

        let mut left = TopK::new(4);
        let mut right = TopK::new(4);
        for (ordinal, &score) in scores.iter().enumerate() {
            let candidate = Candidate { ordinal, score };
            if ordinal % 2 == 0 {
                left.offer(candidate);
            } else {
                right.offer(candidate);
            }
        }
        let merged = left.merge(right).into_sorted();
        assert_eq!(merged, sequential);
    }

    #[test]
    fn len_tracks_kept_candidates() {
        let mut selector = TopK::new(2);
        assert!(selector.is_empty());
        selector.offer(Candidate {
            ordinal: 0,
            score: 0.5,
        });
        assert_eq!(selector.len(), 1);
        selector.offer(Candidate {
            ordinal: 1,
            score: 0.6,
        });
        selector.offer(Candidate {
            ordinal: 2,
            score: 0.7,
        });
        assert_eq!(selector.len(), 2);
    }
}
