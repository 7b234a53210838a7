//! Immutable vocabulary-indexed matrix of unit vectors.

use std::collections::HashMap;

/// An ordered vocabulary and a same-length sequence of fixed-dimension
/// vectors, built once at load time and read-only thereafter.
///
/// Ordinal `i` in the vocabulary corresponds exactly to vector `i`; ordinals
/// are assigned in file order starting at 0 and never reassigned. Every
/// stored vector has Euclidean norm 1 within floating-point epsilon, except
/// the degenerate zero-raw-vector case whose components normalize to
/// NaN/Inf — a documented edge case, not silently repaired.
///
/// Vocabulary terms are not guaranteed unique. When a term repeats,
/// [`VectorStore::index_of`] resolves to the *last* occurrence, while
/// earlier duplicates stay reachable by ordinal index.
#[derive(Debug, Clone)]
pub struct VectorStore {
    terms: Vec<String>,
    vectors: Vec<f32>,
    dimension: usize,
    index: HashMap<String, usize>,
}

impl VectorStore {
    /// Builds a store from an ordered vocabulary and a flat row-major
    /// vector matrix.
    ///
    /// # Panics
    ///
    /// Panics when `vectors.len() != terms.len() * dimension`; callers own
    /// that invariant.
    #[must_use]
    pub fn new(terms: Vec<String>, vectors: Vec<f32>, dimension: usize) -> Self {
        assert_eq!(
            vectors.len(),
            terms.len() * dimension,
            "vector matrix length must equal word_count * dimension"
        );
        let mut index = HashMap::with_capacity(terms.len());
        for (ordinal, term) in terms.iter().enumerate() {
            // Last write wins for duplicate terms.
            index.insert(term.clone(), ordinal);
        }
        Self {
            terms,
            vectors,
            dimension,
            index,
        }
    }

    /// Number of vocabulary entries.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.terms.len()
    }

    /// Dimension shared by every stored vector.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Ordinal index for an exact term match, or `None`.
    #[must_use]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Stored unit vector at `ordinal`.
    ///
    /// # Panics
    ///
    /// An out-of-range ordinal is a caller contract violation and panics.
    #[must_use]
    pub fn vector_at(&self, ordinal: usize) -> &[f32] {
        &self.vectors[ordinal * self.dimension..(ordinal + 1) * self.dimension]
    }

    /// Vocabulary term at `ordinal`.
    ///
    /// # Panics
    ///
    /// An out-of-range ordinal is a caller contract violation and panics.
    #[must_use]
    pub fn term_at(&self, ordinal: usize) -> &str {
        &self.terms[ordinal]
    }

    /// Enumerates `(term, vector)` pairs in ordinal order.
    ///
    /// This is the read accessor consumed by the store writer.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> + '_ {
        (0..self.word_count()).map(move |ordinal| (self.term_at(ordinal), self.vector_at(ordinal)))
    }
}
