//! Order-dependent multi-term query vector composition.

use crate::store::VectorStore;

/// Composes one or more store ordinals into a single owned query vector.
///
/// A single ordinal yields an owned copy of its stored vector — never an
/// alias into the store, since callers may mutate the result.
///
/// Multiple ordinals are folded strictly in the supplied order: the running
/// sum starts as a copy of the first vector, and each subsequent vector is
/// added elementwise and the sum immediately re-normalized. Re-normalizing
/// after *each* addition (not once at the end) is the contract; for three
/// or more terms it is numerically distinct from sum-then-normalize-once.
///
/// # Panics
///
/// `ids` must be non-empty and every ordinal in range; violations are
/// caller contract errors and panic.
#[must_use]
pub fn compose_query(store: &VectorStore, ids: &[usize]) -> Vec<f32> {
    assert!(!ids.is_empty(), "compose_query requires at least one ordinal");

    let mut sum = store.vector_at(ids[0]).to_vec();
    for &id in &ids[1..] {
        let vector = store.vector_at(id);
        let mut norm = 0.0_f64;
        for (acc, component) in sum.iter_mut().zip(vector) {
            *acc += component;
            norm += f64::from(*acc) * f64::from(*acc);
        }
        #[allow(clippy::cast_possible_truncation)]
        let norm = norm.sqrt() as f32;
        for acc in &mut sum {
            *acc /= norm;
        }
    }
    sum
}
