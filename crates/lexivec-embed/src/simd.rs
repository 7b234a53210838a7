//! Portable SIMD dot-product kernel for the scoring loop.

use lexivec_core::{ModelError, ModelResult};
use wide::f32x8;

/// Dot product between two f32 vectors.
///
/// For unit-normalized operands this is their cosine similarity.
///
/// # Errors
///
/// Returns `ModelError::DimensionMismatch` when slice lengths differ.
pub fn dot_product(a: &[f32], b: &[f32]) -> ModelResult<f32> {
    ensure_same_len(a.len(), b.len())?;
    Ok(dot_product_unchecked(a, b))
}

/// Dot product without the length check; callers verify dimensions once
/// per search rather than once per candidate.
pub(crate) fn dot_product_unchecked(a: &[f32], b: &[f32]) -> f32 {
    let mut sum = f32x8::splat(0.0);
    let mut a_chunks = a.chunks_exact(8);
    let mut b_chunks = b.chunks_exact(8);

    for (a_chunk, b_chunk) in a_chunks.by_ref().zip(b_chunks.by_ref()) {
        let a_arr = [
            a_chunk[0], a_chunk[1], a_chunk[2], a_chunk[3], a_chunk[4], a_chunk[5], a_chunk[6],
            a_chunk[7],
        ];
        let b_arr = [
            b_chunk[0], b_chunk[1], b_chunk[2], b_chunk[3], b_chunk[4], b_chunk[5], b_chunk[6],
            b_chunk[7],
        ];
        sum += f32x8::from(a_arr) * f32x8::from(b_arr);
    }

    let mut result = sum.reduce_add();
    for (x, y) in a_chunks.remainder().iter().zip(b_chunks.remainder()) {
        result += x * y;
    }
    result
}

const fn ensure_same_len(expected: usize, found: usize) -> ModelResult<()> {
    if expected != found {
        return Err(ModelError::DimensionMismatch { expected, found });
    }
    Ok(())
}
