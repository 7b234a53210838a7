//! Store-to-stream serialization in the word2vec binary layout.

use std::io::Write;

use lexivec_core::ModelResult;
use tracing::info;

use crate::store::VectorStore;

/// Writes the store in the word2vec binary layout: the ASCII header line,
/// then per record the term, a single space, `dimension * 4` little-endian
/// f32 bytes, and a newline.
///
/// Stored vectors are already unit-normalized, so a written store reloads
/// through [`crate::load_model`] with equal terms and vectors equal within
/// f32 tolerance.
///
/// # Errors
///
/// Propagates any `std::io::Error` from the underlying writer.
pub fn write_store<W: Write>(store: &VectorStore, writer: &mut W) -> ModelResult<()> {
    writeln!(writer, "{} {}", store.word_count(), store.dimension())?;
    for (term, vector) in store.iter() {
        writer.write_all(term.as_bytes())?;
        writer.write_all(b" ")?;
        for &component in vector {
            writer.write_all(&component.to_le_bytes())?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    info!(
        target: "lexivec",
        word_count = store.word_count(),
        dimension = store.dimension(),
        "store serialized"
    );
    Ok(())
}
