use std::path::PathBuf;

/// Unified error type covering all failure modes in the lexivec pipeline.
///
/// Load-time variants (`FileNotFound`, `MalformedHeader`, `TruncatedRecord`,
/// `EncodingError`) are fatal: they abort the whole load with no partial
/// store. `OutOfDictionary` is the only query-time variant and is
/// recoverable; the interactive loop reports it and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The vectors file does not exist at the given path.
    #[error("vectors file not found at {path}. Check the model path.")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The header line could not be parsed as two non-negative integers.
    #[error("malformed header {line:?}: {detail}. Expected \"<word_count> <dimension>\".")]
    MalformedHeader {
        /// The offending header line, without its terminating newline.
        line: String,
        /// What went wrong.
        detail: String,
    },

    /// The stream ended before the declared records were complete.
    #[error("truncated vectors file: {detail}. The file ends before the declared records are complete.")]
    TruncatedRecord {
        /// Which read ran out of bytes.
        detail: String,
    },

    /// A vocabulary token ran past the length bound without a terminator.
    #[error(
        "vocabulary token at record {record} exceeded {limit} bytes without a terminator. The stream is likely corrupt."
    )]
    EncodingError {
        /// Zero-based record ordinal being read.
        record: usize,
        /// The fixed token length bound.
        limit: usize,
    },

    /// No term of the query resolved to a vocabulary entry.
    #[error("out of dictionary: no term of {query:?} is in the vocabulary")]
    OutOfDictionary {
        /// The raw query line.
        query: String,
    },

    /// Query vector dimension does not match the store dimension.
    #[error("dimension mismatch: store holds {expected}-dim vectors, query has {found}-dim")]
    DimensionMismatch {
        /// Dimension the store was loaded with.
        expected: usize,
        /// Dimension of the query vector.
        found: usize,
    },

    /// Wraps `std::io::Error` for file operations.
    #[error("I/O error: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the lexivec crate hierarchy.
pub type ModelResult<T> = Result<T, ModelError>;
