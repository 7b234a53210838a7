//! Streaming parser for the word2vec binary format.
//!
//! The format is a hybrid: an ASCII header line, then `word_count` records
//! of a whitespace-terminated term token followed immediately by
//! `dimension * 4` little-endian f32 bytes. Parsing is an explicit
//! two-phase reader — a line scanner for the header, then a token scanner
//! plus fixed-length byte-block reader per record — so the byte-offset
//! handoff between text and binary is unambiguous.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use lexivec_core::{ModelError, ModelResult};
use tracing::{debug, info};

use crate::store::VectorStore;

/// Fixed bound on vocabulary token length, guarding against corrupt
/// streams causing unbounded buffering. word2vec itself caps words at 50
/// bytes; 500 leaves generous slack, matching the original tool.
pub const MAX_TOKEN_BYTES: usize = 500;

/// Loads a word2vec binary model into a [`VectorStore`].
///
/// Every raw vector is normalized to unit Euclidean length during the load
/// (norm accumulated in f64). A zero raw vector divides by zero and yields
/// NaN components; this documented edge case is not silently repaired.
///
/// Tolerates both historical variants of the format: records may or may
/// not carry whitespace between a vector's float block and the next term.
///
/// # Errors
///
/// - [`ModelError::FileNotFound`] when `path` does not exist.
/// - [`ModelError::MalformedHeader`] when the header integers do not parse.
/// - [`ModelError::TruncatedRecord`] when the stream ends mid-header or
///   mid-record.
/// - [`ModelError::EncodingError`] when a token exceeds [`MAX_TOKEN_BYTES`].
/// - [`ModelError::Io`] for any other I/O failure.
pub fn load_model(path: impl AsRef<Path>) -> ModelResult<VectorStore> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ModelError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = BufReader::new(File::open(path)?);

    let (word_count, dimension) = read_header(&mut reader)?;
    info!(
        target: "lexivec",
        word_count,
        dimension,
        path = %path.display(),
        "model header parsed"
    );

    let progress_stride = word_count.div_ceil(10).max(1);
    let mut terms = Vec::with_capacity(word_count);
    let mut vectors = Vec::with_capacity(word_count.saturating_mul(dimension));
    let mut float_block = vec![0_u8; dimension * 4];

    for record in 0..word_count {
        if record % progress_stride == 0 {
            debug!(target: "lexivec", record, word_count, "load progress");
        }

        let term = read_token(&mut reader, record)?;

        reader.read_exact(&mut float_block).map_err(|error| {
            if error.kind() == std::io::ErrorKind::UnexpectedEof {
                ModelError::TruncatedRecord {
                    detail: format!(
                        "vector bytes for record {record} of {word_count} ({term:?})"
                    ),
                }
            } else {
                ModelError::Io(error)
            }
        })?;

        let row_start = vectors.len();
        let mut norm = 0.0_f64;
        for chunk in float_block.chunks_exact(4) {
            let component = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            norm += f64::from(component) * f64::from(component);
            vectors.push(component);
        }
        // Convert to a unit vector. No zero-vector special case: division
        // by a zero norm propagates NaN, per the store's documented edge.
        #[allow(clippy::cast_possible_truncation)]
        let norm = norm.sqrt() as f32;
        for component in &mut vectors[row_start..] {
            *component /= norm;
        }

        terms.push(term);
    }

    info!(target: "lexivec", word_count, dimension, "model loaded");
    Ok(VectorStore::new(terms, vectors, dimension))
}

/// Phase one: scan the ASCII header line up to `\n` and parse
/// `<word_count> <dimension>`.
fn read_header<R: BufRead>(reader: &mut R) -> ModelResult<(usize, usize)> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    if line.last() != Some(&b'\n') {
        return Err(ModelError::TruncatedRecord {
            detail: "header line ends before its newline".to_owned(),
        });
    }
    let text = String::from_utf8_lossy(&line);
    let mut tokens = text.split_ascii_whitespace();
    let word_count = parse_header_int(&text, tokens.next())?;
    let dimension = parse_header_int(&text, tokens.next())?;
    Ok((word_count, dimension))
}

fn parse_header_int(line: &str, token: Option<&str>) -> ModelResult<usize> {
    let line = line.trim_end().to_owned();
    let Some(token) = token else {
        return Err(ModelError::MalformedHeader {
            line,
            detail: "expected two whitespace-separated integers".to_owned(),
        });
    };
    token.parse::<usize>().map_err(|_| ModelError::MalformedHeader {
        line,
        detail: format!("{token:?} is not a non-negative integer"),
    })
}

/// Phase two token scanner: skip a run of whitespace bytes, then collect a
/// contiguous run of non-whitespace bytes terminated by whitespace or EOF.
///
/// The terminating whitespace byte, when present, is consumed. A record's
/// float block may immediately precede the next term's first byte, so the
/// whitespace run is allowed to be empty.
fn read_token<R: Read>(reader: &mut R, record: usize) -> ModelResult<String> {
    let mut byte = [0_u8; 1];

    let first = loop {
        if read_one(reader, &mut byte)? == 0 {
            return Err(ModelError::TruncatedRecord {
                detail: format!("term token for record {record}"),
            });
        }
        if !byte[0].is_ascii_whitespace() {
            break byte[0];
        }
    };

    let mut token = Vec::with_capacity(32);
    token.push(first);
    loop {
        if read_one(reader, &mut byte)? == 0 {
            // EOF terminates the token; a following short float block will
            // surface as TruncatedRecord.
            break;
        }
        if byte[0].is_ascii_whitespace() {
            break;
        }
        if token.len() == MAX_TOKEN_BYTES {
            return Err(ModelError::EncodingError {
                record,
                limit: MAX_TOKEN_BYTES,
            });
        }
        token.push(byte[0]);
    }

    // Explicit, platform-independent decoding: UTF-8 with lossy
    // replacement. Vocabulary bytes from word2vec are not guaranteed valid
    // UTF-8 and must not abort the load.
    Ok(String::from_utf8_lossy(&token).into_owned())
}

fn read_one<R: Read>(reader: &mut R, byte: &mut [u8; 1]) -> ModelResult<usize> {
    loop {
        match reader.read(byte) {
            Ok(n) => return Ok(n),
            Err(error) if error.kind() == std::io::ErrorKind::Interrupted => {}
            Err(error) => return Err(ModelError::Io(error)),
        }
    }
}
