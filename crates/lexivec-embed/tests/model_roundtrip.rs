//! Integration tests for the word2vec binary format: load correctness,
//! unit-norm invariant, separator tolerance, error taxonomy, and
//! write/reload roundtrip.

use std::io::Write;
use std::path::Path;

use lexivec_core::ModelError;
use lexivec_embed::{compose_query, load_model, nearest, write_store, MAX_TOKEN_BYTES};

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Serializes a raw (pre-normalization) model into word2vec binary bytes.
/// `separator` is what follows each float block ("\n", " ", or "" for the
/// no-separator historical variant).
fn raw_model_bytes(entries: &[(&str, &[f32])], separator: &[u8]) -> Vec<u8> {
    let dimension = entries.first().map_or(0, |(_, raw)| raw.len());
    let mut bytes = format!("{} {}\n", entries.len(), dimension).into_bytes();
    for (term, raw) in entries {
        bytes.extend_from_slice(term.as_bytes());
        bytes.push(b' ');
        for component in *raw {
            bytes.extend_from_slice(&component.to_le_bytes());
        }
        bytes.extend_from_slice(separator);
    }
    bytes
}

fn write_temp_model(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create temp model");
    file.write_all(bytes).expect("write temp model");
    path
}

fn example_entries() -> Vec<(&'static str, Vec<f32>)> {
    vec![
        ("cat", vec![1.0, 0.0]),
        ("dog", vec![0.0, 1.0]),
        ("kitten", vec![0.999, 0.02]),
    ]
}

fn example_bytes(separator: &[u8]) -> Vec<u8> {
    let entries = example_entries();
    let borrowed: Vec<(&str, &[f32])> = entries
        .iter()
        .map(|(term, raw)| (*term, raw.as_slice()))
        .collect();
    raw_model_bytes(&borrowed, separator)
}

// ─── Loading ──────────────────────────────────────────────────────────────────

#[test]
fn loads_terms_and_normalizes_vectors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_model(dir.path(), "example.bin", &example_bytes(b"\n"));

    let store = load_model(&path).expect("load");
    assert_eq!(store.word_count(), 3);
    assert_eq!(store.dimension(), 2);
    assert_eq!(store.term_at(0), "cat");
    assert_eq!(store.index_of("kitten"), Some(2));

    // Unit-norm invariant: |dot(v, v) - 1| < epsilon for every vector.
    for (_, vector) in store.iter() {
        let norm_sq: f32 = vector.iter().map(|x| x * x).sum();
        assert!((norm_sq - 1.0).abs() < 1e-5, "norm_sq={norm_sq}");
    }

    // kitten normalizes to roughly (0.9998, 0.02).
    let kitten = store.vector_at(2);
    assert!((kitten[0] - 0.9998).abs() < 1e-3);
    assert!((kitten[1] - 0.02).abs() < 1e-3);
}

#[test]
fn tolerates_the_no_separator_variant() {
    let dir = tempfile::tempdir().expect("tempdir");
    let with_newline = write_temp_model(dir.path(), "newline.bin", &example_bytes(b"\n"));
    let without = write_temp_model(dir.path(), "packed.bin", &example_bytes(b""));

    let a = load_model(&with_newline).expect("load with separators");
    let b = load_model(&without).expect("load without separators");

    assert_eq!(a.word_count(), b.word_count());
    for ordinal in 0..a.word_count() {
        assert_eq!(a.term_at(ordinal), b.term_at(ordinal));
        assert_eq!(a.vector_at(ordinal), b.vector_at(ordinal));
    }
}

#[test]
fn duplicate_terms_keep_last_write_wins_lookup() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bytes = raw_model_bytes(
        &[
            ("twin", &[1.0, 0.0]),
            ("other", &[0.0, 1.0]),
            ("twin", &[0.6, 0.8]),
        ],
        b"\n",
    );
    let path = write_temp_model(dir.path(), "dups.bin", &bytes);

    let store = load_model(&path).expect("load");
    assert_eq!(store.index_of("twin"), Some(2));
    // The shadowed slot is still a valid ordinal.
    assert_eq!(store.term_at(0), "twin");
    assert!((store.vector_at(0)[0] - 1.0).abs() < 1e-6);
}

#[test]
fn zero_raw_vector_normalizes_to_nan_components() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bytes = raw_model_bytes(&[("null", &[0.0, 0.0]), ("unit", &[1.0, 0.0])], b"\n");
    let path = write_temp_model(dir.path(), "zero.bin", &bytes);

    let store = load_model(&path).expect("load");
    assert!(store.vector_at(0).iter().all(|x| x.is_nan()));
    assert!((store.vector_at(1)[0] - 1.0).abs() < 1e-6);
}

// ─── Error taxonomy ───────────────────────────────────────────────────────────

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_model(dir.path().join("absent.bin")).expect_err("must fail");
    assert!(matches!(err, ModelError::FileNotFound { .. }));
}

#[test]
fn non_integer_header_is_malformed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_model(dir.path(), "badheader.bin", b"abc 10\n");
    let err = load_model(&path).expect_err("must fail");
    assert!(matches!(err, ModelError::MalformedHeader { .. }));
}

#[test]
fn header_without_newline_is_truncated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_model(dir.path(), "nonewline.bin", b"2 2");
    let err = load_model(&path).expect_err("must fail");
    assert!(matches!(err, ModelError::TruncatedRecord { .. }));
}

#[test]
fn file_truncated_mid_float_block_is_truncated_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut bytes = example_bytes(b"\n");
    bytes.truncate(bytes.len() - 6);
    let path = write_temp_model(dir.path(), "cut.bin", &bytes);
    let err = load_model(&path).expect_err("must fail");
    assert!(matches!(err, ModelError::TruncatedRecord { .. }));
    assert!(err.to_string().contains("kitten"));
}

#[test]
fn missing_records_after_header_are_truncated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_model(dir.path(), "headeronly.bin", b"5 4\n");
    let err = load_model(&path).expect_err("must fail");
    assert!(matches!(err, ModelError::TruncatedRecord { .. }));
}

#[test]
fn unbounded_token_is_an_encoding_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut bytes = b"1 2\n".to_vec();
    bytes.extend(std::iter::repeat(b'x').take(MAX_TOKEN_BYTES + 10));
    let path = write_temp_model(dir.path(), "longtoken.bin", &bytes);
    let err = load_model(&path).expect_err("must fail");
    assert!(matches!(err, ModelError::EncodingError { record: 0, .. }));
}

// ─── Write/reload roundtrip ───────────────────────────────────────────────────

#[test]
fn write_then_reload_preserves_terms_and_vectors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_temp_model(dir.path(), "source.bin", &example_bytes(b"\n"));
    let store = load_model(&source).expect("load source");

    let converted = dir.path().join("converted.bin");
    let mut out = std::fs::File::create(&converted).expect("create output");
    write_store(&store, &mut out).expect("write store");
    drop(out);

    let reloaded = load_model(&converted).expect("reload");
    assert_eq!(reloaded.word_count(), store.word_count());
    assert_eq!(reloaded.dimension(), store.dimension());
    for ordinal in 0..store.word_count() {
        assert_eq!(reloaded.term_at(ordinal), store.term_at(ordinal));
        for (a, b) in reloaded
            .vector_at(ordinal)
            .iter()
            .zip(store.vector_at(ordinal))
        {
            assert!((a - b).abs() < 1e-6, "ordinal {ordinal}: {a} vs {b}");
        }
    }
}

// ─── End-to-end worked example ────────────────────────────────────────────────

#[test]
fn worked_example_queries_match_the_expected_scores() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_model(dir.path(), "worked.bin", &example_bytes(b"\n"));
    let store = load_model(&path).expect("load");

    // Query "cat", k=1, excluding cat itself.
    let cat = store.index_of("cat").expect("cat in vocabulary");
    let target = compose_query(&store, &[cat]);
    let results = nearest(&store, &target, &[cat], 1).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].term, "kitten");
    assert!((results[0].score - 0.9998).abs() < 1e-3);

    // Query "cat dog" composes to the diagonal; kitten scores ~0.7210.
    let dog = store.index_of("dog").expect("dog in vocabulary");
    let target = compose_query(&store, &[cat, dog]);
    assert!((target[0] - 0.7071).abs() < 1e-3);
    assert!((target[1] - 0.7071).abs() < 1e-3);
    let results = nearest(&store, &target, &[cat, dog], 1).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].term, "kitten");
    assert!((results[0].score - 0.7210).abs() < 1e-3);
}
