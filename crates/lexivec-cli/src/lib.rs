//! Command-line surface for lexivec.
//!
//! Thin shell around the embed crate: argument parsing, console
//! formatting, and the interactive query loop. All ranked output goes to
//! stdout; usage text and diagnostics go to stderr.

#![forbid(unsafe_code)]

use std::io::{BufRead, Write};
use std::path::PathBuf;

use lexivec_core::{ModelResult, ScoredTerm};
use lexivec_embed::{compose_query, nearest, VectorStore, DEFAULT_NEIGHBORHOOD};
use tracing::debug;

/// Process exit codes shared by both binaries.
pub mod exit_code {
    /// Clean exit.
    pub const OK: i32 = 0;
    /// Bad arguments; usage was printed to stderr.
    pub const USAGE_ERROR: i32 = 1;
}

/// Usage line for `lexivec-convert`.
pub const CONVERT_USAGE: &str = "usage: lexivec-convert <input-binary-path> <output-path>";

/// Usage line for `lexivec-distance`.
pub const DISTANCE_USAGE: &str = "usage: lexivec-distance <model-path> [neighbor-count]";

/// Prompt printed before each interactive query.
pub const PROMPT: &str = "\nEnter a word or short phrase (EXIT to break): ";

/// Sentinel input line that ends the interactive loop.
pub const EXIT_SENTINEL: &str = "EXIT";

/// Parsed arguments for `lexivec-convert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertArgs {
    /// word2vec binary input.
    pub input: PathBuf,
    /// Destination path for the re-serialized store.
    pub output: PathBuf,
}

/// Parsed arguments for `lexivec-distance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceArgs {
    /// word2vec binary model to load.
    pub model_path: PathBuf,
    /// Neighborhood size for queries.
    pub neighborhood: usize,
}

/// Parses `convert` arguments: exactly an input path and an output path.
///
/// # Errors
///
/// Returns a short reason string when the arity is wrong; the caller
/// prints usage and exits with [`exit_code::USAGE_ERROR`].
pub fn parse_convert_args(args: &[String]) -> Result<ConvertArgs, String> {
    match args {
        [input, output] => Ok(ConvertArgs {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        }),
        _ => Err(format!("expected 2 arguments, got {}", args.len())),
    }
}

/// Parses `distance` arguments: a model path and an optional neighbor
/// count (default 40).
///
/// # Errors
///
/// Returns a short reason string on wrong arity or a malformed neighbor
/// count; the caller prints usage and exits with
/// [`exit_code::USAGE_ERROR`] before any loading occurs.
pub fn parse_distance_args(args: &[String]) -> Result<DistanceArgs, String> {
    match args {
        [model_path] => Ok(DistanceArgs {
            model_path: PathBuf::from(model_path),
            neighborhood: DEFAULT_NEIGHBORHOOD,
        }),
        [model_path, count] => {
            let neighborhood = count
                .parse::<usize>()
                .map_err(|_| format!("{count:?} is not a valid neighbor count"))?;
            Ok(DistanceArgs {
                model_path: PathBuf::from(model_path),
                neighborhood,
            })
        }
        _ => Err(format!("expected 1 or 2 arguments, got {}", args.len())),
    }
}

/// Resolves a query line to store ordinals: the whole line first, then
/// whitespace-split tokens when the whole line is not in the vocabulary.
/// An empty result means every term was out of dictionary.
#[must_use]
pub fn resolve_query_ids(store: &VectorStore, line: &str) -> Vec<usize> {
    if let Some(ordinal) = store.index_of(line) {
        return vec![ordinal];
    }
    line.split_whitespace()
        .filter_map(|token| store.index_of(token))
        .collect()
}

/// One right-aligned result row: 50-column term, 22-column score with six
/// decimal places.
#[must_use]
pub fn format_result_line(result: &ScoredTerm) -> String {
    format!("{:>50}{:>22.6}", result.term, result.score)
}

/// Runs the interactive query loop until EOF or an `EXIT` line.
///
/// Each input line is resolved to ordinals, composed into a query vector,
/// and searched with the query's own ordinals excluded. Out-of-dictionary
/// input is reported and the loop continues.
///
/// # Errors
///
/// Propagates I/O errors from the input or output streams and any search
/// error.
pub fn run_query_loop<R: BufRead, W: Write>(
    store: &VectorStore,
    neighborhood: usize,
    input: &mut R,
    output: &mut W,
) -> ModelResult<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let query = line.trim_end_matches(['\n', '\r']);
        if query == EXIT_SENTINEL {
            return Ok(());
        }

        let ids = resolve_query_ids(store, query);
        if ids.is_empty() {
            writeln!(output, "\nOut of dictionary word!")?;
            continue;
        }
        debug!(target: "lexivec", query, ids = ids.len(), "query resolved");

        let target = compose_query(store, &ids);
        let results = nearest(store, &target, &ids, neighborhood)?;
        print_results(store, &ids, &results, output)?;
    }
}

/// Prints the resolved query terms and the ranked result table.
///
/// # Errors
///
/// Propagates I/O errors from the output stream.
pub fn print_results<W: Write>(
    store: &VectorStore,
    ids: &[usize],
    results: &[ScoredTerm],
    output: &mut W,
) -> ModelResult<()> {
    for &ordinal in ids {
        writeln!(
            output,
            "\nWord: {}  Position in vocabulary: {}",
            store.term_at(ordinal),
            ordinal
        )?;
    }
    writeln!(
        output,
        "\n                                      Related Term            Cosine Score"
    )?;
    writeln!(
        output,
        "----------------------------------------------------------------------------"
    )?;
    for result in results {
        writeln!(output, "{}", format_result_line(result))?;
    }
    Ok(())
}
