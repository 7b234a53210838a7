//! `lexivec-distance`: interactive nearest-neighbor explorer.
//!
//! Reads query lines from stdin until EOF or `EXIT` and prints the ranked
//! neighborhood for each resolvable query.

use std::io::{BufReader, BufWriter};

use lexivec_cli::{exit_code, parse_distance_args, run_query_loop, DISTANCE_USAGE};
use lexivec_core::tracing_config::init_tracing;
use lexivec_core::ModelResult;
use lexivec_embed::load_model;
use tracing::Level;

fn main() -> ModelResult<()> {
    init_tracing(Level::INFO);

    // Argument validation happens before any loading.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let distance_args = match parse_distance_args(&args) {
        Ok(parsed) => parsed,
        Err(reason) => {
            eprintln!("{reason}");
            eprintln!("{DISTANCE_USAGE}");
            std::process::exit(exit_code::USAGE_ERROR);
        }
    };

    let store = load_model(&distance_args.model_path)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = BufReader::new(stdin.lock());
    let mut output = BufWriter::new(stdout.lock());
    run_query_loop(
        &store,
        distance_args.neighborhood,
        &mut input,
        &mut output,
    )
}
