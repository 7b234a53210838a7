//! `lexivec-convert`: load a word2vec binary model and re-serialize it.

use std::fs::File;
use std::io::BufWriter;

use lexivec_cli::{exit_code, parse_convert_args, CONVERT_USAGE};
use lexivec_core::tracing_config::init_tracing;
use lexivec_core::ModelResult;
use lexivec_embed::{load_model, write_store};
use tracing::{info, Level};

fn main() -> ModelResult<()> {
    init_tracing(Level::INFO);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let convert_args = match parse_convert_args(&args) {
        Ok(parsed) => parsed,
        Err(reason) => {
            eprintln!("{reason}");
            eprintln!("{CONVERT_USAGE}");
            std::process::exit(exit_code::USAGE_ERROR);
        }
    };

    let store = load_model(&convert_args.input)?;
    let mut output = BufWriter::new(File::create(&convert_args.output)?);
    write_store(&store, &mut output)?;

    info!(
        target: "lexivec",
        input = %convert_args.input.display(),
        output = %convert_args.output.display(),
        word_count = store.word_count(),
        "conversion complete"
    );
    Ok(())
}
