//! maskprep CLI
//!
//! # Usage
//!
//! ```bash
//! # Tokenize and mask a corpus
//! maskprep prepare prepare.yaml
//!
//! # Override output and seed, print stage timings
//! maskprep prepare prepare.yaml --output out.jsonl --seed 7 --trace
//!
//! # Tokenize a labelled corpus for fine-tuning
//! maskprep finetune-prepare prepare.yaml
//!
//! # Inspect the tokenizer
//! maskprep encode prepare.yaml "the movie was great" --pieces
//! maskprep decode prepare.yaml 3 4 5 6
//!
//! # Validate config
//! maskprep validate prepare.yaml --detailed
//! ```

use clap::Parser;
use maskprep::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
