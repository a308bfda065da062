//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! maskprep prepare prepare.yaml
//! maskprep prepare prepare.yaml --output out.jsonl --seed 7 --trace
//! maskprep finetune-prepare prepare.yaml
//! maskprep encode prepare.yaml "the movie was great" --pieces
//! maskprep decode prepare.yaml 5 4 0 0
//! maskprep validate prepare.yaml --detailed
//! maskprep info prepare.yaml --format json
//! ```

mod core;
mod types;


pub use self::core::{
    apply_overrides, parse_args, Cli, Command, DecodeArgs, EncodeArgs, FinetunePrepareArgs,
    InfoArgs, PrepareArgs, ValidateArgs,
};
pub use types::OutputFormat;
