//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::tokenizer::TokenId;

/// maskprep: WordPiece tokenization and masked-span sampling
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "maskprep")]
#[command(version)]
#[command(about = "Prepare MaskedLM pretraining and classification fine-tuning data")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Tokenize and mask a text corpus into JSONL training records
    Prepare(PrepareArgs),

    /// Tokenize a labelled TSV corpus into JSONL classification records
    FinetunePrepare(FinetunePrepareArgs),

    /// Encode text with the configured tokenizer
    Encode(EncodeArgs),

    /// Decode token ids with the configured tokenizer
    Decode(DecodeArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),
}

/// Arguments for the prepare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PrepareArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override masking seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Process at most N corpus lines
    #[arg(long)]
    pub limit: Option<usize>,

    /// Load and process but don't write output
    #[arg(long)]
    pub dry_run: bool,

    /// Print per-stage timing after processing
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the finetune-prepare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct FinetunePrepareArgs {
    /// Path to YAML configuration file (must have a `finetune` section)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Process at most N examples
    #[arg(long)]
    pub limit: Option<usize>,

    /// Load and process but don't write output
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the encode command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EncodeArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Text to encode
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Also print the sub-word pieces
    #[arg(long)]
    pub pieces: bool,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the decode command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DecodeArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Token ids to decode
    #[arg(value_name = "IDS", required = true, num_args = 1..)]
    pub ids: Vec<TokenId>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Also load the vocabulary and build the pipeline
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a PipelineSpec
pub fn apply_overrides(spec: &mut crate::config::PipelineSpec, args: &PrepareArgs) {
    if let Some(output) = &args.output {
        spec.data.output = output.clone();
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
}
