//! CLI command implementations

mod decode;
mod encode;
mod finetune_prepare;
mod info;
mod prepare;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

pub use prepare::PrepareSummary;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Prepare(args) => prepare::run_prepare(args, log_level),
        Command::FinetunePrepare(args) => finetune_prepare::run_finetune_prepare(args, log_level),
        Command::Encode(args) => encode::run_encode(args, log_level),
        Command::Decode(args) => decode::run_decode(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}
