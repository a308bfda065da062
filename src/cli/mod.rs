//! CLI module for maskprep
//!
//! Command handlers and output helpers.

mod commands;
mod logging;

pub use commands::{run_command, PrepareSummary};
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
