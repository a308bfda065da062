//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Progress and results
    Normal,
    /// Also vocabulary, masking and per-label details
    Verbose,
}

/// Print `msg` to stdout if `level` permits messages of `required` level
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if should_log(level, required) {
        println!("{msg}");
    }
}

/// Whether a message of `required` level is shown at `level`
pub fn should_log(level: LogLevel, required: LogLevel) -> bool {
    match level {
        LogLevel::Quiet => false,
        LogLevel::Normal => required == LogLevel::Normal,
        LogLevel::Verbose => true,
    }
}
