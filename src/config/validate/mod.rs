//! Configuration validation
//!
//! Validates preparation specifications before any file is read.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_config, validate_finetune_paths, validate_paths};
