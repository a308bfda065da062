//! Declarative YAML configuration
//!
//! A single YAML file names the vocabulary, tokenizer options, masking
//! parameters and corpus paths. [`load_config`] parses, resolves relative
//! paths and validates; the `build_*` functions turn a spec into pipelines.

mod builder;
mod cli;
mod loader;
mod schema;
mod validate;

pub use builder::{
    build_finetuning_pipeline, build_masking_config, build_pretraining_pipeline, build_tokenizer,
};
pub use cli::{
    apply_overrides, parse_args, Cli, Command, DecodeArgs, EncodeArgs, FinetunePrepareArgs,
    InfoArgs, OutputFormat, PrepareArgs, ValidateArgs,
};
pub use loader::{load_config, load_finetune_config, parse_config, read_config, to_yaml};
pub use schema::{DataSpec, FinetuneSpec, MaskingSpec, PipelineSpec, TokenizerSpec};
pub use validate::{validate_config, validate_finetune_paths, validate_paths, ValidationError};
