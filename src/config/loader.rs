//! Load preparation specs from YAML

use super::schema::PipelineSpec;
use super::validate::{validate_config, validate_finetune_paths, validate_paths};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse and validate a spec from YAML text.
///
/// Paths are left as written and not checked for existence.
pub fn parse_config(yaml: &str) -> Result<PipelineSpec> {
    let spec: PipelineSpec = serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;
    validate_config(&spec).map_err(|e| Error::ConfigError(e.to_string()))?;
    Ok(spec)
}

/// Read a spec from a YAML file without checking that input files exist
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn read_config<P: AsRef<Path>>(config_path: P) -> Result<PipelineSpec> {
    let config_path = config_path.as_ref();
    let yaml_content = fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {e}",
            config_path.display()
        ))
    })?;

    let mut spec = parse_config(&yaml_content)?;
    if let Some(base) = config_path.parent() {
        spec.resolve_paths(base);
    }
    Ok(spec)
}

/// Load a spec from a YAML file
///
/// Like [`read_config`], then checks that the vocabulary and corpora exist.
///
/// # Example
///
/// ```no_run
/// use maskprep::config::load_config;
///
/// let spec = load_config("prepare.yaml")?;
/// println!("vocab: {}", spec.tokenizer.vocab.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<PipelineSpec> {
    let spec = read_config(config_path)?;
    validate_paths(&spec).map_err(|e| Error::ConfigError(e.to_string()))?;
    Ok(spec)
}

/// Load a spec for fine-tuning preparation
///
/// Like [`read_config`], then checks that the `finetune` section is present
/// and that the vocabulary and labelled corpus exist. The pretraining corpus
/// is not required.
pub fn load_finetune_config<P: AsRef<Path>>(config_path: P) -> Result<PipelineSpec> {
    let spec = read_config(config_path)?;
    validate_finetune_paths(&spec).map_err(|e| Error::ConfigError(e.to_string()))?;
    Ok(spec)
}

/// Serialize a spec back to YAML
pub fn to_yaml(spec: &PipelineSpec) -> Result<String> {
    serde_yaml::to_string(spec)
        .map_err(|e| Error::Serialization(format!("YAML serialization failed: {e}")))
}
