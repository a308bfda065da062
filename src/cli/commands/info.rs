//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{read_config, to_yaml, InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = read_config(&args.config).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Vocabulary: {}", spec.tokenizer.vocab.display());
            println!("Sequence length: {}", spec.tokenizer.options.sequence_length);
            println!(
                "Masking: rate={} max_predictions={}",
                spec.masking.mask_selection_rate, spec.masking.mask_selection_length
            );
            println!("Training corpus: {}", spec.data.train.display());
            println!("Seed: {}", spec.seed);

            if spec.finetune.is_some() {
                println!("Fine-tuning: enabled");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = to_yaml(&spec).map_err(|e| e.to_string())?;
            println!("{yaml}");
        }
    }

    Ok(())
}
