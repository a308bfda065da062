//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{build_pretraining_pipeline, load_config, PipelineSpec, ValidateArgs};

/// Format tokenizer configuration as a string
pub fn format_tokenizer_info(spec: &PipelineSpec) -> String {
    let options = &spec.tokenizer.options;
    let special = &options.special_tokens;
    [
        format!("  Vocabulary: {}", spec.tokenizer.vocab.display()),
        format!("  Sequence length: {}", options.sequence_length),
        format!(
            "  Lowercase: {}, strip accents: {}",
            options.lowercase, options.strip_accents
        ),
        format!("  Suffix indicator: {}", options.suffix_indicator),
        format!("  Max chars per word: {}", options.max_input_chars_per_word),
        format!(
            "  Special tokens: unk={} pad={} mask={}",
            special.unk, special.pad, special.mask
        ),
    ]
    .join("\n")
}

/// Format masking configuration as a string
pub fn format_masking_info(spec: &PipelineSpec) -> String {
    let masking = &spec.masking;
    let mut lines = vec![
        format!("  Selection rate: {}", masking.mask_selection_rate),
        format!("  Max predictions: {}", masking.mask_selection_length),
        format!(
            "  Replacement: mask={} random={}",
            masking.mask_token_rate, masking.random_token_rate
        ),
    ];
    if !masking.unselectable_tokens.is_empty() {
        lines.push(format!(
            "  Unselectable: {}",
            masking.unselectable_tokens.join(", ")
        ));
    }
    lines.push(format!("  Seed: {}", spec.seed));
    lines.join("\n")
}

/// Format data configuration as a string
pub fn format_data_info(spec: &PipelineSpec) -> String {
    format!(
        "  Training corpus: {}\n  Output: {}\n  Min line chars: {}",
        spec.data.train.display(),
        spec.data.output.display(),
        spec.data.min_line_chars
    )
}

/// Format fine-tuning configuration as a string
pub fn format_finetune_info(spec: &PipelineSpec) -> Option<String> {
    spec.finetune.as_ref().map(|finetune| {
        format!(
            "  Fine-tuning:\n    Corpus: {}\n    Output: {}\n    Classes: {}",
            finetune.train.display(),
            finetune.output.display(),
            finetune.num_classes
        )
    })
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &PipelineSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_tokenizer_info(spec));
    println!();
    println!("{}", format_masking_info(spec));
    println!();
    println!("{}", format_data_info(spec));

    if let Some(finetune_info) = format_finetune_info(spec) {
        println!();
        println!("{finetune_info}");
    }
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| e.to_string())?;

    if args.detailed {
        let pipeline = build_pretraining_pipeline(&spec).map_err(|e| e.to_string())?;
        log(
            level,
            LogLevel::Normal,
            &format!(
                "Vocabulary loaded: {} entries",
                pipeline.tokenizer().vocabulary().len()
            ),
        );
    }

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed && level != LogLevel::Quiet {
        print_detailed_summary(&spec);
    }

    Ok(())
}
