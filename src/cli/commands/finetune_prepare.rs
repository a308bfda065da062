//! Finetune-prepare command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{build_finetuning_pipeline, load_finetune_config, FinetunePrepareArgs};
use crate::io::{load_labeled_corpus, save_jsonl};
use crate::pipeline::LabeledText;

/// Number of examples per class label
pub fn label_counts(examples: &[LabeledText], num_classes: usize) -> Vec<usize> {
    let mut counts = vec![0; num_classes];
    for example in examples {
        if let Some(count) = counts.get_mut(example.label) {
            *count += 1;
        }
    }
    counts
}

pub fn run_finetune_prepare(args: FinetunePrepareArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Loading config: {}", args.config.display()),
    );

    let spec = load_finetune_config(&args.config).map_err(|e| e.to_string())?;
    let mut finetune = spec
        .finetune
        .clone()
        .ok_or_else(|| "Config has no 'finetune' section".to_string())?;
    if let Some(output) = &args.output {
        finetune.output = output.clone();
    }

    let pipeline = build_finetuning_pipeline(&spec).map_err(|e| e.to_string())?;

    let mut examples = load_labeled_corpus(&finetune.train, finetune.num_classes)
        .map_err(|e| e.to_string())?;
    if let Some(limit) = args.limit {
        examples.truncate(limit);
    }

    let counts = label_counts(&examples, finetune.num_classes);
    log(
        level,
        LogLevel::Normal,
        &format!("Read {} examples from {}", examples.len(), finetune.train.display()),
    );
    for (label, count) in counts.iter().enumerate() {
        log(level, LogLevel::Verbose, &format!("  label {label}: {count}"));
    }

    let records = pipeline.process_batch(&examples);

    if args.dry_run {
        log(level, LogLevel::Normal, "Dry run: output not written");
        return Ok(());
    }

    let written = save_jsonl(&records, &finetune.output).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {written} records to {}", finetune.output.display()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_counts() {
        let examples = vec![
            LabeledText::new("a", 1),
            LabeledText::new("b", 0),
            LabeledText::new("c", 1),
        ];
        assert_eq!(label_counts(&examples, 2), vec![1, 2]);
        assert_eq!(label_counts(&examples, 3), vec![1, 2, 0]);
    }
}
