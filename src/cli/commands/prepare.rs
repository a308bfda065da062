//! Prepare command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, build_pretraining_pipeline, load_config, PrepareArgs};
use crate::io::{load_text_corpus, save_jsonl};
use crate::pipeline::TrainingRecord;
use crate::tokenizer::TokenId;
use crate::trace::TRACER;

/// Aggregate counts over a batch of training records
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PrepareSummary {
    pub records: usize,
    pub tokens: usize,
    pub unknown_tokens: usize,
    pub predictions: usize,
}

impl PrepareSummary {
    /// Count non-padding tokens, UNK tokens and prediction targets.
    ///
    /// Masked positions are counted by their original ids.
    pub fn from_records(records: &[TrainingRecord], pad_id: TokenId, unk_id: TokenId) -> Self {
        let mut summary = Self {
            records: records.len(),
            ..Default::default()
        };
        for record in records {
            let mut ids = record.token_ids.clone();
            for (&pos, &original) in record
                .mask_positions
                .iter()
                .zip(&record.mask_ids)
                .take(record.num_predictions())
            {
                if let Some(slot) = ids.get_mut(pos) {
                    *slot = original;
                }
            }
            summary.tokens += ids.iter().filter(|&&id| id != pad_id).count();
            summary.unknown_tokens += ids.iter().filter(|&&id| id == unk_id).count();
            summary.predictions += record.num_predictions();
        }
        summary
    }

    pub fn mean_predictions(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.predictions as f64 / self.records as f64
        }
    }

    pub fn unknown_rate(&self) -> f64 {
        if self.tokens == 0 {
            0.0
        } else {
            self.unknown_tokens as f64 / self.tokens as f64
        }
    }
}

pub fn run_prepare(args: PrepareArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Loading config: {}", args.config.display()),
    );

    let mut spec = load_config(&args.config).map_err(|e| e.to_string())?;
    apply_overrides(&mut spec, &args);

    if args.trace {
        TRACER.clear();
        TRACER.enable();
    }

    let pipeline = build_pretraining_pipeline(&spec).map_err(|e| e.to_string())?;
    let tokenizer = pipeline.tokenizer();
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Vocabulary: {} entries, sequence length {}",
            tokenizer.vocabulary().len(),
            tokenizer.sequence_length()
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Masking: rate={}, max predictions={}, seed={}",
            pipeline.sampler().config().mask_selection_rate,
            pipeline.sampler().mask_selection_length(),
            pipeline.seed()
        ),
    );

    let mut lines = load_text_corpus(&spec.data.train, spec.data.min_line_chars)
        .map_err(|e| e.to_string())?;
    if let Some(limit) = args.limit {
        lines.truncate(limit);
    }
    log(
        level,
        LogLevel::Normal,
        &format!("Read {} examples from {}", lines.len(), spec.data.train.display()),
    );

    let records = pipeline.process_batch(&lines);
    let summary = PrepareSummary::from_records(&records, tokenizer.pad_id(), tokenizer.unk_id());
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Prepared {} records ({:.2} predictions/record, {:.2}% unknown tokens)",
            summary.records,
            summary.mean_predictions(),
            summary.unknown_rate() * 100.0
        ),
    );

    if args.dry_run {
        log(level, LogLevel::Normal, "Dry run: output not written");
    } else {
        let written = save_jsonl(&records, &spec.data.output).map_err(|e| e.to_string())?;
        log(
            level,
            LogLevel::Normal,
            &format!("Wrote {written} records to {}", spec.data.output.display()),
        );
    }

    if args.trace {
        if level != LogLevel::Quiet {
            println!("{}", TRACER.report());
        }
        TRACER.disable();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(
        token_ids: Vec<TokenId>,
        positions: Vec<usize>,
        ids: Vec<TokenId>,
        weights: Vec<f32>,
    ) -> TrainingRecord {
        TrainingRecord {
            token_ids,
            mask_positions: positions,
            mask_ids: ids,
            mask_weights: weights,
        }
    }

    #[test]
    fn test_summary_counts() {
        // pad=0, unk=1, mask=2
        let records = vec![
            record(vec![5, 2, 1, 0], vec![1, 0], vec![6, 0], vec![1.0, 0.0]),
            record(vec![2, 2, 0, 0], vec![0, 1], vec![1, 7], vec![1.0, 1.0]),
        ];
        let summary = PrepareSummary::from_records(&records, 0, 1);
        assert_eq!(summary.records, 2);
        assert_eq!(summary.tokens, 5);
        assert_eq!(summary.unknown_tokens, 2);
        assert_eq!(summary.predictions, 3);
        assert_relative_eq!(summary.mean_predictions(), 1.5);
        assert_relative_eq!(summary.unknown_rate(), 0.4);
    }

    #[test]
    fn test_summary_empty() {
        let summary = PrepareSummary::from_records(&[], 0, 1);
        assert_eq!(summary, PrepareSummary::default());
        assert_eq!(summary.mean_predictions(), 0.0);
        assert_eq!(summary.unknown_rate(), 0.0);
    }
}
