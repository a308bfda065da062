//! Pipeline Integration Tests
//!
//! End-to-end flows through the public API: vocabulary file → tokenizer →
//! sampler → records → JSONL.

use maskprep::config::{build_finetuning_pipeline, build_pretraining_pipeline, load_config};
use maskprep::io::{load_jsonl, load_labeled_corpus, load_text_corpus, save_jsonl};
use maskprep::masking::{MaskedSpanSampler, MaskingConfig};
use maskprep::pipeline::{ClassificationRecord, TrainingRecord};
use maskprep::tokenizer::{Tokenizer, Vocabulary, WordPieceConfig, WordPieceTokenizer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tempfile::TempDir;

const VOCAB: &str = "[PAD]\n[UNK]\n[MASK]\n[CLS]\nthe\nmovie\nwas\nun\n##able\n##s\ndo\ngreat\n.\n";

fn write_workspace(dir: &TempDir) -> PathBuf {
    std::fs::write(dir.path().join("vocab.txt"), VOCAB).unwrap();
    std::fs::write(
        dir.path().join("wiki.train.raw"),
        " = Heading = \n\nthe movie was great . the movie was doable .\nthe movies was undoable .\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("sst2.tsv"),
        "sentence\tlabel\nthe movie was great .\t1\nthe movie was unable .\t0\n",
    )
    .unwrap();
    let config = dir.path().join("prepare.yaml");
    std::fs::write(
        &config,
        r#"
tokenizer:
  vocab: vocab.txt
  sequence_length: 12
masking:
  mask_selection_rate: 0.25
  mask_selection_length: 4
  unselectable_tokens: ["[CLS]"]
data:
  train: wiki.train.raw
  output: pretrain.jsonl
  min_line_chars: 15
finetune:
  train: sst2.tsv
  output: finetune.jsonl
seed: 2024
"#,
    )
    .unwrap();
    config
}

// ============================================================================
// Tokenizer
// ============================================================================

#[test]
fn test_vocab_file_scenario() {
    let vocab = Vocabulary::from_reader("[PAD]\r\n[UNK]\r\n[MASK]\r\nun\r\n##able\r\ndo\r\n".as_bytes())
        .unwrap();
    let tokenizer = WordPieceTokenizer::new(vocab, WordPieceConfig::new(5)).unwrap();

    let ids = tokenizer.encode("doable");
    assert_eq!(ids, vec![5, 4, 0, 0, 0]);
    assert_eq!(tokenizer.decode(&ids).unwrap(), "doable");
}

#[test]
fn test_tokenizer_unknown_and_truncation() {
    let dir = TempDir::new().unwrap();
    write_workspace(&dir);
    let tokenizer =
        WordPieceTokenizer::from_vocab_file(dir.path().join("vocab.txt"), WordPieceConfig::new(4))
            .unwrap();

    // "xyz" has no prefix in the vocabulary
    assert_eq!(tokenizer.encode("the xyz movie"), vec![4, 1, 5, 0]);
    // truncation keeps the leading ids
    assert_eq!(tokenizer.encode("the movie was great ."), vec![4, 5, 6, 11]);
}

// ============================================================================
// Sampler
// ============================================================================

#[test]
fn test_sampler_scenario() {
    let sampler = MaskedSpanSampler::new(MaskingConfig::new(0.5, 3), 16, 2, 0).unwrap();
    for seed in 0..50 {
        let out = sampler.mask_with_seed(&[5, 6, 7, 8, 0, 0], seed);
        assert_eq!(out.plan.num_masked(), 2);
        assert_eq!(out.plan.weights, vec![1.0, 1.0, 0.0]);
        assert_eq!(out.plan.positions[2], 0);
        assert_eq!(out.plan.original_ids[2], 0);
        for (pos, original) in out.plan.masked() {
            assert!(pos < 4);
            assert_eq!(original, [5, 6, 7, 8][pos]);
            assert_eq!(out.token_ids[pos], 2);
        }
        assert_eq!(&out.token_ids[4..], &[0, 0]);
    }
}

#[test]
fn test_sampler_caller_rng_determinism() {
    let sampler = MaskedSpanSampler::new(MaskingConfig::new(0.3, 8), 100, 2, 0).unwrap();
    let ids: Vec<u32> = (3..60).collect();

    let mut rng_a = StdRng::seed_from_u64(17);
    let mut rng_b = StdRng::seed_from_u64(17);
    let first_a = sampler.mask(&ids, &mut rng_a);
    let first_b = sampler.mask(&ids, &mut rng_b);
    assert_eq!(first_a, first_b);

    // the generator advances between calls
    let second_a = sampler.mask(&ids, &mut rng_a);
    assert_ne!(first_a.plan.positions, second_a.plan.positions);
}

// ============================================================================
// Config-driven pipelines
// ============================================================================

#[test]
fn test_config_to_pretraining_records() {
    let dir = TempDir::new().unwrap();
    let config = write_workspace(&dir);
    let spec = load_config(&config).unwrap();

    let pipeline = build_pretraining_pipeline(&spec).unwrap();
    let lines = load_text_corpus(&spec.data.train, spec.data.min_line_chars).unwrap();
    assert_eq!(lines.len(), 2);

    let records = pipeline.process_batch(&lines);
    let written = save_jsonl(&records, &spec.data.output).unwrap();
    assert_eq!(written, 2);

    let loaded: Vec<TrainingRecord> = load_jsonl(&spec.data.output).unwrap();
    assert_eq!(loaded, records);

    // first line: 11 tokens -> round(2.75) = 3 predictions
    assert_eq!(loaded[0].num_predictions(), 3);
    for record in &loaded {
        assert_eq!(record.token_ids.len(), 12);
        assert_eq!(record.mask_positions.len(), 4);
        assert_eq!(record.mask_ids.len(), 4);
        assert_eq!(record.mask_weights.len(), 4);
    }
}

#[test]
fn test_pretraining_records_independent_of_batching() {
    let dir = TempDir::new().unwrap();
    let config = write_workspace(&dir);
    let spec = load_config(&config).unwrap();
    let pipeline = build_pretraining_pipeline(&spec).unwrap();
    let lines = load_text_corpus(&spec.data.train, spec.data.min_line_chars).unwrap();

    let whole = pipeline.process_batch(&lines);
    let mut pieces = pipeline.process_batch_from(&lines[..1], 0);
    pieces.extend(pipeline.process_batch_from(&lines[1..], 1));
    assert_eq!(whole, pieces);
}

#[test]
fn test_config_to_classification_records() {
    let dir = TempDir::new().unwrap();
    let config = write_workspace(&dir);
    let spec = load_config(&config).unwrap();
    let finetune = spec.finetune.clone().unwrap();

    let pipeline = build_finetuning_pipeline(&spec).unwrap();
    let examples = load_labeled_corpus(&finetune.train, finetune.num_classes).unwrap();
    let records = pipeline.process_batch(&examples);
    save_jsonl(&records, &finetune.output).unwrap();

    let loaded: Vec<ClassificationRecord> = load_jsonl(&finetune.output).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].token_ids[..5], [4, 5, 6, 11, 12]);
    assert_eq!(loaded[1].token_ids[..6], [4, 5, 6, 7, 8, 12]);
    assert_eq!(loaded[1].label, 0);
}

#[test]
fn test_unselectable_token_never_masked() {
    let tokenizer = WordPieceTokenizer::from_tokens(
        ["[PAD]", "[UNK]", "[MASK]", "[CLS]", "a", "b"],
        WordPieceConfig::new(6),
    )
    .unwrap();
    let sampler =
        MaskedSpanSampler::for_tokenizer(&tokenizer, MaskingConfig::new(1.0, 6).with_unselectable([3]))
            .unwrap();

    let out = sampler.mask_with_seed(&[3, 4, 5, 4, 0, 0], 9);
    assert_eq!(out.plan.positions, vec![1, 2, 3, 0, 0, 0]);
    assert_eq!(out.plan.original_ids, vec![4, 5, 4, 0, 0, 0]);
    assert_eq!(out.token_ids, vec![3, 2, 2, 2, 0, 0]);
}
