//! Corpus readers

use std::fs;
use std::path::Path;

use crate::pipeline::LabeledText;
use crate::trace::{TraceStep, TRACER};
use crate::{Error, Result};

const TSV_HEADER: &str = "sentence\tlabel";

/// Read a plain-text corpus, one example per line.
///
/// Lines are trimmed; lines with fewer than `min_line_chars` characters
/// (and blank lines) are skipped.
pub fn load_text_corpus(path: impl AsRef<Path>, min_line_chars: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = TRACER
        .span(TraceStep::Io, || fs::read_to_string(path))
        .map_err(|e| Error::Io(format!("Corpus file not found: {}: {e}", path.display())))?;
    Ok(parse_text_corpus(&content, min_line_chars))
}

/// Filter corpus text held in memory.
pub fn parse_text_corpus(content: &str, min_line_chars: usize) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.chars().count() >= min_line_chars)
        .map(String::from)
        .collect()
}

/// Read a labelled `sentence<TAB>label` corpus.
///
/// An optional `sentence\tlabel` header line is skipped. Every label must be
/// below `num_classes`.
pub fn load_labeled_corpus(path: impl AsRef<Path>, num_classes: usize) -> Result<Vec<LabeledText>> {
    let path = path.as_ref();
    let content = TRACER
        .span(TraceStep::Io, || fs::read_to_string(path))
        .map_err(|e| Error::Io(format!("Corpus file not found: {}: {e}", path.display())))?;
    parse_labeled_corpus(&content, num_classes)
}

/// Parse labelled TSV text held in memory.
pub fn parse_labeled_corpus(content: &str, num_classes: usize) -> Result<Vec<LabeledText>> {
    let mut examples = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if line_num == 0 && line.trim().eq_ignore_ascii_case(TSV_HEADER) {
            continue;
        }

        let (sentence, label) = line.rsplit_once('\t').ok_or_else(|| {
            Error::ConfigError(format!(
                "Missing tab separator at line {}: expected 'sentence<TAB>label'",
                line_num + 1
            ))
        })?;
        let label: usize = label.trim().parse().map_err(|e| {
            Error::ConfigError(format!("Invalid label '{}' at line {}: {e}", label.trim(), line_num + 1))
        })?;
        if label >= num_classes {
            return Err(Error::ConfigError(format!(
                "Label {label} at line {} out of range (num_classes={num_classes})",
                line_num + 1
            )));
        }

        examples.push(LabeledText::new(sentence.trim(), label));
    }

    Ok(examples)
}
