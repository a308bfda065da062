//! Corpus input and record output
//!
//! Reads raw-text and labelled TSV corpora and writes pipeline records as
//! JSON Lines.

mod load;
mod save;

pub use load::{load_labeled_corpus, load_text_corpus, parse_labeled_corpus, parse_text_corpus};
pub use save::{load_jsonl, save_jsonl, write_jsonl};
