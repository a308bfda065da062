//! # maskprep
//!
//! Data preparation for BERT-style MaskedLM pretraining and sentence
//! classification fine-tuning.
//!
//! - **tokenizer**: WordPiece segmentation to fixed-length id sequences
//! - **masking**: masked-span sampling with fixed-length recovery plans
//! - **pipeline**: text → training records, batched on rayon
//! - **io**: corpus readers and JSON Lines output
//! - **config**: declarative YAML configuration and CLI arguments
//! - **trace**: optional per-stage timing
//!
//! # Example
//!
//! ```
//! use maskprep::masking::MaskingConfig;
//! use maskprep::pipeline::PretrainingPipeline;
//! use maskprep::tokenizer::{WordPieceConfig, WordPieceTokenizer};
//!
//! fn example() -> maskprep::Result<()> {
//!     let vocab = ["[PAD]", "[UNK]", "[MASK]", "the", "movie", "was", "great"];
//!     let tokenizer = WordPieceTokenizer::from_tokens(vocab, WordPieceConfig::new(8))?;
//!     let pipeline = PretrainingPipeline::with_masking(tokenizer, MaskingConfig::new(0.5, 4), 42)?;
//!
//!     let record = pipeline.process("The movie was great", 0);
//!     assert_eq!(record.token_ids.len(), 8);
//!     assert_eq!(record.mask_positions.len(), 4);
//!     assert_eq!(record.num_predictions(), 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod masking;
pub mod pipeline;
pub mod tokenizer;
pub mod trace;

pub use error::{Error, Result};
