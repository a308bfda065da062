//! Data Preparation Pipelines
//!
//! - [`PretrainingPipeline`]: text → fixed-length ids → masked [`TrainingRecord`]
//! - [`FinetuningPipeline`]: labelled sentence → [`ClassificationRecord`]
//!
//! Batches run on rayon's pool; output order always matches input order.

mod finetune;
mod pretrain;
mod record;

pub use finetune::FinetuningPipeline;
pub use pretrain::PretrainingPipeline;
pub use record::{ClassificationRecord, LabeledText, TrainingRecord};
