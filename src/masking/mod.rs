//! Masked-Span Sampling Module
//!
//! Selects a bounded subset of non-padding positions in a token sequence,
//! replaces them (mask token by default), and records the original ids,
//! positions and validity weights as a fixed-length [`MaskPlan`].
//!
//! Randomness is always supplied by the caller.
//!
//! # Example
//!
//! ```
//! use maskprep::masking::{MaskedSpanSampler, MaskingConfig};
//!
//! let sampler = MaskedSpanSampler::new(MaskingConfig::new(0.5, 3), 16, 2, 0).unwrap();
//! let out = sampler.mask_with_seed(&[5, 6, 7, 8, 0, 0], 42);
//!
//! assert_eq!(out.plan.positions.len(), 3);
//! assert_eq!(out.plan.num_masked(), 2);
//! ```

mod config;
mod error;
mod plan;
mod sampler;

pub use config::{
    MaskingConfig, DEFAULT_MASK_SELECTION_LENGTH, DEFAULT_MASK_SELECTION_RATE,
    REPLACEMENT_RATE_EPSILON,
};
pub use error::{MaskingError, Result};
pub use plan::{MaskPlan, MaskedSequence};
pub use sampler::MaskedSpanSampler;
