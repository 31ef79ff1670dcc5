//! # Arcana Assembler
//!
//! Turns a reading request into two size-bounded text blocks for a
//! downstream generation model.
//!
//! - [`token`]: the structural size estimator
//! - [`assembler`]: per-block budget fitting with critical-content safety
//! - [`validate`]: the input-shape guard that runs before anything else
//! - [`sections`]: builders for the system and user sections
//! - [`pipeline`]: validate → analyze → retrieve → build → assemble

pub mod assembler;
pub mod pipeline;
pub mod sections;
pub mod token;
pub mod validate;

pub use assembler::{AssembledPrompt, AssemblyReport, BlockReport, assemble};
pub use pipeline::{Reading, ReadingPipeline, RetrievalLimits};
pub use token::estimate;
pub use validate::{ValidatedSpread, validate_request};
