//! # Arcana Reasoning
//!
//! Deterministic symbolic analysis of a spread. Given validated cards in
//! position and the querent's question, derives the question intent,
//! narrative pattern, tensions, pivot, emotional arc, and per-position
//! emphasis.
//!
//! ```
//! use arcana_core::SpreadLayout;
//!
//! let layout = SpreadLayout::lookup("three-card").unwrap();
//! let cards = vec![
//!     layout.place(0, "The Tower", "Past", false).unwrap(),
//!     layout.place(1, "The Hermit", "Present", false).unwrap(),
//!     layout.place(2, "The Star", "Future", false).unwrap(),
//! ];
//! let result = arcana_reasoning::analyze(&cards, "What comes next?", "three-card");
//! assert_eq!(result.pivot.unwrap().position, "Present");
//! ```

pub mod analyzer;
pub mod arc;
pub mod classify;
pub mod intent;
pub mod patterns;
pub mod tension;

pub use analyzer::analyze;
pub use classify::{ValenceClass, valence, valence_class};
pub use intent::classify_intent;
