//! Error types for the Arcana domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

use crate::budget::Block;

/// The top-level error type for all Arcana operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Input-shape errors ---
    #[error("Invalid reading input: {0}")]
    Input(#[from] InputError),

    // --- Budget errors ---
    #[error("Budget error: {0}")]
    Budget(#[from] BudgetError),

    // --- Corpus errors ---
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Malformed spread input. Raised before reasoning or retrieval run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("No card list was supplied")]
    MissingCards,

    #[error("Unknown spread: {0}")]
    UnknownSpread(String),

    #[error("Spread '{spread}' expects {expected} cards, got {actual}")]
    CountMismatch {
        spread: String,
        expected: usize,
        actual: usize,
    },

    #[error("Card at index {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Card at index {index} names unknown card '{name}'")]
    UnknownCard { index: usize, name: String },

    #[error("Card at index {index} uses position '{position}' which spread '{spread}' does not declare")]
    UnknownPosition {
        index: usize,
        position: String,
        spread: String,
    },

    #[error("Card at index {index} repeats position '{position}'")]
    DuplicatePosition { index: usize, position: String },

    #[error("Card at index {index} repeats card '{name}', which is already in the spread")]
    DuplicateCard { index: usize, name: String },
}

impl InputError {
    /// Index of the offending card entry, when the error concerns one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::MissingField { index, .. }
            | Self::UnknownCard { index, .. }
            | Self::UnknownPosition { index, .. }
            | Self::DuplicatePosition { index, .. }
            | Self::DuplicateCard { index, .. } => Some(*index),
            Self::MissingCards | Self::UnknownSpread(_) | Self::CountMismatch { .. } => None,
        }
    }
}

/// Critical content that cannot fit inside a block budget.
///
/// Fatal to the request. Callers must not retry with a relaxed budget.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    #[error(
        "Critical {block} content needs {critical_tokens} tokens, over the safety margin of a {budget}-token budget by {overflow_pct:.1} points"
    )]
    Exceeded {
        block: Block,
        critical_tokens: usize,
        budget: usize,
        /// Percentage points above the safety margin.
        overflow_pct: f64,
    },
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus at {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse corpus at {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid corpus: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_error_displays_overflow() {
        let err = Error::Budget(BudgetError::Exceeded {
            block: Block::System,
            critical_tokens: 850,
            budget: 1000,
            overflow_pct: 5.0,
        });
        let text = err.to_string();
        assert!(text.contains("850"));
        assert!(text.contains("1000"));
        assert!(text.contains("5.0"));
        assert!(text.contains("system"));
    }

    #[test]
    fn input_error_carries_index() {
        let err = InputError::MissingField {
            index: 2,
            field: "card_name",
        };
        assert_eq!(err.index(), Some(2));
        assert!(err.to_string().contains("card_name"));
        assert_eq!(InputError::MissingCards.index(), None);
    }
}
