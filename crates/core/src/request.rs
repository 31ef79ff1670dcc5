//! Raw reading requests as they arrive from upstream collaborators.
//!
//! Nothing here is validated; the assembler's input guard turns a request
//! into placed cards or rejects it with an [`crate::InputError`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One drawn card as supplied by the card-draw collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    #[serde(default)]
    pub card_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub reversed: bool,
}

impl DrawnCard {
    pub fn new(card_name: &str, position: &str, reversed: bool) -> Self {
        Self {
            card_name: Some(card_name.to_string()),
            position: Some(position.to_string()),
            reversed,
        }
    }
}

/// Everything the pipeline needs for one reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub spread_key: String,
    /// `None` means the upstream collaborator sent no card list at all.
    #[serde(default)]
    pub cards: Option<Vec<DrawnCard>>,
    #[serde(default)]
    pub question: String,
    /// Free-text reflections keyed by position label.
    #[serde(default)]
    pub reflections: BTreeMap<String, String>,
}
