//! Spread layouts as data records.
//!
//! Every spread is one configuration: its ordered positions, the default
//! pivot, and the position pairs the layout itself sets against each other.
//! A single generic analyzer consumes these records.

use serde::Serialize;

use crate::card::{CardInPosition, Deck};
use crate::error::InputError;

/// A named, fixed-size arrangement of labeled positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadLayout {
    pub key: &'static str,
    pub name: &'static str,
    pub positions: &'static [&'static str],
    /// Position that carries the most leverage unless a card overrides it.
    pub pivot_default: &'static str,
    /// Pairs always reported as tensions for this layout.
    pub key_tensions: &'static [(&'static str, &'static str)],
}

pub const SPREADS: [SpreadLayout; 6] = [
    SpreadLayout {
        key: "single",
        name: "Single Card",
        positions: &["Focus"],
        pivot_default: "Focus",
        key_tensions: &[],
    },
    SpreadLayout {
        key: "three-card",
        name: "Past, Present, Future",
        positions: &["Past", "Present", "Future"],
        pivot_default: "Present",
        key_tensions: &[],
    },
    SpreadLayout {
        key: "situation-action-outcome",
        name: "Situation, Action, Outcome",
        positions: &["Situation", "Action", "Outcome"],
        pivot_default: "Action",
        key_tensions: &[("Situation", "Outcome")],
    },
    SpreadLayout {
        key: "relationship",
        name: "Relationship",
        positions: &["You", "Them", "Connection", "Challenge", "Potential"],
        pivot_default: "Connection",
        key_tensions: &[("You", "Them")],
    },
    SpreadLayout {
        key: "decision",
        name: "Decision",
        positions: &["Current Path", "Option A", "Option B", "Hidden Factor", "Advice"],
        pivot_default: "Hidden Factor",
        key_tensions: &[("Option A", "Option B")],
    },
    SpreadLayout {
        key: "celtic-cross",
        name: "Celtic Cross",
        positions: &[
            "Present",
            "Challenge",
            "Foundation",
            "Recent Past",
            "Crown",
            "Near Future",
            "Self",
            "Environment",
            "Hopes and Fears",
            "Outcome",
        ],
        pivot_default: "Challenge",
        key_tensions: &[("Present", "Outcome"), ("Hopes and Fears", "Outcome")],
    },
];

impl SpreadLayout {
    /// Find a layout by key.
    pub fn lookup(key: &str) -> Option<&'static SpreadLayout> {
        SPREADS.iter().find(|s| s.key == key.trim())
    }

    /// All compiled-in layouts.
    pub fn all() -> &'static [SpreadLayout] {
        &SPREADS
    }

    pub fn card_count(&self) -> usize {
        self.positions.len()
    }

    pub fn has_position(&self, position: &str) -> bool {
        self.positions.contains(&position)
    }

    /// Resolve a card name against the standard deck and place it.
    ///
    /// This is the only way to construct a [`CardInPosition`]; `index`
    /// identifies the entry in error reports.
    pub fn place(
        &self,
        index: usize,
        card_name: &str,
        position: &str,
        is_reversed: bool,
    ) -> Result<CardInPosition, InputError> {
        if card_name.trim().is_empty() {
            return Err(InputError::MissingField {
                index,
                field: "card_name",
            });
        }
        if position.trim().is_empty() {
            return Err(InputError::MissingField {
                index,
                field: "position",
            });
        }

        let position = position.trim();
        if !self.has_position(position) {
            return Err(InputError::UnknownPosition {
                index,
                position: position.to_string(),
                spread: self.key.to_string(),
            });
        }

        let card = Deck::standard()
            .lookup(card_name)
            .ok_or_else(|| InputError::UnknownCard {
                index,
                name: card_name.to_string(),
            })?;

        Ok(CardInPosition::new(card, position, is_reversed))
    }
}
