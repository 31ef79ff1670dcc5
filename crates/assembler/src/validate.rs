//! Input-shape guard.
//!
//! Runs before reasoning or retrieval. A malformed request is rejected
//! with the offending index; it is never coerced into a fallback reading.

use arcana_core::{CardInPosition, InputError, ReadingRequest, SpreadLayout};
use std::collections::HashSet;

/// A request that passed the guard.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSpread {
    pub layout: &'static SpreadLayout,
    pub cards: Vec<CardInPosition>,
}

/// Check a raw request and place its cards.
///
/// Checks run in order: card list present, spread known, count matches,
/// then each entry (required fields, declared position, known card,
/// position not repeated, card not repeated).
///
/// Cards are compared by their catalog name, so `the sun` repeats `The Sun`.
pub fn validate_request(request: &ReadingRequest) -> Result<ValidatedSpread, InputError> {
    let drawn = match request.cards.as_deref() {
        None | Some([]) => return Err(InputError::MissingCards),
        Some(drawn) => drawn,
    };

    let layout = SpreadLayout::lookup(&request.spread_key)
        .ok_or_else(|| InputError::UnknownSpread(request.spread_key.clone()))?;

    if drawn.len() != layout.card_count() {
        return Err(InputError::CountMismatch {
            spread: layout.key.to_string(),
            expected: layout.card_count(),
            actual: drawn.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut drawn_cards = HashSet::new();
    let mut cards = Vec::with_capacity(drawn.len());
    for (index, entry) in drawn.iter().enumerate() {
        let card_name = entry.card_name.as_deref().ok_or(InputError::MissingField {
            index,
            field: "card_name",
        })?;
        let position = entry.position.as_deref().ok_or(InputError::MissingField {
            index,
            field: "position",
        })?;

        let card = layout.place(index, card_name, position, entry.reversed)?;
        if !seen.insert(card.position().to_string()) {
            return Err(InputError::DuplicatePosition {
                index,
                position: card.position().to_string(),
            });
        }
        if !drawn_cards.insert(card.card_name().to_string()) {
            return Err(InputError::DuplicateCard {
                index,
                name: card.card_name().to_string(),
            });
        }
        cards.push(card);
    }

    Ok(ValidatedSpread { layout, cards })
}
