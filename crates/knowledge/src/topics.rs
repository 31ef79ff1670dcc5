//! Topic keys derived from a spread and its reasoning result.

use arcana_core::{CardInPosition, ReasoningResult, SpreadLayout, slugify};

/// Ordered, duplicate-free topic keys.
///
/// Card keys come first (most specific), then suits, the major-arcana and
/// reversal keys, positions, the narrative pattern, and the spread itself.
pub fn topic_keys(
    cards: &[CardInPosition],
    reasoning: &ReasoningResult,
    layout: Option<&SpreadLayout>,
) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut push = |key: String| {
        if !keys.contains(&key) {
            keys.push(key);
        }
    };

    for card in cards {
        push(format!("card:{}", card.card_slug()));
    }
    for card in cards {
        if let Some(suit) = card.suit() {
            push(format!("suit:{suit}"));
        }
    }
    if cards.iter().any(CardInPosition::is_major) {
        push("major-arcana".to_string());
    }
    if cards.iter().any(CardInPosition::is_reversed) {
        push("reversed".to_string());
    }
    for card in cards {
        push(format!("position:{}", slugify(card.position())));
    }
    if !cards.is_empty() {
        push(format!("pattern:{}", reasoning.narrative_pattern.as_str()));
    }
    if let Some(layout) = layout {
        push(format!("spread:{}", layout.key));
    }

    keys
}
