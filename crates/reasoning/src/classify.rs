//! Card classification tables: valence class, valence value, and the
//! action/reflection axis.

use arcana_core::{CardInPosition, Suit};

/// Cards whose upright reading is broadly favourable.
pub const POSITIVE: &[&str] = &[
    "The Sun",
    "The Star",
    "The World",
    "The Empress",
    "The Lovers",
    "Strength",
    "The Magician",
    "The Chariot",
    "Ace of Wands",
    "Three of Wands",
    "Four of Wands",
    "Six of Wands",
    "Ace of Cups",
    "Two of Cups",
    "Three of Cups",
    "Six of Cups",
    "Nine of Cups",
    "Ten of Cups",
    "Ace of Swords",
    "Ace of Pentacles",
    "Six of Pentacles",
    "Nine of Pentacles",
    "Ten of Pentacles",
];

/// Cards whose upright reading signals difficulty.
pub const CHALLENGING: &[&str] = &[
    "The Tower",
    "The Devil",
    "The Moon",
    "Five of Wands",
    "Ten of Wands",
    "Five of Cups",
    "Seven of Cups",
    "Two of Swords",
    "Three of Swords",
    "Five of Swords",
    "Seven of Swords",
    "Eight of Swords",
    "Nine of Swords",
    "Ten of Swords",
    "Four of Pentacles",
    "Five of Pentacles",
];

/// Thresholds and passages: high narrative leverage.
pub const TRANSITIONAL: &[&str] = &[
    "The Fool",
    "Wheel of Fortune",
    "The Hanged Man",
    "Death",
    "Temperance",
    "Judgement",
    "Eight of Cups",
    "Six of Swords",
];

const ACTION_MAJORS: &[&str] = &[
    "The Magician",
    "The Emperor",
    "The Chariot",
    "Strength",
    "Wheel of Fortune",
    "The Tower",
    "The Sun",
    "Judgement",
];

const REFLECTION_MAJORS: &[&str] = &[
    "The High Priestess",
    "The Hermit",
    "The Hanged Man",
    "The Star",
    "The Moon",
    "Temperance",
];

const POSITIVE_VALENCE: f64 = 0.8;
const CHALLENGING_VALENCE: f64 = -0.8;

/// Valence at or above this reads as positive; its negation as challenging.
pub const VALENCE_CUTOFF: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValenceClass {
    Positive,
    Challenging,
    Transitional,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Action,
    Reflection,
}

/// Table class of a card, ignoring orientation.
pub fn valence_class(card: &CardInPosition) -> ValenceClass {
    let name = card.card_name();
    if POSITIVE.contains(&name) {
        ValenceClass::Positive
    } else if CHALLENGING.contains(&name) {
        ValenceClass::Challenging
    } else if TRANSITIONAL.contains(&name) {
        ValenceClass::Transitional
    } else {
        ValenceClass::Neutral
    }
}

pub fn is_transitional(card: &CardInPosition) -> bool {
    valence_class(card) == ValenceClass::Transitional
}

/// Numeric valence in `[-1, 1]`.
///
/// Reversal halves the upright value and pulls it slightly negative.
pub fn valence(card: &CardInPosition) -> f64 {
    let base = match valence_class(card) {
        ValenceClass::Positive => POSITIVE_VALENCE,
        ValenceClass::Challenging => CHALLENGING_VALENCE,
        ValenceClass::Transitional | ValenceClass::Neutral => 0.0,
    };

    let value = if card.is_reversed() {
        base * 0.5 - 0.15
    } else {
        base
    };
    value.clamp(-1.0, 1.0)
}

/// Action/reflection axis. Majors come from named sets; minors from suit.
pub fn mode(card: &CardInPosition) -> Option<Mode> {
    let name = card.card_name();
    if card.is_major() {
        if ACTION_MAJORS.contains(&name) {
            Some(Mode::Action)
        } else if REFLECTION_MAJORS.contains(&name) {
            Some(Mode::Reflection)
        } else {
            None
        }
    } else {
        match card.suit()? {
            Suit::Wands | Suit::Pentacles => Some(Mode::Action),
            Suit::Cups | Suit::Swords => Some(Mode::Reflection),
        }
    }
}
