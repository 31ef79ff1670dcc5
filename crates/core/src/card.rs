//! Card catalog and the Card-in-Position value.
//!
//! The standard deck is built once on first use and shared read-only.
//! Lookups are case- and whitespace-insensitive, and the leading "The"
//! of a Major Arcana title is optional.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Minor Arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }

    /// Classical element of the suit.
    pub fn element(&self) -> Element {
        match self {
            Self::Wands => Element::Fire,
            Self::Cups => Element::Water,
            Self::Swords => Element::Air,
            Self::Pentacles => Element::Earth,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classical element attributed to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl Element {
    /// Fire opposes Water, Air opposes Earth.
    pub fn opposes(&self, other: Element) -> bool {
        matches!(
            (self, other),
            (Element::Fire, Element::Water)
                | (Element::Water, Element::Fire)
                | (Element::Air, Element::Earth)
                | (Element::Earth, Element::Air)
        )
    }
}

/// A catalog entry: one card of the deck, independent of any reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub is_major: bool,
    /// 0–21 for Major Arcana, 1–14 (Ace … King) for Minor Arcana.
    pub rank_value: u8,
    pub suit: Option<Suit>,
    pub element: Element,
}

impl Card {
    /// URL-style identifier, e.g. `three-of-swords`.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

const MAJOR_ARCANA: [(&str, Element); 22] = [
    ("The Fool", Element::Air),
    ("The Magician", Element::Air),
    ("The High Priestess", Element::Water),
    ("The Empress", Element::Earth),
    ("The Emperor", Element::Fire),
    ("The Hierophant", Element::Earth),
    ("The Lovers", Element::Air),
    ("The Chariot", Element::Water),
    ("Strength", Element::Fire),
    ("The Hermit", Element::Earth),
    ("Wheel of Fortune", Element::Fire),
    ("Justice", Element::Air),
    ("The Hanged Man", Element::Water),
    ("Death", Element::Water),
    ("Temperance", Element::Fire),
    ("The Devil", Element::Earth),
    ("The Tower", Element::Fire),
    ("The Star", Element::Air),
    ("The Moon", Element::Water),
    ("The Sun", Element::Fire),
    ("Judgement", Element::Fire),
    ("The World", Element::Earth),
];

const RANK_NAMES: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

static STANDARD_DECK: LazyLock<Deck> = LazyLock::new(Deck::build_standard);

/// The 78-card deck with a normalized-name index.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    index: HashMap<String, usize>,
}

impl Deck {
    /// The shared standard deck.
    pub fn standard() -> &'static Deck {
        &STANDARD_DECK
    }

    fn build_standard() -> Self {
        let mut cards = Vec::with_capacity(78);

        for (number, (name, element)) in MAJOR_ARCANA.iter().enumerate() {
            cards.push(Card {
                name: (*name).to_string(),
                is_major: true,
                rank_value: number as u8,
                suit: None,
                element: *element,
            });
        }

        for suit in Suit::ALL {
            for (i, rank) in RANK_NAMES.iter().enumerate() {
                cards.push(Card {
                    name: format!("{} of {}", rank, suit.title()),
                    is_major: false,
                    rank_value: (i + 1) as u8,
                    suit: Some(suit),
                    element: suit.element(),
                });
            }
        }

        let index = cards
            .iter()
            .enumerate()
            .map(|(i, c)| (normalize_name(&c.name), i))
            .collect();

        Self { cards, index }
    }

    /// Find a card by name.
    pub fn lookup(&self, name: &str) -> Option<&Card> {
        self.index.get(&normalize_name(name)).map(|&i| &self.cards[i])
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Lower-case, collapse whitespace, and drop a leading "the".
fn normalize_name(name: &str) -> String {
    let collapsed = name
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    match collapsed.strip_prefix("the ") {
        Some(rest) => rest.to_string(),
        None => collapsed,
    }
}

/// Lower-case kebab form of a label: `Hopes and Fears` → `hopes-and-fears`.
pub fn slugify(label: &str) -> String {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// A drawn card placed in a named position of a spread.
///
/// Only [`crate::spread::SpreadLayout::place`] constructs it, so the card
/// name is always non-empty and the position always belongs to the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardInPosition {
    card_name: String,
    is_major: bool,
    rank_value: Option<u8>,
    suit: Option<Suit>,
    element: Element,
    position: String,
    is_reversed: bool,
}

impl CardInPosition {
    pub(crate) fn new(card: &Card, position: &str, is_reversed: bool) -> Self {
        Self {
            card_name: card.name.clone(),
            is_major: card.is_major,
            rank_value: Some(card.rank_value),
            suit: card.suit,
            element: card.element,
            position: position.to_string(),
            is_reversed,
        }
    }

    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    pub fn is_major(&self) -> bool {
        self.is_major
    }

    pub fn rank_value(&self) -> Option<u8> {
        self.rank_value
    }

    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    pub fn card_slug(&self) -> String {
        slugify(&self.card_name)
    }

    /// "The Sun (upright)" / "Three of Swords (reversed)".
    pub fn label(&self) -> String {
        let orientation = if self.is_reversed { "reversed" } else { "upright" };
        format!("{} ({})", self.card_name, orientation)
    }
}
