//! # Arcana Core
//!
//! Domain types, catalogs, and error definitions for the Arcana reading
//! pipeline. This crate has **no I/O**; it defines the domain model that
//! the reasoning, knowledge, and assembler crates work against.
//!
//! ## Contents
//!
//! - The 78-card deck and the validated Card-in-Position value
//! - Spread layouts as data records (positions, pivot default, key tensions)
//! - Reasoning result, knowledge passage, and budget section types
//! - The error taxonomy shared by every crate

pub mod budget;
pub mod card;
pub mod error;
pub mod knowledge;
pub mod reasoning;
pub mod request;
pub mod spread;

// Re-export key types at crate root for ergonomics
pub use budget::{Block, BudgetSection, Style, TokenBudget};
pub use card::{Card, CardInPosition, Deck, Element, Suit, slugify};
pub use error::{BudgetError, CorpusError, Error, InputError, Result};
pub use knowledge::KnowledgePassage;
pub use reasoning::{
    ArcDirection, EmotionalArc, Emphasis, IntentKind, NarrativePattern, Pivot, PositionEmphasis,
    QuestionIntent, ReasoningResult, Tension, TensionKind, ToneBias,
};
pub use request::{DrawnCard, ReadingRequest};
pub use spread::SpreadLayout;
