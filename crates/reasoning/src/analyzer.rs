//! The symbolic reasoning analyzer.
//!
//! `analyze` is a pure function: no randomness, no clock, no I/O.
//! Identical inputs always produce identical results.

use arcana_core::{
    CardInPosition, Emphasis, EmotionalArc, Pivot, PositionEmphasis, ReasoningResult,
    SpreadLayout, Tension,
};
use tracing::debug;

use crate::arc::emotional_arc;
use crate::classify::{is_transitional, valence};
use crate::intent::classify_intent;
use crate::patterns::{CardProfile, detect_pattern};
use crate::tension::find_tensions;

/// Derive narrative structure from a spread.
///
/// An unknown `spread_key` is tolerated: the spread then has no default
/// pivot and no key tensions. Empty `cards` yields neutral defaults with
/// the question intent still classified.
pub fn analyze(cards: &[CardInPosition], question: &str, spread_key: &str) -> ReasoningResult {
    let question_intent = classify_intent(question);

    if cards.is_empty() {
        debug!(spread = spread_key, "no cards to analyze, returning neutral result");
        return ReasoningResult {
            question_intent,
            ..ReasoningResult::default()
        };
    }

    let layout = SpreadLayout::lookup(spread_key);
    let valences: Vec<f64> = cards.iter().map(valence).collect();

    let profiles: Vec<CardProfile> = cards
        .iter()
        .zip(&valences)
        .map(|(card, &valence)| CardProfile {
            valence,
            transitional: is_transitional(card),
            major: card.is_major(),
        })
        .collect();

    let narrative_pattern = detect_pattern(&profiles);
    let tensions = find_tensions(cards, &valences, layout);
    let pivot = find_pivot(cards, layout);
    let emotional_arc = emotional_arc(cards, &valences);
    let emphasis = emphasis_map(cards, pivot.as_ref(), &tensions, &emotional_arc);

    debug!(
        spread = spread_key,
        cards = cards.len(),
        intent = question_intent.kind.as_str(),
        pattern = narrative_pattern.as_str(),
        tensions = tensions.len(),
        pivot = pivot.as_ref().map(|p| p.position.as_str()).unwrap_or("-"),
        direction = emotional_arc.direction.as_str(),
        "spread analyzed"
    );

    ReasoningResult {
        question_intent,
        narrative_pattern,
        tensions,
        pivot,
        emotional_arc,
        emphasis,
    }
}

/// Pick the leverage point.
///
/// The layout's default pivot holds unless a transitional card sits
/// elsewhere while the default position's own card is not transitional.
fn find_pivot(cards: &[CardInPosition], layout: Option<&SpreadLayout>) -> Option<Pivot> {
    let first_transitional = cards.iter().position(is_transitional);
    let default = layout.and_then(|l| {
        cards
            .iter()
            .position(|c| c.position() == l.pivot_default)
    });

    let (index, justification) = match (default, first_transitional) {
        (Some(d), _) if is_transitional(&cards[d]) => (
            d,
            format!(
                "{} is this spread's natural turning point, and {} doubles its leverage as a threshold card.",
                cards[d].position(),
                cards[d].card_name()
            ),
        ),
        (_, Some(t)) => (
            t,
            format!(
                "{} carries the threshold energy of {}, so it outweighs the spread's usual focal position.",
                cards[t].position(),
                cards[t].card_name()
            ),
        ),
        (Some(d), None) => (
            d,
            format!(
                "{} is the spread's natural turning point, linking what came before to what follows.",
                cards[d].position()
            ),
        ),
        (None, None) => (
            0,
            format!(
                "{} opens the reading and anchors every other position.",
                cards.first()?.position()
            ),
        ),
    };

    Some(Pivot {
        position: cards.get(index)?.position().to_string(),
        justification,
    })
}

fn emphasis_map(
    cards: &[CardInPosition],
    pivot: Option<&Pivot>,
    tensions: &[Tension],
    arc: &EmotionalArc,
) -> Vec<PositionEmphasis> {
    cards
        .iter()
        .map(|card| {
            let position = card.position();
            let high = pivot.is_some_and(|p| p.position == position)
                || tensions.iter().any(|t| t.involves(position))
                || arc.peak_position.as_deref() == Some(position)
                || arc.valley_position.as_deref() == Some(position);

            let weight = if high {
                Emphasis::High
            } else if card.is_major() {
                Emphasis::Moderate
            } else {
                Emphasis::Normal
            };

            PositionEmphasis {
                position: position.to_string(),
                weight,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::{ArcDirection, IntentKind, NarrativePattern, TensionKind};

    fn place(key: &str, cards: &[(&str, &str, bool)]) -> Vec<CardInPosition> {
        let layout = SpreadLayout::lookup(key).unwrap();
        cards
            .iter()
            .enumerate()
            .map(|(i, (name, pos, rev))| layout.place(i, name, pos, *rev).unwrap())
            .collect()
    }

    fn past_present_future() -> Vec<CardInPosition> {
        place(
            "three-card",
            &[
                ("Three of Swords", "Past", true),
                ("The Hermit", "Present", false),
                ("The Sun", "Future", false),
            ],
        )
    }

    #[test]
    fn three_card_reading() {
        let result = analyze(&past_present_future(), "", "three-card");

        assert_eq!(result.question_intent.kind, IntentKind::None);
        assert_eq!(result.emotional_arc.direction, ArcDirection::Ascending);
        assert_eq!(result.pivot.as_ref().unwrap().position, "Present");
        assert_eq!(result.tensions.len(), 1);
        assert_eq!(result.tensions[0].position_a, "Past");
        assert_eq!(result.tensions[0].position_b, "Future");
        assert_eq!(result.tensions[0].kind, TensionKind::EmotionalContrast);
        assert_eq!(
            result.narrative_pattern,
            NarrativePattern::StruggleToResolution
        );
        assert_eq!(result.emotional_arc.peak_position.as_deref(), Some("Future"));
        assert_eq!(result.emotional_arc.valley_position.as_deref(), Some("Past"));
    }

    #[test]
    fn three_card_emphasis() {
        let result = analyze(&past_present_future(), "", "three-card");
        assert_eq!(result.emphasis.len(), 3);
        assert_eq!(result.emphasis_for("Past"), Emphasis::High);
        assert_eq!(result.emphasis_for("Present"), Emphasis::High);
        assert_eq!(result.emphasis_for("Future"), Emphasis::High);
    }

    #[test]
    fn major_outside_focus_is_moderate() {
        let cards = place(
            "celtic-cross",
            &[
                ("Four of Cups", "Present", false),
                ("Two of Pentacles", "Challenge", false),
                ("Four of Cups", "Foundation", false),
                ("Four of Cups", "Recent Past", false),
                ("The Hermit", "Crown", false),
                ("Four of Cups", "Near Future", false),
                ("Four of Cups", "Self", false),
                ("Four of Cups", "Environment", false),
                ("Four of Cups", "Hopes and Fears", false),
                ("Four of Cups", "Outcome", false),
            ],
        );
        let result = analyze(&cards, "", "celtic-cross");
        assert_eq!(result.emphasis_for("Crown"), Emphasis::Moderate);
        assert_eq!(result.emphasis_for("Environment"), Emphasis::Normal);
        assert_eq!(result.emphasis_for("Challenge"), Emphasis::High);
        assert_eq!(result.emphasis_for("Outcome"), Emphasis::High);
    }

    #[test]
    fn transitional_card_overrides_default_pivot() {
        let cards = place(
            "three-card",
            &[
                ("Death", "Past", false),
                ("Four of Cups", "Present", false),
                ("The Star", "Future", false),
            ],
        );
        let pivot = analyze(&cards, "", "three-card").pivot.unwrap();
        assert_eq!(pivot.position, "Past");
        assert!(pivot.justification.contains("Death"));
    }

    #[test]
    fn transitional_default_keeps_pivot() {
        let cards = place(
            "three-card",
            &[
                ("Death", "Past", false),
                ("Wheel of Fortune", "Present", false),
                ("The Star", "Future", false),
            ],
        );
        let pivot = analyze(&cards, "", "three-card").pivot.unwrap();
        assert_eq!(pivot.position, "Present");
    }

    #[test]
    fn unknown_spread_falls_back_to_first_card() {
        let cards = place("three-card", &[("The Hermit", "Past", false)]);
        let result = analyze(&cards, "", "no-such-spread");
        assert_eq!(result.pivot.unwrap().position, "Past");
    }

    #[test]
    fn empty_cards_give_neutral_result() {
        let result = analyze(&[], "Should I move abroad?", "three-card");
        assert!(result.pivot.is_none());
        assert!(result.tensions.is_empty());
        assert!(result.emphasis.is_empty());
        assert_eq!(result.emotional_arc.direction, ArcDirection::Flat);
        assert_eq!(result.narrative_pattern, NarrativePattern::Crossroads);
        assert_eq!(result.question_intent.kind, IntentKind::Decision);
    }

    #[test]
    fn analysis_is_deterministic() {
        let cards = past_present_future();
        let a = analyze(&cards, "Will things improve?", "three-card");
        let b = analyze(&cards, "Will things improve?", "three-card");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
