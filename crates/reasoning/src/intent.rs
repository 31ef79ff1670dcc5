//! Question intent classification.
//!
//! An ordered rule table is matched against the question; the first rule
//! that matches wins and contributes its fixed confidence.

use arcana_core::{IntentKind, QuestionIntent};
use regex_lite::Regex;
use std::sync::LazyLock;

/// `(intent, confidence, case-insensitive pattern)` in match order.
const RULES: [(IntentKind, f64, &str); 7] = [
    (
        IntentKind::Decision,
        0.9,
        r"(?i)\b(should i (take|go|stay|leave|accept|choose|quit|move|start|stop|wait|sign|buy|sell|keep|end|pursue|apply|return|commit|break|marry)|which (one|path|option|way)|choose|choosing|choice|decide|deciding|decision|or not)\b",
    ),
    (
        IntentKind::Timing,
        0.85,
        r"(?i)\b(when|how long|how soon|timeline|timing|what time)\b",
    ),
    (
        IntentKind::Blockage,
        0.85,
        r"(?i)\b(stuck|blocked|blocking|block|obstacle|obstacles|holding me back|stopping me|why can'?t)\b",
    ),
    (
        IntentKind::Confirmation,
        0.75,
        r"(?i)\b(is it true|am i right|confirm|really|is this the right|was i right)\b",
    ),
    (
        IntentKind::Outcome,
        0.7,
        r"(?i)\b(will|outcome|result|going to happen|what happens|future of|end up)\b",
    ),
    (
        IntentKind::Understanding,
        0.65,
        r"(?i)\b(why|what does|meaning|mean|understand|lesson|what is)\b",
    ),
    (
        IntentKind::Exploration,
        0.5,
        r"(?i)\b(explore|tell me about|insight|guidance|what should i know|in general)\b",
    ),
];

static COMPILED: LazyLock<Vec<(IntentKind, f64, Regex)>> = LazyLock::new(|| {
    RULES
        .iter()
        .filter_map(|(kind, confidence, pattern)| {
            Regex::new(pattern).ok().map(|re| (*kind, *confidence, re))
        })
        .collect()
});

/// Classify a question.
///
/// A blank question has no intent. A question that matches no rule is
/// treated as open exploration with zero confidence.
pub fn classify_intent(question: &str) -> QuestionIntent {
    if question.trim().is_empty() {
        return QuestionIntent::default();
    }

    COMPILED
        .iter()
        .find(|(_, _, re)| re.is_match(question))
        .map(|(kind, confidence, _)| QuestionIntent {
            kind: *kind,
            confidence: *confidence,
        })
        .unwrap_or(QuestionIntent {
            kind: IntentKind::Exploration,
            confidence: 0.0,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_compiles() {
        assert_eq!(COMPILED.len(), RULES.len());
    }

    #[test]
    fn blank_question_has_no_intent() {
        let intent = classify_intent("   ");
        assert_eq!(intent.kind, IntentKind::None);
        assert_eq!(intent.confidence, 0.0);
    }

    #[test]
    fn unmatched_question_is_exploration_with_zero_confidence() {
        let intent = classify_intent("Purple elephants dancing");
        assert_eq!(intent.kind, IntentKind::Exploration);
        assert_eq!(intent.confidence, 0.0);
    }

    #[test]
    fn decision_questions() {
        assert_eq!(
            classify_intent("Should I take the new job?").kind,
            IntentKind::Decision
        );
        assert_eq!(
            classify_intent("Which path leads somewhere good?").kind,
            IntentKind::Decision
        );
    }

    #[test]
    fn open_should_questions_are_exploration() {
        let intent = classify_intent("What should I know about my career?");
        assert_eq!(intent.kind, IntentKind::Exploration);
        assert_eq!(intent.confidence, 0.5);
        assert_eq!(
            classify_intent("Should I leave or stay?").kind,
            IntentKind::Decision
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        // "when" (timing) outranks "will" (outcome)
        let intent = classify_intent("When will I hear back?");
        assert_eq!(intent.kind, IntentKind::Timing);
        assert_eq!(intent.confidence, 0.85);

        // "why can't" is a blockage, not a plain "why"
        assert_eq!(
            classify_intent("Why can't I move forward?").kind,
            IntentKind::Blockage
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_intent("WHY does this keep happening").kind, IntentKind::Understanding);
        assert_eq!(classify_intent("Tell me about my career").kind, IntentKind::Exploration);
    }

    #[test]
    fn confidence_in_unit_range() {
        for (_, confidence, _) in RULES {
            assert!((0.0..=1.0).contains(&confidence));
        }
    }
}
