//! Narrative pattern detection.
//!
//! Each candidate pattern is a predicate over the per-card profile.
//! Predicates are tried in a fixed priority order and the first one that
//! holds names the pattern; `Crossroads` is the fallback.

use arcana_core::NarrativePattern;

use crate::classify::VALENCE_CUTOFF;

/// What the pattern predicates see of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardProfile {
    pub valence: f64,
    pub transitional: bool,
    pub major: bool,
}

impl CardProfile {
    fn positive(&self) -> bool {
        self.valence >= VALENCE_CUTOFF
    }

    fn challenging(&self) -> bool {
        self.valence <= -VALENCE_CUTOFF
    }
}

type Predicate = fn(&[CardProfile]) -> bool;

const PRIORITY: [(NarrativePattern, Predicate); 7] = [
    (NarrativePattern::StruggleToResolution, struggle_to_resolution),
    (NarrativePattern::DeclineWarning, decline_warning),
    (NarrativePattern::Transformation, transformation),
    (NarrativePattern::FatedJourney, fated_journey),
    (NarrativePattern::SteadyGrowth, steady_growth),
    (NarrativePattern::SustainedChallenge, sustained_challenge),
    (NarrativePattern::SustainedHarmony, sustained_harmony),
];

pub fn detect_pattern(profiles: &[CardProfile]) -> NarrativePattern {
    PRIORITY
        .iter()
        .find(|(_, holds)| holds(profiles))
        .map(|(pattern, _)| *pattern)
        .unwrap_or(NarrativePattern::Crossroads)
}

fn endpoints(p: &[CardProfile]) -> Option<(&CardProfile, &CardProfile)> {
    if p.len() < 2 {
        return None;
    }
    Some((p.first()?, p.last()?))
}

fn struggle_to_resolution(p: &[CardProfile]) -> bool {
    endpoints(p).is_some_and(|(first, last)| first.challenging() && last.positive())
}

fn decline_warning(p: &[CardProfile]) -> bool {
    endpoints(p).is_some_and(|(first, last)| first.positive() && last.challenging())
}

fn transformation(p: &[CardProfile]) -> bool {
    let transitional = p.iter().filter(|c| c.transitional).count();
    transitional >= 1 && transitional * 3 >= p.len()
}

fn fated_journey(p: &[CardProfile]) -> bool {
    p.len() >= 3 && p.iter().filter(|c| c.major).count() * 2 > p.len()
}

fn steady_growth(p: &[CardProfile]) -> bool {
    endpoints(p).is_some_and(|(first, last)| {
        last.valence > first.valence && p.windows(2).all(|w| w[1].valence >= w[0].valence)
    })
}

fn sustained_challenge(p: &[CardProfile]) -> bool {
    !p.is_empty() && p.iter().filter(|c| c.challenging()).count() * 2 > p.len()
}

fn sustained_harmony(p: &[CardProfile]) -> bool {
    !p.is_empty() && p.iter().filter(|c| c.positive()).count() * 2 > p.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(valence: f64) -> CardProfile {
        CardProfile {
            valence,
            transitional: false,
            major: false,
        }
    }

    fn major(valence: f64) -> CardProfile {
        CardProfile {
            major: true,
            ..card(valence)
        }
    }

    fn threshold() -> CardProfile {
        CardProfile {
            transitional: true,
            ..card(0.0)
        }
    }

    #[test]
    fn empty_spread_is_crossroads() {
        assert_eq!(detect_pattern(&[]), NarrativePattern::Crossroads);
    }

    #[test]
    fn struggle_then_light() {
        let p = [card(-0.55), card(0.0), card(0.8)];
        assert_eq!(detect_pattern(&p), NarrativePattern::StruggleToResolution);
    }

    #[test]
    fn light_then_struggle() {
        let p = [card(0.8), card(0.0), card(-0.8)];
        assert_eq!(detect_pattern(&p), NarrativePattern::DeclineWarning);
    }

    #[test]
    fn transitional_cards_signal_transformation() {
        let p = [card(0.0), threshold(), card(0.0)];
        assert_eq!(detect_pattern(&p), NarrativePattern::Transformation);
        assert_eq!(detect_pattern(&[threshold()]), NarrativePattern::Transformation);
    }

    #[test]
    fn major_heavy_spread_is_fated() {
        let p = [major(0.0), major(0.0), card(0.0)];
        assert_eq!(detect_pattern(&p), NarrativePattern::FatedJourney);
    }

    #[test]
    fn rising_valence_is_growth() {
        let p = [card(0.0), card(0.0), card(0.25)];
        assert_eq!(detect_pattern(&p), NarrativePattern::SteadyGrowth);
    }

    #[test]
    fn majority_patterns() {
        let hard = [card(-0.8), card(-0.8), card(0.0), card(-0.8)];
        assert_eq!(detect_pattern(&hard), NarrativePattern::SustainedChallenge);

        let bright = [card(0.8), card(0.0), card(0.8)];
        assert_eq!(detect_pattern(&bright), NarrativePattern::SustainedHarmony);
    }

    #[test]
    fn priority_order_is_respected() {
        // Also a majority-challenging spread, but the endpoints win first.
        let p = [card(-0.8), card(-0.8), card(-0.8), card(0.8)];
        assert_eq!(detect_pattern(&p), NarrativePattern::StruggleToResolution);
    }
}
