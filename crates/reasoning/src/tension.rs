//! Tension identification between pairs of positions.
//!
//! Every unordered pair is scored from three weighted components: valence
//! distance, elemental opposition, and an action/reflection mismatch.
//! Pairs scoring above [`TENSION_THRESHOLD`] are kept, and so is every
//! pair the spread layout itself declares as a key tension.

use arcana_core::{CardInPosition, SpreadLayout, Tension, TensionKind};

use crate::classify::{Mode, mode};

pub const TENSION_THRESHOLD: f64 = 0.45;

const VALENCE_WEIGHT: f64 = 0.6;
const ELEMENT_WEIGHT: f64 = 0.25;
const MODE_WEIGHT: f64 = 0.15;

/// Weighted components of a pair's tension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TensionScore {
    pub valence: f64,
    pub elemental: f64,
    pub mode: f64,
}

impl TensionScore {
    pub fn total(&self) -> f64 {
        self.valence + self.elemental + self.mode
    }

    /// The dominant component; valence wins ties, then element.
    pub fn kind(&self) -> TensionKind {
        if self.valence >= self.elemental && self.valence >= self.mode {
            TensionKind::EmotionalContrast
        } else if self.elemental >= self.mode {
            TensionKind::ElementalOpposition
        } else {
            TensionKind::ActionReflection
        }
    }
}

pub fn score_pair(a: &CardInPosition, va: f64, b: &CardInPosition, vb: f64) -> TensionScore {
    let valence = VALENCE_WEIGHT * ((va - vb).abs() / 2.0);
    let elemental = if a.element().opposes(b.element()) {
        ELEMENT_WEIGHT
    } else {
        0.0
    };
    let mode = match (mode(a), mode(b)) {
        (Some(Mode::Action), Some(Mode::Reflection))
        | (Some(Mode::Reflection), Some(Mode::Action)) => MODE_WEIGHT,
        _ => 0.0,
    };
    TensionScore {
        valence,
        elemental,
        mode,
    }
}

/// Find tensions across the spread.
///
/// `valences` is parallel to `cards`. Layout key tensions come first, then
/// scored pairs in sequence order. A pair is never reported twice.
pub fn find_tensions(
    cards: &[CardInPosition],
    valences: &[f64],
    layout: Option<&SpreadLayout>,
) -> Vec<Tension> {
    let mut tensions: Vec<Tension> = Vec::new();
    let index_of = |position: &str| cards.iter().position(|c| c.position() == position);

    if let Some(layout) = layout {
        for &(pa, pb) in layout.key_tensions {
            let (Some(i), Some(j)) = (index_of(pa), index_of(pb)) else {
                continue;
            };
            let score = score_pair(&cards[i], valences[i], &cards[j], valences[j]);
            let mut tension = describe(&cards[i], &cards[j], score.kind());
            tension
                .description
                .push_str(" The spread sets these positions against each other.");
            tensions.push(tension);
        }
    }

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let (a, b) = (&cards[i], &cards[j]);
            if tensions
                .iter()
                .any(|t| t.involves(a.position()) && t.involves(b.position()))
            {
                continue;
            }
            let score = score_pair(a, valences[i], b, valences[j]);
            if score.total() > TENSION_THRESHOLD {
                tracing::trace!(
                    a = a.position(),
                    b = b.position(),
                    score = score.total(),
                    "tension retained"
                );
                tensions.push(describe(a, b, score.kind()));
            }
        }
    }

    tensions
}

fn describe(a: &CardInPosition, b: &CardInPosition, kind: TensionKind) -> Tension {
    let (pa, pb) = (a.position(), b.position());
    let (la, lb) = (a.label(), b.label());
    let description = match kind {
        TensionKind::EmotionalContrast => format!(
            "{pa} ({la}) and {pb} ({lb}) pull in opposite emotional directions."
        ),
        TensionKind::ElementalOpposition => format!(
            "{pa} ({la}) and {pb} ({lb}) carry opposing elements that must be reconciled."
        ),
        TensionKind::ActionReflection => format!(
            "{pa} ({la}) and {pb} ({lb}) set the urge to act against the need to reflect."
        ),
    };
    Tension {
        position_a: pa.to_string(),
        position_b: pb.to_string(),
        kind,
        description,
    }
}
