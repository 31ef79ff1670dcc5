//! Emotional arc across the spread sequence.

use arcana_core::{ArcDirection, CardInPosition, EmotionalArc};

/// Start/end differences smaller than this read as flat.
pub const FLAT_EPSILON: f64 = 0.1;

/// Build the arc from parallel card and valence slices.
///
/// Peak and valley scan the whole sequence, not just the endpoints; ties
/// resolve to the earliest position.
pub fn emotional_arc(cards: &[CardInPosition], valences: &[f64]) -> EmotionalArc {
    let (Some(&start), Some(&end)) = (valences.first(), valences.last()) else {
        return EmotionalArc::default();
    };

    let delta = end - start;
    let direction = if delta.abs() < FLAT_EPSILON {
        ArcDirection::Flat
    } else if delta > 0.0 {
        ArcDirection::Ascending
    } else {
        ArcDirection::Descending
    };

    let mut peak = 0;
    let mut valley = 0;
    for (i, v) in valences.iter().enumerate() {
        if *v > valences[peak] {
            peak = i;
        }
        if *v < valences[valley] {
            valley = i;
        }
    }

    EmotionalArc {
        start_valence: start,
        end_valence: end,
        direction,
        peak_position: cards.get(peak).map(|c| c.position().to_string()),
        valley_position: cards.get(valley).map(|c| c.position().to_string()),
    }
}
