//! Reasoning result types produced by the symbolic analyzer.

use serde::{Deserialize, Serialize};

/// What the querent is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Decision,
    Timing,
    Blockage,
    Confirmation,
    Outcome,
    Understanding,
    Exploration,
    None,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Timing => "timing",
            Self::Blockage => "blockage",
            Self::Confirmation => "confirmation",
            Self::Outcome => "outcome",
            Self::Understanding => "understanding",
            Self::Exploration => "exploration",
            Self::None => "none",
        }
    }
}

/// Classified question intent with a confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuestionIntent {
    pub kind: IntentKind,
    pub confidence: f64,
}

impl Default for QuestionIntent {
    fn default() -> Self {
        Self {
            kind: IntentKind::None,
            confidence: 0.0,
        }
    }
}

/// Tone the narrative should lean toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneBias {
    Hopeful,
    Cautionary,
    Transformative,
    Reverent,
    Encouraging,
    Grounding,
    Affirming,
    Balanced,
}

impl ToneBias {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hopeful => "hopeful",
            Self::Cautionary => "cautionary",
            Self::Transformative => "transformative",
            Self::Reverent => "reverent",
            Self::Encouraging => "encouraging",
            Self::Grounding => "grounding",
            Self::Affirming => "affirming",
            Self::Balanced => "balanced",
        }
    }
}

/// Named narrative arc detected across the spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrativePattern {
    StruggleToResolution,
    DeclineWarning,
    Transformation,
    FatedJourney,
    SteadyGrowth,
    SustainedChallenge,
    SustainedHarmony,
    Crossroads,
}

impl NarrativePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StruggleToResolution => "struggle-to-resolution",
            Self::DeclineWarning => "decline-warning",
            Self::Transformation => "transformation",
            Self::FatedJourney => "fated-journey",
            Self::SteadyGrowth => "steady-growth",
            Self::SustainedChallenge => "sustained-challenge",
            Self::SustainedHarmony => "sustained-harmony",
            Self::Crossroads => "crossroads",
        }
    }

    pub fn tone_bias(&self) -> ToneBias {
        match self {
            Self::StruggleToResolution => ToneBias::Hopeful,
            Self::DeclineWarning => ToneBias::Cautionary,
            Self::Transformation => ToneBias::Transformative,
            Self::FatedJourney => ToneBias::Reverent,
            Self::SteadyGrowth => ToneBias::Encouraging,
            Self::SustainedChallenge => ToneBias::Grounding,
            Self::SustainedHarmony => ToneBias::Affirming,
            Self::Crossroads => ToneBias::Balanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TensionKind {
    EmotionalContrast,
    ElementalOpposition,
    ActionReflection,
}

impl TensionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmotionalContrast => "emotional-contrast",
            Self::ElementalOpposition => "elemental-opposition",
            Self::ActionReflection => "action-reflection",
        }
    }
}

/// Two positions pulling against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tension {
    pub position_a: String,
    pub position_b: String,
    pub kind: TensionKind,
    pub description: String,
}

impl Tension {
    pub fn involves(&self, position: &str) -> bool {
        self.position_a == position || self.position_b == position
    }
}

/// The spread's leverage point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pivot {
    pub position: String,
    pub justification: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcDirection {
    Ascending,
    Descending,
    Flat,
}

impl ArcDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Flat => "flat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalArc {
    pub start_valence: f64,
    pub end_valence: f64,
    pub direction: ArcDirection,
    pub peak_position: Option<String>,
    pub valley_position: Option<String>,
}

impl Default for EmotionalArc {
    fn default() -> Self {
        Self {
            start_valence: 0.0,
            end_valence: 0.0,
            direction: ArcDirection::Flat,
            peak_position: None,
            valley_position: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Normal,
    Moderate,
    High,
}

impl Emphasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionEmphasis {
    pub position: String,
    pub weight: Emphasis,
}

/// Everything the analyzer derived from one spread. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningResult {
    pub question_intent: QuestionIntent,
    pub narrative_pattern: NarrativePattern,
    pub tensions: Vec<Tension>,
    /// `None` only when there were no cards to analyze.
    pub pivot: Option<Pivot>,
    pub emotional_arc: EmotionalArc,
    /// One entry per card, in spread order.
    pub emphasis: Vec<PositionEmphasis>,
}

impl ReasoningResult {
    /// Weight for a position; positions not in the spread read as normal.
    pub fn emphasis_for(&self, position: &str) -> Emphasis {
        self.emphasis
            .iter()
            .find(|e| e.position == position)
            .map(|e| e.weight)
            .unwrap_or(Emphasis::Normal)
    }
}

impl Default for ReasoningResult {
    fn default() -> Self {
        Self {
            question_intent: QuestionIntent::default(),
            narrative_pattern: NarrativePattern::Crossroads,
            tensions: Vec::new(),
            pivot: None,
            emotional_arc: EmotionalArc::default(),
            emphasis: Vec::new(),
        }
    }
}
