//! Section builders.
//!
//! Turns a validated spread, its reasoning result, and retrieved passages
//! into the prioritized [`BudgetSection`] list the assembler fits into the
//! budget. The most load-bearing sentence of every optional section comes
//! first, since only a prefix survives truncation.

use arcana_core::{
    Block, BudgetSection, CardInPosition, IntentKind, KnowledgePassage, ReasoningResult,
    SpreadLayout, Style,
};
use regex_lite::Regex;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::LazyLock;

pub const PRIORITY_NARRATIVE: u8 = 1;
pub const PRIORITY_REASONING: u8 = 1;
pub const PRIORITY_REFLECTIONS: u8 = 2;
pub const PRIORITY_KNOWLEDGE: u8 = 3;
pub const PRIORITY_STYLE: u8 = 4;
pub const PRIORITY_CLOSING: u8 = 5;

/// Sensitive subjects that need extra safety guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyTopic {
    Crisis,
    Health,
    Legal,
    Financial,
}

impl SafetyTopic {
    fn guidance(&self) -> &'static str {
        match self {
            Self::Crisis => {
                "If the querent mentions self-harm, suicide or being in danger, set the cards aside. Respond with warmth, encourage them to contact local emergency services or a crisis line right away, and do not interpret the spread as an answer to that pain."
            }
            Self::Health => {
                "The question touches on health. Never diagnose, predict illness or recovery, or suggest changing treatment; encourage the querent to consult a qualified medical professional."
            }
            Self::Legal => {
                "The question touches on legal matters. Do not predict verdicts or give legal advice; suggest speaking with a qualified lawyer."
            }
            Self::Financial => {
                "The question touches on money. Do not recommend investments, purchases or debts; frame any insight as reflection and suggest a qualified financial adviser for decisions."
            }
        }
    }
}

const TOPIC_RULES: [(SafetyTopic, &str); 4] = [
    (
        SafetyTopic::Crisis,
        r"(?i)\b(suicid\w*|kill (myself|me)|self[- ]harm\w*|hurt(ing)? myself|end my life|end it all|want to die|no reason to live|(being|been|getting) abused|abusive (partner|relationship|home)|in danger)\b",
    ),
    (
        SafetyTopic::Health,
        r"(?i)\b(health|illness|ill|sick|disease|diagnos\w*|cancer|doctor|medical|medication|surgery|pregnan\w*|symptoms?|therapy|depress\w*|anxiety)\b",
    ),
    (
        SafetyTopic::Legal,
        r"(?i)\b(legal|lawyer|lawsuit|sue|court|custody|trial|police|arrest\w*|contract|visa|immigration)\b",
    ),
    (
        SafetyTopic::Financial,
        r"(?i)\b(money|invest\w*|stocks?|crypto\w*|debt|loan|mortgage|bankrupt\w*|savings|financ\w*|lottery|gambl\w*)\b",
    ),
];

static TOPICS: LazyLock<Vec<(SafetyTopic, Regex)>> = LazyLock::new(|| {
    TOPIC_RULES
        .iter()
        .filter_map(|(topic, pattern)| Regex::new(pattern).ok().map(|re| (*topic, re)))
        .collect()
});

/// Sensitive topics mentioned in `question`, in fixed order.
pub fn safety_topics(question: &str) -> Vec<SafetyTopic> {
    TOPICS
        .iter()
        .filter(|(_, re)| re.is_match(question))
        .map(|(topic, _)| *topic)
        .collect()
}

/// Everything the builders draw from.
#[derive(Debug, Clone, Copy)]
pub struct SectionInput<'a> {
    pub layout: &'a SpreadLayout,
    pub cards: &'a [CardInPosition],
    pub question: &'a str,
    pub reflections: &'a BTreeMap<String, String>,
    pub reasoning: &'a ReasoningResult,
    pub passages: &'a [KnowledgePassage],
}

/// Build every section for both blocks.
pub fn build_sections(input: &SectionInput<'_>, style: Style) -> Vec<BudgetSection> {
    let mut sections = vec![
        BudgetSection::critical("role", Block::System, role(style)),
        BudgetSection::critical("safety", Block::System, safety(input.question, style)),
        BudgetSection::optional(
            "narrative-guidance",
            Block::System,
            PRIORITY_NARRATIVE,
            narrative_guidance(input.reasoning, style),
        ),
        BudgetSection::optional("style", Block::System, PRIORITY_STYLE, style_directions(style)),
        BudgetSection::critical("question", Block::User, question(input.question, style)),
        BudgetSection::critical("spread", Block::User, spread(input.layout, input.cards, style)),
        BudgetSection::optional(
            "reasoning",
            Block::User,
            PRIORITY_REASONING,
            reasoning(input.reasoning, style),
        ),
    ];

    if let Some(text) = reflections(input.cards, input.reflections, style) {
        sections.push(BudgetSection::optional(
            "reflections",
            Block::User,
            PRIORITY_REFLECTIONS,
            text,
        ));
    }
    if let Some(text) = knowledge(input.passages, style) {
        sections.push(BudgetSection::optional(
            "knowledge",
            Block::User,
            PRIORITY_KNOWLEDGE,
            text,
        ));
    }
    sections.push(BudgetSection::optional(
        "closing",
        Block::User,
        PRIORITY_CLOSING,
        closing(input.layout, input.reasoning.question_intent.kind, style),
    ));

    sections
}

fn heading(style: Style, title: &str) -> String {
    match style {
        Style::Verbose => format!("## {title}\n"),
        Style::Compact => format!("{title}: "),
    }
}

pub fn role(style: Style) -> String {
    let text = match style {
        Style::Verbose => concat!(
            "You are a thoughtful tarot reader. You interpret the cards as a mirror for reflection, ",
            "weaving each position into one coherent story grounded in the structure provided. ",
            "You speak with warmth and honesty, and you never claim certainty about the future.",
        ),
        Style::Compact => concat!(
            "You are a thoughtful tarot reader. Interpret the cards as a mirror for reflection, ",
            "never as certain prophecy.",
        ),
    };
    text.to_string()
}

pub fn safety(question: &str, style: Style) -> String {
    let mut text = heading(style, "Safety");
    text.push_str(
        "Present insights as reflection, not fact. Never give medical, legal or financial directives, and respect the querent's right to choose for themselves.",
    );
    for topic in safety_topics(question) {
        text.push(' ');
        text.push_str(topic.guidance());
    }
    text
}

pub fn narrative_guidance(reasoning: &ReasoningResult, style: Style) -> String {
    let pattern = reasoning.narrative_pattern;
    let arc = &reasoning.emotional_arc;
    let mut text = heading(style, "Narrative");
    let _ = write!(
        text,
        "Shape the reading as a {} story with a {} tone; the emotional arc is {}.",
        pattern.as_str(),
        pattern.tone_bias().as_str(),
        arc.direction.as_str()
    );
    if let Some(pivot) = &reasoning.pivot {
        let _ = write!(text, " Build toward {} as the turning point.", pivot.position);
    }
    if style == Style::Verbose && !reasoning.tensions.is_empty() {
        text.push_str(" Name each tension plainly and show how it can be held or resolved.");
    }
    text
}

pub fn style_directions(style: Style) -> String {
    let text = match style {
        Style::Verbose => concat!(
            "## Format\nWrite one short paragraph per position in spread order, ",
            "then a closing synthesis of two or three sentences. Use plain language and no lists.",
        ),
        Style::Compact => "Format: one or two sentences per position, then a one-line synthesis.",
    };
    text.to_string()
}

pub fn question(question: &str, style: Style) -> String {
    let question = question.trim();
    let body = if question.is_empty() {
        "No question was asked; offer a general reading of the spread."
    } else {
        question
    };
    format!("{}{}", heading(style, "Question"), body)
}

pub fn spread(layout: &SpreadLayout, cards: &[CardInPosition], style: Style) -> String {
    let mut text = heading(style, &format!("Spread: {}", layout.name));
    let lines: Vec<String> = cards
        .iter()
        .map(|c| format!("- {}: {}", c.position(), c.label()))
        .collect();
    match style {
        Style::Verbose => text.push_str(&lines.join("\n")),
        Style::Compact => {
            text.push('\n');
            text.push_str(&lines.join("\n"));
        }
    }
    text
}

pub fn reasoning(reasoning: &ReasoningResult, style: Style) -> String {
    let pattern = reasoning.narrative_pattern;
    let arc = &reasoning.emotional_arc;
    let mut text = heading(style, "Structure");

    let _ = write!(
        text,
        "Pattern: {} (tone: {})",
        pattern.as_str(),
        pattern.tone_bias().as_str()
    );
    if let Some(pivot) = &reasoning.pivot {
        let _ = write!(text, "\nPivot: {}. {}", pivot.position, pivot.justification);
    }
    let _ = write!(
        text,
        "\nArc: {} from {:.2} to {:.2}",
        arc.direction.as_str(),
        arc.start_valence,
        arc.end_valence
    );
    if let (Some(peak), Some(valley)) = (&arc.peak_position, &arc.valley_position) {
        let _ = write!(text, "; peak at {peak}, valley at {valley}");
    }

    if !reasoning.tensions.is_empty() {
        text.push_str("\nTensions:");
        for t in &reasoning.tensions {
            match style {
                Style::Verbose => {
                    let _ = write!(
                        text,
                        "\n- {} / {} ({}): {}",
                        t.position_a,
                        t.position_b,
                        t.kind.as_str(),
                        t.description
                    );
                }
                Style::Compact => {
                    let _ = write!(
                        text,
                        "\n- {} / {} ({})",
                        t.position_a,
                        t.position_b,
                        t.kind.as_str()
                    );
                }
            }
        }
    }

    if !reasoning.emphasis.is_empty() {
        let weights: Vec<String> = reasoning
            .emphasis
            .iter()
            .map(|e| format!("{} {}", e.position, e.weight.as_str()))
            .collect();
        let _ = write!(text, "\nEmphasis: {}", weights.join(", "));
    }

    let intent = reasoning.question_intent;
    let _ = write!(
        text,
        "\nIntent: {} (confidence {:.2})",
        intent.kind.as_str(),
        intent.confidence
    );
    text
}

/// Reflections for drawn positions first (spread order), then any others.
pub fn reflections(
    cards: &[CardInPosition],
    reflections: &BTreeMap<String, String>,
    style: Style,
) -> Option<String> {
    let mut lines = Vec::new();
    let mut used = Vec::new();

    for card in cards {
        if let Some(note) = reflections.get(card.position()) {
            let note = note.trim();
            if !note.is_empty() {
                lines.push(format!("- {}: {}", card.position(), note));
            }
            used.push(card.position());
        }
    }
    for (position, note) in reflections {
        let note = note.trim();
        if !used.contains(&position.as_str()) && !note.is_empty() {
            lines.push(format!("- {position}: {note}"));
        }
    }

    if lines.is_empty() {
        return None;
    }
    let mut text = heading(style, "Querent's reflections");
    if style == Style::Compact {
        text.push('\n');
    }
    text.push_str(&lines.join("\n"));
    Some(text)
}

/// Reference passages, highest relevance first. `None` when nothing was
/// retrieved, which simply means no enrichment.
pub fn knowledge(passages: &[KnowledgePassage], style: Style) -> Option<String> {
    if passages.is_empty() {
        return None;
    }
    let mut text = heading(style, "Reference notes");
    if style == Style::Compact {
        text.push('\n');
    }
    let lines: Vec<String> = passages.iter().map(|p| format!("- {}", p.text.trim())).collect();
    text.push_str(&lines.join("\n"));
    Some(text)
}

pub fn closing(layout: &SpreadLayout, intent: IntentKind, style: Style) -> String {
    let focus = match intent {
        IntentKind::Decision => "Lay out what each path offers without choosing for the querent.",
        IntentKind::Timing => "Speak of timing as tendencies and seasons, never as dates.",
        IntentKind::Blockage => "Name what holds the querent back and one gentle way to loosen it.",
        IntentKind::Confirmation => "Say honestly where the cards agree and where they add nuance.",
        IntentKind::Outcome => {
            "Describe the likely direction while stressing that choices can change it."
        }
        IntentKind::Understanding => "Focus on meaning and the lesson the situation carries.",
        IntentKind::Exploration | IntentKind::None => {
            "Offer an open, balanced reading of the whole spread."
        }
    };
    match style {
        Style::Verbose => format!(
            "## Request\n{focus} Interpret the {} spread as a single story and end with one practical reflection the querent can carry forward.",
            layout.name
        ),
        Style::Compact => format!("Request: {focus} End with one practical reflection."),
    }
}
