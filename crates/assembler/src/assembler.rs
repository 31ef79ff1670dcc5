//! Budgeted prompt assembly.
//!
//! Each output block (system, user) is assembled independently:
//!
//! 1. **Critical** sections, in order, never trimmed. If their estimated
//!    size exceeds 80 % of the block budget the whole assembly fails.
//! 2. **Optional** sections, by ascending priority number, appended while
//!    they fit.
//! 3. The first optional section that does not fit is cut to the longest
//!    prefix that keeps the block within budget, or dropped if no prefix
//!    fits. Every section after it is dropped.
//!
//! # Determinism
//!
//! Assembly is deterministic: identical inputs always produce identical
//! outputs. No random or time-dependent logic is used.

use arcana_core::{Block, BudgetError, BudgetSection, Style, TokenBudget};
use serde::Serialize;
use tracing::{debug, warn};

use crate::token::estimate;

/// Share of a block budget that critical content may occupy.
pub const CRITICAL_SHARE_PCT: usize = 80;

/// The two text blocks ready for a generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledPrompt {
    pub system_text: String,
    pub user_text: String,
    pub report: AssemblyReport,
}

/// Per-block statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyReport {
    pub system: BlockReport,
    pub user: BlockReport,
}

/// What happened to each section of one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReport {
    /// Estimated tokens of the final block text.
    pub tokens: usize,
    pub budget: usize,
    /// Section ids included in full, in output order.
    pub included: Vec<String>,
    /// Section included as a prefix only.
    pub truncated: Option<String>,
    /// Section ids left out entirely.
    pub dropped: Vec<String>,
}

/// Assemble both blocks.
///
/// Fails with [`BudgetError::Exceeded`] when critical content of either
/// block does not fit; no partial prompt is returned in that case.
pub fn assemble(
    sections: &[BudgetSection],
    budget: TokenBudget,
    style: Style,
) -> Result<AssembledPrompt, BudgetError> {
    let (system_text, system) = assemble_block(sections, Block::System, budget.system, style)?;
    let (user_text, user) = assemble_block(sections, Block::User, budget.user, style)?;

    Ok(AssembledPrompt {
        system_text,
        user_text,
        report: AssemblyReport { system, user },
    })
}

/// Assemble the sections routed to `block`.
pub fn assemble_block(
    sections: &[BudgetSection],
    block: Block,
    budget: usize,
    style: Style,
) -> Result<(String, BlockReport), BudgetError> {
    let separator = style.separator();
    let (critical, mut optional): (Vec<&BudgetSection>, Vec<&BudgetSection>) = sections
        .iter()
        .filter(|s| s.block == block)
        .partition(|s| s.is_critical);
    optional.sort_by_key(|s| s.priority);

    let critical_tokens: usize = critical.iter().map(|s| estimate(&s.content)).sum();
    if critical_tokens * 100 > budget * CRITICAL_SHARE_PCT {
        return Err(exceeded(block, critical_tokens, budget));
    }

    let mut text = String::new();
    let mut included = Vec::new();
    for section in &critical {
        text = join(&text, separator, &section.content);
        included.push(section.id.clone());
    }
    // Separators can push rendered critical text past the sum of its parts.
    let rendered = estimate(&text);
    if rendered > budget {
        return Err(exceeded(block, rendered, budget));
    }

    let mut truncated = None;
    let mut dropped = Vec::new();
    let mut rest = optional.iter();
    while let Some(section) = rest.next() {
        let candidate = join(&text, separator, &section.content);
        if estimate(&candidate) <= budget {
            text = candidate;
            included.push(section.id.clone());
            continue;
        }

        match fit_prefix(&text, separator, &section.content, budget) {
            Some(prefix) => {
                text = join(&text, separator, prefix);
                truncated = Some(section.id.clone());
            }
            None => dropped.push(section.id.clone()),
        }
        dropped.extend(rest.by_ref().map(|s| s.id.clone()));
        break;
    }

    let tokens = estimate(&text);
    debug!(
        block = %block,
        tokens,
        budget,
        included = included.len(),
        truncated = truncated.as_deref().unwrap_or("-"),
        dropped = dropped.len(),
        "Block assembled"
    );

    Ok((
        text,
        BlockReport {
            tokens,
            budget,
            included,
            truncated,
            dropped,
        },
    ))
}

/// Longest non-empty prefix of `content` (on a char boundary) such that
/// `base + separator + prefix` stays within `budget`.
///
/// The estimate grows with prefix length, so a binary search over the
/// char boundaries finds the largest fitting cut.
pub fn fit_prefix<'a>(
    base: &str,
    separator: &str,
    content: &'a str,
    budget: usize,
) -> Option<&'a str> {
    let ends: Vec<usize> = content
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(content.len()))
        .filter(|&end| end > 0)
        .collect();

    let fitting =
        ends.partition_point(|&end| estimate(&join(base, separator, &content[..end])) <= budget);
    let end = *ends.get(fitting.checked_sub(1)?)?;
    Some(&content[..end])
}

fn join(base: &str, separator: &str, next: &str) -> String {
    if base.is_empty() {
        next.to_string()
    } else if next.is_empty() {
        base.to_string()
    } else {
        format!("{base}{separator}{next}")
    }
}

fn exceeded(block: Block, critical_tokens: usize, budget: usize) -> BudgetError {
    let used_pct = critical_tokens as f64 * 100.0 / budget.max(1) as f64;
    let overflow_pct = (used_pct - CRITICAL_SHARE_PCT as f64).max(0.0);
    warn!(
        block = %block,
        critical_tokens,
        budget,
        overflow_pct,
        "Critical content exceeds budget safety margin"
    );
    BudgetError::Exceeded {
        block,
        critical_tokens,
        budget,
        overflow_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(n: usize) -> String {
        "a".repeat(n * 4)
    }

    #[test]
    fn critical_over_margin_fails() {
        let sections = vec![
            BudgetSection::critical("role", Block::System, tokens(500)),
            BudgetSection::critical("safety", Block::System, tokens(350)),
        ];
        let err = assemble(&sections, TokenBudget::new(1000, 1000), Style::Verbose).unwrap_err();
        let BudgetError::Exceeded {
            block,
            critical_tokens,
            budget,
            overflow_pct,
        } = err;
        assert_eq!(block, Block::System);
        assert_eq!(critical_tokens, 850);
        assert_eq!(budget, 1000);
        assert!((overflow_pct - 5.0).abs() < 1e-9);
    }

    #[test]
    fn critical_at_margin_passes() {
        let sections = vec![BudgetSection::critical("role", Block::System, tokens(800))];
        let prompt = assemble(&sections, TokenBudget::new(1000, 10), Style::Verbose).unwrap();
        assert_eq!(prompt.system_text, tokens(800));
        assert_eq!(prompt.report.system.tokens, 800);
    }

    #[test]
    fn optional_section_truncated_to_prefix() {
        let content = tokens(600);
        let sections = vec![BudgetSection::optional(
            "knowledge",
            Block::User,
            3,
            content.clone(),
        )];
        let prompt = assemble(&sections, TokenBudget::new(0, 150), Style::Verbose).unwrap();

        assert_eq!(prompt.user_text.len(), 600);
        assert!(content.starts_with(&prompt.user_text));
        assert_eq!(estimate(&prompt.user_text), 150);
        assert_eq!(prompt.report.user.truncated.as_deref(), Some("knowledge"));
    }

    #[test]
    fn optional_section_dropped_without_room() {
        let sections = vec![BudgetSection::optional(
            "knowledge",
            Block::User,
            3,
            tokens(600),
        )];
        let prompt = assemble(&sections, TokenBudget::new(0, 0), Style::Verbose).unwrap();
        assert!(prompt.user_text.is_empty());
        assert_eq!(prompt.report.user.dropped, vec!["knowledge"]);
        assert!(prompt.report.user.truncated.is_none());
    }

    #[test]
    fn lower_priority_number_goes_first() {
        let sections = vec![
            BudgetSection::optional("closing", Block::User, 5, "closing"),
            BudgetSection::optional("reasoning", Block::User, 1, "reasoning"),
            BudgetSection::critical("question", Block::User, "question"),
        ];
        let prompt = assemble(&sections, TokenBudget::new(0, 100), Style::Compact).unwrap();
        assert_eq!(prompt.user_text, "question\nreasoning\nclosing");
        assert_eq!(prompt.report.user.included, vec!["question", "reasoning", "closing"]);
    }

    #[test]
    fn sections_after_truncation_are_dropped() {
        let sections = vec![
            BudgetSection::critical("question", Block::User, tokens(10)),
            BudgetSection::optional("reasoning", Block::User, 1, tokens(100)),
            BudgetSection::optional("knowledge", Block::User, 3, tokens(5)),
            BudgetSection::optional("closing", Block::User, 5, tokens(5)),
        ];
        let prompt = assemble(&sections, TokenBudget::new(0, 50), Style::Verbose).unwrap();
        assert_eq!(prompt.report.user.truncated.as_deref(), Some("reasoning"));
        assert_eq!(prompt.report.user.dropped, vec!["knowledge", "closing"]);
        assert!(prompt.report.user.tokens <= 50);
        assert!(prompt.user_text.starts_with(&tokens(10)));
    }

    #[test]
    fn blocks_are_independent() {
        let sections = vec![
            BudgetSection::critical("role", Block::System, "You are a reader."),
            BudgetSection::critical("question", Block::User, "What now?"),
        ];
        let prompt = assemble(&sections, TokenBudget::new(100, 100), Style::Verbose).unwrap();
        assert_eq!(prompt.system_text, "You are a reader.");
        assert_eq!(prompt.user_text, "What now?");
    }

    #[test]
    fn user_block_failure_fails_whole_assembly() {
        let sections = vec![
            BudgetSection::critical("role", Block::System, "ok"),
            BudgetSection::critical("spread", Block::User, tokens(90)),
        ];
        let err = assemble(&sections, TokenBudget::new(100, 100), Style::Verbose).unwrap_err();
        assert!(matches!(err, BudgetError::Exceeded { block: Block::User, .. }));
    }

    #[test]
    fn report_serializes_per_block() {
        let sections = vec![
            BudgetSection::critical("role", Block::System, "You are a reader."),
            BudgetSection::critical("question", Block::User, "What now?"),
            BudgetSection::optional("closing", Block::User, 5, tokens(50)),
        ];
        let prompt = assemble(&sections, TokenBudget::new(100, 20), Style::Verbose).unwrap();
        let json = serde_json::to_value(&prompt.report).unwrap();

        assert_eq!(json["system"]["included"], serde_json::json!(["role"]));
        assert_eq!(json["system"]["truncated"], serde_json::Value::Null);
        assert_eq!(json["user"]["budget"], 20);
        assert_eq!(json["user"]["truncated"], "closing");
        assert_eq!(json["user"]["dropped"], serde_json::json!([]));
    }

    #[test]
    fn fit_prefix_respects_char_boundaries() {
        let content = "ééééé";
        let prefix = fit_prefix("", "\n", content, 1).unwrap();
        assert_eq!(prefix, "éé");
        assert!(fit_prefix("", "\n", content, 0).is_none());
        assert!(fit_prefix("", "\n", "", 10).is_none());
    }
}
