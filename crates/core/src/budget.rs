//! Budget sections, output blocks, and rendering style.

use serde::{Deserialize, Serialize};

/// Which output block a section belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    System,
    User,
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::User => f.write_str("user"),
        }
    }
}

/// Rendering density. Passed explicitly into every call that renders text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Verbose,
    Compact,
}

impl Style {
    /// Text placed between consecutive sections of a block.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Verbose => "\n\n",
            Self::Compact => "\n",
        }
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown style '{other}' (expected verbose or compact)")),
        }
    }
}

/// One unit of assembled text.
///
/// A critical section appears in full or the assembly fails; it is never
/// truncated. Optional sections are ordered by `priority`, lower number
/// first, so the highest number is the first candidate for removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSection {
    pub id: String,
    pub block: Block,
    pub priority: u8,
    pub content: String,
    pub is_critical: bool,
}

impl BudgetSection {
    pub fn critical(id: impl Into<String>, block: Block, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            block,
            priority: 0,
            content: content.into(),
            is_critical: true,
        }
    }

    pub fn optional(
        id: impl Into<String>,
        block: Block,
        priority: u8,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            block,
            priority,
            content: content.into(),
            is_critical: false,
        }
    }
}

/// Estimated-size ceilings, one per output block. Fresh per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBudget {
    pub system: usize,
    pub user: usize,
}

impl TokenBudget {
    pub fn new(system: usize, user: usize) -> Self {
        Self { system, user }
    }

    pub fn for_block(&self, block: Block) -> usize {
        match block {
            Block::System => self.system,
            Block::User => self.user,
        }
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self {
            system: 1200,
            user: 2400,
        }
    }
}
