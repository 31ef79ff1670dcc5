//! Knowledge passage value type.

use serde::{Deserialize, Serialize};

/// A reference passage copied out of the corpus, scored against a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgePassage {
    pub text: String,
    /// Topic key the passage was indexed under.
    pub source_key: String,
    /// Relevance in `[0, 1]`.
    pub relevance_score: f64,
}
