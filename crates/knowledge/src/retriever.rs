//! Passage retrieval: candidate lookup, hybrid scoring, dedup, ranking.
//!
//! The retriever never fails. Unknown keys, an empty corpus, or a
//! comparator with no opinion all degrade to fewer (or zero) passages.

use arcana_core::KnowledgePassage;
use std::collections::HashSet;
use tracing::debug;

use crate::corpus::Corpus;
use crate::vector::{SemanticComparator, words};

/// Substituted for the semantic score when no comparator can provide one.
pub const NEUTRAL_SEMANTIC: f64 = 0.5;

/// Characters of normalized text that identify a passage for dedup.
pub const FINGERPRINT_LEN: usize = 80;

/// Question terms shorter than this are ignored for keyword overlap.
const MIN_TERM_CHARS: usize = 4;

/// Weights of the two scoring signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub semantic: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: 0.7,
            semantic: 0.3,
        }
    }
}

/// Stateless retriever over a borrowed corpus.
#[derive(Default)]
pub struct Retriever {
    weights: ScoringWeights,
    comparator: Option<Box<dyn SemanticComparator>>,
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever")
            .field("weights", &self.weights)
            .field("comparator", &self.comparator.as_ref().map(|c| c.name()))
            .finish()
    }
}

impl Retriever {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            comparator: None,
        }
    }

    pub fn with_comparator(mut self, comparator: Box<dyn SemanticComparator>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn comparator_name(&self) -> Option<&str> {
        self.comparator.as_ref().map(|c| c.name())
    }

    /// Select passages for `topic_keys`, ranked against `question`.
    ///
    /// Passages scoring below `min_relevance` are discarded, duplicates
    /// (by fingerprint) keep their first occurrence, and the rest are
    /// sorted by descending score (ties keep candidate order) and cut to
    /// `max_passages`.
    pub fn retrieve<K: AsRef<str>>(
        &self,
        corpus: &Corpus,
        topic_keys: &[K],
        question: &str,
        max_passages: usize,
        min_relevance: f64,
    ) -> Vec<KnowledgePassage> {
        let terms = question_terms(question);
        let mut seen_keys = HashSet::new();
        let mut candidates = Vec::new();

        for key in topic_keys.iter().map(AsRef::as_ref) {
            if !seen_keys.insert(key) {
                continue;
            }
            for passage in corpus.passages(key) {
                let score = self.score(&terms, question, &passage.text);
                if score < min_relevance {
                    continue;
                }
                candidates.push(KnowledgePassage {
                    text: passage.text.clone(),
                    source_key: key.to_string(),
                    relevance_score: score,
                });
            }
        }

        if candidates.is_empty() {
            debug!(keys = topic_keys.len(), "No knowledge passages matched");
            return candidates;
        }

        let found = candidates.len();
        let mut passages = dedupe(candidates);
        passages.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        passages.truncate(max_passages);

        debug!(
            keys = topic_keys.len(),
            candidates = found,
            returned = passages.len(),
            "Knowledge passages retrieved"
        );
        passages
    }

    fn score(&self, terms: &[String], question: &str, text: &str) -> f64 {
        let overlap = keyword_overlap(terms, text);
        let semantic = self
            .comparator
            .as_ref()
            .and_then(|c| c.similarity(question, text))
            .unwrap_or(NEUTRAL_SEMANTIC);
        (self.weights.keyword * overlap + self.weights.semantic * semantic).clamp(0.0, 1.0)
    }
}

/// Distinct lowercase question words longer than three characters.
pub fn question_terms(question: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    words(question)
        .filter(|w| w.chars().count() >= MIN_TERM_CHARS)
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Share of `terms` found in `text`, in `[0, 1]`. No terms → 0.
pub fn keyword_overlap(terms: &[String], text: &str) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let lower = text.to_lowercase();
    let hits = terms.iter().filter(|t| lower.contains(t.as_str())).count();
    hits as f64 / terms.len() as f64
}

/// Normalized identity of a passage: lowercase, whitespace collapsed,
/// trimmed, first [`FINGERPRINT_LEN`] characters.
pub fn fingerprint(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .chars()
        .take(FINGERPRINT_LEN)
        .collect()
}

/// Keep the first passage of each fingerprint, preserving order.
pub fn dedupe(passages: Vec<KnowledgePassage>) -> Vec<KnowledgePassage> {
    let mut seen = HashSet::new();
    passages
        .into_iter()
        .filter(|p| seen.insert(fingerprint(&p.text)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::HashingEmbedder;

    fn passage(text: &str) -> KnowledgePassage {
        KnowledgePassage {
            text: text.into(),
            source_key: "k".into(),
            relevance_score: 0.5,
        }
    }

    fn corpus() -> Corpus {
        let mut c = Corpus::new();
        c.insert("card:the-sun", "The Sun brings success in your career and visible joy.");
        c.insert("card:the-sun", "Warmth and vitality follow the Sun.");
        c.insert("card:the-moon", "The Moon clouds judgement about career moves.");
        c.insert("reversed", "Reversed energy turns inward.");
        c
    }

    #[test]
    fn unknown_key_returns_empty() {
        let r = Retriever::default();
        let out = r.retrieve(&Corpus::builtin(), &["unknown-key"], "anything", 5, 0.0);
        assert!(out.is_empty());
    }

    #[test]
    fn keyword_overlap_ranks_first() {
        let r = Retriever::default();
        let out = r.retrieve(
            &corpus(),
            &["card:the-sun", "card:the-moon"],
            "How is my career?",
            5,
            0.0,
        );
        assert_eq!(out.len(), 3);
        // "career" hits: two passages tie at 0.7 + 0.15, the warmth one has 0.15
        assert_eq!(out[0].source_key, "card:the-sun");
        assert!(out[0].text.contains("career"));
        assert_eq!(out[1].source_key, "card:the-moon");
        assert!((out[0].relevance_score - 0.85).abs() < 1e-9);
        assert!((out[2].relevance_score - 0.15).abs() < 1e-9);
    }

    #[test]
    fn min_relevance_filters() {
        let r = Retriever::default();
        let out = r.retrieve(&corpus(), &["card:the-sun"], "career", 5, 0.5);
        assert_eq!(out.len(), 1);
        assert!(out.iter().all(|p| p.relevance_score >= 0.5));
    }

    #[test]
    fn max_passages_truncates() {
        let r = Retriever::default();
        let out = r.retrieve(&corpus(), &["card:the-sun", "card:the-moon", "reversed"], "", 2, 0.0);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn empty_question_uses_neutral_semantic() {
        let r = Retriever::default();
        let out = r.retrieve(&corpus(), &["reversed"], "", 5, 0.0);
        assert!((out[0].relevance_score - 0.3 * NEUTRAL_SEMANTIC).abs() < 1e-9);
    }

    #[test]
    fn comparator_contributes() {
        let r = Retriever::default().with_comparator(Box::new(HashingEmbedder::default()));
        assert_eq!(r.comparator_name(), Some("hashing"));
        let out = r.retrieve(&corpus(), &["card:the-sun"], "success career joy", 5, 0.0);
        assert!(out[0].relevance_score > 0.7);
        assert!(out.iter().all(|p| (0.0..=1.0).contains(&p.relevance_score)));
    }

    #[test]
    fn duplicate_keys_do_not_duplicate_passages() {
        let r = Retriever::default();
        let out = r.retrieve(&corpus(), &["reversed", "reversed"], "", 5, 0.0);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn ten_whitespace_variants_collapse_to_one() {
        let passages: Vec<_> = (0..10)
            .map(|i| passage(&format!("The Tower falls suddenly.{}", " ".repeat(i))))
            .collect();
        assert_eq!(dedupe(passages).len(), 1);
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let mut a = passage("Same  text here");
        a.source_key = "first".into();
        let mut b = passage("same text HERE");
        b.source_key = "second".into();
        let out = dedupe(vec![a, b, passage("Different")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].source_key, "first");
    }

    #[test]
    fn fingerprint_normalizes_prefix() {
        assert_eq!(fingerprint("  Hello\n\tWORLD  "), "hello world");
        let long = "x".repeat(200);
        assert_eq!(fingerprint(&long).len(), FINGERPRINT_LEN);
    }

    #[test]
    fn short_terms_are_ignored() {
        assert_eq!(question_terms("Will I be ok at work?"), vec!["will", "work"]);
        assert_eq!(keyword_overlap(&[], "anything"), 0.0);
    }

    #[test]
    fn retrieval_does_not_mutate_corpus() {
        let c = corpus();
        let before = c.clone();
        let _ = Retriever::default().retrieve(&c, &["card:the-sun"], "career", 5, 0.0);
        assert_eq!(c, before);
    }
}
