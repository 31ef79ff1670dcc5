//! The reading pipeline: validate → analyze → retrieve → build → assemble.
//!
//! Strictly sequential and synchronous. The pipeline holds no mutable
//! state of its own; the only shared value is the corpus handle, read
//! through a snapshot so a concurrent swap never shows a partial corpus.

use arcana_core::{Error, KnowledgePassage, ReadingRequest, ReasoningResult, Style, TokenBudget};
use arcana_knowledge::{CorpusHandle, Retriever, topic_keys};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::assembler::{AssembledPrompt, assemble};
use crate::sections::{SectionInput, build_sections};
use crate::validate::validate_request;

/// Passage selection limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrievalLimits {
    pub max_passages: usize,
    pub min_relevance: f64,
}

impl Default for RetrievalLimits {
    fn default() -> Self {
        Self {
            max_passages: 6,
            min_relevance: 0.1,
        }
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub prompt: AssembledPrompt,
    pub reasoning: ReasoningResult,
    pub topic_keys: Vec<String>,
    pub passages: Vec<KnowledgePassage>,
}

/// Runs readings end to end. `Send + Sync`; share it behind an `Arc`.
#[derive(Debug)]
pub struct ReadingPipeline {
    corpus: Arc<CorpusHandle>,
    retriever: Retriever,
    limits: RetrievalLimits,
}

impl ReadingPipeline {
    pub fn new(corpus: Arc<CorpusHandle>, retriever: Retriever, limits: RetrievalLimits) -> Self {
        Self {
            corpus,
            retriever,
            limits,
        }
    }

    /// Built-in corpus, keyword-dominant scoring, default limits.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(CorpusHandle::default()),
            Retriever::default(),
            RetrievalLimits::default(),
        )
    }

    pub fn corpus(&self) -> &Arc<CorpusHandle> {
        &self.corpus
    }

    pub fn limits(&self) -> RetrievalLimits {
        self.limits
    }

    /// Run one reading under a fresh request id.
    pub fn run(
        &self,
        request: &ReadingRequest,
        budget: TokenBudget,
        style: Style,
    ) -> Result<Reading, Error> {
        self.run_with_id(request, budget, style, Uuid::new_v4())
    }

    /// Run one reading. `request_id` only tags log lines.
    pub fn run_with_id(
        &self,
        request: &ReadingRequest,
        budget: TokenBudget,
        style: Style,
        request_id: Uuid,
    ) -> Result<Reading, Error> {
        let span = info_span!("reading", request_id = %request_id, spread = %request.spread_key);
        let _enter = span.enter();

        let spread = validate_request(request).inspect_err(|e| {
            warn!(error = %e, index = ?e.index(), "Reading request rejected");
        })?;

        let reasoning =
            arcana_reasoning::analyze(&spread.cards, &request.question, spread.layout.key);

        let keys = topic_keys(&spread.cards, &reasoning, Some(spread.layout));
        let corpus = self.corpus.snapshot();
        let passages = self.retriever.retrieve(
            &corpus,
            &keys,
            &request.question,
            self.limits.max_passages,
            self.limits.min_relevance,
        );
        debug!(keys = keys.len(), passages = passages.len(), "Enrichment selected");

        let input = SectionInput {
            layout: spread.layout,
            cards: &spread.cards,
            question: &request.question,
            reflections: &request.reflections,
            reasoning: &reasoning,
            passages: &passages,
        };
        let sections = build_sections(&input, style);
        let prompt = assemble(&sections, budget, style)?;

        info!(
            system_tokens = prompt.report.system.tokens,
            user_tokens = prompt.report.user.tokens,
            pattern = reasoning.narrative_pattern.as_str(),
            "Reading assembled"
        );

        Ok(Reading {
            prompt,
            reasoning,
            topic_keys: keys,
            passages,
        })
    }
}

impl Default for ReadingPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::{ArcDirection, DrawnCard, InputError};
    use crate::token::estimate;

    fn request() -> ReadingRequest {
        ReadingRequest {
            spread_key: "three-card".into(),
            cards: Some(vec![
                DrawnCard::new("Three of Swords", "Past", true),
                DrawnCard::new("The Hermit", "Present", false),
                DrawnCard::new("The Sun", "Future", false),
            ]),
            ..ReadingRequest::default()
        }
    }

    #[test]
    fn full_reading_fits_budget() {
        let pipeline = ReadingPipeline::default();
        let budget = TokenBudget::default();
        let reading = pipeline.run(&request(), budget, Style::Verbose).unwrap();

        assert!(estimate(&reading.prompt.system_text) <= budget.system);
        assert!(estimate(&reading.prompt.user_text) <= budget.user);
        assert!(reading.prompt.system_text.contains("Safety"));
        assert!(reading.prompt.user_text.contains("Past: Three of Swords (reversed)"));
        assert_eq!(reading.reasoning.emotional_arc.direction, ArcDirection::Ascending);
        assert!(!reading.passages.is_empty());
        assert!(reading.prompt.user_text.contains("Reference notes"));
    }

    #[test]
    fn input_errors_abort_early() {
        let pipeline = ReadingPipeline::default();
        let mut req = request();
        req.cards = None;
        let err = pipeline.run(&req, TokenBudget::default(), Style::Verbose).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::MissingCards)));
    }

    #[test]
    fn tiny_budget_is_budget_error() {
        let pipeline = ReadingPipeline::default();
        let err = pipeline
            .run(&request(), TokenBudget::new(20, 20), Style::Verbose)
            .unwrap_err();
        assert!(matches!(err, Error::Budget(_)));
    }

    #[test]
    fn request_id_does_not_change_output() {
        let pipeline = ReadingPipeline::default();
        let a = pipeline
            .run_with_id(&request(), TokenBudget::default(), Style::Compact, Uuid::new_v4())
            .unwrap();
        let b = pipeline
            .run_with_id(&request(), TokenBudget::default(), Style::Compact, Uuid::new_v4())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pipeline_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReadingPipeline>();
    }
}
