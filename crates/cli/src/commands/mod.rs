pub mod config_cmd;
pub mod doctor;
pub mod onboard;
pub mod reading;
pub mod retrieve;
pub mod spreads;

use arcana_assembler::{ReadingPipeline, RetrievalLimits};
use arcana_config::AppConfig;
use arcana_core::CorpusError;
use arcana_knowledge::{Corpus, CorpusHandle, HashingEmbedder, Retriever, ScoringWeights};
use std::sync::Arc;

/// The configured corpus file, or the built-in corpus when none is set.
pub fn load_corpus(config: &AppConfig) -> Result<Corpus, CorpusError> {
    match &config.knowledge.corpus_path {
        Some(path) => Corpus::load(path),
        None => Ok(Corpus::builtin()),
    }
}

pub fn build_retriever(config: &AppConfig) -> Retriever {
    let retriever = Retriever::new(ScoringWeights {
        keyword: config.retrieval.keyword_weight,
        semantic: config.retrieval.semantic_weight,
    });
    if config.retrieval.semantic {
        retriever.with_comparator(Box::new(HashingEmbedder::default()))
    } else {
        retriever
    }
}

pub fn build_pipeline(config: &AppConfig) -> Result<ReadingPipeline, CorpusError> {
    let corpus = load_corpus(config)?;
    tracing::debug!(keys = corpus.key_count(), passages = corpus.len(), "Corpus loaded");
    Ok(ReadingPipeline::new(
        Arc::new(CorpusHandle::new(corpus)),
        build_retriever(config),
        RetrievalLimits {
            max_passages: config.retrieval.max_passages,
            min_relevance: config.retrieval.min_relevance,
        },
    ))
}
