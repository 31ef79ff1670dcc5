//! # Arcana Knowledge
//!
//! A small, closed, curated corpus keyed by symbolic topic identifiers, and
//! the retriever that selects, scores, deduplicates and ranks passages from
//! it. Retrieval is read-only and never fails.

mod builtin;
pub mod corpus;
pub mod retriever;
pub mod topics;
pub mod vector;

pub use corpus::{Corpus, CorpusHandle, CorpusPassage};
pub use retriever::{Retriever, ScoringWeights, dedupe, fingerprint};
pub use topics::topic_keys;
pub use vector::{HashingEmbedder, SemanticComparator, cosine_similarity};
