//! Semantic similarity for retrieval scoring.
//!
//! Pure-Rust implementations of:
//! - Cosine similarity
//! - A feature-hashing bag-of-words embedder
//! - The [`SemanticComparator`] seam the retriever scores through

/// Compute cosine similarity between two vectors.
///
/// Returns a value in [-1, 1] where 1 = identical, 0 = orthogonal, -1 = opposite.
/// Returns 0.0 if the lengths differ, either vector is empty, or either is all zeros.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < 1e-10 {
        return 0.0;
    }

    (dot / denom) as f32
}

/// Scores how close a passage is to a question in meaning.
///
/// Returning `None` means "no opinion" and the retriever substitutes a
/// neutral constant. Implementations must be deterministic.
pub trait SemanticComparator: Send + Sync {
    fn name(&self) -> &str;

    /// Similarity in `[0, 1]`, or `None` when unavailable for this pair.
    fn similarity(&self, question: &str, passage: &str) -> Option<f64>;
}

/// Deterministic embedder: hashes each lowercase word (and each adjacent
/// word pair) into a fixed number of buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingEmbedder {
    dims: usize,
}

impl HashingEmbedder {
    pub const DEFAULT_DIMS: usize = 256;

    pub fn new(dims: usize) -> Self {
        Self { dims: dims.max(1) }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Embed `text`. Returns `None` for text with no words.
    pub fn embed(&self, text: &str) -> Option<Vec<f32>> {
        let words: Vec<String> = words(text).collect();
        if words.is_empty() {
            return None;
        }

        let mut vector = vec![0.0f32; self.dims];
        for word in &words {
            vector[self.bucket(word.as_bytes())] += 1.0;
        }
        for pair in words.windows(2) {
            let joined = format!("{} {}", pair[0], pair[1]);
            vector[self.bucket(joined.as_bytes())] += 0.5;
        }
        Some(vector)
    }

    fn bucket(&self, bytes: &[u8]) -> usize {
        (fnv1a(bytes) % self.dims as u64) as usize
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMS)
    }
}

impl SemanticComparator for HashingEmbedder {
    fn name(&self) -> &str {
        "hashing"
    }

    fn similarity(&self, question: &str, passage: &str) -> Option<f64> {
        let q = self.embed(question)?;
        let p = self.embed(passage)?;
        // Counts are non-negative, so the cosine is already in [0, 1].
        Some(f64::from(cosine_similarity(&q, &p)).clamp(0.0, 1.0))
    }
}

/// Lowercase alphanumeric words.
pub(crate) fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_identical_vectors() {
        let v = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn cosine_mismatched_or_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn embedding_is_deterministic() {
        let e = HashingEmbedder::default();
        assert_eq!(e.embed("The Sun rises"), e.embed("the  SUN rises"));
        assert_eq!(e.embed("The Sun rises").unwrap().len(), 256);
    }

    #[test]
    fn blank_text_has_no_embedding() {
        let e = HashingEmbedder::default();
        assert!(e.embed("  ... ").is_none());
        assert!(e.similarity("", "any passage").is_none());
    }

    #[test]
    fn related_text_scores_higher() {
        let e = HashingEmbedder::default();
        let question = "will my career improve at work";
        let close = e.similarity(question, "Work and career improve with steady effort").unwrap();
        let far = e.similarity(question, "Cups belong to water and feeling").unwrap();
        assert!(close > far);
        assert!((0.0..=1.0).contains(&close));
    }

    #[test]
    fn words_split_and_lowercase() {
        let w: Vec<String> = words("Can't stop, WON'T stop!").collect();
        assert_eq!(w, vec!["can't", "stop", "won't", "stop"]);
    }
}
