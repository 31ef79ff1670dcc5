//! The keyed passage corpus and its hot-swappable handle.
//!
//! A [`Corpus`] is immutable once built. Reloading builds a complete
//! replacement and swaps it into a [`CorpusHandle`] in one pointer write,
//! so readers only ever see a whole corpus.

use arcana_core::CorpusError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::builtin::PASSAGES;

/// One stored passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusPassage {
    pub text: String,
}

/// Topic key → passages, in insertion order per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: BTreeMap<String, Vec<CorpusPassage>>,
}

/// On-disk TOML layout:
///
/// ```toml
/// [[passages]]
/// key = "card:the-sun"
/// text = "The Sun brings clarity."
/// ```
#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    passages: Vec<PassageRecord>,
}

#[derive(Debug, Deserialize)]
struct PassageRecord {
    key: String,
    text: String,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in corpus.
    pub fn builtin() -> Self {
        let mut corpus = Self::new();
        for (key, text) in PASSAGES {
            corpus.insert(*key, *text);
        }
        corpus
    }

    /// Load a corpus file. Replaces the built-in corpus entirely.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = std::fs::read_to_string(path).map_err(|e| CorpusError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse corpus TOML. `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, CorpusError> {
        let file: CorpusFile = toml::from_str(content).map_err(|e| CorpusError::Parse {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

        if file.passages.is_empty() {
            return Err(CorpusError::Invalid(format!("{origin} contains no passages")));
        }

        let mut corpus = Self::new();
        for (i, record) in file.passages.into_iter().enumerate() {
            let key = record.key.trim();
            if key.is_empty() {
                return Err(CorpusError::Invalid(format!("passage {i} has an empty key")));
            }
            if record.text.trim().is_empty() {
                return Err(CorpusError::Invalid(format!("passage {i} ({key}) has no text")));
            }
            corpus.insert(key, record.text);
        }
        Ok(corpus)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(CorpusPassage { text: text.into() });
    }

    /// Passages indexed under `key`; empty for unknown keys.
    pub fn passages(&self, key: &str) -> &[CorpusPassage] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Total passages across all keys.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared, atomically replaceable corpus.
#[derive(Debug)]
pub struct CorpusHandle {
    current: RwLock<Arc<Corpus>>,
}

impl CorpusHandle {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            current: RwLock::new(Arc::new(corpus)),
        }
    }

    /// The corpus as of now. Later swaps do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Corpus> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in a fully built corpus, returning the previous one.
    pub fn replace(&self, corpus: Corpus) -> Arc<Corpus> {
        let next = Arc::new(corpus);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        tracing::info!(
            keys = guard.key_count(),
            passages = guard.len(),
            "Knowledge corpus replaced"
        );
        previous
    }
}

impl Default for CorpusHandle {
    fn default() -> Self {
        Self::new(Corpus::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_covers_every_major() {
        let corpus = Corpus::builtin();
        for card in arcana_core::Deck::standard().cards().iter().filter(|c| c.is_major) {
            let key = format!("card:{}", card.slug());
            assert!(corpus.contains_key(&key), "missing {key}");
        }
    }

    #[test]
    fn builtin_covers_every_spread_and_pattern() {
        let corpus = Corpus::builtin();
        for layout in arcana_core::SpreadLayout::all() {
            assert!(corpus.contains_key(&format!("spread:{}", layout.key)));
        }
        assert!(corpus.contains_key("pattern:crossroads"));
        assert!(corpus.contains_key("pattern:struggle-to-resolution"));
        assert_eq!(corpus.passages("reversed").len(), 2);
    }

    #[test]
    fn unknown_key_is_empty() {
        assert!(Corpus::builtin().passages("unknown-key").is_empty());
    }

    #[test]
    fn parse_toml_corpus() {
        let toml_str = r#"
[[passages]]
key = "card:the-sun"
text = "Custom sun passage."

[[passages]]
key = "card:the-sun"
text = "A second sun passage."

[[passages]]
key = "reversed"
text = "Custom reversal passage."
"#;
        let corpus = Corpus::from_toml_str(toml_str, "inline").unwrap();
        assert_eq!(corpus.key_count(), 2);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.passages("card:the-sun")[1].text, "A second sun passage.");
    }

    #[test]
    fn reject_empty_text() {
        let toml_str = "[[passages]]\nkey = \"x\"\ntext = \"  \"\n";
        let err = Corpus::from_toml_str(toml_str, "inline").unwrap_err();
        assert!(matches!(err, CorpusError::Invalid(_)));
    }

    #[test]
    fn reject_empty_file() {
        let err = Corpus::from_toml_str("", "inline").unwrap_err();
        assert!(matches!(err, CorpusError::Invalid(_)));
    }

    #[test]
    fn reject_malformed_toml() {
        let err = Corpus::from_toml_str("[[passages]\nkey=", "inline").unwrap_err();
        assert!(matches!(err, CorpusError::Parse { .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[passages]]\nkey = \"major-arcana\"\ntext = \"Big forces.\"").unwrap();
        let corpus = Corpus::load(file.path()).unwrap();
        assert_eq!(corpus.passages("major-arcana")[0].text, "Big forces.");
    }

    #[test]
    fn load_missing_file_errors() {
        let err = Corpus::load(Path::new("/nonexistent/arcana/corpus.toml")).unwrap_err();
        assert!(matches!(err, CorpusError::Read { .. }));
    }

    #[test]
    fn snapshot_survives_replace() {
        let handle = CorpusHandle::default();
        let before = handle.snapshot();

        let mut small = Corpus::new();
        small.insert("reversed", "Only passage.");
        let previous = handle.replace(small);

        assert!(Arc::ptr_eq(&before, &previous));
        assert!(before.contains_key("card:the-sun"));
        assert_eq!(handle.snapshot().len(), 1);
    }
}
