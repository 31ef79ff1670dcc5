//! Configuration loading, validation, and management for Arcana.
//!
//! Loads configuration from `~/.arcana/config.toml` with environment
//! variable overrides. Validates all settings at startup.
//!
//! Everything here is environment-level: budgets per backend target,
//! retrieval tuning, the default style, and an optional corpus file.
//! Nothing in this crate is consulted mid-request.

use arcana_core::{Style, TokenBudget};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.arcana/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend target whose budgets are used when none is named
    #[serde(default = "default_target")]
    pub default_target: String,

    /// Default rendering style
    #[serde(default)]
    pub style: Style,

    /// Budgets per backend target
    #[serde(default = "default_targets")]
    pub targets: HashMap<String, TargetBudget>,

    /// Knowledge retrieval tuning
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Knowledge corpus source
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

fn default_target() -> String {
    "standard".into()
}

fn default_targets() -> HashMap<String, TargetBudget> {
    HashMap::from([
        ("compact".to_string(), TargetBudget { system: 600, user: 1200 }),
        ("standard".to_string(), TargetBudget { system: 1200, user: 2400 }),
        ("extended".to_string(), TargetBudget { system: 3000, user: 6000 }),
    ])
}

/// Per-block estimated-size ceilings for one backend target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetBudget {
    pub system: usize,
    pub user: usize,
}

impl From<TargetBudget> for TokenBudget {
    fn from(t: TargetBudget) -> Self {
        TokenBudget::new(t.system, t.user)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    #[serde(default = "default_max_passages")]
    pub max_passages: usize,

    #[serde(default = "default_min_relevance")]
    pub min_relevance: f64,

    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,

    #[serde(default = "default_semantic_weight")]
    pub semantic_weight: f64,

    /// Use the built-in semantic comparator. When off, a neutral
    /// constant stands in and keyword overlap dominates.
    #[serde(default = "default_true")]
    pub semantic: bool,
}

fn default_max_passages() -> usize {
    6
}
fn default_min_relevance() -> f64 {
    0.1
}
fn default_keyword_weight() -> f64 {
    0.7
}
fn default_semantic_weight() -> f64 {
    0.3
}
fn default_true() -> bool {
    true
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_passages: default_max_passages(),
            min_relevance: default_min_relevance(),
            keyword_weight: default_keyword_weight(),
            semantic_weight: default_semantic_weight(),
            semantic: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// TOML corpus that replaces the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the default path (~/.arcana/config.toml).
    ///
    /// Environment overrides (highest priority):
    /// - `ARCANA_HOME`: configuration directory
    /// - `ARCANA_TARGET`: default backend target
    /// - `ARCANA_STYLE`: `verbose` or `compact`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`AppConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(target) = lookup("ARCANA_TARGET") {
            self.default_target = target;
        }

        if let Some(style) = lookup("ARCANA_STYLE") {
            self.style = style.parse().map_err(ConfigError::ValidationError)?;
        }

        self.validate()
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        match std::env::var("ARCANA_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs_home().join(".arcana"),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.retrieval;
        if r.keyword_weight < 0.0 || r.semantic_weight < 0.0 {
            return Err(ConfigError::ValidationError(
                "retrieval weights must be >= 0".into(),
            ));
        }
        if r.keyword_weight + r.semantic_weight <= 0.0 {
            return Err(ConfigError::ValidationError(
                "keyword_weight + semantic_weight must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&r.min_relevance) {
            return Err(ConfigError::ValidationError(
                "min_relevance must be between 0.0 and 1.0".into(),
            ));
        }
        if r.max_passages == 0 {
            return Err(ConfigError::ValidationError(
                "max_passages must be at least 1".into(),
            ));
        }

        for (name, budget) in &self.targets {
            if budget.system == 0 || budget.user == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "target '{name}' must have non-zero system and user budgets"
                )));
            }
        }

        if !self.targets.contains_key(&self.default_target) {
            return Err(ConfigError::ValidationError(format!(
                "default_target '{}' is not a configured target",
                self.default_target
            )));
        }

        Ok(())
    }

    /// Budgets for a backend target.
    pub fn budget_for(&self, target: &str) -> Option<TokenBudget> {
        self.targets.get(target).map(|t| (*t).into())
    }

    /// Budgets for the default target.
    pub fn default_budget(&self) -> TokenBudget {
        self.budget_for(&self.default_target).unwrap_or_default()
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_target: default_target(),
            style: Style::default(),
            targets: default_targets(),
            retrieval: RetrievalConfig::default(),
            knowledge: KnowledgeConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for arcana_core::Error {
    fn from(e: ConfigError) -> Self {
        arcana_core::Error::Config {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_target, "standard");
        assert_eq!(config.default_budget(), TokenBudget::new(1200, 2400));
        assert_eq!(config.style, Style::Verbose);
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.default_target, config.default_target);
        assert_eq!(parsed.targets, config.targets);
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.default_target, "standard");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
style = "compact"

[retrieval]
max_passages = 3
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.style, Style::Compact);
        assert_eq!(config.retrieval.max_passages, 3);
        assert_eq!(config.retrieval.keyword_weight, 0.7);
        assert!(config.targets.contains_key("extended"));
    }

    #[test]
    fn custom_target_parsed() {
        let toml_str = r#"
default_target = "local"

[targets.local]
system = 400
user = 800
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.budget_for("local"), Some(TokenBudget::new(400, 800)));
        assert_eq!(config.budget_for("standard"), None);
    }

    #[test]
    fn unknown_default_target_rejected() {
        let config = AppConfig {
            default_target: "gigantic".into(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_weights_rejected() {
        let mut config = AppConfig::default();
        config.retrieval.keyword_weight = 0.0;
        config.retrieval.semantic_weight = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "style = [").unwrap();
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn overrides_apply() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| match key {
                "ARCANA_TARGET" => Some("extended".into()),
                "ARCANA_STYLE" => Some("compact".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.default_target, "extended");
        assert_eq!(config.style, Style::Compact);
        assert_eq!(config.default_budget(), TokenBudget::new(3000, 6000));
    }

    #[test]
    fn bad_style_override_rejected() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "ARCANA_STYLE").then(|| "shouty".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("standard"));
        assert!(toml_str.contains("max_passages"));
    }
}
