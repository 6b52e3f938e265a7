//! Configuration types for the engine
//!
//! Every section deserializes with defaults, so a TOML file only needs the
//! keys it wants to change:
//!
//! ```toml
//! [dictionary]
//! path = "dict/lexitron.txt"
//!
//! [sentences]
//! splitter = "terminator"
//! terminators = [".", "!", "?", "\n"]
//!
//! [performance]
//! threads = 4
//! ```

use crate::error::{EngineError, Result};
use lexto_core::{SegmenterOptions, DEFAULT_TERMINATORS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration constants
pub mod defaults {
    /// Batch size (number of documents) from which batch tokenization goes
    /// parallel
    pub const PARALLEL_THRESHOLD: usize = 8;
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Word list source
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Segmenter behaviour
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Sentence splitting
    #[serde(default)]
    pub sentences: SentenceConfig,

    /// Batch execution
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Word list settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word list file, one entry per line
    pub path: Option<PathBuf>,

    /// Skip lines starting with `#`
    pub allow_comments: bool,
}

/// Segmenter settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Keep digit, Latin and whitespace runs whole
    pub atomic_runs: bool,
}

/// Which sentence source feeds the tokenizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitterKind {
    /// Split after terminator characters
    #[default]
    Terminator,
    /// Treat each document as one sentence
    Whole,
}

/// Sentence splitting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceConfig {
    /// Splitter to use
    pub splitter: SplitterKind,

    /// Characters that end a sentence
    pub terminators: Vec<char>,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            splitter: SplitterKind::default(),
            terminators: DEFAULT_TERMINATORS.to_vec(),
        }
    }
}

/// Batch execution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Worker threads for parallel batches (None = rayon's global pool)
    pub threads: Option<usize>,

    /// Minimum batch size for parallel execution
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EngineError::ConfigError(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.sentences.splitter == SplitterKind::Terminator
            && self.sentences.terminators.is_empty()
        {
            return Err(EngineError::ConfigError(
                "terminators must not be empty for the terminator splitter".into(),
            ));
        }

        if let Some(threads) = self.performance.threads {
            if threads == 0 {
                return Err(EngineError::ConfigError(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }

    /// Options handed to the core segmenter
    pub fn segmenter_options(&self) -> SegmenterOptions {
        SegmenterOptions {
            atomic_runs: self.segmentation.atomic_runs,
        }
    }
}

/// Fluent builder for [`EngineConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base: Option<EngineConfig>,
    dictionary_path: Option<PathBuf>,
    allow_comments: Option<bool>,
    atomic_runs: Option<bool>,
    splitter: Option<SplitterKind>,
    terminators: Option<Vec<char>>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration instead of the defaults
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            base: Some(config),
            ..Self::default()
        }
    }

    /// Set the word list file
    pub fn dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    /// Skip `#` comment lines when loading the word list
    pub fn allow_comments(mut self, allow: bool) -> Self {
        self.allow_comments = Some(allow);
        self
    }

    /// Keep digit, Latin and whitespace runs whole
    pub fn atomic_runs(mut self, enabled: bool) -> Self {
        self.atomic_runs = Some(enabled);
        self
    }

    /// Set the sentence splitter
    pub fn splitter(mut self, kind: SplitterKind) -> Self {
        self.splitter = Some(kind);
        self
    }

    /// Set the sentence terminators
    pub fn terminators(mut self, terminators: impl IntoIterator<Item = char>) -> Self {
        self.terminators = Some(terminators.into_iter().collect());
        self
    }

    /// Set the number of threads (None = rayon's global pool)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the batch size at which tokenization goes parallel
    pub fn parallel_threshold(mut self, documents: usize) -> Self {
        self.parallel_threshold = Some(documents);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let mut config = self.base.unwrap_or_default();

        if self.dictionary_path.is_some() {
            config.dictionary.path = self.dictionary_path;
        }
        if let Some(allow) = self.allow_comments {
            config.dictionary.allow_comments = allow;
        }
        if let Some(enabled) = self.atomic_runs {
            config.segmentation.atomic_runs = enabled;
        }
        if let Some(kind) = self.splitter {
            config.sentences.splitter = kind;
        }
        if let Some(terminators) = self.terminators {
            config.sentences.terminators = terminators;
        }
        if self.threads.is_some() {
            config.performance.threads = self.threads;
        }
        if let Some(threshold) = self.parallel_threshold {
            config.performance.parallel_threshold = threshold;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.dictionary.path, None);
        assert!(!config.dictionary.allow_comments);
        assert!(!config.segmentation.atomic_runs);
        assert_eq!(config.sentences.splitter, SplitterKind::Terminator);
        assert_eq!(config.sentences.terminators, vec!['.', '!', '?', '\n']);
        assert_eq!(config.performance.threads, None);
        assert_eq!(
            config.performance.parallel_threshold,
            defaults::PARALLEL_THRESHOLD
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            [dictionary]
            path = "words.txt"
            allow_comments = true

            [segmentation]
            atomic_runs = true

            [sentences]
            splitter = "whole"

            [performance]
            threads = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.dictionary.path, Some(PathBuf::from("words.txt")));
        assert!(config.dictionary.allow_comments);
        assert!(config.segmenter_options().atomic_runs);
        assert_eq!(config.sentences.splitter, SplitterKind::Whole);
        assert_eq!(config.sentences.terminators, DEFAULT_TERMINATORS.to_vec());
        assert_eq!(config.performance.threads, Some(2));
    }

    #[test]
    fn test_custom_terminators() {
        let config = EngineConfig::from_toml_str(
            r#"
            [sentences]
            terminators = ["ฯ", " "]
            "#,
        )
        .unwrap();
        assert_eq!(config.sentences.terminators, vec!['ฯ', ' ']);
    }

    #[test]
    fn test_invalid_toml() {
        let result = EngineConfig::from_toml_str("[sentences]\nsplitter = \"icu\"");
        assert!(matches!(result, Err(EngineError::TomlParse(_))));
    }

    #[test]
    fn test_validation_errors() {
        let result = EngineConfig::builder().threads(Some(0)).build();
        assert!(matches!(result, Err(EngineError::ConfigError(_))));

        let result = EngineConfig::builder()
            .terminators(std::iter::empty())
            .build();
        assert!(matches!(result, Err(EngineError::ConfigError(_))));

        // No terminators needed when every document is one sentence
        let config = EngineConfig::builder()
            .splitter(SplitterKind::Whole)
            .terminators(std::iter::empty())
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::builder()
            .dictionary_path("dict.txt")
            .allow_comments(true)
            .atomic_runs(true)
            .terminators(['.'])
            .threads(Some(4))
            .parallel_threshold(2)
            .build()
            .unwrap();

        assert_eq!(config.dictionary.path, Some(PathBuf::from("dict.txt")));
        assert!(config.dictionary.allow_comments);
        assert!(config.segmentation.atomic_runs);
        assert_eq!(config.sentences.terminators, vec!['.']);
        assert_eq!(config.performance.threads, Some(4));
        assert_eq!(config.performance.parallel_threshold, 2);
    }

    #[test]
    fn test_builder_from_existing_config() {
        let base = EngineConfig::from_toml_str("[segmentation]\natomic_runs = true").unwrap();
        let config = ConfigBuilder::from_config(base)
            .splitter(SplitterKind::Whole)
            .build()
            .unwrap();
        assert!(config.segmentation.atomic_runs);
        assert_eq!(config.sentences.splitter, SplitterKind::Whole);
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = EngineConfig::builder()
            .dictionary_path("dict.txt")
            .splitter(SplitterKind::Whole)
            .build()
            .unwrap();
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("splitter = \"whole\""));
        assert_eq!(EngineConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
