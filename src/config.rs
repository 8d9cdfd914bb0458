//! Ranker configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the standard behavior. A partial file overrides only the keys it
//! names.
//!
//! ```
//! use resume_ranker::config::RankerConfig;
//!
//! let config: RankerConfig =
//!     serde_json::from_str(r#"{ "identity": { "name_window_chars": 300 } }"#).unwrap();
//!
//! assert_eq!(config.identity.name_window_chars, 300);
//! assert_eq!(config.identity.max_name_chars, 50);
//! assert!(config.validate().is_ok());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RankerError, Result};
use crate::model::distance::DistanceMetric;

/// Top-level configuration for a ranking run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Candidate name and email heuristics.
    pub identity: IdentityConfig,
    /// Built-in language model settings.
    pub model: ModelConfig,
    /// Byte to text extraction settings.
    pub extraction: ExtractionConfig,
}

impl RankerConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RankerError::invalid_config(format!(
                "cannot read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: RankerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.identity.validate()?;
        self.model.validate()
    }
}

/// Settings for [`crate::identity::IdentityExtractor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Number of leading characters handed to entity recognition.
    pub name_window_chars: usize,
    /// The first-line fallback must be longer than this many characters.
    pub min_name_chars: usize,
    /// The first-line fallback must be shorter than this many characters.
    pub max_name_chars: usize,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            name_window_chars: 500,
            min_name_chars: 3,
            max_name_chars: 50,
        }
    }
}

impl IdentityConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.name_window_chars == 0 {
            return Err(RankerError::invalid_config(
                "identity.name_window_chars must be greater than zero",
            ));
        }
        if self.min_name_chars + 1 >= self.max_name_chars {
            return Err(RankerError::invalid_config(format!(
                "identity name bounds leave no valid length: {} < len < {}",
                self.min_name_chars, self.max_name_chars
            )));
        }
        Ok(())
    }
}

/// Settings for [`crate::model::lexical::LexicalModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Number of hash buckets in a document vector.
    pub embedding_dimension: usize,
    /// Weight of adjacent-lemma features relative to single lemmas.
    pub bigram_weight: f32,
    /// Metric used to compare document vectors.
    pub similarity_metric: DistanceMetric,
    /// Stop words added to the built-in English list.
    pub extra_stop_words: Vec<String>,
    /// File with one additional stop word per line.
    pub stop_words_file: Option<PathBuf>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            embedding_dimension: 1024,
            bigram_weight: 0.5,
            similarity_metric: DistanceMetric::Cosine,
            extra_stop_words: Vec::new(),
            stop_words_file: None,
        }
    }
}

impl ModelConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.embedding_dimension == 0 {
            return Err(RankerError::invalid_config(
                "model.embedding_dimension must be greater than zero",
            ));
        }
        if !self.bigram_weight.is_finite() || self.bigram_weight < 0.0 {
            return Err(RankerError::invalid_config(format!(
                "model.bigram_weight must be a non-negative number, got {}",
                self.bigram_weight
            )));
        }
        Ok(())
    }
}

/// Settings for [`crate::extract::Utf8Extractor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Replace invalid UTF-8 sequences instead of rejecting the document.
    pub lossy_utf8: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig { lossy_utf8: true }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = RankerConfig::default();

        assert_eq!(config.identity.name_window_chars, 500);
        assert_eq!(config.identity.min_name_chars, 3);
        assert_eq!(config.identity.max_name_chars, 50);
        assert_eq!(config.model.embedding_dimension, 1024);
        assert_eq!(config.model.similarity_metric, DistanceMetric::Cosine);
        assert!(config.extraction.lossy_utf8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: RankerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RankerConfig::default());
    }

    #[test]
    fn test_invalid_identity_bounds() {
        let mut config = RankerConfig::default();
        config.identity.min_name_chars = 10;
        config.identity.max_name_chars = 11;

        assert!(matches!(
            config.validate(),
            Err(RankerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_model_settings() {
        let mut config = RankerConfig::default();
        config.model.embedding_dimension = 0;
        assert!(config.validate().is_err());

        let mut config = RankerConfig::default();
        config.model.bigram_weight = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "model": {{ "extra_stop_words": ["responsibilities"], "similarity_metric": "angular" }} }}"#
        )
        .unwrap();

        let config = RankerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.model.extra_stop_words, vec!["responsibilities"]);
        assert_eq!(config.model.similarity_metric, DistanceMetric::Angular);
        assert_eq!(config.model.embedding_dimension, 1024);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(RankerConfig::from_file("/nonexistent/ranker.json").is_err());
    }
}
