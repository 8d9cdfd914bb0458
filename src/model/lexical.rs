//! The built-in, file-free language model.

use std::fs;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::english::EnglishAnalyzer;
use crate::analysis::token_filter::stop::StopFilter;
use crate::config::ModelConfig;
use crate::error::{RankerError, Result};
use crate::model::distance::DistanceMetric;
use crate::model::embedding::{HashingEmbedder, TextEmbedder};
use crate::model::entity::EntityRecognizer;
use crate::model::{Entity, LanguageModel};

/// Deterministic language model built from the analysis pipeline, a
/// capitalisation-based entity recognizer and a hashing embedder.
///
/// # Examples
///
/// ```
/// use resume_ranker::model::LanguageModel;
/// use resume_ranker::model::lexical::LexicalModel;
///
/// let model = LexicalModel::new().unwrap();
///
/// assert_eq!(model.lemmas("Managed teams").unwrap(), vec!["manage", "team"]);
/// assert_eq!(model.similarity("", "Rust").unwrap(), 0.0);
/// ```
pub struct LexicalModel {
    analyzer: Arc<dyn Analyzer>,
    recognizer: EntityRecognizer,
    embedder: HashingEmbedder,
    metric: DistanceMetric,
}

impl LexicalModel {
    /// Create a model with the default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(&ModelConfig::default())
    }

    /// Create a model from configuration.
    ///
    /// Fails with [`RankerError::ModelUnavailable`] when the configuration is
    /// unusable or the stop-word file cannot be read.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| RankerError::model_unavailable(e.to_string()))?;

        let mut stop_filter = StopFilter::new().extend(&config.extra_stop_words);

        if let Some(path) = &config.stop_words_file {
            let content = fs::read_to_string(path).map_err(|e| {
                RankerError::model_unavailable(format!(
                    "cannot read stop words file {}: {e}",
                    path.display()
                ))
            })?;
            stop_filter = stop_filter.extend(content.lines());
        }

        log::debug!(
            "building lexical model with {} stop words, dimension {}",
            stop_filter.len(),
            config.embedding_dimension
        );

        let analyzer: Arc<dyn Analyzer> = Arc::new(EnglishAnalyzer::with_stop_filter(stop_filter));
        let embedder = HashingEmbedder::new(Arc::clone(&analyzer), config.embedding_dimension)
            .map_err(|e| RankerError::model_unavailable(e.to_string()))?
            .with_bigram_weight(config.bigram_weight);
        let recognizer =
            EntityRecognizer::new().map_err(|e| RankerError::model_unavailable(e.to_string()))?;

        Ok(LexicalModel {
            analyzer,
            recognizer,
            embedder,
            metric: config.similarity_metric,
        })
    }

    /// Get the similarity metric.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

impl LanguageModel for LexicalModel {
    fn lemmas(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|t| t.text).collect())
    }

    fn entities(&self, text: &str) -> Result<Vec<Entity>> {
        self.recognizer.recognize(text)
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        let a = self.embedder.embed(a)?;
        if a.is_zero() {
            return Ok(0.0);
        }
        let b = self.embedder.embed(b)?;
        if b.is_zero() {
            return Ok(0.0);
        }

        self.metric.similarity(&a.data, &b.data)
    }

    fn name(&self) -> &str {
        "lexical"
    }
}

impl std::fmt::Debug for LexicalModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalModel")
            .field("analyzer", &self.analyzer.name())
            .field("embedder", &self.embedder)
            .field("metric", &self.metric)
            .finish()
    }
}
