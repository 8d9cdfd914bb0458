//! The language model capability used by the scoring pipeline.
//!
//! Tokenization, lemmatization, named-entity recognition and document
//! similarity are all provided by one [`LanguageModel`] handle. The handle is
//! built once at startup and passed explicitly (as `Arc<dyn LanguageModel>`)
//! to every component that needs it, so tests can swap in a mock.
//!
//! [`lexical::LexicalModel`] is the built-in implementation: it needs no
//! external model files and is fully deterministic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod distance;
pub mod embedding;
pub mod entity;
pub mod lexical;

/// Semantic label attached to a recognized entity span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    /// A person's name.
    Person,
    /// A company, university or other organization.
    Org,
    /// Any other label a model may produce.
    Other(String),
}

impl EntityLabel {
    /// Conventional upper-case tag for this label.
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Other(label) => label,
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled span of the analysed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// The span's text.
    pub text: String,
    /// The span's label.
    pub label: EntityLabel,
    /// Byte offset where the span starts.
    pub start: usize,
    /// Byte offset where the span ends.
    pub end: usize,
}

impl Entity {
    /// Create a new entity.
    pub fn new<S: Into<String>>(text: S, label: EntityLabel, start: usize, end: usize) -> Self {
        Entity {
            text: text.into(),
            label,
            start,
            end,
        }
    }

    /// Whether this entity names a person.
    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }
}

/// Trait for the NLP capability behind keyword matching, identity
/// extraction and semantic similarity.
///
/// Implementations must be deterministic for the ranking to be idempotent.
///
/// # Examples
///
/// ```
/// use resume_ranker::error::Result;
/// use resume_ranker::model::{Entity, LanguageModel};
///
/// struct WhitespaceModel;
///
/// impl LanguageModel for WhitespaceModel {
///     fn lemmas(&self, text: &str) -> Result<Vec<String>> {
///         Ok(text.split_whitespace().map(|w| w.to_lowercase()).collect())
///     }
///
///     fn entities(&self, _text: &str) -> Result<Vec<Entity>> {
///         Ok(Vec::new())
///     }
///
///     fn similarity(&self, a: &str, b: &str) -> Result<f64> {
///         Ok(if a == b { 1.0 } else { 0.0 })
///     }
/// }
///
/// let model = WhitespaceModel;
/// assert_eq!(model.lemmas("Rust Go").unwrap(), vec!["rust", "go"]);
/// ```
pub trait LanguageModel: Send + Sync {
    /// Normalized lemmas of `text`: lowercased, lemmatized, with punctuation,
    /// whitespace and stop words removed.
    fn lemmas(&self, text: &str) -> Result<Vec<String>>;

    /// Named entities in document order.
    fn entities(&self, text: &str) -> Result<Vec<Entity>>;

    /// Similarity of two raw texts in `[0, 1]`; 0 when either text has no
    /// vector representation.
    fn similarity(&self, a: &str, b: &str) -> Result<f64>;

    /// Get the name/identifier of this model.
    fn name(&self) -> &str {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_label_tags() {
        assert_eq!(EntityLabel::Person.as_str(), "PERSON");
        assert_eq!(EntityLabel::Org.to_string(), "ORG");
        assert_eq!(EntityLabel::Other("GPE".to_string()).as_str(), "GPE");
    }

    #[test]
    fn test_entity_is_person() {
        assert!(Entity::new("Jane Doe", EntityLabel::Person, 0, 8).is_person());
        assert!(!Entity::new("Acme Inc", EntityLabel::Org, 0, 8).is_person());
    }
}
