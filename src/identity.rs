//! Candidate name and email extraction.
//!
//! Identity extraction never fails: when nothing usable is found the
//! sentinels [`NAME_NOT_FOUND`] and [`EMAIL_NOT_FOUND`] are returned.

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;
use crate::error::{RankerError, Result};
use crate::model::LanguageModel;

/// Name used when no candidate name could be found.
pub const NAME_NOT_FOUND: &str = "Candidate";

/// Email used when no address could be found.
pub const EMAIL_NOT_FOUND: &str = "Not Found";

/// Pattern of a candidate email address.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+";

/// Who a résumé belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Candidate name or [`NAME_NOT_FOUND`].
    pub name: String,
    /// Candidate email or [`EMAIL_NOT_FOUND`].
    pub email: String,
}

/// Extracts an [`Identity`] from résumé text.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use resume_ranker::identity::IdentityExtractor;
/// use resume_ranker::model::lexical::LexicalModel;
///
/// let extractor = IdentityExtractor::new(Arc::new(LexicalModel::new().unwrap())).unwrap();
/// let identity = extractor.extract("Jane Doe\nContact: jane.doe@example.com today");
///
/// assert_eq!(identity.name, "Jane Doe");
/// assert_eq!(identity.email, "jane.doe@example.com");
/// ```
pub struct IdentityExtractor {
    model: Arc<dyn LanguageModel>,
    config: IdentityConfig,
    email: Regex,
}

impl IdentityExtractor {
    /// Create an extractor with the default window and name bounds.
    pub fn new(model: Arc<dyn LanguageModel>) -> Result<Self> {
        Self::with_config(model, IdentityConfig::default())
    }

    /// Create an extractor with custom settings.
    pub fn with_config(model: Arc<dyn LanguageModel>, config: IdentityConfig) -> Result<Self> {
        let email = Regex::new(EMAIL_PATTERN)
            .map_err(|e| RankerError::invalid_config(format!("Invalid email pattern: {e}")))?;

        Ok(IdentityExtractor {
            model,
            config,
            email,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// Extract the candidate's name and email.
    pub fn extract(&self, text: &str) -> Identity {
        Identity {
            name: self.extract_name(text),
            email: self.extract_email(text),
        }
    }

    /// First PERSON entity near the top of the text, else a plausible first
    /// line, else [`NAME_NOT_FOUND`].
    pub fn extract_name(&self, text: &str) -> String {
        let window = char_prefix(text, self.config.name_window_chars);

        let person = match self.model.entities(window) {
            Ok(entities) => entities.into_iter().find(|e| e.is_person()).map(|e| e.text),
            Err(e) => {
                log::warn!("entity recognition failed, falling back to first line: {e}");
                None
            }
        };

        person
            .or_else(|| self.first_line_name(text))
            .unwrap_or_else(|| NAME_NOT_FOUND.to_string())
    }

    /// First email address anywhere in the text, else [`EMAIL_NOT_FOUND`].
    pub fn extract_email(&self, text: &str) -> String {
        self.email
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
    }

    fn first_line_name(&self, text: &str) -> Option<String> {
        let line = text.split('\n').next()?.trim();
        let len = line.chars().count();

        (len > self.config.min_name_chars && len < self.config.max_name_chars)
            .then(|| line.to_string())
    }
}

impl std::fmt::Debug for IdentityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityExtractor")
            .field("model", &self.model.name())
            .field("config", &self.config)
            .finish()
    }
}

/// The first `max_chars` characters of `text`, cut on a char boundary.
fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, EntityLabel};

    /// Reports the given entities that lie inside the analysed text.
    struct StubModel {
        entities: Vec<Entity>,
        fail: bool,
    }

    impl LanguageModel for StubModel {
        fn lemmas(&self, _text: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        fn entities(&self, text: &str) -> Result<Vec<Entity>> {
            if self.fail {
                return Err(RankerError::model_unavailable("ner offline"));
            }
            Ok(self
                .entities
                .iter()
                .filter(|e| e.end <= text.len())
                .cloned()
                .collect())
        }

        fn similarity(&self, _a: &str, _b: &str) -> Result<f64> {
            Ok(0.0)
        }
    }

    fn extractor(entities: Vec<Entity>) -> IdentityExtractor {
        IdentityExtractor::new(Arc::new(StubModel {
            entities,
            fail: false,
        }))
        .unwrap()
    }

    #[test]
    fn test_email_found() {
        assert_eq!(
            extractor(Vec::new()).extract_email("Contact: jane.doe@example.com today"),
            "jane.doe@example.com"
        );
    }

    #[test]
    fn test_email_not_found() {
        assert_eq!(
            extractor(Vec::new()).extract_email("no address here, just @handles"),
            EMAIL_NOT_FOUND
        );
    }

    #[test]
    fn test_first_email_wins() {
        assert_eq!(
            extractor(Vec::new()).extract_email("a.b+cv@mail.co.uk or backup@example.org"),
            "a.b+cv@mail.co.uk"
        );
    }

    #[test]
    fn test_first_person_entity_wins() {
        let text = "Acme Corp résumé of Jane Doe, reference John Roe";
        let extractor = extractor(vec![
            Entity::new("Acme Corp", EntityLabel::Org, 0, 9),
            Entity::new("Jane Doe", EntityLabel::Person, 21, 29),
            Entity::new("John Roe", EntityLabel::Person, 41, 49),
        ]);

        assert_eq!(extractor.extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_person_outside_window_is_ignored() {
        let mut text = "x".repeat(600);
        text.push_str(" Jane Doe");
        let extractor = extractor(vec![Entity::new("Jane Doe", EntityLabel::Person, 601, 609)]);

        // The first line is 609 chars, far too long for the fallback.
        assert_eq!(extractor.extract_name(&text), NAME_NOT_FOUND);
    }

    #[test]
    fn test_first_line_fallback() {
        let extractor = extractor(Vec::new());

        assert_eq!(extractor.extract_name("  Jane Doe  \nRust engineer"), "Jane Doe");
        assert_eq!(extractor.extract_name(&"A".repeat(60)), NAME_NOT_FOUND);
        assert_eq!(extractor.extract_name("Bob\nRust engineer"), NAME_NOT_FOUND);
        assert_eq!(extractor.extract_name(""), NAME_NOT_FOUND);
    }

    #[test]
    fn test_ner_failure_uses_fallback() {
        let extractor = IdentityExtractor::new(Arc::new(StubModel {
            entities: Vec::new(),
            fail: true,
        }))
        .unwrap();

        assert_eq!(extractor.extract_name("Jane Doe\nRust"), "Jane Doe");
    }

    #[test]
    fn test_custom_bounds() {
        let config = IdentityConfig {
            name_window_chars: 100,
            min_name_chars: 1,
            max_name_chars: 10,
        };
        let extractor = IdentityExtractor::with_config(
            Arc::new(StubModel {
                entities: Vec::new(),
                fail: false,
            }),
            config,
        )
        .unwrap();

        assert_eq!(extractor.extract_name("Bo\n"), "Bo");
        assert_eq!(extractor.extract_name("Jane Q. Doe-Smith"), NAME_NOT_FOUND);
    }

    #[test]
    fn test_char_prefix_respects_boundaries() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("abc", 0), "");
    }
}
