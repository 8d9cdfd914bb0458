//! Byte to text extraction for uploaded résumés.
//!
//! Extraction never fails the batch: an extractor returns `None` when it
//! cannot decode a payload and the ranker scores that document as empty
//! text. PDF or DOCX decoding plugs in through [`TextExtractor`], for
//! instance with a [`FnExtractor`] wrapping a third-party decoder.

use std::fmt;

use crate::config::ExtractionConfig;

/// Trait for converting a document payload into raw text.
pub trait TextExtractor: Send + Sync {
    /// Decode `payload` into text, or `None` if the payload is unreadable.
    fn extract(&self, payload: &[u8]) -> Option<String>;

    /// Get the name of this extractor.
    fn name(&self) -> &'static str;
}

/// Extractor for plain-text résumés.
#[derive(Debug, Clone, Copy)]
pub struct Utf8Extractor {
    lossy: bool,
}

impl Utf8Extractor {
    /// Create an extractor that rejects invalid UTF-8.
    pub fn strict() -> Self {
        Utf8Extractor { lossy: false }
    }

    /// Create an extractor that replaces invalid sequences with U+FFFD.
    pub fn lossy() -> Self {
        Utf8Extractor { lossy: true }
    }

    /// Create the extractor selected by `config.lossy_utf8`.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        if config.lossy_utf8 {
            Self::lossy()
        } else {
            Self::strict()
        }
    }

    /// Whether invalid sequences are replaced rather than rejected.
    pub fn is_lossy(&self) -> bool {
        self.lossy
    }
}

impl Default for Utf8Extractor {
    fn default() -> Self {
        Self::lossy()
    }
}

impl TextExtractor for Utf8Extractor {
    fn extract(&self, payload: &[u8]) -> Option<String> {
        let payload = payload.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(payload);

        if self.lossy {
            Some(String::from_utf8_lossy(payload).into_owned())
        } else {
            std::str::from_utf8(payload).ok().map(str::to_string)
        }
    }

    fn name(&self) -> &'static str {
        "utf8"
    }
}

/// Run `extractor` over a document's payload, falling back to empty text
/// (with a warning naming `filename`) when it cannot be decoded.
pub fn extract_or_empty(extractor: &dyn TextExtractor, filename: &str, payload: &[u8]) -> String {
    extractor.extract(payload).unwrap_or_else(|| {
        log::warn!(
            "{filename}: {} extractor could not read the file, treating it as empty",
            extractor.name()
        );
        String::new()
    })
}

/// Adapts a closure into a [`TextExtractor`].
///
/// ```
/// use resume_ranker::extract::{FnExtractor, TextExtractor};
///
/// let upper = FnExtractor::new("upper", |bytes: &[u8]| {
///     std::str::from_utf8(bytes).ok().map(str::to_uppercase)
/// });
///
/// assert_eq!(upper.extract(b"rust").as_deref(), Some("RUST"));
/// ```
pub struct FnExtractor<F> {
    name: &'static str,
    func: F,
}

impl<F> FnExtractor<F>
where
    F: Fn(&[u8]) -> Option<String> + Send + Sync,
{
    /// Wrap `func` under the given name.
    pub fn new(name: &'static str, func: F) -> Self {
        FnExtractor { name, func }
    }
}

impl<F> TextExtractor for FnExtractor<F>
where
    F: Fn(&[u8]) -> Option<String> + Send + Sync,
{
    fn extract(&self, payload: &[u8]) -> Option<String> {
        (self.func)(payload)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<F> fmt::Debug for FnExtractor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnExtractor").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_from_config() {
        let strict = Utf8Extractor::from_config(&ExtractionConfig { lossy_utf8: false });
        assert!(!strict.is_lossy());
        assert!(Utf8Extractor::from_config(&ExtractionConfig::default()).is_lossy());
    }

    #[test]
    fn test_extract_or_empty_falls_back_on_undecodable_payload() {
        let strict = Utf8Extractor::strict();

        assert_eq!(extract_or_empty(&strict, "cv.txt", b"\xFF\xFE"), "");
        assert_eq!(extract_or_empty(&strict, "cv.txt", b"Jane Doe"), "Jane Doe");
    }

    #[test]
    fn test_utf8_extraction() {
        let extractor = Utf8Extractor::strict();
        assert_eq!(
            extractor.extract("Jane Doe\nRust".as_bytes()).as_deref(),
            Some("Jane Doe\nRust")
        );
    }

    #[test]
    fn test_byte_order_mark_is_dropped() {
        let extractor = Utf8Extractor::default();
        assert_eq!(extractor.extract(b"\xEF\xBB\xBFJane").as_deref(), Some("Jane"));
    }

    #[test]
    fn test_invalid_utf8() {
        let payload = b"Jane \xFF Doe";

        assert_eq!(Utf8Extractor::strict().extract(payload), None);
        assert_eq!(
            Utf8Extractor::lossy().extract(payload).as_deref(),
            Some("Jane \u{FFFD} Doe")
        );
    }

    #[test]
    fn test_fn_extractor() {
        let failing = FnExtractor::new("never", |_: &[u8]| None);

        assert_eq!(failing.name(), "never");
        assert_eq!(failing.extract(b"%PDF-1.7"), None);
    }
}
