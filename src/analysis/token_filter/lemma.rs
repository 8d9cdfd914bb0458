//! Lemmatizing token filter.
//!
//! Reduces inflected English words to their dictionary form so that
//! "managed", "managing" and "manages" all count as the same keyword. The
//! built-in [`EnglishLemmatizer`] combines an irregular-form table with
//! suffix rules; unlike a stemmer it restores the trailing `e` that
//! inflection removed ("managed" → "manage", not "manag").
//!
//! # Examples
//!
//! ```
//! use resume_ranker::analysis::token_filter::lemma::EnglishLemmatizer;
//!
//! let lemmatizer = EnglishLemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("managed"), "manage");
//! assert_eq!(lemmatizer.lemmatize("companies"), "company");
//! assert_eq!(lemmatizer.lemmatize("led"), "lead");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Irregular forms that suffix rules cannot recover.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("began", "begin"),
    ("begun", "begin"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("built", "build"),
    ("children", "child"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("criteria", "criterion"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("held", "hold"),
    ("hundred", "hundred"),
    ("kept", "keep"),
    ("led", "lead"),
    ("left", "leave"),
    ("made", "make"),
    ("men", "man"),
    ("met", "meet"),
    ("news", "news"),
    ("oversaw", "oversee"),
    ("overseen", "oversee"),
    ("ran", "run"),
    ("series", "series"),
    ("sought", "seek"),
    ("spent", "spend"),
    ("taken", "take"),
    ("taught", "teach"),
    ("thought", "think"),
    ("took", "take"),
    ("used", "use"),
    ("uses", "use"),
    ("using", "use"),
    ("women", "woman"),
    ("won", "win"),
    ("wrote", "write"),
    ("written", "write"),
];

/// Stem endings after which inflection dropped a silent `e`.
const E_RESTORING_ENDINGS: &[&str] = &[
    "ang", "ans", "ens", "at", "bl", "iz", "yz", "ag", "dg", "rg", "uc", "nc", "rc", "rv", "lv",
    "iv", "av", "ov", "ev", "ur", "ut", "as", "os", "is",
];

/// Rule-based English lemmatizer.
///
/// Only lowercase ASCII words longer than three characters are rewritten;
/// anything else (numbers, `node.js`, short acronyms) passes through as is.
#[derive(Debug, Clone)]
pub struct EnglishLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl EnglishLemmatizer {
    /// Create a new English lemmatizer.
    pub fn new() -> Self {
        EnglishLemmatizer {
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
        }
    }

    fn is_vowel(bytes: &[u8], i: usize) -> bool {
        match bytes[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => true,
            b'y' => i > 0 && !Self::is_vowel(bytes, i - 1),
            _ => false,
        }
    }

    fn has_vowel(stem: &str) -> bool {
        let bytes = stem.as_bytes();
        (0..bytes.len()).any(|i| Self::is_vowel(bytes, i))
    }

    /// Consonant-vowel-consonant ending, where the last consonant is not w, x or y.
    fn ends_cvc(stem: &str) -> bool {
        let bytes = stem.as_bytes();
        let n = bytes.len();
        n >= 3
            && !Self::is_vowel(bytes, n - 3)
            && Self::is_vowel(bytes, n - 2)
            && !Self::is_vowel(bytes, n - 1)
            && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
    }

    /// Rebuild a verb from what is left after stripping `-ed` or `-ing`.
    fn restore_verb(stem: &str) -> Option<String> {
        if stem.len() < 3 || !Self::has_vowel(stem) {
            return None;
        }

        let bytes = stem.as_bytes();
        let n = bytes.len();
        let last = bytes[n - 1];

        if last == bytes[n - 2] && !Self::is_vowel(bytes, n - 1) && !matches!(last, b'l' | b's' | b'z')
        {
            return Some(stem[..n - 1].to_string());
        }

        if E_RESTORING_ENDINGS.iter().any(|ending| stem.ends_with(ending))
            || (n == 3 && Self::ends_cvc(stem))
        {
            return Some(format!("{stem}e"));
        }

        Some(stem.to_string())
    }
}

impl Default for EnglishLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishLemmatizer {
    /// Reduce a lowercase word to its lemma.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular.get(word) {
            return (*lemma).to_string();
        }

        if word.len() <= 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied"))
            && stem.len() >= 2
        {
            return format!("{stem}y");
        }

        if ["sses", "ches", "shes", "xes", "zes"]
            .iter()
            .any(|suffix| word.ends_with(suffix))
        {
            return word[..word.len() - 2].to_string();
        }

        if word.ends_with("eed") {
            return word.to_string();
        }

        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix)
                && let Some(lemma) = Self::restore_verb(stem)
            {
                return lemma;
            }
        }

        if word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}

/// Replaces each token's text with its lemma.
#[derive(Clone, Debug, Default)]
pub struct LemmaFilter {
    lemmatizer: Arc<EnglishLemmatizer>,
}

impl LemmaFilter {
    /// Create a new lemma filter.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Arc::new(EnglishLemmatizer::new()),
        }
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let lemmatizer = Arc::clone(&self.lemmatizer);
        Ok(Box::new(tokens.map(move |mut token| {
            token.text = lemmatizer.lemmatize(&token.text);
            token
        })))
    }
}
