//! Stop-word filter.
//!
//! Job descriptions are full of pronouns and auxiliaries ("we", "you",
//! "will") that say nothing about fit and would otherwise dominate keyword
//! overlap, so the default list is broad.
//!
//! # Examples
//!
//! ```
//! use resume_ranker::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new().extend(["Responsibilities"]);
//!
//! assert!(filter.is_stop_word("our"));
//! assert!(filter.is_stop_word("responsibilities"));
//! assert!(!filter.is_stop_word("kubernetes"));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Function words dropped by default.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "either", "else", "etc", "ever",
    "every", "few", "for", "from", "further", "had", "hadn't", "has", "hasn't", "have",
    "haven't", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "however", "i", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just",
    "least", "less", "let", "may", "me", "might", "more", "most", "must", "my", "myself",
    "neither", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "per", "please",
    "rather", "same", "shall", "she", "should", "shouldn't", "since", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "therefore",
    "these", "they", "this", "those", "though", "through", "thus", "to", "too", "under",
    "until", "up", "upon", "us", "very", "via", "was", "wasn't", "we", "were", "weren't",
    "what", "whatever", "when", "whenever", "where", "whereas", "whether", "which", "while",
    "who", "whoever", "whom", "whose", "why", "will", "with", "within", "without", "won't",
    "would", "wouldn't", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Drops tokens whose text is in the stop set.
///
/// Matching is exact, so the filter runs after lowercasing.
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a filter with the built-in English list.
    pub fn new() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create a filter with exactly `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Add `words`, trimmed and lowercased, to the set. Blank entries are
    /// skipped so a stop-words file may contain empty lines.
    pub fn extend<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Arc::unwrap_or_clone(self.words);
        set.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        StopFilter {
            words: Arc::new(set),
        }
    }

    /// Whether `word` is in the stop set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the stop set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = Arc::clone(&self.words);
        Ok(Box::new(
            tokens.filter(move |token| !words.contains(&token.text)),
        ))
    }
}
