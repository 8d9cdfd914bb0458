//! Word tokenizer based on Unicode segmentation (UAX #29).
//!
//! ```
//! use resume_ranker::analysis::tokenizer::Tokenizer;
//! use resume_ranker::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let words: Vec<String> = UnicodeWordTokenizer::new()
//!     .tokenize("Rust, Go & SQL!")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["Rust", "Go", "SQL"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Splits on word boundaries and keeps only segments with a letter or digit.
///
/// `node.js`, `don't` and `3.5` stay whole since UAX #29 does not break
/// inside them.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(char::is_alphanumeric))
            .map(|(start, word)| Token::new(word, start, start + word.len()))
            .collect::<Vec<_>>()
            .into_token_stream())
    }
}
