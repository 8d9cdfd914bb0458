//! Tokenizers: the first stage of analysis.
//!
//! - [`unicode_word::UnicodeWordTokenizer`] feeds keyword matching.
//! - [`regex::RegexTokenizer`] walks capitalised words for entity recognition.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod regex;
pub mod unicode_word;

/// Splits text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text`.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;
}
