//! Tokenizer driven by a regular expression.

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{RankerError, Result};

/// Emits one token per match of its pattern.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Compile `pattern` into a tokenizer.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| RankerError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(RegexTokenizer { pattern })
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self
            .pattern
            .find_iter(text)
            .map(|m| Token::new(m.as_str(), m.start(), m.end()))
            .collect::<Vec<_>>()
            .into_token_stream())
    }
}
