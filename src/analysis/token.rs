//! Tokens and token streams.
//!
//! # Examples
//!
//! ```
//! use resume_ranker::analysis::token::{IntoTokenStream, Token};
//!
//! let tokens = vec![Token::new("Rust", 0, 4), Token::new("Tokio", 6, 11)];
//! let texts: Vec<String> = tokens.into_token_stream().map(|t| t.text).collect();
//!
//! assert_eq!(texts, vec!["Rust", "Tokio"]);
//! ```

/// A word cut from the input, with its byte span in that input.
///
/// Filters may rewrite `text`; the offsets always refer to the text the
/// tokenizer saw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Current text of the token.
    pub text: String,
    /// Byte offset of the first character.
    pub start_offset: usize,
    /// Byte offset one past the last character.
    pub end_offset: usize,
}

impl Token {
    /// Create a token covering `start_offset..end_offset`.
    pub fn new<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset,
        }
    }
}

/// Tokens flowing from a tokenizer through the filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Conversion into a [`TokenStream`].
pub trait IntoTokenStream {
    /// Box `self` as a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_span() {
        let token = Token::new("Kubernetes", 12, 22);
        assert_eq!(token.text, "Kubernetes");
        assert_eq!(token.end_offset - token.start_offset, token.text.len());
    }

    #[test]
    fn test_vec_into_token_stream_keeps_order() {
        let stream = vec![Token::new("go", 0, 2), Token::new("sql", 3, 6)].into_token_stream();
        let spans: Vec<_> = stream.map(|t| (t.start_offset, t.end_offset)).collect();
        assert_eq!(spans, vec![(0, 2), (3, 6)]);
    }
}
