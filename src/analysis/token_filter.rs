//! Token filters applied after tokenization.
//!
//! ```text
//! Tokenizer → Lowercase → Stop words → Lemma
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod lemma;
pub mod lowercase;
pub mod stop;

/// Transforms a token stream.
///
/// Filters wrap the incoming stream lazily; nothing is evaluated until the
/// analyzer's caller consumes it.
pub trait Filter: Send + Sync {
    /// Wrap `tokens` with this filter.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;
}
