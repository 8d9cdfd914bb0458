//! Analyzers: a tokenizer followed by a fixed chain of filters.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod english;

/// Turns raw text into normalized tokens.
///
/// `Send + Sync` so one analyzer can be shared by the language model and its
/// embedder.
pub trait Analyzer: Send + Sync {
    /// Analyze `text`.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Short identifier used in debug output.
    fn name(&self) -> &'static str;
}
