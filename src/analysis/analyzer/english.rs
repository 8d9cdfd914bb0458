//! English keyword analyzer.
//!
//! # Pipeline
//!
//! 1. UnicodeWordTokenizer (drops punctuation and whitespace)
//! 2. LowercaseFilter
//! 3. StopFilter (English stop words, optionally extended)
//! 4. LemmaFilter (English lemmatizer)
//!
//! # Examples
//!
//! ```
//! use resume_ranker::analysis::analyzer::Analyzer;
//! use resume_ranker::analysis::analyzer::english::EnglishAnalyzer;
//!
//! let analyzer = EnglishAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Managed the Rust services.").unwrap().collect();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["manage", "rust", "service"]);
//! ```

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Analyzer producing the normalized lemmas used for keyword overlap.
#[derive(Clone, Debug, Default)]
pub struct EnglishAnalyzer {
    tokenizer: UnicodeWordTokenizer,
    lowercase: LowercaseFilter,
    stop: StopFilter,
    lemma: LemmaFilter,
}

impl EnglishAnalyzer {
    /// Create an English analyzer with the default stop word list.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create an English analyzer with a custom stop filter.
    pub fn with_stop_filter(stop: StopFilter) -> Self {
        EnglishAnalyzer {
            tokenizer: UnicodeWordTokenizer::new(),
            lowercase: LowercaseFilter::new(),
            stop,
            lemma: LemmaFilter::new(),
        }
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.tokenizer.tokenize(text)?;
        let tokens = self.lowercase.filter(tokens)?;
        let tokens = self.stop.filter(tokens)?;
        self.lemma.filter(tokens)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}
