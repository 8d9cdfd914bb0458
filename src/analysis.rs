//! Text analysis for keyword matching.
//!
//! Raw résumé and job-description text is split into words, lowercased,
//! cleared of stop words and reduced to lemmas by an
//! [`analyzer::english::EnglishAnalyzer`].

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
