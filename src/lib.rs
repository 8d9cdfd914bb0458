//! # Résumé Ranker
//!
//! Ranks candidate résumés against a job description by combining lexical
//! keyword overlap with vector-based semantic similarity.
//!
//! ## Pipeline
//!
//! - [`extract`]: résumé bytes to raw text
//! - [`analysis`]: tokenization, stop words and lemmatization
//! - [`model`]: the language model capability (lemmas, entities, similarity)
//! - [`scoring`]: keyword overlap, semantic similarity and their blend
//! - [`identity`]: candidate name and email
//! - [`ranker`]: the batch run producing a sorted leaderboard
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use resume_ranker::model::lexical::LexicalModel;
//! use resume_ranker::ranker::{Ranker, ResumeFile};
//!
//! # fn main() -> resume_ranker::error::Result<()> {
//! let model = Arc::new(LexicalModel::new()?);
//! let ranker = Ranker::new(model)?;
//!
//! let batch = ranker.rank_batch(
//!     vec![ResumeFile::new("jane.txt", b"Jane Doe\njane@example.com\nRust, Tokio".to_vec())],
//!     "Rust developer familiar with Tokio",
//! )?;
//!
//! assert_eq!(batch[0].rank, 1);
//! assert_eq!(batch[0].email, "jane@example.com");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod identity;
pub mod model;
pub mod ranker;
pub mod scoring;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
