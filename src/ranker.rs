//! Batch ranking of résumés against a job description.
//!
//! ```text
//! ResumeFile ─extract─▶ Document ─score─▶ Scores ─identify─▶ ScoreResult ─sort─▶ Batch
//! ```
//!
//! Every document is processed in input order and always produces exactly
//! one [`ScoreResult`]; problems with a single document lower its scores
//! instead of failing the batch. Only an empty batch or an empty job
//! description is rejected.

pub mod engine;
pub mod types;

pub use engine::Ranker;
pub use types::{Batch, Document, ResumeFile, ScoreResult};
