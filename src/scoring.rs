//! Scoring of one résumé text against one job description.
//!
//! Three pieces feed the final match score:
//!
//! - [`keyword`]: fraction of the job's normalized vocabulary that the résumé
//!   covers
//! - [`semantic`]: model-derived similarity of the two raw texts
//! - [`combiner`]: blends both into one percentage
//!
//! [`Scorer`] runs them together and upholds the empty-input rule: when either
//! text is empty every score is exactly zero.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::LanguageModel;

pub mod combiner;
pub mod keyword;
pub mod semantic;

/// The three scores attached to a résumé.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Blended score in `[0, 100]`.
    pub match_score: f64,
    /// Semantic similarity in `[0, 1]`.
    pub semantic_similarity: f64,
    /// Keyword overlap in `[0, 1]`.
    pub keyword_match: f64,
}

impl Scores {
    /// All scores zero.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Computes [`Scores`] for résumé texts against a prepared job description.
pub struct Scorer {
    model: Arc<dyn LanguageModel>,
}

impl Scorer {
    /// Create a new scorer.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Scorer { model }
    }

    /// Get the language model.
    pub fn model(&self) -> &Arc<dyn LanguageModel> {
        &self.model
    }

    /// Normalized token set of a job description, computed once per batch.
    ///
    /// A normalization failure yields an empty set, which makes every keyword
    /// score zero for the batch.
    pub fn job_tokens(&self, jd_text: &str) -> HashSet<String> {
        keyword::token_set(self.model.as_ref(), jd_text).unwrap_or_else(|e| {
            log::warn!("failed to normalize job description: {e}");
            HashSet::new()
        })
    }

    /// Score a résumé text against a job description and its token set.
    pub fn score(&self, resume_text: &str, jd_text: &str, jd_tokens: &HashSet<String>) -> Scores {
        if resume_text.is_empty() || jd_text.is_empty() {
            return Scores::zero();
        }

        let keyword_match = match keyword::token_set(self.model.as_ref(), resume_text) {
            Ok(resume_tokens) => keyword::keyword_overlap(&resume_tokens, jd_tokens),
            Err(e) => {
                log::warn!("failed to normalize résumé text, keyword score set to 0: {e}");
                0.0
            }
        };

        let semantic_similarity =
            semantic::semantic_similarity(self.model.as_ref(), resume_text, jd_text);

        Scores {
            match_score: combiner::combine(semantic_similarity, keyword_match),
            semantic_similarity,
            keyword_match,
        }
    }

    /// Score a single pair of texts.
    pub fn score_pair(&self, resume_text: &str, jd_text: &str) -> Scores {
        if resume_text.is_empty() || jd_text.is_empty() {
            return Scores::zero();
        }
        let jd_tokens = self.job_tokens(jd_text);
        self.score(resume_text, jd_text, &jd_tokens)
    }
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer")
            .field("model", &self.model.name())
            .finish()
    }
}
