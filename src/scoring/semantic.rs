//! Semantic similarity of raw texts.

use crate::model::LanguageModel;

/// Similarity of the raw (un-lemmatized) résumé and job texts in `[0, 1]`.
///
/// Delegates to the model and normalizes what comes back: negative values
/// clamp to 0, NaN becomes 0, and a model error degrades to 0 so that a
/// single document never fails the batch.
pub fn semantic_similarity(model: &dyn LanguageModel, resume_text: &str, jd_text: &str) -> f64 {
    match model.similarity(resume_text, jd_text) {
        Ok(similarity) if similarity.is_nan() => 0.0,
        Ok(similarity) => similarity.clamp(0.0, 1.0),
        Err(e) => {
            log::warn!("similarity unavailable, semantic score set to 0: {e}");
            0.0
        }
    }
}
