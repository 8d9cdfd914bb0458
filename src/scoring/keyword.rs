//! Lemmatized keyword overlap.

use std::collections::HashSet;

use crate::error::Result;
use crate::model::LanguageModel;

/// Build the normalized token set of `text`.
///
/// Duplicates collapse; order is irrelevant.
pub fn token_set(model: &dyn LanguageModel, text: &str) -> Result<HashSet<String>> {
    Ok(model.lemmas(text)?.into_iter().collect())
}

/// Fraction of the job description's tokens present in the résumé.
///
/// The measure is asymmetric: it is the résumé's coverage of the job
/// vocabulary, so extra résumé words never lower the score. An empty job
/// token set scores 0.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use resume_ranker::scoring::keyword::keyword_overlap;
///
/// let resume: HashSet<String> = ["rust", "go", "sql"].map(String::from).into();
/// let jd: HashSet<String> = ["rust", "kubernetes"].map(String::from).into();
///
/// assert_eq!(keyword_overlap(&resume, &jd), 0.5);
/// ```
pub fn keyword_overlap(resume_tokens: &HashSet<String>, jd_tokens: &HashSet<String>) -> f64 {
    if jd_tokens.is_empty() {
        return 0.0;
    }

    let common = jd_tokens
        .iter()
        .filter(|token| resume_tokens.contains(*token))
        .count();

    common as f64 / jd_tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_job_tokens() {
        assert_eq!(keyword_overlap(&set(&["rust"]), &set(&[])), 0.0);
        assert_eq!(keyword_overlap(&set(&[]), &set(&[])), 0.0);
    }

    #[test]
    fn test_full_and_partial_coverage() {
        let jd = set(&["rust", "tokio", "postgres", "kafka"]);

        assert_eq!(keyword_overlap(&set(&["rust", "tokio", "postgres", "kafka", "go"]), &jd), 1.0);
        assert_eq!(keyword_overlap(&set(&["rust", "go"]), &jd), 0.25);
        assert_eq!(keyword_overlap(&set(&["java"]), &jd), 0.0);
    }

    #[test]
    fn test_overlap_is_asymmetric() {
        let small = set(&["rust"]);
        let large = set(&["rust", "go", "python", "java"]);

        assert_eq!(keyword_overlap(&large, &small), 1.0);
        assert_eq!(keyword_overlap(&small, &large), 0.25);
    }
}
