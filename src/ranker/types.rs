//! Types flowing through a ranking run.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::scoring::Scores;

/// An uploaded résumé: its original filename and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    /// Original filename.
    pub filename: String,
    /// Raw document bytes.
    pub payload: Vec<u8>,
}

impl ResumeFile {
    /// Create a new résumé file.
    pub fn new<S: Into<String>>(filename: S, payload: Vec<u8>) -> Self {
        ResumeFile {
            filename: filename.into(),
            payload,
        }
    }
}

/// A résumé after text extraction.
///
/// `raw_text` is empty when the payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Extracted text, possibly empty.
    pub raw_text: String,
    /// Original bytes, kept so the caller can hand the file back out.
    pub payload: Vec<u8>,
    /// Original filename.
    pub filename: String,
}

impl Document {
    /// Whether extraction produced any text.
    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }
}

/// The ranked outcome for one résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 1-based position in the batch; 0 until the batch is sorted.
    pub rank: usize,
    /// Candidate name or `"Candidate"`.
    pub name: String,
    /// Candidate email or `"Not Found"`.
    pub email: String,
    /// Blended score in `[0, 100]`.
    pub match_score: f64,
    /// Semantic similarity in `[0, 1]`.
    pub semantic_similarity: f64,
    /// Keyword overlap in `[0, 1]`.
    pub keyword_match: f64,
    /// Original filename.
    pub filename: String,
    /// Original bytes.
    #[serde(skip)]
    pub payload: Vec<u8>,
}

impl ScoreResult {
    /// Assemble an unranked result from a document's parts.
    pub fn new(document: Document, scores: Scores, identity: Identity) -> Self {
        ScoreResult {
            rank: 0,
            name: identity.name,
            email: identity.email,
            match_score: scores.match_score,
            semantic_similarity: scores.semantic_similarity,
            keyword_match: scores.keyword_match,
            filename: document.filename,
            payload: document.payload,
        }
    }

    /// The three scores of this result.
    pub fn scores(&self) -> Scores {
        Scores {
            match_score: self.match_score,
            semantic_similarity: self.semantic_similarity,
            keyword_match: self.keyword_match,
        }
    }
}

/// Results of one run, best match first.
pub type Batch = Vec<ScoreResult>;

/// Sort results by match score, best first, and assign 1-based ranks.
///
/// The sort is stable: equal scores keep their input order.
pub fn assign_ranks(results: &mut Batch) {
    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    for (index, result) in results.iter_mut().enumerate() {
        result.rank = index + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(filename: &str, match_score: f64) -> ScoreResult {
        ScoreResult::new(
            Document {
                raw_text: String::new(),
                payload: Vec::new(),
                filename: filename.to_string(),
            },
            Scores {
                match_score,
                ..Scores::zero()
            },
            Identity {
                name: "Candidate".to_string(),
                email: "Not Found".to_string(),
            },
        )
    }

    #[test]
    fn test_new_result_is_unranked() {
        assert_eq!(result("a.txt", 10.0).rank, 0);
    }

    #[test]
    fn test_assign_ranks_sorts_descending() {
        let mut batch = vec![result("a", 10.0), result("b", 90.0), result("c", 50.0)];
        assign_ranks(&mut batch);

        let order: Vec<_> = batch.iter().map(|r| (r.rank, r.filename.as_str())).collect();
        assert_eq!(order, vec![(1, "b"), (2, "c"), (3, "a")]);
    }

    #[test]
    fn test_assign_ranks_is_stable_on_ties() {
        let mut batch = vec![result("first", 0.0), result("second", 0.0), result("third", 0.0)];
        assign_ranks(&mut batch);

        let order: Vec<_> = batch.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_close_scores_stay_ordered() {
        // Both scores collapse to 50.0 in single precision.
        let mut batch = vec![result("lower", 50.000_000_1), result("higher", 50.000_000_2)];
        assign_ranks(&mut batch);

        let order: Vec<_> = batch.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(order, vec!["higher", "lower"]);
    }

    #[test]
    fn test_payload_is_not_serialized() {
        let mut result = result("cv.txt", 42.0);
        result.payload = b"secret bytes".to_vec();

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("payload").is_none());
        assert_eq!(json["filename"], "cv.txt");
    }
}
