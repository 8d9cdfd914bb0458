//! The ranking engine.

use std::sync::Arc;

use crate::config::RankerConfig;
use crate::error::{RankerError, Result};
use crate::extract::{TextExtractor, Utf8Extractor, extract_or_empty};
use crate::identity::IdentityExtractor;
use crate::model::LanguageModel;
use crate::ranker::types::{Batch, Document, ResumeFile, ScoreResult, assign_ranks};
use crate::scoring::{Scorer, Scores};

/// Ranks batches of résumés against one job description.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use resume_ranker::model::lexical::LexicalModel;
/// use resume_ranker::ranker::{Ranker, ResumeFile};
///
/// let ranker = Ranker::new(Arc::new(LexicalModel::new().unwrap())).unwrap();
/// let files = vec![
///     ResumeFile::new("chef.txt", b"Mary Major\nPastry chef".to_vec()),
///     ResumeFile::new("dev.txt", b"John Smith\nRust engineer, Kubernetes".to_vec()),
/// ];
///
/// let batch = ranker.rank_batch(files, "Rust engineer with Kubernetes").unwrap();
///
/// assert_eq!(batch[0].filename, "dev.txt");
/// assert_eq!(batch[0].rank, 1);
/// assert_eq!(batch[0].name, "John Smith");
/// ```
pub struct Ranker {
    extractor: Arc<dyn TextExtractor>,
    scorer: Scorer,
    identity: IdentityExtractor,
}

impl Ranker {
    /// Create a ranker with default settings and the UTF-8 extractor.
    pub fn new(model: Arc<dyn LanguageModel>) -> Result<Self> {
        Self::with_config(model, &RankerConfig::default())
    }

    /// Create a ranker from configuration.
    pub fn with_config(model: Arc<dyn LanguageModel>, config: &RankerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Ranker {
            extractor: Arc::new(Utf8Extractor::from_config(&config.extraction)),
            identity: IdentityExtractor::with_config(Arc::clone(&model), config.identity.clone())?,
            scorer: Scorer::new(model),
        })
    }

    /// Replace the text extractor, e.g. with a PDF decoder.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Get the language model.
    pub fn model(&self) -> &Arc<dyn LanguageModel> {
        self.scorer.model()
    }

    /// Rank `files` against `jd_text`.
    ///
    /// Fails only when there are no files or the job description is empty;
    /// nothing is scored in that case.
    pub fn rank_batch(&self, files: Vec<ResumeFile>, jd_text: &str) -> Result<Batch> {
        self.rank_batch_with_progress(files, jd_text, |_, _| {})
    }

    /// Rank `files` against `jd_text`, calling `progress(done, total)` after
    /// each document.
    pub fn rank_batch_with_progress<F>(
        &self,
        files: Vec<ResumeFile>,
        jd_text: &str,
        mut progress: F,
    ) -> Result<Batch>
    where
        F: FnMut(usize, usize),
    {
        if files.is_empty() {
            return Err(RankerError::precondition("no résumés supplied"));
        }
        if jd_text.is_empty() {
            return Err(RankerError::precondition("no job description supplied"));
        }

        let total = files.len();
        let jd_tokens = self.scorer.job_tokens(jd_text);
        log::info!(
            "ranking {total} résumés against a job description with {} keywords",
            jd_tokens.len()
        );

        let mut results = Batch::with_capacity(total);

        for (index, file) in files.into_iter().enumerate() {
            let document = self.extract(file);

            let scores = if document.is_empty() {
                log::debug!("{}: no text, scores set to 0", document.filename);
                Scores::zero()
            } else {
                self.scorer.score(&document.raw_text, jd_text, &jd_tokens)
            };
            log::debug!(
                "{}: scored keyword={:.3} semantic={:.3} match={:.1}",
                document.filename,
                scores.keyword_match,
                scores.semantic_similarity,
                scores.match_score
            );

            let identity = self.identity.extract(&document.raw_text);
            log::debug!(
                "{}: identified as {} <{}>",
                document.filename,
                identity.name,
                identity.email
            );

            results.push(ScoreResult::new(document, scores, identity));
            progress(index + 1, total);
        }

        assign_ranks(&mut results);

        if let Some(best) = results.first() {
            log::info!(
                "best match: {} ({:.1}%) from {}",
                best.name,
                best.match_score,
                best.filename
            );
        }

        Ok(results)
    }

    /// Score a single résumé text against a job description.
    pub fn score_text(&self, resume_text: &str, jd_text: &str) -> Scores {
        self.scorer.score_pair(resume_text, jd_text)
    }

    fn extract(&self, file: ResumeFile) -> Document {
        let raw_text = extract_or_empty(self.extractor.as_ref(), &file.filename, &file.payload);

        Document {
            raw_text,
            payload: file.payload,
            filename: file.filename,
        }
    }
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker")
            .field("extractor", &self.extractor.name())
            .field("scorer", &self.scorer)
            .field("identity", &self.identity)
            .finish()
    }
}
