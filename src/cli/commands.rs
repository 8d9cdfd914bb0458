//! Command implementations for the résumé ranker CLI.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RankerConfig;
use crate::error::{RankerError, Result};
use crate::extract::{Utf8Extractor, extract_or_empty};
use crate::identity::IdentityExtractor;
use crate::model::LanguageModel;
use crate::model::lexical::LexicalModel;
use crate::ranker::{Batch, Ranker, ResumeFile};

/// Execute a CLI command.
pub fn execute_command(args: RankerArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let model: Arc<dyn LanguageModel> = Arc::new(LexicalModel::from_config(&config.model)?);
    log::debug!("loaded language model '{}'", model.name());

    match &args.command {
        Command::Rank(rank_args) => rank(rank_args, &args, &config, model),
        Command::Inspect(inspect_args) => inspect(inspect_args, &args, &config, model),
    }
}

/// Load the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<RankerConfig> {
    match path {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            RankerConfig::from_file(path)
        }
        None => Ok(RankerConfig::default()),
    }
}

/// Rank résumés and render the leaderboard.
fn rank(
    args: &RankArgs,
    cli_args: &RankerArgs,
    config: &RankerConfig,
    model: Arc<dyn LanguageModel>,
) -> Result<()> {
    let jd_text = read_job_description(&args.job)?;
    let files = args
        .resumes
        .iter()
        .map(|path| read_resume(path))
        .collect::<Result<Vec<_>>>()?;

    let ranker = Ranker::with_config(model, config)?;
    let batch = if args.progress {
        ranker.rank_batch_with_progress(files, &jd_text, |done, total| {
            eprintln!("Processed {done}/{total} résumés");
        })?
    } else {
        ranker.rank_batch(files, &jd_text)?
    };

    emit(&render_batch(&batch, cli_args)?)?;

    if let Some(dir) = &args.export_top {
        let path = export_top(&batch, dir)?;
        if cli_args.verbosity() > 0 && cli_args.output_format == OutputFormat::Human {
            println!();
            println!("Top résumé exported to: {}", path.display());
        }
    }

    Ok(())
}

/// Show what the model extracts from one résumé.
fn inspect(
    args: &InspectArgs,
    cli_args: &RankerArgs,
    config: &RankerConfig,
    model: Arc<dyn LanguageModel>,
) -> Result<()> {
    let file = read_resume(&args.file)?;
    let extractor = Utf8Extractor::from_config(&config.extraction);
    let text = extract_or_empty(&extractor, &file.filename, &file.payload);

    let lemmas: BTreeSet<String> = model.lemmas(&text)?.into_iter().collect();
    let entities = model.entities(&text)?;
    let identity =
        IdentityExtractor::with_config(Arc::clone(&model), config.identity.clone())?.extract(&text);

    let inspection = Inspection {
        filename: file.filename,
        characters: text.chars().count(),
        lemmas: lemmas.into_iter().collect(),
        entities,
        name: identity.name,
        email: identity.email,
    };

    emit(&render_inspection(&inspection, cli_args)?)
}

fn read_job_description(source: &JobSource) -> Result<String> {
    match (&source.job_file, &source.job_text) {
        (Some(path), _) => fs::read_to_string(path).map_err(|e| {
            RankerError::other(format!(
                "cannot read job description {}: {e}",
                path.display()
            ))
        }),
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => Err(RankerError::invalid_argument(
            "either --job or --job-text is required",
        )),
    }
}

/// Read a résumé file from disk.
pub fn read_resume(path: &Path) -> Result<ResumeFile> {
    let payload = fs::read(path)
        .map_err(|e| RankerError::other(format!("cannot read résumé {}: {e}", path.display())))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ResumeFile::new(filename, payload))
}

/// Write the best match's original bytes to `dir/<filename>`.
pub fn export_top(batch: &Batch, dir: &Path) -> Result<PathBuf> {
    let top = batch
        .first()
        .ok_or_else(|| RankerError::other("no ranked résumé to export"))?;

    fs::create_dir_all(dir)?;
    let path = dir.join(&top.filename);
    fs::write(&path, &top.payload)?;
    log::info!("exported {} to {}", top.filename, path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranker::ScoreResult;

    fn scored(filename: &str, payload: &[u8]) -> ScoreResult {
        ScoreResult {
            rank: 1,
            name: "Jane Doe".to_string(),
            email: "Not Found".to_string(),
            match_score: 50.0,
            semantic_similarity: 0.5,
            keyword_match: 0.5,
            filename: filename.to_string(),
            payload: payload.to_vec(),
        }
    }

    #[test]
    fn test_export_top_writes_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("shortlist");

        let batch = vec![scored("jane.txt", b"Jane Doe\nRust")];
        let path = export_top(&batch, &target).unwrap();

        assert_eq!(path, target.join("jane.txt"));
        assert_eq!(fs::read(&path).unwrap(), b"Jane Doe\nRust");
    }

    #[test]
    fn test_export_top_of_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        assert!(export_top(&Vec::new(), dir.path()).is_err());
    }

    #[test]
    fn test_read_resume_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        fs::write(&path, "Jane Doe").unwrap();

        let file = read_resume(&path).unwrap();
        assert_eq!(file.filename, "cv.txt");
        assert_eq!(file.payload, b"Jane Doe");
    }

    #[test]
    fn test_read_missing_resume() {
        assert!(read_resume(Path::new("/nonexistent/cv.txt")).is_err());
    }

    #[test]
    fn test_job_description_sources() {
        let text = JobSource {
            job_file: None,
            job_text: Some("Rust engineer".to_string()),
        };
        assert_eq!(read_job_description(&text).unwrap(), "Rust engineer");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jd.txt");
        fs::write(&path, "Go engineer").unwrap();
        let file = JobSource {
            job_file: Some(path),
            job_text: None,
        };
        assert_eq!(read_job_description(&file).unwrap(), "Go engineer");
    }

    #[test]
    fn test_load_default_config() {
        assert_eq!(load_config(None).unwrap(), RankerConfig::default());
    }
}
