//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Rank résumés against a job description
#[derive(Parser, Debug, Clone)]
#[command(name = "resume-ranker")]
#[command(about = "Rank résumés against a job description by keyword overlap and semantic similarity")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RankerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "RESUME_RANKER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RankerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank résumés against a job description
    Rank(RankArgs),

    /// Show how the model reads a single résumé
    Inspect(InspectArgs),
}

/// Arguments for ranking
#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// Résumé files to rank
    #[arg(value_name = "RESUME", required = true)]
    pub resumes: Vec<PathBuf>,

    #[command(flatten)]
    pub job: JobSource,

    /// Report progress on stderr after each résumé
    #[arg(long)]
    pub progress: bool,

    /// Copy the best-matching résumé into this directory
    #[arg(long, value_name = "DIR")]
    pub export_top: Option<PathBuf>,
}

/// Where the job description comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct JobSource {
    /// Job description file
    #[arg(short, long = "job", value_name = "JOB_FILE")]
    pub job_file: Option<PathBuf>,

    /// Job description text
    #[arg(long = "job-text", value_name = "TEXT")]
    pub job_text: Option<String>,
}

/// Arguments for inspecting a résumé
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Résumé file to inspect
    #[arg(value_name = "RESUME")]
    pub file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_rank_command() {
        let args = RankerArgs::try_parse_from([
            "resume-ranker",
            "rank",
            "a.txt",
            "b.txt",
            "--job",
            "jd.txt",
            "--progress",
            "--export-top",
            "out",
        ])
        .unwrap();

        if let Command::Rank(rank_args) = args.command {
            assert_eq!(
                rank_args.resumes,
                vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
            );
            assert_eq!(rank_args.job.job_file, Some(PathBuf::from("jd.txt")));
            assert!(rank_args.job.job_text.is_none());
            assert!(rank_args.progress);
            assert_eq!(rank_args.export_top, Some(PathBuf::from("out")));
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_job_text_and_format() {
        let args = RankerArgs::try_parse_from([
            "resume-ranker",
            "-f",
            "json",
            "--pretty",
            "rank",
            "a.txt",
            "--job-text",
            "Rust engineer",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        if let Command::Rank(rank_args) = args.command {
            assert_eq!(rank_args.job.job_text.as_deref(), Some("Rust engineer"));
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_job_source_is_required_and_exclusive() {
        assert!(RankerArgs::try_parse_from(["resume-ranker", "rank", "a.txt"]).is_err());
        assert!(
            RankerArgs::try_parse_from([
                "resume-ranker",
                "rank",
                "a.txt",
                "--job",
                "jd.txt",
                "--job-text",
                "Rust",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_resumes_are_required() {
        assert!(RankerArgs::try_parse_from(["resume-ranker", "rank", "--job-text", "Rust"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = RankerArgs::try_parse_from(["resume-ranker", "inspect", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = RankerArgs::try_parse_from(["resume-ranker", "-vvv", "inspect", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            RankerArgs::try_parse_from(["resume-ranker", "-q", "-vv", "inspect", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
