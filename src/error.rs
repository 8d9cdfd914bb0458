//! Error types for the résumé ranker.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RankerError`] enum. Document-level problems (an unreadable payload, an
//! empty text) never surface here: they degrade the affected document's
//! scores instead. Only batch preconditions, model construction and the
//! surrounding I/O report errors.
//!
//! # Examples
//!
//! ```
//! use resume_ranker::error::{RankerError, Result};
//!
//! fn check_job_description(text: &str) -> Result<()> {
//!     if text.is_empty() {
//!         return Err(RankerError::precondition("no job description supplied"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_job_description("").is_err());
//! assert!(check_job_description("Rust engineer").is_ok());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for ranking operations.
#[derive(Error, Debug)]
pub enum RankerError {
    /// I/O errors (reading résumés, config files, exporting)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The batch cannot be ranked at all (no documents, no job description)
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The language model capability could not be constructed
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with RankerError.
pub type Result<T> = std::result::Result<T, RankerError>;

impl RankerError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RankerError::Analysis(msg.into())
    }

    /// Create a new precondition error.
    pub fn precondition<S: Into<String>>(msg: S) -> Self {
        RankerError::Precondition(msg.into())
    }

    /// Create a new model unavailable error.
    pub fn model_unavailable<S: Into<String>>(msg: S) -> Self {
        RankerError::ModelUnavailable(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        RankerError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RankerError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RankerError::Other(msg.into())
    }
}
