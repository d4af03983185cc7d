//! Error types for libchange.
//!
//! Uses thiserror for derive macros. Every variant maps to a CLI exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for libchange operations.
#[derive(Error, Debug)]
pub enum LibChangeError {
    /// User provided invalid arguments or unusable input.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be loaded or failed validation.
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A commit could not be analyzed.
    #[error("analysis of commit {commit} failed: {reason}")]
    AnalysisError { commit: String, reason: String },

    /// Some commits of a batch could not be analyzed or stored.
    #[error("{failed} commit(s) could not be analyzed or stored")]
    BatchFailed { failed: usize },
}

impl LibChangeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LibChangeError::UserError(_) => exit_codes::USER_ERROR,
            LibChangeError::ConfigError(_) => exit_codes::USER_ERROR,
            LibChangeError::IoError { .. } => exit_codes::USER_ERROR,
            LibChangeError::GitError(_) => exit_codes::GIT_FAILURE,
            LibChangeError::AnalysisError { .. } => exit_codes::ANALYSIS_FAILURE,
            LibChangeError::BatchFailed { .. } => exit_codes::ANALYSIS_FAILURE,
        }
    }

    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        LibChangeError::IoError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Result type alias for libchange operations.
pub type Result<T> = std::result::Result<T, LibChangeError>;
