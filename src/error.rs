//! Error types for the quiz library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::machine::Status;

/// An action was dispatched that the current status does not accept.
///
/// This is an integration error: the caller must only issue actions the
/// machine can take from its current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action `{action}` while quiz is {status}")]
pub struct UnknownAction {
    pub action: &'static str,
    pub status: Status,
}

/// Failure to obtain a playable list of questions.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint responded with status {0}")]
    Status(u16),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed question data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
