use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Cannot read task file {}: {source}", path.display())]
    TasksUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed task file {}: {source}", path.display())]
    TasksMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("{0}")]
    Search(#[from] SearchError),
}

#[derive(Debug, Error)]
pub(crate) enum SearchError {
    #[error("Search helper not found: {}", script.display())]
    NotFound { script: PathBuf },

    #[error("Failed to run search helper: {0}")]
    Spawn(std::io::Error),
}

/// Per-line failures. The capture loop reports these and keeps going.
#[derive(Debug, Error)]
pub(crate) enum NoteError {
    #[error("Please use format: PREFIX NOTE")]
    MissingNote,

    #[error("Unknown prefix: {prefix}")]
    UnknownPrefix { prefix: String },

    #[error("Failed to save note to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NoteError {
    /// True for problems with what the user typed, as opposed to I/O.
    pub(crate) fn is_input_error(&self) -> bool {
        matches!(self, NoteError::MissingNote | NoteError::UnknownPrefix { .. })
    }
}
