use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

use crate::ledger::DateRecord;

/// Error type shared by the library and the three binaries.
#[derive(Debug, Error)]
pub enum VacationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Invalid date `{0}`: expected DD.MM.YYYY")]
    InvalidDate(String),
    #[error("Invalid range: {start} is after {end}")]
    InvertedInterval { start: DateRecord, end: DateRecord },
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("{}: {}", .path.display(), .message)]
    Malformed { path: PathBuf, message: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, VacationError>;

impl VacationError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        VacationError::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}
