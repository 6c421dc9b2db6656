//! Error types for Biblos

use std::path::PathBuf;

use thiserror::Error;

/// Main application error type
///
/// Business-rule violations (duplicate key, unknown key, borrow limit,
/// unavailable book) each get their own variant so callers can tell the
/// causes apart. Storage failures carry the offending file path.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("not available: {0}")]
    NotAvailable(String),

    #[error("borrow limit reached: {0}")]
    BorrowLimitReached(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("{}: file is not valid JSON: {source}", .path.display())]
    DataFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: I/O error: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
