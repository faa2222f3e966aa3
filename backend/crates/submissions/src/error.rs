//! Submission Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::field::FieldError;
use thiserror::Error;

/// Submission-specific result type alias
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Submission-specific error variants
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Request field that does not fit its column
    #[error("Invalid input: {0}")]
    InvalidField(#[from] FieldError),

    /// Database error (connectivity, constraint violation, bad input types)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SubmissionError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::InvalidField(_) | SubmissionError::Database(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error and convert it to `fallback`, the endpoint's generic message
    pub fn into_app_error(self, fallback: &'static str) -> AppError {
        match &self {
            SubmissionError::InvalidField(e) => {
                tracing::error!(field = e.field(), error = %e, "Unusable submission input");
            }
            SubmissionError::Database(e) => {
                tracing::error!(error = %e, "Submission database error");
            }
        }

        AppError::new(self.kind(), fallback).with_source(self)
    }
}
