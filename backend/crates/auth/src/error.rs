//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::field::FieldError;
use platform::password::PasswordHashError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user with the given email
    #[error("User not found")]
    UserNotFound,

    /// Password does not match the stored hash
    #[error("Invalid password")]
    InvalidPassword,

    /// Hashing or verification failed
    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),

    /// Token signing failed
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Request field of a type the operation cannot use
    #[error("Invalid input: {0}")]
    InvalidField(#[from] FieldError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound | AuthError::InvalidPassword => ErrorKind::BadRequest,
            AuthError::PasswordHash(_)
            | AuthError::Token(_)
            | AuthError::InvalidField(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error and convert it for the client
    ///
    /// Client errors keep their own message. Server errors are replaced by
    /// `fallback`, the endpoint's generic message; the detail stays in the
    /// log and in the `AppError` source.
    pub fn into_app_error(self, fallback: &'static str) -> AppError {
        self.log();

        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, fallback).with_source(self)
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token signing error");
            }
            AuthError::InvalidField(e) => {
                tracing::error!(field = e.field(), error = %e, "Unusable auth input");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidPassword => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::UserNotFound => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}
