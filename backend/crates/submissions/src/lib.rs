//! Submissions Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! Two write-only intakes share this crate: contact messages and
//! competition entries. Each request is a single INSERT whose stored row
//! is echoed back. Entries are accepted for any `user_id`; nothing checks
//! that the user exists.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{SubmissionError, SubmissionResult};
pub use infra::postgres::PgSubmissionRepository;
pub use presentation::router::{submissions_router, submissions_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}
