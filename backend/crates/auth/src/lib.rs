//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration (name, email, phone, password)
//! - Login by email + password, answered with a signed token
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (salted, cost 10 by default)
//! - Hashing runs on the blocking pool, never on the reactor
//! - Tokens are HS256 JWTs carrying `id` and `email`, valid for one day
//! - Neither the password nor its hash is ever echoed to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}
