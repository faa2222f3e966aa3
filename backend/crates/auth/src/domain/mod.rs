//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::user::{NewUser, RegisteredUser, UserClaims, UserCredential};
pub use repository::UserRepository;
