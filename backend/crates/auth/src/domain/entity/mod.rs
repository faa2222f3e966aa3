//! Domain Entities

pub mod user;

pub use user::{NewUser, RegisteredUser, UserClaims, UserCredential};
