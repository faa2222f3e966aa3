//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every API crate:
//! - Common error types and result aliases
//! - The `{ "success": ... }` response envelope
//! - Loosely typed request fields and the lenient JSON body extractor
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod field;
pub mod response;
