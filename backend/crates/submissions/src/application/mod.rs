//! Application Layer
//!
//! Use cases for the submission endpoints.

pub mod submit_contact;
pub mod submit_entry;

// Re-exports
pub use submit_contact::SubmitContactUseCase;
pub use submit_entry::SubmitEntryUseCase;
