//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{CompetitionEntry, Contact, NewCompetitionEntry, NewContact};
pub use repository::{CompetitionRepository, ContactRepository};
