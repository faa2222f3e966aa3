//! Domain Entities

pub mod competition_entry;
pub mod contact;

pub use competition_entry::{CompetitionEntry, NewCompetitionEntry};
pub use contact::{Contact, NewContact};
