//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{CompetitionEntry, Contact, NewCompetitionEntry, NewContact};
use crate::error::SubmissionResult;

/// Contact repository trait
#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    /// Insert a contact message and return the stored row
    async fn insert_contact(&self, contact: &NewContact) -> SubmissionResult<Contact>;
}

/// Competition entry repository trait
#[trait_variant::make(CompetitionRepository: Send)]
pub trait LocalCompetitionRepository {
    /// Insert a competition entry and return the stored row
    async fn insert_entry(
        &self,
        entry: &NewCompetitionEntry,
    ) -> SubmissionResult<CompetitionEntry>;
}
