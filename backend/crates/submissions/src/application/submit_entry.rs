//! Submit Competition Entry Use Case

use std::sync::Arc;

use crate::domain::entity::{CompetitionEntry, NewCompetitionEntry};
use crate::domain::repository::CompetitionRepository;
use crate::error::SubmissionResult;

/// Submit competition entry use case
pub struct SubmitEntryUseCase<E>
where
    E: CompetitionRepository,
{
    entry_repo: Arc<E>,
}

impl<E> SubmitEntryUseCase<E>
where
    E: CompetitionRepository,
{
    pub fn new(entry_repo: Arc<E>) -> Self {
        Self { entry_repo }
    }

    pub async fn execute(&self, entry: NewCompetitionEntry) -> SubmissionResult<CompetitionEntry> {
        // user_id goes in unchecked
        let stored = self.entry_repo.insert_entry(&entry).await?;

        tracing::info!(
            entry_id = stored.id,
            user_id = ?stored.user_id,
            "Competition entry stored"
        );

        Ok(stored)
    }
}
