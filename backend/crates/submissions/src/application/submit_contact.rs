//! Submit Contact Use Case

use std::sync::Arc;

use crate::domain::entity::{Contact, NewContact};
use crate::domain::repository::ContactRepository;
use crate::error::SubmissionResult;

/// Submit contact use case
pub struct SubmitContactUseCase<C>
where
    C: ContactRepository,
{
    contact_repo: Arc<C>,
}

impl<C> SubmitContactUseCase<C>
where
    C: ContactRepository,
{
    pub fn new(contact_repo: Arc<C>) -> Self {
        Self { contact_repo }
    }

    /// Store the message as given; fields are not validated
    pub async fn execute(&self, contact: NewContact) -> SubmissionResult<Contact> {
        let stored = self.contact_repo.insert_contact(&contact).await?;

        tracing::info!(contact_id = stored.id, "Contact message stored");

        Ok(stored)
    }
}
