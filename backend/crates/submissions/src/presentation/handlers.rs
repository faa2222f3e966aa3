//! HTTP Handlers

use axum::extract::State;
use axum_extra::extract::WithRejection;
use kernel::error::app_error::{AppError, AppResult};
use kernel::extract::JsonBody;
use kernel::response::Success;
use std::sync::Arc;

use crate::application::{SubmitContactUseCase, SubmitEntryUseCase};
use crate::domain::entity::NewCompetitionEntry;
use crate::domain::repository::{CompetitionRepository, ContactRepository};
use crate::presentation::dto::{
    CompetitionRequest, CompetitionResponse, ContactRequest, ContactResponse,
};

/// Client-facing message for any contact storage failure
pub const CONTACT_FAILED: &str = "Database error";

/// Client-facing message for any competition entry storage failure
pub const ENTRY_FAILED: &str = "Competition entry failed";

/// Shared state for submission handlers
#[derive(Clone)]
pub struct SubmissionsAppState<R>
where
    R: ContactRepository + CompetitionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/contact
pub async fn submit_contact<R>(
    State(state): State<SubmissionsAppState<R>>,
    WithRejection(JsonBody(req), _): WithRejection<JsonBody<ContactRequest>, AppError>,
) -> AppResult<Success<ContactResponse>>
where
    R: ContactRepository + CompetitionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitContactUseCase::new(state.repo.clone());

    let contact = use_case
        .execute(req.into())
        .await
        .map_err(|e| e.into_app_error(CONTACT_FAILED))?;

    Ok(Success::new(ContactResponse {
        contact: contact.into(),
    }))
}

/// POST /api/competition
pub async fn submit_entry<R>(
    State(state): State<SubmissionsAppState<R>>,
    WithRejection(JsonBody(req), _): WithRejection<JsonBody<CompetitionRequest>, AppError>,
) -> AppResult<Success<CompetitionResponse>>
where
    R: ContactRepository + CompetitionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitEntryUseCase::new(state.repo.clone());

    let new_entry =
        NewCompetitionEntry::try_from(req).map_err(|e| e.into_app_error(ENTRY_FAILED))?;

    let entry = use_case
        .execute(new_entry)
        .await
        .map_err(|e| e.into_app_error(ENTRY_FAILED))?;

    Ok(Success::new(CompetitionResponse {
        entry: entry.into(),
    }))
}
