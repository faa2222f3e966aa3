//! Submissions Router

use crate::domain::repository::{CompetitionRepository, ContactRepository};
use crate::infra::postgres::PgSubmissionRepository;
use crate::presentation::handlers::{self, SubmissionsAppState};
use axum::{Router, routing::post};
use std::sync::Arc;

/// Create the submissions router with PostgreSQL repository
pub fn submissions_router(repo: PgSubmissionRepository) -> Router {
    submissions_router_generic(repo)
}

/// Create a generic submissions router for any repository implementation
pub fn submissions_router_generic<R>(repo: R) -> Router
where
    R: ContactRepository + CompetitionRepository + Clone + Send + Sync + 'static,
{
    let state = SubmissionsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/contact", post(handlers::submit_contact::<R>))
        .route("/competition", post(handlers::submit_entry::<R>))
        .with_state(state)
}
