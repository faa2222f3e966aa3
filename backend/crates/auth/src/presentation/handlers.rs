//! HTTP Handlers

use axum::extract::State;
use axum_extra::extract::WithRejection;
use kernel::error::app_error::{AppError, AppResult};
use kernel::extract::JsonBody;
use kernel::response::Success;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Client-facing message for any server-side registration failure
pub const REGISTER_FAILED: &str = "Database error";

/// Client-facing message for any server-side login failure
pub const LOGIN_FAILED: &str = "Login failed";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(JsonBody(req), _): WithRejection<JsonBody<RegisterRequest>, AppError>,
) -> AppResult<Success<RegisterResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name.into_text(),
        email: req.email.into_text(),
        phone: req.phone.into_text(),
        password: req.password,
    };

    let output = use_case
        .execute(input)
        .await
        .map_err(|e| e.into_app_error(REGISTER_FAILED))?;

    Ok(Success::new(RegisterResponse {
        user: output.user.into(),
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(JsonBody(req), _): WithRejection<JsonBody<LoginRequest>, AppError>,
) -> AppResult<Success<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email.into_text(),
        password: req.password,
    };

    let output = use_case
        .execute(input)
        .await
        .map_err(|e| e.into_app_error(LOGIN_FAILED))?;

    Ok(Success::new(LoginResponse {
        token: output.token,
    }))
}
