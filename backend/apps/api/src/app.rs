//! Router Assembly

use auth::{AuthConfig, PgAuthRepository, auth_router};
use axum::{Router, routing::get};
use sqlx::PgPool;
use submissions::{PgSubmissionRepository, submissions_router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Plain-text body served at `/`
pub const ROOT_MESSAGE: &str = "IFG Backend running ✅";

/// Full application router backed by Postgres
pub fn build_router(pool: PgPool, auth_config: AuthConfig) -> Router {
    let api = auth_router(PgAuthRepository::new(pool.clone()), auth_config)
        .merge(submissions_router(PgSubmissionRepository::new(pool)));

    with_api(api)
}

/// Mount `api` under `/api` next to the root acknowledgment
pub fn with_api(api: Router) -> Router {
    // No credentials, so wildcards are allowed everywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn root() -> &'static str {
    ROOT_MESSAGE
}
