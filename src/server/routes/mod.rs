//! API routes and handlers.

mod data;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/data", get(data::get_data).post(data::post_action))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
