//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use facehub_app::ports::{Camera, FaceApi};

use crate::api;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// API routes live under `/api`; a [`TraceLayer`] logs each HTTP
/// request/response at the `DEBUG` level through the `tracing` ecosystem.
pub fn build<A, C>(state: AppState<A, C>) -> Router
where
    A: FaceApi + Send + Sync + 'static,
    C: Camera + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/entities", get(api::list_entities))
        .route("/api/entities/{id}", get(api::get_entity))
        .route("/api/commands", post(api::dispatch_command))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
