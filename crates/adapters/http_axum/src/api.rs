//! JSON REST handlers for entity snapshots and command dispatch.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use facehub_app::command::Command;
use facehub_app::ports::{Camera, FaceApi};
use facehub_domain::entity::EntitySnapshot;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/entities`
pub async fn list_entities<A, C>(
    State(state): State<AppState<A, C>>,
) -> Json<Vec<EntitySnapshot>>
where
    A: FaceApi + Send + Sync + 'static,
    C: Camera + Send + Sync + 'static,
{
    Json(state.registry.all().await)
}

/// `GET /api/entities/{id}`
pub async fn get_entity<A, C>(
    State(state): State<AppState<A, C>>,
    Path(id): Path<String>,
) -> Result<Json<EntitySnapshot>, ApiError>
where
    A: FaceApi + Send + Sync + 'static,
    C: Camera + Send + Sync + 'static,
{
    state
        .registry
        .get(&id)
        .await
        .map(Json)
        .ok_or(ApiError::UnknownEntity(id))
}

/// `POST /api/commands`
///
/// Commands are fire-and-forget: the response is `202 Accepted` once the
/// payload validates, regardless of the remote outcome. Failures surface
/// through the logs and the rendered entity state, not through this
/// endpoint.
pub async fn dispatch_command<A, C>(
    State(state): State<AppState<A, C>>,
    Json(command): Json<Command>,
) -> Result<StatusCode, ApiError>
where
    A: FaceApi + Send + Sync + 'static,
    C: Camera + Send + Sync + 'static,
{
    command.validate()?;
    tracing::debug!(command = command.name(), "dispatching command");

    state.service.lock().await.handle(command).await;
    Ok(StatusCode::ACCEPTED)
}
