/// Todoer endpoints
///
/// # Endpoints
///
/// - `GET /todoer/read?id=` - Fetch a todoer
/// - `POST /todoer/create` - Create a todoer
/// - `PUT /todoer/update` - Rename a todoer
/// - `DELETE /todoer/delete?id=` - Delete a todoer
///
/// Unknown ids are not errors: reads and updates answer with the zero-valued
/// record and deletes with `0`.

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{IntParams, JsonBody},
};
use axum::{extract::State, Json};
use serde::Deserialize;
use todoer_shared::models::Todoer;

/// Create todoer request
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoerRequest {
    #[serde(default)]
    pub username: String,
}

/// Update todoer request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoerRequest {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub username: String,
}

/// Fetch a todoer by id
///
/// ```text
/// GET /todoer/read?id=1
/// ```
///
/// ```json
/// {"id": 1, "username": "alice", "createdAt": "2024-03-01T12:30:00.000000Z", "modifiedAt": "2024-03-01T12:30:00.000000Z"}
/// ```
pub async fn read_todoer(
    State(state): State<AppState>,
    params: IntParams,
) -> ApiResult<Json<Todoer>> {
    let id = params.get("id");
    tracing::debug!(todoer_id = id, "Reading todoer");

    let todoer = state.todoers.read(id).await?;

    Ok(Json(todoer))
}

/// Create a todoer
///
/// ```text
/// POST /todoer/create
///
/// {"username": "alice"}
/// ```
pub async fn create_todoer(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTodoerRequest>,
) -> ApiResult<Json<Todoer>> {
    let todoer = state.todoers.add(&req.username).await?;

    tracing::info!(todoer_id = todoer.id, "Todoer created");

    Ok(Json(todoer))
}

/// Rename a todoer
///
/// ```text
/// PUT /todoer/update
///
/// {"id": 1, "username": "alicia"}
/// ```
pub async fn update_todoer(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateTodoerRequest>,
) -> ApiResult<Json<Todoer>> {
    let todoer = state.todoers.update(req.id, &req.username).await?;

    Ok(Json(todoer))
}

/// Delete a todoer, answering with the number of rows removed
///
/// Todos created by the todoer are left in place.
pub async fn delete_todoer(
    State(state): State<AppState>,
    params: IntParams,
) -> ApiResult<Json<u64>> {
    let id = params.get("id");

    let removed = state.todoers.delete(id).await?;
    tracing::info!(todoer_id = id, removed, "Todoer delete");

    Ok(Json(removed))
}
