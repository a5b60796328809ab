/// Todo endpoints
///
/// # Endpoints
///
/// - `GET /todo/readall?creator=` - All todos of one todoer
/// - `GET /todo/read?id=` - Fetch a todo
/// - `POST /todo/create` - Create a todo
/// - `PUT /todo/update` - Change a todo's description
/// - `DELETE /todo/delete?id=` - Delete a todo

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{IntParams, JsonBody},
};
use axum::{extract::State, Json};
use serde::Deserialize;
use todoer_shared::models::{NewTodo, Todo, TodoUpdate};

/// Create todo request
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub description: String,

    /// Owning todoer; not checked for existence
    #[serde(default)]
    pub creator: i64,
}

/// Update todo request
///
/// Only the description can change.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub description: String,
}

/// List every todo owned by `creator`
///
/// Answers `[]` when the todoer has none or does not exist.
pub async fn read_todos_by_creator(
    State(state): State<AppState>,
    params: IntParams,
) -> ApiResult<Json<Vec<Todo>>> {
    let creator = params.get("creator");

    let todos = state.todos.read_all(creator).await?;
    tracing::debug!(creator, count = todos.len(), "Read todos for creator");

    Ok(Json(todos))
}

pub async fn read_todo(
    State(state): State<AppState>,
    params: IntParams,
) -> ApiResult<Json<Todo>> {
    let todo = state.todos.read(params.get("id")).await?;

    Ok(Json(todo))
}

/// Create a todo
///
/// ```text
/// POST /todo/create
///
/// {"description": "buy milk", "creator": 1}
/// ```
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    let todo = state
        .todos
        .add(NewTodo {
            description: req.description,
            creator: req.creator,
        })
        .await?;

    tracing::info!(todo_id = todo.id, creator = todo.creator, "Todo created");

    Ok(Json(todo))
}

/// Change a todo's description
///
/// ```text
/// PUT /todo/update
///
/// {"id": 3, "description": "buy oat milk"}
/// ```
pub async fn update_todo(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    let todo = state
        .todos
        .update(TodoUpdate {
            id: req.id,
            description: req.description,
        })
        .await?;

    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    params: IntParams,
) -> ApiResult<Json<u64>> {
    let id = params.get("id");

    let removed = state.todos.delete(id).await?;
    tracing::info!(todo_id = id, removed, "Todo delete");

    Ok(Json(removed))
}
