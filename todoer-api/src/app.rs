/// Application state and router builder
///
/// The two repositories are built once at startup and handed to every
/// handler through axum's `State` extractor; nothing else is shared between
/// requests.
///
/// # Example
///
/// ```no_run
/// use todoer_api::{app::AppState, config::Config};
/// use todoer_shared::db::pool::connect;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = connect(&config.pool_config()).await?;
/// let state = AppState::from_pool(pool);
/// let app = todoer_api::app::build_router(state);
///
/// let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::routes;
use axum::{
    routing::{any, delete, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use todoer_shared::repository::{
    postgres::{PgTodoRepository, PgTodoerRepository},
    TodoRepository, TodoerRepository,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request; clones share the same repositories.
#[derive(Clone)]
pub struct AppState {
    pub todoers: Arc<dyn TodoerRepository>,
    pub todos: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates state from any pair of repository implementations
    pub fn new(todoers: Arc<dyn TodoerRepository>, todos: Arc<dyn TodoRepository>) -> Self {
        Self { todoers, todos }
    }

    /// Creates state backed by PostgreSQL repositories sharing one pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgTodoerRepository::new(pool.clone())),
            Arc::new(PgTodoRepository::new(pool)),
        )
    }
}

/// Builds the complete Axum router
///
/// ```text
/// /
/// ├── /todoer/
/// │   ├── ANY    /read?id=
/// │   ├── POST   /create
/// │   ├── PUT    /update
/// │   └── DELETE /delete?id=
/// └── /todo/
///     ├── ANY    /readall?creator=
///     ├── ANY    /read?id=
///     ├── POST   /create
///     ├── PUT    /update
///     └── DELETE /delete?id=
/// ```
///
/// Only the mutating routes are bound to one method; anything else sent to
/// them is answered with 405 before a handler runs. Reads are documented as
/// GET but served for every method.
pub fn build_router(state: AppState) -> Router {
    let todoer_routes = Router::new()
        .route("/read", any(routes::todoer::read_todoer))
        .route("/create", post(routes::todoer::create_todoer))
        .route("/update", put(routes::todoer::update_todoer))
        .route("/delete", delete(routes::todoer::delete_todoer));

    let todo_routes = Router::new()
        .route("/readall", any(routes::todo::read_todos_by_creator))
        .route("/read", any(routes::todo::read_todo))
        .route("/create", post(routes::todo::create_todo))
        .route("/update", put(routes::todo::update_todo))
        .route("/delete", delete(routes::todo::delete_todo));

    Router::new()
        .nest("/todoer", todoer_routes)
        .nest("/todo", todo_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
