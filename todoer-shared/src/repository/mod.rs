/// Entity repositories
///
/// One trait per entity, exposing exactly the operations the HTTP layer
/// needs. Handlers hold them as `Arc<dyn …>` so the storage backend is
/// chosen once at startup.
///
/// "Not found" is never an error here: reads and updates that match no row
/// return the zero-valued record, deletes return 0.
///
/// # Example
///
/// ```no_run
/// use todoer_shared::db::pool::{connect, PoolConfig};
/// use todoer_shared::repository::{postgres::PgTodoerRepository, TodoerRepository};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = connect(&PoolConfig::new("postgresql://localhost/todo")).await?;
/// let todoers = PgTodoerRepository::new(pool);
///
/// let alice = todoers.add("alice").await?;
/// let again = todoers.read(alice.id).await?;
/// assert_eq!(again.username, "alice");
/// # Ok(())
/// # }
/// ```

pub mod postgres;

use crate::models::{NewTodo, Todo, TodoUpdate, Todoer};
use async_trait::async_trait;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Could not borrow a connection from the pool
    #[error("Connection unavailable: {0}")]
    Connection(#[source] sqlx::Error),

    /// The statement was rejected or failed while running
    #[error("Statement failed: {0}")]
    Statement(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                RepositoryError::Connection(err)
            }
            _ => RepositoryError::Statement(err),
        }
    }
}

/// Repository result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage operations for todoers
#[async_trait]
pub trait TodoerRepository: Send + Sync {
    /// Fetches a todoer by id, or the zero-valued record
    async fn read(&self, id: i64) -> RepositoryResult<Todoer>;

    /// Inserts a todoer and returns the stored row
    async fn add(&self, username: &str) -> RepositoryResult<Todoer>;

    /// Renames a todoer and returns the stored row, or the zero-valued
    /// record when `id` matches nothing
    async fn update(&self, id: i64, username: &str) -> RepositoryResult<Todoer>;

    /// Deletes a todoer, returning the number of rows removed
    async fn delete(&self, id: i64) -> RepositoryResult<u64>;
}

/// Storage operations for todos
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Every todo owned by `creator`, in id order
    async fn read_all(&self, creator: i64) -> RepositoryResult<Vec<Todo>>;

    /// Fetches a todo by id, or the zero-valued record
    async fn read(&self, id: i64) -> RepositoryResult<Todo>;

    /// Inserts a todo and returns the stored row
    async fn add(&self, todo: NewTodo) -> RepositoryResult<Todo>;

    /// Replaces a todo's description and returns the stored row, or the
    /// zero-valued record when the id matches nothing
    async fn update(&self, todo: TodoUpdate) -> RepositoryResult<Todo>;

    /// Deletes a todo, returning the number of rows removed
    async fn delete(&self, id: i64) -> RepositoryResult<u64>;
}
