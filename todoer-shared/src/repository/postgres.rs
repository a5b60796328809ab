/// PostgreSQL-backed repositories
///
/// Each operation is a single parameterized statement run against the pool.
/// Writes use `RETURNING` so the row handed back is exactly what was stored,
/// including the database-assigned id and timestamps, and no operation can
/// leave a half-applied effect behind.

use super::{RepositoryResult, TodoRepository, TodoerRepository};
use crate::models::{NewTodo, Todo, TodoUpdate, Todoer};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// Todoer repository over a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgTodoerRepository {
    pool: PgPool,
}

impl PgTodoerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoerRepository for PgTodoerRepository {
    async fn read(&self, id: i64) -> RepositoryResult<Todoer> {
        debug!(todoer_id = id, "Reading todoer");

        let todoer = sqlx::query_as::<_, Todoer>(
            r#"
            SELECT id, username, "createdAt", "modifiedAt"
            FROM todoer
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todoer.unwrap_or_default())
    }

    async fn add(&self, username: &str) -> RepositoryResult<Todoer> {
        debug!(username, "Adding todoer");

        let todoer = sqlx::query_as::<_, Todoer>(
            r#"
            INSERT INTO todoer (username)
            VALUES ($1)
            RETURNING id, username, "createdAt", "modifiedAt"
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(todoer)
    }

    async fn update(&self, id: i64, username: &str) -> RepositoryResult<Todoer> {
        debug!(todoer_id = id, username, "Updating todoer");

        let todoer = sqlx::query_as::<_, Todoer>(
            r#"
            UPDATE todoer
            SET username = $2, "modifiedAt" = NOW()
            WHERE id = $1
            RETURNING id, username, "createdAt", "modifiedAt"
            "#,
        )
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todoer.unwrap_or_default())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        debug!(todoer_id = id, "Deleting todoer");

        let result = sqlx::query("DELETE FROM todoer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Todo repository over a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn read_all(&self, creator: i64) -> RepositoryResult<Vec<Todo>> {
        debug!(creator, "Reading todos for creator");

        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, creator, description, "createdAt", "modifiedAt"
            FROM todo
            WHERE creator = $1
            ORDER BY id
            "#,
        )
        .bind(creator)
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    async fn read(&self, id: i64) -> RepositoryResult<Todo> {
        debug!(todo_id = id, "Reading todo");

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, creator, description, "createdAt", "modifiedAt"
            FROM todo
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo.unwrap_or_default())
    }

    async fn add(&self, todo: NewTodo) -> RepositoryResult<Todo> {
        debug!(creator = todo.creator, "Adding todo");

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todo (description, creator)
            VALUES ($1, $2)
            RETURNING id, creator, description, "createdAt", "modifiedAt"
            "#,
        )
        .bind(todo.description)
        .bind(todo.creator)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn update(&self, todo: TodoUpdate) -> RepositoryResult<Todo> {
        debug!(todo_id = todo.id, "Updating todo");

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todo
            SET description = $2, "modifiedAt" = NOW()
            WHERE id = $1
            RETURNING id, creator, description, "createdAt", "modifiedAt"
            "#,
        )
        .bind(todo.id)
        .bind(todo.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo.unwrap_or_default())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        debug!(todo_id = id, "Deleting todo");

        let result = sqlx::query("DELETE FROM todo WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
