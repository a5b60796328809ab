//! Common test utilities for the handler tests
//!
//! The router is driven in-process with in-memory repositories, so these
//! tests need no database.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use todoer_api::app::{build_router, AppState};
use todoer_shared::models::{NewTodo, Todo, TodoUpdate, Todoer};
use todoer_shared::repository::{
    RepositoryError, RepositoryResult, TodoRepository, TodoerRepository,
};
use tower::ServiceExt;

/// In-memory todoer store
#[derive(Default)]
pub struct MemoryTodoers {
    rows: Mutex<BTreeMap<i64, Todoer>>,
}

impl MemoryTodoers {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl TodoerRepository for MemoryTodoers {
    async fn read(&self, id: i64) -> RepositoryResult<Todoer> {
        Ok(self.rows.lock().unwrap().get(&id).cloned().unwrap_or_default())
    }

    async fn add(&self, username: &str) -> RepositoryResult<Todoer> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let now = Some(Utc::now());
        let todoer = Todoer {
            id,
            username: username.to_string(),
            created_at: now,
            modified_at: now,
        };
        rows.insert(id, todoer.clone());
        Ok(todoer)
    }

    async fn update(&self, id: i64, username: &str) -> RepositoryResult<Todoer> {
        let mut rows = self.rows.lock().unwrap();
        Ok(match rows.get_mut(&id) {
            Some(row) => {
                row.username = username.to_string();
                row.modified_at = Some(Utc::now());
                row.clone()
            }
            None => Todoer::default(),
        })
    }

    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

/// In-memory todo store
#[derive(Default)]
pub struct MemoryTodos {
    rows: Mutex<BTreeMap<i64, Todo>>,
}

impl MemoryTodos {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl TodoRepository for MemoryTodos {
    async fn read_all(&self, creator: i64) -> RepositoryResult<Vec<Todo>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|todo| todo.creator == creator)
            .cloned()
            .collect())
    }

    async fn read(&self, id: i64) -> RepositoryResult<Todo> {
        Ok(self.rows.lock().unwrap().get(&id).cloned().unwrap_or_default())
    }

    async fn add(&self, todo: NewTodo) -> RepositoryResult<Todo> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let now = Some(Utc::now());
        let todo = Todo {
            id,
            creator: todo.creator,
            description: todo.description,
            created_at: now,
            modified_at: now,
        };
        rows.insert(id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: TodoUpdate) -> RepositoryResult<Todo> {
        let mut rows = self.rows.lock().unwrap();
        Ok(match rows.get_mut(&todo.id) {
            Some(row) => {
                row.description = todo.description;
                row.modified_at = Some(Utc::now());
                row.clone()
            }
            None => Todo::default(),
        })
    }

    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

/// Repository whose every call fails as if the pool were exhausted
pub struct UnavailableStore;

fn unavailable<T>() -> RepositoryResult<T> {
    Err(RepositoryError::from(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl TodoerRepository for UnavailableStore {
    async fn read(&self, _id: i64) -> RepositoryResult<Todoer> {
        unavailable()
    }

    async fn add(&self, _username: &str) -> RepositoryResult<Todoer> {
        unavailable()
    }

    async fn update(&self, _id: i64, _username: &str) -> RepositoryResult<Todoer> {
        unavailable()
    }

    async fn delete(&self, _id: i64) -> RepositoryResult<u64> {
        unavailable()
    }
}

#[async_trait]
impl TodoRepository for UnavailableStore {
    async fn read_all(&self, _creator: i64) -> RepositoryResult<Vec<Todo>> {
        unavailable()
    }

    async fn read(&self, _id: i64) -> RepositoryResult<Todo> {
        unavailable()
    }

    async fn add(&self, _todo: NewTodo) -> RepositoryResult<Todo> {
        unavailable()
    }

    async fn update(&self, _todo: TodoUpdate) -> RepositoryResult<Todo> {
        unavailable()
    }

    async fn delete(&self, _id: i64) -> RepositoryResult<u64> {
        unavailable()
    }
}

/// Test context containing the router and direct handles on its stores
pub struct TestContext {
    pub app: Router,
    pub todoers: Arc<MemoryTodoers>,
    pub todos: Arc<MemoryTodos>,
}

impl TestContext {
    pub fn new() -> Self {
        let todoers = Arc::new(MemoryTodoers::default());
        let todos = Arc::new(MemoryTodos::default());
        let app = build_router(AppState::new(todoers.clone(), todos.clone()));

        TestContext { app, todoers, todos }
    }

    /// Router whose storage is unreachable
    pub fn unavailable() -> Router {
        let store = Arc::new(UnavailableStore);
        build_router(AppState::new(store.clone(), store))
    }

    /// Sends a request and returns status, content type and parsed JSON body
    pub async fn send(&self, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
        send(&self.app, method, uri, body).await
    }
}

/// Decoded response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub json: Value,
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        content_type,
        json,
    }
}
