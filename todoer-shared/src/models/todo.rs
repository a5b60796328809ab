/// Todo model
///
/// A todo belongs to the todoer named by `creator`. The reference is not
/// enforced: a todo may point at a todoer that never existed or has since
/// been deleted.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todo (
///     id BIGSERIAL PRIMARY KEY,
///     description TEXT NOT NULL,
///     creator BIGINT NOT NULL,
///     "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     "modifiedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo record as stored and as sent over the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default)]
    pub id: i64,

    /// Id of the owning todoer
    #[serde(default)]
    pub creator: i64,

    #[serde(default)]
    pub description: String,

    #[serde(with = "timestamp", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(with = "timestamp", default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// True for the zero-valued "not found" record
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Input for creating a todo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub description: String,
    pub creator: i64,
}

/// Input for changing a todo's description
///
/// The description is the only mutable column; creator and timestamps are
/// never taken from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoUpdate {
    pub id: i64,
    pub description: String,
}
