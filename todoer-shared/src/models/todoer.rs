/// Todoer model
///
/// A todoer is the user that owns todos. Only the username is ever written by
/// callers; the id and both timestamps are assigned by the database.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todoer (
///     id BIGSERIAL PRIMARY KEY,
///     username VARCHAR(255) NOT NULL,
///     "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     "modifiedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todoer record as stored and as sent over the wire
///
/// `Todoer::default()` is the zero-valued record returned when a lookup
/// matches no row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Todoer {
    /// Server-assigned id, 0 on the zero-valued record
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub username: String,

    /// Set on insert, never changed afterwards
    #[serde(with = "timestamp", default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Bumped by every update
    #[serde(with = "timestamp", default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Todoer {
    /// True for the zero-valued "not found" record
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
