//! # Todoer Shared Library
//!
//! Storage layer for the todoer service: the connection pool, the entity
//! records and the repositories that map entity operations to SQL.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool management
//! - `models`: `Todoer` and `Todo` records
//! - `repository`: Repository traits and their PostgreSQL implementation

pub mod db;
pub mod models;
pub mod repository;

/// Current version of the todoer shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
