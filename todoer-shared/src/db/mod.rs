/// Database layer
///
/// - `pool`: PostgreSQL connection pool with liveness check
///
/// The table layout lives in `sql/schema.sql` at the workspace root and is
/// applied out of band; this crate never alters the schema.

pub mod pool;
