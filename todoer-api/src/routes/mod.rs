/// API route handlers
///
/// - `todoer`: Todoer read/create/update/delete
/// - `todo`: Todo readall/read/create/update/delete

pub mod todo;
pub mod todoer;
