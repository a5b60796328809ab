/// Entity records
///
/// - `todoer`: the user that owns todos
/// - `todo`: a task owned by a todoer
///
/// Both records derive `Default`; the default value is the zero-valued
/// record that signals "no such row" without a separate error channel.

mod timestamp;

pub mod todo;
pub mod todoer;

pub use todo::{NewTodo, Todo, TodoUpdate};
pub use todoer::Todoer;
