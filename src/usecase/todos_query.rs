use crate::domain::message::{TodosQuery, TodosQueryResult};
use crate::repo::{RepositoryError, TodoRepository};

/// Returns the stored list unchanged. Unlike commands, a repository error is
/// handed back to the caller as is.
pub fn handle<R: TodoRepository + ?Sized>(
    repo: &R,
    _query: &TodosQuery,
) -> Result<TodosQueryResult, RepositoryError> {
    let todos = repo.load()?;
    tracing::debug!(count = todos.len(), "todos query");
    Ok(TodosQueryResult { todos })
}
