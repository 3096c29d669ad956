//! Message handlers. Every command runs the same cycle: load the list,
//! compute a new one, store it. Repository failures become
//! [`CommandStatus::Failure`] and never escape a command handler.

use crate::domain::message::CommandStatus;
use crate::domain::todo::Todo;
use crate::repo::TodoRepository;

pub mod clear_completed;
pub mod destroy;
pub mod dispatch;
pub mod edit;
pub mod new_todo;
pub mod todos_query;
pub mod toggle;
pub mod toggle_all;

fn run_command<R, F>(repo: &mut R, command: &'static str, transform: F) -> CommandStatus
where
    R: TodoRepository + ?Sized,
    F: FnOnce(Vec<Todo>) -> Vec<Todo>,
{
    let todos = match repo.load() {
        Ok(todos) => todos,
        Err(e) => {
            tracing::warn!(command, error = %e, "failed to load todos");
            return CommandStatus::failure(e.to_string());
        }
    };

    let updated = transform(todos);
    let count = updated.len();
    if let Err(e) = repo.store(updated) {
        tracing::warn!(command, error = %e, "failed to store todos");
        return CommandStatus::failure(e.to_string());
    }

    tracing::debug!(command, count, "command applied");
    CommandStatus::Success
}
