use super::run_command;
use crate::domain::message::{CommandStatus, ToggleCommand};
use crate::domain::todo::Todo;
use crate::repo::TodoRepository;

/// Flips `completed` on the matching todo. Unknown ids leave the list as is.
pub fn apply(todos: Vec<Todo>, command: &ToggleCommand) -> Vec<Todo> {
    todos
        .into_iter()
        .map(|t| if t.id == command.id { t.toggled() } else { t })
        .collect()
}

pub fn handle<R: TodoRepository + ?Sized>(repo: &mut R, command: &ToggleCommand) -> CommandStatus {
    run_command(repo, "toggle", |todos| apply(todos, command))
}
