use super::run_command;
use crate::domain::message::{CommandStatus, ToggleAllCommand};
use crate::domain::todo::Todo;
use crate::repo::TodoRepository;

pub fn apply(todos: Vec<Todo>, command: &ToggleAllCommand) -> Vec<Todo> {
    todos
        .into_iter()
        .map(|t| t.with_completed(command.completed))
        .collect()
}

pub fn handle<R: TodoRepository + ?Sized>(
    repo: &mut R,
    command: &ToggleAllCommand,
) -> CommandStatus {
    run_command(repo, "toggle_all", |todos| apply(todos, command))
}
