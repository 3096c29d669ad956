use super::run_command;
use crate::domain::message::{CommandStatus, DestroyCommand};
use crate::domain::todo::Todo;
use crate::repo::TodoRepository;

pub fn apply(mut todos: Vec<Todo>, command: &DestroyCommand) -> Vec<Todo> {
    todos.retain(|t| t.id != command.id);
    todos
}

pub fn handle<R: TodoRepository + ?Sized>(repo: &mut R, command: &DestroyCommand) -> CommandStatus {
    run_command(repo, "destroy", |todos| apply(todos, command))
}
