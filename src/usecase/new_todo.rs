use super::run_command;
use crate::domain::message::{CommandStatus, NewTodoCommand};
use crate::domain::todo::Todo;
use crate::repo::TodoRepository;

/// Appends `todo` at the end of the list.
pub fn apply(mut todos: Vec<Todo>, todo: Todo) -> Vec<Todo> {
    todos.push(todo);
    todos
}

/// The title is expected to be non-blank; the caller validates it.
pub fn handle<R: TodoRepository + ?Sized>(repo: &mut R, command: &NewTodoCommand) -> CommandStatus {
    let todo = Todo::new(command.title.as_str());
    run_command(repo, "new_todo", |todos| apply(todos, todo))
}
