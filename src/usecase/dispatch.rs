use crate::domain::message::{
    ClearCompletedCommand, CommandStatus, DestroyCommand, EditCommand, Message, NewTodoCommand,
    Reply, ToggleAllCommand, ToggleCommand, TodosQuery, TodosQueryResult,
};
use crate::repo::{RepositoryError, TodoRepository};

use super::{clear_completed, destroy, edit, new_todo, todos_query, toggle, toggle_all};

/// Single entry point for front ends. Owns the repository it works on.
///
/// Commands take `&mut self`, so one handler applies at most one command at a
/// time. Share it between threads behind a `Mutex` to keep each
/// load-compute-store cycle from interleaving with another.
pub struct MessageHandler<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> MessageHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn handle_new_todo(&mut self, command: &NewTodoCommand) -> CommandStatus {
        new_todo::handle(&mut self.repo, command)
    }

    pub fn handle_toggle(&mut self, command: &ToggleCommand) -> CommandStatus {
        toggle::handle(&mut self.repo, command)
    }

    pub fn handle_toggle_all(&mut self, command: &ToggleAllCommand) -> CommandStatus {
        toggle_all::handle(&mut self.repo, command)
    }

    pub fn handle_edit(&mut self, command: &EditCommand) -> CommandStatus {
        edit::handle(&mut self.repo, command)
    }

    pub fn handle_destroy(&mut self, command: &DestroyCommand) -> CommandStatus {
        destroy::handle(&mut self.repo, command)
    }

    pub fn handle_clear_completed(&mut self, command: &ClearCompletedCommand) -> CommandStatus {
        clear_completed::handle(&mut self.repo, command)
    }

    pub fn handle_todos_query(
        &self,
        query: &TodosQuery,
    ) -> Result<TodosQueryResult, RepositoryError> {
        todos_query::handle(&self.repo, query)
    }

    /// Routes `message` to its handler. Only the query branch can return `Err`.
    pub fn handle(&mut self, message: &Message) -> Result<Reply, RepositoryError> {
        let status = match message {
            Message::NewTodo(c) => self.handle_new_todo(c),
            Message::Toggle(c) => self.handle_toggle(c),
            Message::ToggleAll(c) => self.handle_toggle_all(c),
            Message::Edit(c) => self.handle_edit(c),
            Message::Destroy(c) => self.handle_destroy(c),
            Message::ClearCompleted(c) => self.handle_clear_completed(c),
            Message::Todos(q) => return self.handle_todos_query(q).map(Reply::Query),
        };
        Ok(Reply::Command(status))
    }
}
