use serde::{Deserialize, Serialize};

use super::todo::{Todo, TodoId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodoCommand {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleCommand {
    pub id: TodoId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleAllCommand {
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCommand {
    pub id: TodoId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyCommand {
    pub id: TodoId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCompletedCommand {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosQuery {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosQueryResult {
    pub todos: Vec<Todo>,
}

impl TodosQueryResult {
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}

/// Outcome of a command. A command either applies fully or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandStatus {
    Success,
    Failure { error_message: String },
}

impl CommandStatus {
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self::Failure {
            error_message: error_message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Any message the core accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NewTodo(NewTodoCommand),
    Toggle(ToggleCommand),
    ToggleAll(ToggleAllCommand),
    Edit(EditCommand),
    Destroy(DestroyCommand),
    ClearCompleted(ClearCompletedCommand),
    Todos(TodosQuery),
}

/// What the dispatcher hands back for a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Command(CommandStatus),
    Query(TodosQueryResult),
}
