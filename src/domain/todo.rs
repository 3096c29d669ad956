use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TodoId = String;

/// A single entry of the todo list.
///
/// Values are never mutated in place: `toggled`, `with_title` and
/// `with_completed` hand back a new `Todo` carrying the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, false)
    }

    pub fn with_id(id: impl Into<TodoId>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    pub fn toggled(self) -> Self {
        let completed = !self.completed;
        self.with_completed(completed)
    }

    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }
}
