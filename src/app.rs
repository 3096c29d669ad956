use clap::ValueEnum;

use todomvc::domain::message::{
    ClearCompletedCommand, CommandStatus, DestroyCommand, Message, NewTodoCommand, Reply,
    ToggleAllCommand, ToggleCommand, TodosQuery, TodosQueryResult,
};
use todomvc::domain::todo::{Todo, TodoId};
use todomvc::repo::TodoRepository;
use todomvc::usecase::dispatch::MessageHandler;

use crate::cli::edit_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => todo.is_active(),
            Self::Completed => todo.completed,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

pub fn items_left(active: usize) -> String {
    if active == 1 {
        "1 item left".to_string()
    } else {
        format!("{active} items left")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adding,
    Editing(TodoId),
}

pub struct App<R: TodoRepository> {
    handler: MessageHandler<R>,
    pub result: TodosQueryResult,
    pub filter: Filter,
    pub selected: usize,
    pub mode: InputMode,
    pub input: String,
    pub status: Option<String>,
}

impl<R: TodoRepository> App<R> {
    pub fn new(handler: MessageHandler<R>) -> Self {
        let mut app = Self {
            handler,
            result: TodosQueryResult::default(),
            filter: Filter::All,
            selected: 0,
            mode: InputMode::Normal,
            input: String::new(),
            status: None,
        };
        app.reload();
        app
    }

    pub fn reload(&mut self) {
        match self.handler.handle_todos_query(&TodosQuery {}) {
            Ok(result) => self.result = result,
            Err(e) => {
                tracing::error!(error = %e, "todos query failed");
                self.set_status(&format!("Cannot load todos: {e}"));
            }
        }
        let len = self.visible().len();
        if self.selected >= len && len > 0 {
            self.selected = len - 1;
        }
    }

    pub fn visible(&self) -> Vec<&Todo> {
        self.result
            .todos
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
        self.reload();
        self.set_status(&format!("Showing {}", self.filter.label()));
    }

    fn selected_todo(&self) -> Option<&Todo> {
        self.visible().get(self.selected).copied()
    }

    fn selected_id(&self) -> Option<TodoId> {
        self.selected_todo().map(|t| t.id.clone())
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.send(Message::Toggle(ToggleCommand { id }), "Toggled completion");
        }
    }

    /// Completes everything, or reopens everything if all are done already.
    pub fn toggle_all(&mut self) {
        if self.result.todos.is_empty() {
            return;
        }
        let completed = self.result.active_count() > 0;
        let msg = if completed {
            "Marked all completed"
        } else {
            "Marked all active"
        };
        self.send(Message::ToggleAll(ToggleAllCommand { completed }), msg);
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.selected > 0 {
                self.selected -= 1;
            }
            self.send(Message::Destroy(DestroyCommand { id }), "Deleted");
        }
    }

    pub fn clear_completed(&mut self) {
        let completed = self.result.completed_count();
        if completed == 0 {
            self.set_status("No completed items");
            return;
        }
        self.send(
            Message::ClearCompleted(ClearCompletedCommand {}),
            &format!("Cleared {completed} completed"),
        );
    }

    pub fn begin_add(&mut self) {
        self.mode = InputMode::Adding;
        self.input.clear();
        self.set_status("Type new task and press Enter");
    }

    pub fn begin_edit(&mut self) {
        if let Some(todo) = self.selected_todo() {
            let (id, title) = (todo.id.clone(), todo.title.clone());
            self.mode = InputMode::Editing(id);
            self.input = title;
            self.set_status("Edit the title; an empty title deletes the task");
        }
    }

    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
        self.input.clear();
        self.set_status("Canceled");
    }

    pub fn submit_input(&mut self) {
        match std::mem::replace(&mut self.mode, InputMode::Normal) {
            InputMode::Normal => {}
            InputMode::Adding => {
                let title = self.input.trim().to_owned();
                if title.is_empty() {
                    self.mode = InputMode::Adding;
                    self.set_status("Cannot add an empty task");
                    return;
                }
                self.input.clear();
                self.send(Message::NewTodo(NewTodoCommand { title }), "Added");
                let len = self.visible().len();
                if len > 0 {
                    self.selected = len - 1;
                }
            }
            InputMode::Editing(id) => {
                let message = edit_message(id, &self.input);
                self.input.clear();
                let msg = match message {
                    Message::Destroy(_) => "Deleted",
                    _ => "Edited",
                };
                self.send(message, msg);
            }
        }
    }

    fn send(&mut self, message: Message, ok_status: &str) {
        match self.handler.handle(&message) {
            Ok(Reply::Command(CommandStatus::Success)) => self.set_status(ok_status),
            Ok(Reply::Command(CommandStatus::Failure { error_message })) => {
                self.set_status(&format!("Error: {error_message}"));
            }
            Ok(Reply::Query(result)) => self.result = result,
            Err(e) => self.set_status(&format!("Error: {e}")),
        }
        self.reload();
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status = Some(msg.to_string());
    }
}
