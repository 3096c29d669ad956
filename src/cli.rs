use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use thiserror::Error;

use todomvc::domain::message::{
    ClearCompletedCommand, CommandStatus, DestroyCommand, EditCommand, Message, NewTodoCommand,
    Reply, ToggleAllCommand, ToggleCommand, TodosQuery, TodosQueryResult,
};
use todomvc::repo::TodoRepository;
use todomvc::usecase::dispatch::MessageHandler;

use crate::app::Filter;

#[derive(Parser, Debug)]
#[command(author, version, about = "todomvc — a todo list for the terminal", long_about = None)]
pub struct Args {
    /// Tick interval of render loop in milliseconds
    #[arg(long, default_value_t = 120)]
    pub tick_ms: u64,

    /// Start with demo tasks (implies an in-memory store)
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Use in-memory store instead of the JSON file
    #[arg(long, default_value_t = false)]
    pub memory: bool,

    /// Path to the todos JSON file (default: OS data dir)
    #[arg(long, env = "TODOMVC_TODOS_FILE")]
    pub todos_file: Option<PathBuf>,

    /// Write logs to this file (the interactive UI logs nowhere otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Print the todo list
    List {
        #[arg(long, value_enum, default_value_t = Filter::All)]
        filter: Filter,
        /// Print the query result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Add a new todo
    Add { title: String },
    /// Flip the completed state of a todo
    Toggle { id: String },
    /// Mark every todo as completed (true) or active (false)
    ToggleAll {
        #[arg(action = ArgAction::Set)]
        completed: bool,
    },
    /// Change the title of a todo; a blank title removes it
    Edit { id: String, title: String },
    /// Remove a todo
    Destroy { id: String },
    /// Remove all completed todos
    ClearCompleted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be blank")]
    BlankTitle,
    #[error("id must not be empty")]
    EmptyId,
}

/// Turns a parsed subcommand into the message the core understands.
pub fn to_message(cmd: &Cmd) -> Result<Message, ValidationError> {
    let message = match cmd {
        Cmd::List { .. } => Message::Todos(TodosQuery {}),
        Cmd::Add { title } => {
            let title = title.trim();
            if title.is_empty() {
                return Err(ValidationError::BlankTitle);
            }
            Message::NewTodo(NewTodoCommand {
                title: title.to_owned(),
            })
        }
        Cmd::Toggle { id } => Message::Toggle(ToggleCommand { id: require_id(id)? }),
        Cmd::ToggleAll { completed } => Message::ToggleAll(ToggleAllCommand {
            completed: *completed,
        }),
        Cmd::Edit { id, title } => edit_message(require_id(id)?, title),
        Cmd::Destroy { id } => Message::Destroy(DestroyCommand { id: require_id(id)? }),
        Cmd::ClearCompleted => Message::ClearCompleted(ClearCompletedCommand {}),
    };
    Ok(message)
}

/// Editing a todo down to a blank title means removing it.
pub fn edit_message(id: String, title: &str) -> Message {
    let title = title.trim();
    if title.is_empty() {
        Message::Destroy(DestroyCommand { id })
    } else {
        Message::Edit(EditCommand {
            id,
            title: title.to_owned(),
        })
    }
}

fn require_id(id: &str) -> Result<String, ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    Ok(id.to_owned())
}

pub fn run<R: TodoRepository>(
    handler: &mut MessageHandler<R>,
    cmd: &Cmd,
    out: &mut impl Write,
) -> Result<()> {
    let message = to_message(cmd)?;
    let reply = handler.handle(&message).context("failed to load todos")?;

    match reply {
        Reply::Query(result) => {
            let (filter, json) = match cmd {
                Cmd::List { filter, json } => (*filter, *json),
                _ => (Filter::All, false),
            };
            let result = TodosQueryResult {
                todos: result
                    .todos
                    .into_iter()
                    .filter(|t| filter.matches(t))
                    .collect(),
            };
            if json {
                serde_json::to_writer_pretty(&mut *out, &result)?;
                writeln!(out)?;
            } else {
                print_list(&result, out)?;
            }
        }
        Reply::Command(CommandStatus::Success) => {}
        Reply::Command(CommandStatus::Failure { error_message }) => bail!(error_message),
    }
    Ok(())
}

fn print_list(result: &TodosQueryResult, out: &mut impl Write) -> Result<()> {
    for todo in &result.todos {
        let mark = if todo.completed { "x" } else { " " };
        writeln!(out, "[{mark}] {}  ({})", todo.title, todo.id)?;
    }
    writeln!(out, "{}", crate::app::items_left(result.active_count()))?;
    Ok(())
}
