mod app;
mod cli;
mod ui;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Args;
use todomvc::domain::todo::Todo;
use todomvc::repo::TodoRepository;
use todomvc::repo::json::JsonTodoRepo;
use todomvc::repo::memory::InMemoryTodoRepo;
use todomvc::usecase::dispatch::MessageHandler;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.command.is_some(), args.log_file.as_deref())?;

    let repo: Box<dyn TodoRepository> = if args.demo {
        Box::new(InMemoryTodoRepo::with_seed(seed_todos()))
    } else if args.memory {
        Box::new(InMemoryTodoRepo::default())
    } else if let Some(path) = args.todos_file.as_ref() {
        Box::new(JsonTodoRepo::open(path))
    } else {
        Box::new(JsonTodoRepo::open_default()?)
    };
    let mut handler = MessageHandler::new(repo);

    match args.command {
        Some(cmd) => cli::run(&mut handler, &cmd, &mut std::io::stdout().lock()),
        None => ui::run(App::new(handler), Duration::from_millis(args.tick_ms)),
    }
}

fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::with_id("119e6785-8ffc-42e0-8df6-dbc64881f2b7", "Taste JavaScript", true),
        Todo::with_id("d2f7760d-8f03-4cb3-9176-06311cb89993", "Buy a unicorn", false),
    ]
}

// The interactive UI owns the terminal, so it only logs to a file.
fn init_tracing(to_stderr: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| "todomvc=warn".into());

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
