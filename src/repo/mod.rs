use std::path::PathBuf;

use thiserror::Error;

use crate::domain::todo::Todo;

pub mod json;
pub mod memory;

/// Persistence boundary for the whole todo list.
///
/// `store` replaces the snapshot as a unit; `load` returns the last stored
/// snapshot, or an empty list if nothing was stored yet.
pub trait TodoRepository {
    fn load(&self) -> Result<Vec<Todo>, RepositoryError>;
    fn store(&mut self, todos: Vec<Todo>) -> Result<(), RepositoryError>;
}

impl<R: TodoRepository + ?Sized> TodoRepository for Box<R> {
    fn load(&self) -> Result<Vec<Todo>, RepositoryError> {
        (**self).load()
    }

    fn store(&mut self, todos: Vec<Todo>) -> Result<(), RepositoryError> {
        (**self).store(todos)
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read todos from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse todos in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write todos to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode todos: {0}")]
    Encode(#[from] serde_json::Error),
}
