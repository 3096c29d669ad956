use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{RepositoryError, TodoRepository};
use crate::domain::todo::Todo;

/// Stores the list as a JSON array of `{id, title, completed}` objects.
#[derive(Debug, Clone)]
pub struct JsonTodoRepo {
    path: PathBuf,
}

impl JsonTodoRepo {
    pub fn open_default() -> Result<Self> {
        let path = default_todos_path()?;
        Ok(Self::open(path))
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TodoRepository for JsonTodoRepo {
    fn load(&self) -> Result<Vec<Todo>, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "todos file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(RepositoryError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let todos: Vec<Todo> =
            serde_json::from_str(&raw).map_err(|source| RepositoryError::Parse {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = todos.len(), "loaded todos");
        Ok(todos)
    }

    fn store(&mut self, todos: Vec<Todo>) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(&todos)?;
        write_atomic(&self.path, &bytes).map_err(|source| RepositoryError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = todos.len(), "stored todos");
        Ok(())
    }
}

// Readers see either the old file or the new one, never a partial write.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("todos.json");
    let tmp = parent.join(format!(".{file_name}.tmp.{}", std::process::id()));

    let result = (|| -> std::io::Result<()> {
        let mut f = File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn default_todos_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("failed to resolve data dir")?;
    Ok(base.join("todomvc").join("todos.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![
            Todo::with_id("119e6785-8ffc-42e0-8df6-dbc64881f2b7", "Taste JavaScript", true),
            Todo::with_id("d2f7760d-8f03-4cb3-9176-06311cb89993", "Buy a unicorn", false),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonTodoRepo::open(dir.path().join("todos.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn json_repo_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = JsonTodoRepo::open(dir.path().join("nested").join("todos.json"));

        repo.store(sample()).unwrap();
        assert_eq!(repo.load().unwrap(), sample());

        repo.store(Vec::new()).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn reads_the_documented_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(
            &path,
            r#"[{"id":"1","title":"A","completed":false},{"id":"2","title":"B","completed":true}]"#,
        )
        .unwrap();

        let repo = JsonTodoRepo::open(&path);
        assert_eq!(
            repo.load().unwrap(),
            vec![Todo::with_id("1", "A", false), Todo::with_id("2", "B", true)]
        );
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");

        for raw in ["", "{not json", r#"[{"id":"1","title":"A"}]"#] {
            fs::write(&path, raw).unwrap();
            let err = JsonTodoRepo::open(&path).load().unwrap_err();
            assert!(matches!(err, RepositoryError::Parse { .. }), "{raw:?}: {err}");
        }
    }

    #[test]
    fn failed_write_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be replaced by a file rename.
        let target = dir.path().join("todos.json");
        fs::create_dir(&target).unwrap();

        let mut repo = JsonTodoRepo::open(&target);
        let err = repo.store(sample()).unwrap_err();
        assert!(matches!(err, RepositoryError::Write { .. }));
        assert!(err.to_string().contains("todos.json"));

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn store_replaces_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        let mut repo = JsonTodoRepo::open(&path);

        repo.store(sample()).unwrap();
        repo.store(vec![Todo::with_id("3", "C", false)]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Todo> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, vec![Todo::with_id("3", "C", false)]);
    }
}
