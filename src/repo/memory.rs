use super::{RepositoryError, TodoRepository};
use crate::domain::todo::Todo;

#[derive(Debug, Default)]
pub struct InMemoryTodoRepo {
    todos: Vec<Todo>,
}

impl InMemoryTodoRepo {
    pub fn with_seed(seed: impl IntoIterator<Item = Todo>) -> Self {
        Self {
            todos: seed.into_iter().collect(),
        }
    }
}

impl TodoRepository for InMemoryTodoRepo {
    fn load(&self) -> Result<Vec<Todo>, RepositoryError> {
        Ok(self.todos.clone())
    }

    fn store(&mut self, todos: Vec<Todo>) -> Result<(), RepositoryError> {
        self.todos = todos;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let repo = InMemoryTodoRepo::default();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn store_replaces_snapshot() {
        let mut repo = InMemoryTodoRepo::with_seed([Todo::with_id("1", "A", false)]);
        let mut snapshot = repo.load().unwrap();

        repo.store(vec![Todo::with_id("2", "B", true)]).unwrap();
        snapshot.push(Todo::with_id("3", "C", false));

        assert_eq!(repo.load().unwrap(), vec![Todo::with_id("2", "B", true)]);
    }
}
