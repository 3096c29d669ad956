use super::run_command;
use crate::domain::message::{CommandStatus, EditCommand};
use crate::domain::todo::Todo;
use crate::repo::TodoRepository;

/// Renames the matching todo. Blank titles never get here: the caller sends
/// a destroy command instead.
pub fn apply(todos: Vec<Todo>, command: &EditCommand) -> Vec<Todo> {
    todos
        .into_iter()
        .map(|t| {
            if t.id == command.id {
                t.with_title(command.title.as_str())
            } else {
                t
            }
        })
        .collect()
}

pub fn handle<R: TodoRepository + ?Sized>(repo: &mut R, command: &EditCommand) -> CommandStatus {
    run_command(repo, "edit", |todos| apply(todos, command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::memory::InMemoryTodoRepo;
    use crate::usecase::testing::sample;

    #[test]
    fn renames_matching_todo_and_keeps_state() {
        let mut repo = InMemoryTodoRepo::with_seed(sample());
        let status = handle(
            &mut repo,
            &EditCommand {
                id: "119e6785-8ffc-42e0-8df6-dbc64881f2b7".into(),
                title: "Taste Rust".into(),
            },
        );

        assert!(status.is_success());
        assert_eq!(
            repo.load().unwrap(),
            vec![
                Todo::with_id("119e6785-8ffc-42e0-8df6-dbc64881f2b7", "Taste Rust", true),
                Todo::with_id("d2f7760d-8f03-4cb3-9176-06311cb89993", "Buy a unicorn", false),
            ]
        );
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut repo = InMemoryTodoRepo::with_seed(sample());
        let command = EditCommand {
            id: "missing".into(),
            title: "Whatever".into(),
        };
        assert!(handle(&mut repo, &command).is_success());
        assert_eq!(repo.load().unwrap(), sample());
    }
}
