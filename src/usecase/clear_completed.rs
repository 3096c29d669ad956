use super::run_command;
use crate::domain::message::{ClearCompletedCommand, CommandStatus};
use crate::domain::todo::Todo;
use crate::repo::TodoRepository;

pub fn apply(mut todos: Vec<Todo>, _command: &ClearCompletedCommand) -> Vec<Todo> {
    todos.retain(Todo::is_active);
    todos
}

pub fn handle<R: TodoRepository + ?Sized>(
    repo: &mut R,
    command: &ClearCompletedCommand,
) -> CommandStatus {
    run_command(repo, "clear_completed", |todos| apply(todos, command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::memory::InMemoryTodoRepo;

    #[test]
    fn keeps_only_active_todos_in_order() {
        let mut repo = InMemoryTodoRepo::with_seed([
            Todo::with_id("1", "A", false),
            Todo::with_id("2", "B", true),
            Todo::with_id("3", "C", false),
        ]);

        let status = handle(&mut repo, &ClearCompletedCommand {});

        assert_eq!(status, CommandStatus::Success);
        assert_eq!(
            repo.load().unwrap(),
            vec![Todo::with_id("1", "A", false), Todo::with_id("3", "C", false)]
        );
    }

    #[test]
    fn nothing_completed_is_a_no_op() {
        let seed = vec![Todo::with_id("1", "A", false)];
        let mut repo = InMemoryTodoRepo::with_seed(seed.clone());
        assert!(handle(&mut repo, &ClearCompletedCommand {}).is_success());
        assert_eq!(repo.load().unwrap(), seed);
    }
}
