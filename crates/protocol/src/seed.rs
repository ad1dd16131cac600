//! Default board content.
//!
//! The seed board is shown on first run, when the saved board cannot be read,
//! and whenever the board becomes empty without the user explicitly clearing
//! it.
//!
//! # Examples
//!
//! ```
//! use kanban_protocol::seed::seed_board;
//!
//! let board = seed_board();
//! assert_eq!(board.columns.len(), 3);
//! assert_eq!(board.total_tasks(), 8);
//! ```

use crate::board::{Board, Column};
use crate::tag::{Tag, TagColor};
use crate::task::Task;

/// A builder for seed tasks carrying a single tag.
struct TaskBuilder {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    tag: Option<Tag>,
}

impl TaskBuilder {
    fn new(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
            tag: None,
        }
    }

    fn tag(mut self, name: &str, color: TagColor) -> Self {
        self.tag = Some(Tag::new(name, color));
        self
    }

    fn build(self) -> Task {
        Task::with_id(self.id, self.name, self.description).with_tags(self.tag.into_iter().collect())
    }
}

fn column(id: &str, title: &str, tasks: impl IntoIterator<Item = TaskBuilder>) -> Column {
    let mut column = Column::new(id, title);
    column.tasks = tasks.into_iter().map(TaskBuilder::build).collect();
    column
}

/// Builds the default board.
///
/// - **To Do** (`column-1`): 4 tasks
/// - **In Progress** (`column-2`): 2 tasks
/// - **Completed** (`column-3`): 2 tasks
#[must_use]
pub fn seed_board() -> Board {
    Board::new(vec![
        column(
            "column-1",
            "To Do",
            [
                TaskBuilder::new(
                    "task-1",
                    "Fix login bug",
                    "Users cannot log in with Google on mobile devices.",
                )
                .tag("BUG", TagColor::Red),
                TaskBuilder::new(
                    "task-2",
                    "Write docs",
                    "Document the new API endpoints for the frontend team.",
                )
                .tag("DOC", TagColor::Blue),
                TaskBuilder::new(
                    "task-3",
                    "Design dashboard",
                    "Create a new dashboard layout for analytics.",
                )
                .tag("UI", TagColor::Green),
                TaskBuilder::new(
                    "task-4",
                    "Add dark mode",
                    "Implement dark mode toggle in settings.",
                )
                .tag("UI", TagColor::Green),
            ],
        ),
        column(
            "column-2",
            "In Progress",
            [
                TaskBuilder::new(
                    "task-5",
                    "Refactor auth",
                    "Refactor authentication logic for better maintainability.",
                )
                .tag("CODE", TagColor::Brown),
                TaskBuilder::new("task-6", "Write tests", "Add unit tests for the user service.")
                    .tag("CODE", TagColor::Brown),
            ],
        ),
        column(
            "column-3",
            "Completed",
            [
                TaskBuilder::new("task-7", "Setup CI", "Continuous integration pipeline for PRs.")
                    .tag("OPS", TagColor::Orange),
                TaskBuilder::new("task-8", "Initial setup", "Project structure and dependencies.")
                    .tag("INIT", TagColor::Purple),
            ],
        ),
    ])
}
