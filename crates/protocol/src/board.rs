//! Kanban board types and the drag reorder algorithm.
//!
//! A [`Board`] is an ordered list of [`Column`]s, each holding an ordered list
//! of tasks. Tasks are owned by exactly one column at a time; moving a task
//! removes it from one sequence and inserts it into another in a single step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::{self, Tag};
use crate::task::{Task, TaskId};

/// Stable identifier of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a column id from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single column on the board.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Column, Task};
///
/// let mut column = Column::new("column-1", "To Do");
/// assert!(column.is_empty());
///
/// column.add_task(Task::new("Write docs", ""));
/// assert_eq!(column.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Identifier of this column.
    pub id: ColumnId,
    /// Display label.
    pub title: String,
    /// Tasks in this column, in display order.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates a new empty column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task to the end of this column.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the first task with the given id, if any.
    pub fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| &t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Returns a reference to a task by id, if found.
    #[must_use]
    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Returns a mutable reference to a task by id, if found.
    #[must_use]
    pub fn get_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }
}

/// A position on the board: a column and an index within its task list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragLocation {
    /// The column holding the position.
    pub column_id: ColumnId,
    /// Zero-based index within the column.
    pub index: usize,
}

impl DragLocation {
    /// Creates a new location.
    #[must_use]
    pub fn new(column_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// A Kanban board: an ordered list of columns.
///
/// Serializes as a bare JSON array of columns.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Board, Column, DragLocation, Task};
///
/// let mut todo = Column::new("todo", "To Do");
/// todo.add_task(Task::with_id("a", "A", ""));
/// let mut board = Board::new(vec![todo, Column::new("done", "Done")]);
///
/// let moved = board.move_task(
///     DragLocation::new("todo", 0),
///     Some(DragLocation::new("done", 0)),
/// );
/// assert!(moved);
/// assert_eq!(board.column(&"done".into()).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// The columns, in display order.
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board from its columns.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns a reference to a column by id.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Returns a mutable reference to a column by id.
    #[must_use]
    pub fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Finds a task by id across all columns.
    #[must_use]
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|c| c.get_task(id))
    }

    /// Returns `true` if any column holds a task with this id.
    #[must_use]
    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.find_task(id).is_some()
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Returns `true` if every column is empty.
    ///
    /// A board without columns counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Column::is_empty)
    }

    /// Empties every column, keeping the columns themselves.
    pub fn clear_tasks(&mut self) {
        for column in &mut self.columns {
            column.tasks.clear();
        }
    }

    /// Returns a fresh task id that no task on this board uses.
    #[must_use]
    pub fn next_task_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if !self.contains_task(&id) {
                return id;
            }
        }
    }

    /// Every distinct `(name, color)` tag on the board, in first-seen order.
    #[must_use]
    pub fn unique_tags(&self) -> Vec<Tag> {
        tag::unique_tags(
            self.columns
                .iter()
                .flat_map(|c| c.tasks.iter())
                .map(|t| t.tags.as_slice()),
        )
    }

    /// Moves one task from `source` to `destination`.
    ///
    /// A `None` destination is a cancelled drag and leaves the board as is.
    /// The task is removed first and then inserted at `destination.index` of
    /// the destination sequence as it stands after the removal, so within a
    /// single column `[A, B, C, D]` with 0 → 2 becomes `[B, C, A, D]`. An
    /// insertion index past the end appends.
    ///
    /// Returns `false` without changing anything if the drag was cancelled,
    /// either column is unknown, or `source.index` is out of bounds.
    pub fn move_task(&mut self, source: DragLocation, destination: Option<DragLocation>) -> bool {
        let Some(destination) = destination else {
            return false;
        };

        let Some(from) = self.column_index(&source.column_id) else {
            return false;
        };
        let Some(to) = self.column_index(&destination.column_id) else {
            return false;
        };

        if source.index >= self.columns[from].len() {
            return false;
        }

        let task = self.columns[from].tasks.remove(source.index);
        let tasks = &mut self.columns[to].tasks;
        let index = destination.index.min(tasks.len());
        tasks.insert(index, task);

        true
    }

    fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagColor;

    fn column(id: &str, names: &[&str]) -> Column {
        let mut column = Column::new(id, id.to_uppercase());
        for name in names {
            column.add_task(Task::with_id(*name, *name, format!("{name} description")));
        }
        column
    }

    fn names(board: &Board, id: &str) -> Vec<String> {
        board
            .column(&id.into())
            .expect("column exists")
            .tasks
            .iter()
            .map(|t| t.name.clone())
            .collect()
    }

    #[test]
    fn move_within_column_forward() {
        let mut board = Board::new(vec![column("a", &["A", "B", "C", "D"])]);
        assert!(board.move_task(DragLocation::new("a", 0), Some(DragLocation::new("a", 2))));
        assert_eq!(names(&board, "a"), ["B", "C", "A", "D"]);
    }

    #[test]
    fn move_within_column_backward() {
        let mut board = Board::new(vec![column("a", &["A", "B", "C", "D"])]);
        assert!(board.move_task(DragLocation::new("a", 3), Some(DragLocation::new("a", 1))));
        assert_eq!(names(&board, "a"), ["A", "D", "B", "C"]);
    }

    #[test]
    fn move_across_columns() {
        let mut board = Board::new(vec![column("src", &["T1", "T2"]), column("dst", &["T3"])]);
        assert!(board.move_task(DragLocation::new("src", 1), Some(DragLocation::new("dst", 0))));
        assert_eq!(names(&board, "src"), ["T1"]);
        assert_eq!(names(&board, "dst"), ["T2", "T3"]);
    }

    #[test]
    fn move_to_end_of_column() {
        let mut board = Board::new(vec![column("src", &["T1"]), column("dst", &["T2", "T3"])]);
        assert!(board.move_task(DragLocation::new("src", 0), Some(DragLocation::new("dst", 2))));
        assert_eq!(names(&board, "dst"), ["T2", "T3", "T1"]);
    }

    #[test]
    fn move_past_end_appends() {
        let mut board = Board::new(vec![column("a", &["A", "B", "C"])]);
        assert!(board.move_task(DragLocation::new("a", 0), Some(DragLocation::new("a", 10))));
        assert_eq!(names(&board, "a"), ["B", "C", "A"]);
    }

    #[test]
    fn cancelled_drag_is_noop() {
        let mut board = Board::new(vec![column("a", &["A", "B"])]);
        let before = board.clone();
        assert!(!board.move_task(DragLocation::new("a", 0), None));
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_source_is_noop() {
        let mut board = Board::new(vec![column("a", &["A"]), column("b", &[])]);
        let before = board.clone();
        assert!(!board.move_task(DragLocation::new("a", 1), Some(DragLocation::new("b", 0))));
        assert_eq!(board, before);
    }

    #[test]
    fn unknown_column_is_noop() {
        let mut board = Board::new(vec![column("a", &["A"])]);
        let before = board.clone();
        assert!(!board.move_task(DragLocation::new("a", 0), Some(DragLocation::new("zzz", 0))));
        assert!(!board.move_task(DragLocation::new("zzz", 0), Some(DragLocation::new("a", 0))));
        assert_eq!(board, before);
    }

    #[test]
    fn move_preserves_task_content() {
        let mut source = column("src", &[]);
        let task = Task::with_id("x", "X", "keep me").with_tags(vec![Tag::new("UI", TagColor::Green)]);
        source.add_task(task.clone());
        let mut board = Board::new(vec![source, column("dst", &["Y"])]);

        board.move_task(DragLocation::new("src", 0), Some(DragLocation::new("dst", 1)));
        assert_eq!(board.find_task(&"x".into()), Some(&task));
    }

    #[test]
    fn empty_board_detection() {
        assert!(Board::default().is_empty());
        assert!(Board::new(vec![column("a", &[]), column("b", &[])]).is_empty());
        assert!(!Board::new(vec![column("a", &[]), column("b", &["B"])]).is_empty());
    }

    #[test]
    fn clear_tasks_keeps_columns() {
        let mut board = Board::new(vec![column("a", &["A"]), column("b", &["B", "C"])]);
        board.clear_tasks();
        assert_eq!(board.columns.len(), 2);
        assert_eq!(board.total_tasks(), 0);
    }

    #[test]
    fn next_task_id_is_fresh() {
        let board = Board::new(vec![column("a", &["A", "B"])]);
        let id = board.next_task_id();
        assert!(!board.contains_task(&id));
    }

    #[test]
    fn board_serializes_as_column_array() {
        let board = Board::new(vec![Column::new("column-1", "To Do")]);
        let json = serde_json::to_string(&board).expect("serialize");
        assert_eq!(json, r#"[{"id":"column-1","title":"To Do","tasks":[]}]"#);
    }

    #[test]
    fn unique_tags_across_columns() {
        let mut a = Column::new("a", "A");
        a.add_task(Task::with_id("1", "one", "").with_tags(vec![Tag::new("UI", TagColor::Green)]));
        let mut b = Column::new("b", "B");
        b.add_task(Task::with_id("2", "two", "").with_tags(vec![
            Tag::new("UI", TagColor::Green),
            Tag::new("BUG", TagColor::Red),
        ]));
        let board = Board::new(vec![a, b]);

        assert_eq!(
            board.unique_tags(),
            vec![Tag::new("UI", TagColor::Green), Tag::new("BUG", TagColor::Red)]
        );
    }
}
