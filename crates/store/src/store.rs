//! The board store: single owner of the board and its persisted copy.
//!
//! [`BoardStore`] loads the board from a [`Storage`] slot, applies the
//! mutation operations, and writes the whole board back after each one that
//! changed something. A mutation whose save fails is rolled back, so the
//! in-memory board never runs ahead of the stored one.
//!
//! # Autoheal
//!
//! Whenever the board ends up with every column empty, the store swaps in the
//! seed board, unless the user emptied it on purpose with
//! [`BoardStore::clear_all`] during this session. Deleting tasks one by one
//! down to zero therefore brings the seed content back.

use kanban_protocol::seed::seed_board;
use kanban_protocol::tag;
use kanban_protocol::{Board, ColumnId, DragLocation, Tag, Task, TaskId};
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::migration::migrate;
use crate::storage::Storage;

/// Storage slot that holds the board unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "kanban-columns";

/// Owns the board, its storage slot, and the session's "cleared" flag.
///
/// # Examples
///
/// ```
/// use kanban_store::{BoardStore, MemoryStorage, DEFAULT_STORAGE_KEY};
///
/// # fn main() -> kanban_store::Result<()> {
/// let mut store = BoardStore::load(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
/// assert_eq!(store.board().total_tasks(), 8); // seed board
///
/// let id = store
///     .add_task(&"column-1".into(), "Plan sprint", "", vec![])?
///     .expect("task added");
/// assert!(store.board().contains_task(&id));
///
/// // Every mutation is persisted.
/// assert!(store.storage().get(DEFAULT_STORAGE_KEY).unwrap().contains("Plan sprint"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BoardStore<S> {
    storage: S,
    key: String,
    board: Board,
    cleared: bool,
}

impl<S: Storage> BoardStore<S> {
    /// Loads the board from slot `key` of `storage`.
    ///
    /// Never fails: an empty slot, an unreadable slot, or content that is not
    /// a board all yield the seed board. Stored tasks in older shapes are
    /// migrated. A saved board with no tasks at all is replaced by the seed
    /// board as well, since a new session starts uncleared.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        debug!(key = %key, "loading board");

        let board = read_board(&storage, &key);
        let mut store = Self {
            storage,
            key,
            board,
            cleared: false,
        };
        store.autoheal();
        store
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the underlying storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store and returns its storage.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Returns the storage slot key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `true` once [`clear_all`](Self::clear_all) ran in this session.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Writes the whole board to the storage slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be serialized or written.
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.board)?;
        self.storage.write(&self.key, &json)?;
        debug!(tasks = self.board.total_tasks(), "board saved");
        Ok(())
    }

    /// Appends a new task to the end of a column.
    ///
    /// Name and description are trimmed. Nothing happens if the name is
    /// blank, the tags are not valid, or the column does not exist.
    ///
    /// Returns the id of the new task, or `None` if nothing was added.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated board cannot be saved.
    #[instrument(skip_all, fields(column = %column_id))]
    pub fn add_task(
        &mut self,
        column_id: &ColumnId,
        name: &str,
        description: &str,
        tags: Vec<Tag>,
    ) -> Result<Option<TaskId>> {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring task with blank name");
            return Ok(None);
        }
        if !tag::is_valid(&tags) {
            debug!("ignoring task with invalid tags");
            return Ok(None);
        }

        let id = self.board.next_task_id();
        let before = self.snapshot();
        let Some(column) = self.board.column_mut(column_id) else {
            debug!("column not found");
            return Ok(None);
        };
        column.add_task(Task::with_id(id.clone(), name, description.trim()).with_tags(tags));

        info!(task = %id, "task added");
        self.commit(before)?;
        Ok(Some(id))
    }

    /// Replaces the name, description, and tags of a task in place.
    ///
    /// The task keeps its id and position. Nothing happens if the task is not
    /// in the column, the trimmed name is blank, or the tags are not valid.
    ///
    /// Returns `true` if the task was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated board cannot be saved.
    #[instrument(skip_all, fields(column = %column_id, task = %task_id))]
    pub fn update_task(
        &mut self,
        column_id: &ColumnId,
        task_id: &TaskId,
        name: &str,
        description: &str,
        tags: Vec<Tag>,
    ) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() || !tag::is_valid(&tags) {
            debug!("ignoring invalid task update");
            return Ok(false);
        }

        let before = self.snapshot();
        let Some(task) = self
            .board
            .column_mut(column_id)
            .and_then(|c| c.get_task_mut(task_id))
        else {
            debug!("task not found");
            return Ok(false);
        };
        task.edit(name, description.trim(), tags);

        info!("task updated");
        self.commit(before)?;
        Ok(true)
    }

    /// Removes a task from a column.
    ///
    /// Returns `true` if the task was found and removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated board cannot be saved.
    #[instrument(skip_all, fields(column = %column_id, task = %task_id))]
    pub fn delete_task(&mut self, column_id: &ColumnId, task_id: &TaskId) -> Result<bool> {
        let before = self.snapshot();
        let removed = self
            .board
            .column_mut(column_id)
            .and_then(|c| c.remove_task(task_id));
        if removed.is_none() {
            debug!("task not found");
            return Ok(false);
        }

        info!("task deleted");
        self.commit(before)?;
        Ok(true)
    }

    /// Empties every column and disables autoheal for the rest of the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated board cannot be saved.
    #[instrument(skip(self))]
    pub fn clear_all(&mut self) -> Result<()> {
        let before = self.snapshot();
        self.board.clear_tasks();
        self.cleared = true;

        info!("all tasks cleared");
        self.commit(before)
    }

    /// Moves a task as the result of a drag.
    ///
    /// See [`Board::move_task`] for the reordering rules. A `None`
    /// destination (cancelled drag) changes nothing.
    ///
    /// Returns `true` if the task was moved.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated board cannot be saved.
    #[instrument(skip(self))]
    pub fn move_task(
        &mut self,
        source: DragLocation,
        destination: Option<DragLocation>,
    ) -> Result<bool> {
        let before = self.snapshot();
        if !self.board.move_task(source, destination) {
            debug!("move ignored");
            return Ok(false);
        }

        info!("task moved");
        self.commit(before)?;
        Ok(true)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            cleared: self.cleared,
        }
    }

    /// Applies autoheal and persists the board after a mutation, restoring
    /// `before` if the save fails.
    fn commit(&mut self, before: Snapshot) -> Result<()> {
        self.autoheal();
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to save board, rolling back");
            self.board = before.board;
            self.cleared = before.cleared;
            return Err(e);
        }
        Ok(())
    }

    fn autoheal(&mut self) {
        if !self.cleared && self.board.is_empty() {
            info!("board is empty, restoring seed board");
            self.board = seed_board();
        }
    }
}

/// State restored when a mutation cannot be saved.
#[derive(Debug)]
struct Snapshot {
    board: Board,
    cleared: bool,
}

/// Reads and migrates the stored board, falling back to the seed board.
fn read_board(storage: &impl Storage, key: &str) -> Board {
    let json = match storage.read(key) {
        Ok(Some(json)) => json,
        Ok(None) => {
            info!("no saved board, using seed board");
            return seed_board();
        }
        Err(e) => {
            warn!(error = %e, "failed to read saved board, using seed board");
            return seed_board();
        }
    };

    match migrate(&json) {
        Ok(migration) => {
            if migration.report.has_changes() {
                warn!(report = ?migration.report, "migrated saved board from an older format");
            }
            debug!(
                columns = migration.board.columns.len(),
                tasks = migration.board.total_tasks(),
                "loaded saved board"
            );
            migration.board
        }
        Err(e) => {
            warn!(error = %e, "saved board is not readable, using seed board");
            seed_board()
        }
    }
}
