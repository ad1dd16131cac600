//! Persistence and mutation of the kanban board.
//!
//! This crate owns the board at runtime: it loads the saved board from a
//! storage slot (migrating older data shapes on the way), exposes the
//! mutation operations used by presentation code, and saves the board after
//! every change.
//!
//! # Overview
//!
//! - [`store`]: the [`BoardStore`] and its mutation operations
//! - [`storage`]: the [`Storage`] slot abstraction with file and memory backends
//! - [`migration`]: conversion of older saved boards into the current model
//! - [`error`]: error types for storage operations
//!
//! # Examples
//!
//! ```no_run
//! use kanban_protocol::DragLocation;
//! use kanban_store::{BoardStore, FileStorage, DEFAULT_STORAGE_KEY};
//!
//! # fn example() -> kanban_store::Result<()> {
//! let mut store = BoardStore::load(FileStorage::new()?, DEFAULT_STORAGE_KEY);
//!
//! // Drag the first "To Do" task to the top of "In Progress".
//! store.move_task(
//!     DragLocation::new("column-1", 0),
//!     Some(DragLocation::new("column-2", 0)),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod migration;
pub mod storage;
pub mod store;

// Re-export primary types at crate root for convenience
pub use error::{Result, StoreError};
pub use storage::{DATA_DIR_NAME, FileStorage, MemoryStorage, Storage};
pub use store::{BoardStore, DEFAULT_STORAGE_KEY};
