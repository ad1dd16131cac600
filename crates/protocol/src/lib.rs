//! Shared types for the kanban board.
//!
//! This crate defines the board model and the pure logic that operates on
//! it. It does no I/O; persistence lives in `kanban-store`.
//!
//! # Overview
//!
//! - [`board`]: columns, the board, and the drag reorder algorithm
//! - [`task`]: task identifiers and the `Task` struct
//! - [`tag`]: the tag palette and tag validation
//! - [`tag_input`]: draft tag state for task forms
//! - [`seed`]: the default board content
//! - [`info`]: the stub board summary
//! - [`error`]: error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use kanban_protocol::{DragLocation, TagColor, TagInput, Task, seed::seed_board};
//!
//! let mut board = seed_board();
//!
//! let mut tags = TagInput::new();
//! tags.add_tag("urgent", TagColor::Red);
//! assert!(tags.is_valid());
//!
//! let task = Task::new("Ship it", "").with_tags(tags.into_tags());
//! board.columns[0].add_task(task);
//!
//! // Drag the new task to the top of "In Progress".
//! board.move_task(
//!     DragLocation::new("column-1", 4),
//!     Some(DragLocation::new("column-2", 0)),
//! );
//! assert_eq!(board.columns[1].tasks[0].name, "Ship it");
//! ```

pub mod board;
pub mod error;
pub mod info;
pub mod seed;
pub mod tag;
pub mod tag_input;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column, ColumnId, DragLocation};
pub use error::{ProtocolError, Result};
pub use info::BoardInfo;
pub use tag::{TAG_NAME_MAX_LEN, Tag, TagColor};
pub use tag_input::{TagInput, TagUpdate};
pub use task::{Task, TaskId};
