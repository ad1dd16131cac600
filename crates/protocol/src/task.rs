//! Task-related types for the Kanban board.
//!
//! This module defines task identifiers and the task structure itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// Unique identifier for a task.
///
/// Ids are opaque strings. Boards persisted by older versions use ids like
/// `task-3`, which must be preserved as-is; freshly generated ids use a UUID
/// v4 suffix instead of a timestamp so rapid successive creations never
/// collide.
///
/// # Examples
///
/// ```
/// use kanban_protocol::TaskId;
///
/// let id = TaskId::generate();
/// assert!(id.as_str().starts_with("task-"));
/// assert_ne!(id, TaskId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task id from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random task id.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("task-{}", uuid::Uuid::new_v4().simple()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A task on the Kanban board.
///
/// A task's column membership is not stored on the task itself: it belongs to
/// whichever [`Column`](crate::Column) holds it.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Tag, TagColor, Task};
///
/// let task = Task::new("Fix bug", "The login button doesn't work on mobile")
///     .with_tags(vec![Tag::new("BUG", TagColor::Red)]);
/// assert_eq!(task.name, "Fix bug");
/// assert_eq!(task.tags.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub name: String,
    /// Longer free-form description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Tags attached to this task, in display order.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Task {
    /// Creates a new untagged task with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(TaskId::generate(), name, description)
    }

    /// Creates a new untagged task with a specific id.
    #[must_use]
    pub fn with_id(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    /// Returns the task with its tags replaced.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// The blank task substituted for stored records that cannot be
    /// recognized.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::with_id(TaskId::default(), "", "")
    }

    /// Replaces the editable content of this task. The id is left untouched.
    pub fn edit(&mut self, name: impl Into<String>, description: impl Into<String>, tags: Vec<Tag>) {
        self.name = name.into();
        self.description = description.into();
        self.tags = tags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagColor;

    #[test]
    fn generated_ids_are_unique() {
        let ids: std::collections::HashSet<TaskId> = (0..1000).map(|_| TaskId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn task_id_json_is_a_bare_string() {
        let json = serde_json::to_string(&TaskId::new("task-7")).expect("serialize");
        assert_eq!(json, r#""task-7""#);
    }

    #[test]
    fn missing_optional_fields_default() {
        let task: Task = serde_json::from_str(r#"{"id": "x", "name": "Hello"}"#).expect("deserialize");
        assert_eq!(task.description, "");
        assert!(task.tags.is_empty());
    }

    #[test]
    fn edit_keeps_id() {
        let mut task = Task::with_id("task-1", "Old", "old");
        task.edit("New", "new", vec![Tag::new("UI", TagColor::Green)]);

        assert_eq!(task.id.as_str(), "task-1");
        assert_eq!(task.name, "New");
        assert_eq!(task.description, "new");
        assert_eq!(task.tags, vec![Tag::new("UI", TagColor::Green)]);
    }

    #[test]
    fn placeholder_is_blank() {
        let task = Task::placeholder();
        assert_eq!(task.id.as_str(), "");
        assert!(task.name.is_empty());
        assert!(task.description.is_empty());
        assert!(task.tags.is_empty());
    }

    #[test]
    fn task_serialization_roundtrip() {
        let task = Task::new("Test task", "A description").with_tags(vec![Tag::new("OPS", TagColor::Orange)]);
        let json = serde_json::to_string(&task).expect("serialize");
        let parsed: Task = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(task, parsed);
    }
}
