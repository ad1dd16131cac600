//! Conversion of persisted boards into the current data model.
//!
//! Saved boards carry no version field and their task records went through
//! several shapes. Each stored task is first classified by which keys it
//! carries, then converted:
//!
//! | Shape | Recognized by | Result |
//! |-------|---------------|--------|
//! | current | `name` and `description` keys present | kept; `tags` normalized |
//! | legacy | `id` key present | `{id, name: content, description: "", tags: []}` |
//! | unknown | anything else | blank placeholder task |
//!
//! Only key presence decides the shape. Text fields holding something other
//! than a string are coerced: numbers and booleans keep their JSON spelling,
//! `null` and containers become empty.
//!
//! Tags inside current records may be bare strings (the oldest tag format),
//! which become a tag named after their first 5 characters in the legacy
//! default color, or `{name, color}` objects whose color is mapped onto the
//! palette.
//!
//! A migration never fails on a bad task record. Only a slot that is not a
//! JSON array of column objects with an `id` is rejected as a whole.
//!
//! # Examples
//!
//! ```
//! use kanban_store::migration::migrate;
//!
//! let json = r#"[{"id": "todo", "title": "To Do", "tasks": [{"id": "x", "content": "Hello"}]}]"#;
//! let migration = migrate(json).unwrap();
//!
//! let task = &migration.board.columns[0].tasks[0];
//! assert_eq!(task.id.as_str(), "x");
//! assert_eq!(task.name, "Hello");
//! assert_eq!(migration.report.legacy_tasks, 1);
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use kanban_protocol::{Board, Column, Tag, TagColor, Task, TaskId};

/// Number of characters kept from a bare-string tag.
pub const BARE_TAG_NAME_LEN: usize = 5;

/// A text field that accepts any JSON value.
#[derive(Debug, Default)]
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self(coerce_text(&value)))
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn take_text(fields: &mut Map<String, Value>, key: &str) -> String {
    fields
        .remove(key)
        .map(|value| coerce_text(&value))
        .unwrap_or_default()
}

/// A stored column. A missing, `null` or non-array task list counts as empty.
#[derive(Debug, Deserialize)]
struct StoredColumn {
    id: Text,
    #[serde(default)]
    title: Text,
    #[serde(default)]
    tasks: Value,
}

/// The shapes a stored task record may take.
#[derive(Debug, PartialEq)]
enum StoredTask {
    Current {
        id: String,
        name: String,
        description: String,
        tags: Option<Value>,
    },
    Legacy {
        id: String,
        content: String,
    },
    Unknown,
}

impl StoredTask {
    fn classify(record: Value) -> Self {
        let Value::Object(mut fields) = record else {
            return Self::Unknown;
        };

        if fields.contains_key("name") && fields.contains_key("description") {
            Self::Current {
                id: take_text(&mut fields, "id"),
                name: take_text(&mut fields, "name"),
                description: take_text(&mut fields, "description"),
                tags: fields.remove("tags"),
            }
        } else if fields.contains_key("id") {
            Self::Legacy {
                id: take_text(&mut fields, "id"),
                content: take_text(&mut fields, "content"),
            }
        } else {
            Self::Unknown
        }
    }
}

/// Counts of the conversions applied during a migration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Legacy `{id, content}` records converted.
    pub legacy_tasks: usize,
    /// Unrecognized records replaced by a placeholder.
    pub placeholder_tasks: usize,
    /// Bare-string tags converted.
    pub bare_tags: usize,
    /// Tag entries dropped because they were neither strings nor named objects.
    pub dropped_tags: usize,
    /// Object tags whose color was not in the palette.
    pub recolored_tags: usize,
}

impl MigrationReport {
    /// Returns `true` if any record had to be rewritten.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        *self != Self::default()
    }
}

/// The outcome of migrating a stored board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// The board in the current data model.
    pub board: Board,
    /// What was converted on the way.
    pub report: MigrationReport,
}

/// Parses a stored board and converts every task into the current shape.
///
/// # Errors
///
/// Returns an error if `json` is not a JSON array of column objects, or if a
/// column has no `id`.
pub fn migrate(json: &str) -> Result<Migration, serde_json::Error> {
    let stored: Vec<StoredColumn> = serde_json::from_str(json)?;
    let mut report = MigrationReport::default();

    let columns = stored
        .into_iter()
        .map(|column| {
            let records = match column.tasks {
                Value::Array(records) => records,
                _ => Vec::new(),
            };
            Column {
                id: column.id.0.into(),
                title: column.title.0,
                tasks: records
                    .into_iter()
                    .map(|record| migrate_task(StoredTask::classify(record), &mut report))
                    .collect(),
            }
        })
        .collect();

    Ok(Migration {
        board: Board::new(columns),
        report,
    })
}

fn migrate_task(task: StoredTask, report: &mut MigrationReport) -> Task {
    match task {
        StoredTask::Current {
            id,
            name,
            description,
            tags,
        } => {
            let tags = match tags {
                Some(Value::Array(tags)) => tags
                    .into_iter()
                    .filter_map(|tag| migrate_tag(tag, report))
                    .collect(),
                _ => Vec::new(),
            };
            Task::with_id(id, name, description).with_tags(tags)
        }
        StoredTask::Legacy { id, content } => {
            report.legacy_tasks += 1;
            Task::with_id(id, content, "")
        }
        StoredTask::Unknown => {
            report.placeholder_tasks += 1;
            Task::placeholder()
        }
    }
}

fn migrate_tag(tag: Value, report: &mut MigrationReport) -> Option<Tag> {
    match tag {
        Value::String(name) => {
            report.bare_tags += 1;
            let name: String = name.chars().take(BARE_TAG_NAME_LEN).collect();
            Some(Tag::new(name, TagColor::LEGACY_DEFAULT))
        }
        Value::Object(mut fields) if fields.contains_key("name") => {
            let name = take_text(&mut fields, "name");
            let color = fields.get("color").and_then(Value::as_str).unwrap_or_default();
            if !TagColor::is_palette_color(color) {
                report.recolored_tags += 1;
            }
            Some(Tag::new(name, TagColor::from_hex_or_default(color)))
        }
        _ => {
            report.dropped_tags += 1;
            None
        }
    }
}

/// Returns `true` if `task` is the blank stand-in for an unrecognized record.
#[must_use]
pub fn is_placeholder(task: &Task) -> bool {
    task.id == TaskId::default() && task.name.is_empty()
}
