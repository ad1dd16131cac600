//! Draft tag state for task forms.
//!
//! A [`TagInput`] holds the tags being composed for one form before they are
//! committed to a task. Each form owns its own instance; the "add task" and
//! "edit task" forms never share drafts, and the edit form reseeds its
//! instance with [`TagInput::set_tags`] whenever the task being edited
//! changes.
//!
//! # Example
//!
//! ```
//! use kanban_protocol::{TagColor, TagInput, TagUpdate};
//!
//! let mut input = TagInput::new();
//! assert!(input.add_tag(" bug ", TagColor::Red));
//! assert!(input.open_draft(TagColor::Blue));
//!
//! // The blank draft blocks both commit and another draft.
//! assert!(!input.is_valid());
//! assert!(!input.open_draft(TagColor::Blue));
//!
//! input.update_tag(1, TagUpdate::name("docs"));
//! assert!(input.is_valid());
//! assert_eq!(input.tags()[0].name, "bug");
//! ```

use crate::tag::{self, TAG_NAME_MAX_LEN, Tag, TagColor};

/// A partial update to a draft tag. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUpdate {
    /// New name, if changing.
    pub name: Option<String>,
    /// New color, if changing.
    pub color: Option<TagColor>,
}

impl TagUpdate {
    /// An update that only changes the name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: None,
        }
    }

    /// An update that only changes the color.
    #[must_use]
    pub fn color(color: TagColor) -> Self {
        Self {
            name: None,
            color: Some(color),
        }
    }
}

/// The draft tags of a single task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    tags: Vec<Tag>,
}

impl TagInput {
    /// Creates an empty draft set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft set seeded with existing tags.
    #[must_use]
    pub fn with_tags(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// Returns the current drafts.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Consumes the input and returns the drafts.
    #[must_use]
    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }

    /// Appends a tag with the trimmed `name`.
    ///
    /// Names that are blank or longer than [`TAG_NAME_MAX_LEN`] characters
    /// after trimming are refused. Duplicates are accepted here and reported
    /// through [`has_duplicates`](Self::has_duplicates).
    ///
    /// Returns `true` if the tag was appended.
    pub fn add_tag(&mut self, name: &str, color: TagColor) -> bool {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > TAG_NAME_MAX_LEN {
            return false;
        }
        self.tags.push(Tag::new(name, color));
        true
    }

    /// Appends a blank draft for the user to fill in.
    ///
    /// Refused while any existing draft is invalid, so at most one incomplete
    /// or conflicting draft exists at a time.
    pub fn open_draft(&mut self, color: TagColor) -> bool {
        if !tag::can_open_draft(&self.tags) {
            return false;
        }
        self.tags.push(Tag::new("", color));
        true
    }

    /// Merges `update` into the draft at `index`. Out-of-range indices are
    /// ignored.
    pub fn update_tag(&mut self, index: usize, update: TagUpdate) {
        let Some(tag) = self.tags.get_mut(index) else {
            return;
        };
        if let Some(name) = update.name {
            tag.name = name;
        }
        if let Some(color) = update.color {
            tag.color = color;
        }
    }

    /// Removes the draft at `index`. Out-of-range indices are ignored.
    pub fn remove_tag(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    /// Removes every draft.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Replaces the drafts, e.g. with the tags of a task about to be edited.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    /// Returns `true` if the drafts may be committed to a task.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        tag::is_valid(&self.tags)
    }

    /// Returns `true` if two drafts share a name, ignoring case.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        tag::has_duplicate_names(&self.tags)
    }

    /// Returns the indices of drafts whose name collides with another draft.
    #[must_use]
    pub fn duplicate_indices(&self) -> Vec<usize> {
        tag::duplicate_indices(&self.tags)
    }
}
