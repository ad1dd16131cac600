//! Tags, the tag color palette, and tag validation.
//!
//! Tags are short colored labels attached to a task. Their colors come from a
//! closed palette ([`TagColor`]) and their names are validated as a set: a
//! task's tags must have non-blank names of at most [`TAG_NAME_MAX_LEN`]
//! characters that are unique ignoring case.
//!
//! # Example
//!
//! ```
//! use kanban_protocol::{Tag, TagColor, tag};
//!
//! let tags = vec![
//!     Tag::new("bug", TagColor::Red),
//!     Tag::new("BUG", TagColor::Blue),
//! ];
//! assert!(tag::has_duplicate_names(&tags));
//! assert!(!tag::is_valid(&tags));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Maximum number of characters in a tag name.
pub const TAG_NAME_MAX_LEN: usize = 12;

/// A color from the fixed tag palette.
///
/// Colors serialize as lowercase hex codes (e.g. `"#1976d2"`), which is how
/// they appear in persisted boards.
///
/// # Examples
///
/// ```
/// use kanban_protocol::TagColor;
///
/// assert_eq!(TagColor::Red.hex(), "#d32f2f");
/// assert_eq!(TagColor::from_hex("#D32F2F"), Some(TagColor::Red));
/// assert_eq!(TagColor::from_hex_or_default("#000000"), TagColor::Blue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TagColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Orange,
    Gray,
    Pink,
    Teal,
    Brown,
}

impl TagColor {
    /// Every palette color, in palette order.
    pub const ALL: [Self; 10] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
        Self::Gray,
        Self::Pink,
        Self::Teal,
        Self::Brown,
    ];

    /// Color given to tags migrated from the bare-string tag format.
    pub const LEGACY_DEFAULT: Self = Self::Gray;

    /// Returns the hex code of this color, including the leading `#`.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#1976d2",
            Self::Green => "#388e3c",
            Self::Red => "#d32f2f",
            Self::Yellow => "#fbc02d",
            Self::Purple => "#7b1fa2",
            Self::Orange => "#f57c00",
            Self::Gray => "#455a64",
            Self::Pink => "#c2185b",
            Self::Teal => "#0097a7",
            Self::Brown => "#5d4037",
        }
    }

    /// Returns the lowercase name of this color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Gray => "gray",
            Self::Pink => "pink",
            Self::Teal => "teal",
            Self::Brown => "brown",
        }
    }

    /// Looks up a palette color by hex code, ignoring ASCII case.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(hex))
    }

    /// Looks up a palette color by hex code, falling back to the first
    /// palette entry when the code is not part of the palette.
    #[must_use]
    pub fn from_hex_or_default(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_default()
    }

    /// Returns `true` if `hex` names a palette color.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_protocol::TagColor;
    ///
    /// assert!(TagColor::is_palette_color("#455a64"));
    /// assert!(!TagColor::is_palette_color("gray"));
    /// ```
    #[must_use]
    pub fn is_palette_color(hex: &str) -> bool {
        Self::from_hex(hex).is_some()
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either a hex code or a color name.
impl FromStr for TagColor {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::from_hex(s)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|c| c.name().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| ProtocolError::UnknownTagColor(s.to_string()))
    }
}

impl TryFrom<String> for TagColor {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value).ok_or(ProtocolError::UnknownTagColor(value))
    }
}

impl From<TagColor> for String {
    fn from(color: TagColor) -> Self {
        color.hex().to_string()
    }
}

/// A colored label attached to a task.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Tag, TagColor};
///
/// let tag = Tag::new("UI", TagColor::Green);
/// let json = serde_json::to_string(&tag).unwrap();
/// assert_eq!(json, r##"{"name":"UI","color":"#388e3c"}"##);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// The label text.
    pub name: String,
    /// The palette color.
    pub color: TagColor,
}

impl Tag {
    /// Creates a tag with the given name and color.
    #[must_use]
    pub fn new(name: impl Into<String>, color: TagColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Parses a `NAME[:COLOR]` string, as typed on a command line.
    ///
    /// The color may be a palette name (`red`) or hex code (`#d32f2f`) and
    /// defaults to the first palette color.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the color is not part of the
    /// palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_protocol::{Tag, TagColor};
    ///
    /// let tag = Tag::parse_spec("urgent:red").unwrap();
    /// assert_eq!(tag, Tag::new("urgent", TagColor::Red));
    ///
    /// let tag = Tag::parse_spec("docs").unwrap();
    /// assert_eq!(tag.color, TagColor::Blue);
    ///
    /// assert!(Tag::parse_spec(":red").is_err());
    /// assert!(Tag::parse_spec("x:black").is_err());
    /// ```
    pub fn parse_spec(spec: &str) -> Result<Self> {
        let (name, color) = match spec.rsplit_once(':') {
            Some((name, color)) => (name, Some(color)),
            None => (spec, None),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(ProtocolError::InvalidTagSpec {
                spec: spec.to_string(),
                reason: "tag name cannot be empty".to_string(),
            });
        }

        let color = match color {
            Some(color) => color.parse()?,
            None => TagColor::default(),
        };

        Ok(Self::new(name, color))
    }

    /// Returns `true` if the trimmed name is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Returns `true` if the name is longer than [`TAG_NAME_MAX_LEN`].
    #[must_use]
    pub fn is_too_long(&self) -> bool {
        self.name.chars().count() > TAG_NAME_MAX_LEN
    }

    /// The key used for case-insensitive name comparison.
    fn name_key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// Returns `true` if two non-blank tag names are equal ignoring surrounding
/// whitespace and case.
///
/// Blank names are skipped, so any number of blank drafts never count as
/// duplicates of each other.
#[must_use]
pub fn has_duplicate_names(tags: &[Tag]) -> bool {
    let mut seen = HashSet::new();
    tags.iter()
        .filter(|t| !t.is_blank())
        .any(|t| !seen.insert(t.name_key()))
}

/// Returns the indices of tags whose non-blank name collides with another tag.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Tag, TagColor, tag};
///
/// let tags = vec![
///     Tag::new("a", TagColor::Red),
///     Tag::new("b", TagColor::Red),
///     Tag::new(" A ", TagColor::Blue),
/// ];
/// assert_eq!(tag::duplicate_indices(&tags), vec![0, 2]);
/// ```
#[must_use]
pub fn duplicate_indices(tags: &[Tag]) -> Vec<usize> {
    tags.iter()
        .enumerate()
        .filter(|(_, t)| !t.is_blank())
        .filter(|(i, t)| {
            let key = t.name_key();
            tags.iter()
                .enumerate()
                .any(|(j, other)| j != *i && other.name_key() == key)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Returns `true` if the tags may be committed to a task.
///
/// A valid set has no duplicate names, no blank names, and no name longer than
/// [`TAG_NAME_MAX_LEN`] characters. The empty set is valid.
#[must_use]
pub fn is_valid(tags: &[Tag]) -> bool {
    !has_duplicate_names(tags) && !tags.iter().any(|t| t.is_blank() || t.is_too_long())
}

/// Returns `true` if a new blank draft tag may be appended to `tags`.
///
/// Only one incomplete draft is tolerated at a time, so a new slot opens only
/// once every existing draft is valid.
#[must_use]
pub fn can_open_draft(tags: &[Tag]) -> bool {
    is_valid(tags)
}

/// Collects every distinct `(name, color)` pair from the given tag lists, in
/// first-seen order.
pub fn unique_tags<'a>(tag_lists: impl IntoIterator<Item = &'a [Tag]>) -> Vec<Tag> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for tag in tag_lists.into_iter().flatten() {
        if seen.insert((tag.name.as_str(), tag.color)) {
            unique.push(tag.clone());
        }
    }
    unique
}
