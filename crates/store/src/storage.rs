//! Named storage slots holding serialized boards.
//!
//! A [`Storage`] maps a slot key (such as `kanban-columns`) to a string
//! value, in the manner of browser local storage. Two backends are provided:
//!
//! - [`FileStorage`]: one `{key}.json` file per slot in a data directory
//! - [`MemoryStorage`]: an in-process map, for tests and embedding
//!
//! # Directory Structure
//!
//! ```text
//! ~/.local/share/kanban/                # Linux
//! ~/Library/Application Support/kanban/ # macOS
//! └── kanban-columns.json
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{Result, StoreError};

/// Data directory name under the platform data directory.
pub const DATA_DIR_NAME: &str = "kanban";

/// A key-value store of serialized boards.
pub trait Storage {
    /// Returns the value in slot `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value in slot `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Slots stored as JSON files in a directory.
///
/// # Examples
///
/// ```no_run
/// use kanban_store::{FileStorage, Storage};
///
/// # fn example() -> kanban_store::Result<()> {
/// let mut storage = FileStorage::new()?;
/// storage.write("kanban-columns", "[]")?;
/// assert_eq!(storage.read("kanban-columns")?.as_deref(), Some("[]"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at the platform data directory.
    ///
    /// - Linux: `~/.local/share/kanban/`
    /// - macOS: `~/Library/Application Support/kanban/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\kanban\`
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined.
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or(StoreError::NoDataDirectory)?;
        Ok(Self::with_path(data_dir.join(DATA_DIR_NAME)))
    }

    /// Creates a storage rooted at a custom directory.
    ///
    /// The directory is created on the first write.
    #[must_use]
    pub fn with_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the directory holding the slot files.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the file path backing slot `key`.
    #[must_use]
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    #[instrument(skip(self))]
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(?path, bytes = content.len(), "read board slot");
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "board slot not found");
                Ok(None)
            }
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    /// Writes through a temporary file and renames it over the slot, so an
    /// interrupted write never leaves a truncated board behind.
    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.base_path).map_err(write_err)?;

        let tmp = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(write_err)?;
        file.write_all(value.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)?;

        debug!(?path, "board slot written");
        Ok(())
    }
}

/// Slots held in memory for the lifetime of the value.
///
/// # Examples
///
/// ```
/// use kanban_store::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// assert_eq!(storage.read("slot").unwrap(), None);
///
/// storage.write("slot", "[]").unwrap();
/// assert_eq!(storage.read("slot").unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory storage with one slot already filled.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }

    /// Returns the raw value of a slot without going through [`Storage`].
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
