//! Locating, reading and writing config files.
//!
//! Files are parsed as JSON5, which also accepts plain JSON, and written back
//! as pretty-printed JSON.
//!
//! # Lookup order
//!
//! 1. `./kanban.json5`, then `./kanban.json`
//! 2. `<config dir>/kanban/config.json5`, then `<config dir>/kanban/config.json`
//!
//! where `<config dir>` is the platform config directory (`~/.config` on
//! Linux).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

/// Candidate names in the working directory.
const LOCAL_FILES: [&str; 2] = ["kanban.json5", "kanban.json"];

/// Application directory under the platform config directory.
const APP_DIR: &str = "kanban";

/// Candidate names in the application config directory.
const USER_FILES: [&str; 2] = ["config.json5", "config.json"];

/// Returns the first existing config file, if any.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

fn find_config_file_in(local_dir: &Path, config_root: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILES.iter().map(|name| local_dir.join(name));
    let user = config_root
        .map(|root| root.join(APP_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|candidate| candidate.is_file())
}

/// Returns `<config dir>/kanban`.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformDirectory`] on platforms without a config
/// directory.
pub fn user_config_dir() -> Result<PathBuf> {
    let root = dirs::config_dir().ok_or(ConfigError::NoPlatformDirectory("config"))?;
    Ok(root.join(APP_DIR))
}

/// Returns the path `kanban` writes a new user config to.
///
/// # Errors
///
/// Same as [`user_config_dir`].
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILES[0]))
}

/// Reads `path` and deserializes it as JSON5.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] or [`ConfigError::Parse`], both carrying the
/// path.
pub fn read_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `value` as pretty JSON into `path`, creating missing parent
/// directories.
///
/// # Errors
///
/// Returns [`ConfigError::Write`] if the directory or file cannot be written.
pub fn write_config_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let text = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, text + "\n").map_err(write_err)
}
