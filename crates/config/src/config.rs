//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the kanban application.

use std::path::{Path, PathBuf};

use kanban_store::DATA_DIR_NAME;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

pub use kanban_store::DEFAULT_STORAGE_KEY;

/// Environment variable overriding [`Config::data_dir`].
pub const DATA_DIR_ENV: &str = "KANBAN_DATA_DIR";

/// The main configuration struct for the kanban application.
///
/// # Examples
///
/// ```
/// use kanban_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.storage_key, "kanban-columns");
/// assert!(config.data_dir.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the board slot files.
    ///
    /// Defaults to the platform data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Name of the slot the board is saved under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Log filter directive used when `RUST_LOG` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: default_storage_key(),
            log_filter: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./kanban.json5` or `./kanban.json`
    /// 2. User: `~/.config/kanban/config.json5` or `~/.config/kanban/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    /// Environment overrides are applied in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanban_config::Config;
    ///
    /// # fn example() -> kanban_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Board slot: {}", config.storage_key);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are applied on top of the file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config: Config = read_config_file(path)?;
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Overrides fields from environment variables.
    ///
    /// `lookup` resolves a variable name to its value; empty values are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use kanban_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env_overrides(|name| {
    ///     (name == "KANBAN_DATA_DIR").then(|| "/tmp/boards".to_string())
    /// });
    /// assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/boards")));
    /// ```
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    /// Validates the configuration.
    ///
    /// The storage key becomes a file name, so it must be non-empty and use
    /// only ASCII letters, digits, `.`, `_` and `-`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStorageKey`] if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.storage_key = "../escape".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let key = &self.storage_key;
        let invalid = |reason: &str| ConfigError::InvalidStorageKey {
            key: key.clone(),
            reason: reason.to_string(),
        };

        if key.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(invalid("only letters, digits, '.', '_' and '-' are allowed"));
        }
        if key.chars().all(|c| c == '.') {
            return Err(invalid("must not consist only of dots"));
        }
        Ok(())
    }

    /// Returns the directory holding board slots.
    ///
    /// This is `data_dir` when set, otherwise `kanban/` under the platform
    /// data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `data_dir` is unset and the platform data
    /// directory cannot be determined.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(DATA_DIR_NAME))
                .ok_or(ConfigError::NoPlatformDirectory("data")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.data_dir.is_none());
        assert!(config.log_filter.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"log_filter": "debug"}"#).unwrap();
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn unset_options_not_serialized() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(json, r#"{"storage_key":"kanban-columns"}"#);
    }

    #[test]
    fn validate_storage_keys() {
        for key in ["kanban-columns", "board_2", "team.v1"] {
            let config = Config {
                storage_key: key.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "key {key}");
        }

        for key in ["", "a/b", "..", "with space", "board\\x"] {
            let config = Config {
                storage_key: key.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidStorageKey { .. })),
                "key {key:?}"
            );
        }
    }

    #[test]
    fn env_override_replaces_data_dir() {
        let mut config = Config {
            data_dir: Some(PathBuf::from("/from/file")),
            ..Default::default()
        };
        config.apply_env_overrides(|_| Some("/from/env".to_string()));
        assert_eq!(config.data_dir, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let mut config = Config {
            data_dir: Some(PathBuf::from("/from/file")),
            ..Default::default()
        };
        config.apply_env_overrides(|_| Some(String::new()));
        assert_eq!(config.data_dir, Some(PathBuf::from("/from/file")));

        config.apply_env_overrides(|_| None);
        assert_eq!(config.data_dir, Some(PathBuf::from("/from/file")));
    }

    #[test]
    fn resolved_data_dir_prefers_explicit() {
        let config = Config {
            data_dir: Some(PathBuf::from("/boards")),
            ..Default::default()
        };
        assert_eq!(config.resolved_data_dir().unwrap(), PathBuf::from("/boards"));
    }

    #[test]
    fn resolved_data_dir_defaults_to_platform_dir() {
        if dirs::data_dir().is_some() {
            let dir = Config::default().resolved_data_dir().unwrap();
            assert!(dir.ends_with(DATA_DIR_NAME));
        }
    }

    #[test]
    fn default_data_dir_matches_file_storage() {
        if let Ok(storage) = kanban_store::FileStorage::new() {
            let dir = Config::default().resolved_data_dir().unwrap();
            assert_eq!(dir, storage.base_path());
        }
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Keep a separate board per project
                storage_key: "project-board",
                log_filter: "kanban_store=debug",
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.storage_key, "project-board");
        assert_eq!(config.log_filter.as_deref(), Some("kanban_store=debug"));
    }

    #[test]
    fn load_from_rejects_invalid_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"storage_key": "a/b"}"#).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidStorageKey { .. })
        ));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            data_dir: Some(dir.path().join("data")),
            storage_key: "other".to_string(),
            log_filter: Some("info".to_string()),
        };

        original.save_to(&path).unwrap();
        let mut loaded: Config = read_config_file(&path).unwrap();
        loaded.apply_env_overrides(|_| None);
        assert_eq!(original, loaded);
    }
}
