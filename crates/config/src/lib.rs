//! Configuration management for the kanban application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, environment variables and defaults.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variables (`KANBAN_DATA_DIR`)
//! 2. Local config (`./kanban.json5` or `./kanban.json`)
//! 3. User config (`~/.config/kanban/config.json5` or `~/.config/kanban/config.json`)
//! 4. Built-in defaults
//!
//! ```json5
//! {
//!   // Where board slots are stored
//!   "data_dir": "/home/me/boards",
//!   "storage_key": "kanban-columns",
//!   "log_filter": "kanban_store=debug",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use kanban_config::Config;
//!
//! # fn example() -> kanban_config::Result<()> {
//! let config = Config::load()?;
//! println!("Boards live in {}", config.resolved_data_dir()?.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{Config, DATA_DIR_ENV, DEFAULT_STORAGE_KEY};
pub use error::{ConfigError, Result};
