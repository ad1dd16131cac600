//! kanban - A single-user Kanban board with tagged tasks.
//!
//! This is the main binary: it loads the configuration, opens the saved board
//! and runs one command against it.

mod cli;
mod commands;
mod logging;
mod render;

use anyhow::Context;
use clap::Parser;
use kanban_config::Config;
use kanban_store::{BoardStore, FileStorage};
use tracing::debug;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    logging::init(config.log_filter.as_deref())?;

    let data_dir = config
        .resolved_data_dir()
        .context("failed to determine data directory")?;
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening board");

    let mut store = BoardStore::load(FileStorage::with_path(data_dir), config.storage_key);
    let command = cli.command.unwrap_or(Command::Show { json: false });
    let output = commands::execute(command, &mut store)?;
    print!("{output}");

    Ok(())
}
