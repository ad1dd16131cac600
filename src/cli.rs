//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kanban_protocol::Tag;

/// A single-user Kanban board with tagged tasks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved board (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the board (default if no subcommand given)
    Show {
        /// Print the board as stored JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a task to the end of a column
    Add(AddArgs),

    /// Change the name, description or tags of a task
    Edit(EditArgs),

    /// Delete a task
    Delete {
        /// Column holding the task
        column: String,
        /// Id of the task
        task: String,
    },

    /// Move a task to a position in any column
    Move {
        /// Column the task is taken from
        from_column: String,
        /// Position of the task in its column, starting at 0
        from_index: usize,
        /// Column the task is dropped into
        to_column: String,
        /// Position in the destination column, starting at 0
        to_index: usize,
    },

    /// Remove every task from the board
    Clear,

    /// List the distinct tags used on the board
    Tags,

    /// Print the board summary as JSON
    Info,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Column to add the task to
    pub column: String,

    /// Task name
    pub name: String,

    /// Task description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Tag as NAME[:COLOR], may be repeated
    #[arg(short, long = "tag", value_name = "NAME[:COLOR]", value_parser = Tag::parse_spec)]
    pub tags: Vec<Tag>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Column holding the task
    pub column: String,

    /// Id of the task
    pub task: String,

    /// New task name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New task description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Tag to add as NAME[:COLOR], may be repeated
    #[arg(short, long = "tag", value_name = "NAME[:COLOR]", value_parser = Tag::parse_spec)]
    pub tags: Vec<Tag>,

    /// Drop the existing tags before adding new ones
    #[arg(long)]
    pub clear_tags: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use kanban_protocol::TagColor;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["kanban"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_parses_repeated_tags() {
        let cli = Cli::try_parse_from([
            "kanban", "add", "column-1", "Ship it", "-t", "REL:green", "--tag", "ops",
        ])
        .unwrap();

        let Some(Command::Add(args)) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(args.column, "column-1");
        assert_eq!(args.name, "Ship it");
        assert_eq!(args.description, "");
        assert_eq!(
            args.tags,
            vec![Tag::new("REL", TagColor::Green), Tag::new("ops", TagColor::Blue)]
        );
    }

    #[test]
    fn add_rejects_unknown_tag_color() {
        let result = Cli::try_parse_from(["kanban", "add", "c", "n", "--tag", "x:black"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["kanban", "clear", "--data-dir", "/tmp/boards"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/boards")));
        assert!(matches!(cli.command, Some(Command::Clear)));
    }

    #[test]
    fn move_parses_positions() {
        let cli = Cli::try_parse_from(["kanban", "move", "column-1", "0", "column-3", "2"]).unwrap();
        let Some(Command::Move {
            from_column,
            from_index,
            to_column,
            to_index,
        }) = cli.command
        else {
            panic!("expected move command");
        };
        assert_eq!((from_column.as_str(), from_index), ("column-1", 0));
        assert_eq!((to_column.as_str(), to_index), ("column-3", 2));
    }
}
