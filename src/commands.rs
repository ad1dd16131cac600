//! Execution of CLI commands against a board store.

use anyhow::{Context, bail};
use kanban_protocol::{BoardInfo, DragLocation, Tag, TagInput};
use kanban_store::{BoardStore, Storage};

use crate::cli::{AddArgs, Command, EditArgs};
use crate::render;

/// Runs `command` against `store` and returns the text to print.
pub fn execute<S: Storage>(command: Command, store: &mut BoardStore<S>) -> anyhow::Result<String> {
    match command {
        Command::Show { json: false } => Ok(render::render_board(store.board())),
        Command::Show { json: true } => {
            let json =
                serde_json::to_string_pretty(store.board()).context("failed to serialize board")?;
            Ok(format!("{json}\n"))
        }
        Command::Add(args) => add(args, store),
        Command::Edit(args) => edit(args, store),
        Command::Delete { column, task } => {
            if !store.delete_task(&column.as_str().into(), &task.as_str().into())? {
                bail!("no task '{task}' in column '{column}'");
            }
            Ok(format!("Deleted {task}\n"))
        }
        Command::Move {
            from_column,
            from_index,
            to_column,
            to_index,
        } => {
            let moved = store.move_task(
                DragLocation::new(from_column.as_str(), from_index),
                Some(DragLocation::new(to_column.as_str(), to_index)),
            )?;
            if !moved {
                bail!("no task at position {from_index} of column '{from_column}', or no column '{to_column}'");
            }
            Ok(render::render_board(store.board()))
        }
        Command::Clear => {
            store.clear_all()?;
            Ok("Board cleared\n".to_string())
        }
        Command::Tags => Ok(render::render_legend(&store.board().unique_tags())),
        Command::Info => {
            let json = serde_json::to_string(&BoardInfo::stub()).context("failed to serialize board info")?;
            Ok(format!("{json}\n"))
        }
    }
}

fn add<S: Storage>(args: AddArgs, store: &mut BoardStore<S>) -> anyhow::Result<String> {
    let tags = collect_tags(TagInput::new(), args.tags)?;
    let column = args.column.as_str().into();
    match store.add_task(&column, &args.name, &args.description, tags)? {
        Some(id) => Ok(format!("{id}\n")),
        None if args.name.trim().is_empty() => bail!("task name cannot be empty"),
        None => bail!("no column '{}'", args.column),
    }
}

fn edit<S: Storage>(args: EditArgs, store: &mut BoardStore<S>) -> anyhow::Result<String> {
    let column_id = args.column.as_str().into();
    let task_id = args.task.as_str().into();
    let Some(task) = store
        .board()
        .column(&column_id)
        .and_then(|c| c.get_task(&task_id))
    else {
        bail!("no task '{}' in column '{}'", args.task, args.column);
    };

    let name = args.name.unwrap_or_else(|| task.name.clone());
    let description = args.description.unwrap_or_else(|| task.description.clone());
    let input = if args.clear_tags {
        TagInput::new()
    } else {
        TagInput::with_tags(task.tags.clone())
    };
    let tags = collect_tags(input, args.tags)?;

    if name.trim().is_empty() {
        bail!("task name cannot be empty");
    }
    // Boards migrated from older formats may carry blank or over-long tags.
    if !kanban_protocol::tag::is_valid(&tags) {
        bail!(
            "task '{}' has blank or over-long tags; pass --clear-tags to replace them",
            args.task
        );
    }
    if !store.update_task(&column_id, &task_id, &name, &description, tags)? {
        bail!("task '{}' was not updated", args.task);
    }
    Ok(format!("Updated {}\n", args.task))
}

/// Appends `extra` through `input`, rejecting names the tag editor would
/// refuse and duplicate names.
fn collect_tags(mut input: TagInput, extra: Vec<Tag>) -> anyhow::Result<Vec<Tag>> {
    for tag in extra {
        if !input.add_tag(&tag.name, tag.color) {
            bail!(
                "tag '{}' must be 1 to {} characters long",
                tag.name,
                kanban_protocol::TAG_NAME_MAX_LEN
            );
        }
    }
    if input.has_duplicates() {
        bail!("tag names must be unique within a task");
    }
    Ok(input.into_tags())
}
