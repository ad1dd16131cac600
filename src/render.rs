//! Plain-text rendering of the board for the terminal.

use kanban_protocol::{Board, Column, Tag, Task};

/// Renders every column with its tasks, separated by blank lines.
///
/// Tasks are listed with their position in the column, which is what the
/// `move` command takes.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for (i, column) in board.columns.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_column(&mut out, column);
    }
    out
}

fn render_column(out: &mut String, column: &Column) {
    out.push_str(&format!("{} [{}] ({})\n", column.title, column.id, column.len()));
    if column.is_empty() {
        out.push_str("  (no tasks)\n");
        return;
    }
    for (index, task) in column.tasks.iter().enumerate() {
        render_task(out, index, task);
    }
}

fn render_task(out: &mut String, index: usize, task: &Task) {
    out.push_str(&format!("  {index}. {} ({})", task.name, task.id));
    for tag in &task.tags {
        out.push(' ');
        out.push_str(&render_tag(tag));
    }
    out.push('\n');
    for line in task.description.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str("     ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn render_tag(tag: &Tag) -> String {
    format!("[{}:{}]", tag.name, tag.color)
}

/// Renders the tag legend, one `name  color  hex` row per tag.
pub fn render_legend(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No tags in use.\n".to_string();
    }

    let width = tags
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);
    tags.iter()
        .map(|tag| {
            format!(
                "{:<width$}  {:<6}  {}\n",
                tag.name,
                tag.color.name(),
                tag.color.hex()
            )
        })
        .collect()
}
