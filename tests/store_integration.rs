//! Integration tests for the board store on disk.

use std::fs;

use kanban_protocol::seed::seed_board;
use kanban_protocol::{Board, DragLocation, Tag, TagColor, Task};
use kanban_store::{BoardStore, DEFAULT_STORAGE_KEY, FileStorage};
use tempfile::TempDir;

fn open(dir: &TempDir) -> BoardStore<FileStorage> {
    BoardStore::load(FileStorage::with_path(dir.path()), DEFAULT_STORAGE_KEY)
}

fn saved_json(dir: &TempDir) -> serde_json::Value {
    let path = dir.path().join("kanban-columns.json");
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn first_run_shows_seed_without_writing() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);

    assert_eq!(store.board(), &seed_board());
    assert!(!dir.path().join("kanban-columns.json").exists());
}

#[test]
fn mutations_survive_reload() {
    let dir = TempDir::new().unwrap();

    let id = {
        let mut store = open(&dir);
        let id = store
            .add_task(
                &"column-2".into(),
                "Ship release",
                "Tag and publish",
                vec![Tag::new("REL", TagColor::Teal)],
            )
            .unwrap()
            .unwrap();
        store
            .move_task(DragLocation::new("column-2", 2), Some(DragLocation::new("column-3", 0)))
            .unwrap();
        id
    };

    let store = open(&dir);
    let done = store.board().column(&"column-3".into()).unwrap();
    assert_eq!(done.tasks[0].id, id);
    assert_eq!(done.tasks[0].name, "Ship release");
    assert_eq!(done.tasks[0].tags, vec![Tag::new("REL", TagColor::Teal)]);
}

#[test]
fn saved_file_is_a_column_array() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.save().unwrap();

    let json = saved_json(&dir);
    let columns = json.as_array().unwrap();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0]["id"], "column-1");
    assert_eq!(columns[0]["title"], "To Do");
    assert_eq!(columns[0]["tasks"][0]["tags"][0]["color"], "#d32f2f");
}

#[test]
fn legacy_file_is_migrated_and_rewritten_on_change() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("kanban-columns.json"),
        r##"[
            {"id": "todo", "title": "To Do", "tasks": [
                {"id": "a", "content": "Old style"},
                {"id": "b", "name": "New", "description": "", "tags": ["backend", {"name": "X", "color": "#abcdef"}]}
            ]},
            {"id": "done", "title": "Done"}
        ]"##,
    )
    .unwrap();

    let mut store = open(&dir);
    let todo = &store.board().columns[0];
    assert_eq!(todo.tasks[0], Task::with_id("a", "Old style", ""));
    assert_eq!(
        todo.tasks[1].tags,
        vec![Tag::new("backe", TagColor::Gray), Tag::new("X", TagColor::Blue)]
    );

    store.delete_task(&"todo".into(), &"a".into()).unwrap();

    let json = saved_json(&dir);
    assert_eq!(json[0]["tasks"][0]["tags"][0]["name"], "backe");
    assert_eq!(json[1]["tasks"], serde_json::json!([]));
}

#[test]
fn corrupt_file_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kanban-columns.json"), "{ definitely not a board").unwrap();

    let store = open(&dir);
    assert_eq!(store.board(), &seed_board());
}

#[test]
fn clear_all_persists_empty_board_until_next_session() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = open(&dir);
        store.clear_all().unwrap();
        assert!(store.board().is_empty());
    }

    let saved: Board = serde_json::from_value(saved_json(&dir)).unwrap();
    assert_eq!(saved.columns.len(), 3);
    assert!(saved.is_empty());

    // A new session starts uncleared, so the empty board is reseeded.
    let store = open(&dir);
    assert_eq!(store.board(), &seed_board());
}

#[test]
fn separate_keys_hold_separate_boards() {
    let dir = TempDir::new().unwrap();

    let mut first = BoardStore::load(FileStorage::with_path(dir.path()), "first");
    first.clear_all().unwrap();
    first
        .add_task(&"column-1".into(), "Only here", "", vec![])
        .unwrap();

    let second = BoardStore::load(FileStorage::with_path(dir.path()), "second");
    assert_eq!(second.board(), &seed_board());

    let first = BoardStore::load(FileStorage::with_path(dir.path()), "first");
    assert_eq!(first.board().total_tasks(), 1);
}
