use serde_json::{json, Value};
use tui_2048::core::{GameState, Grid};
use tui_2048::types::{Command, Direction};

#[test]
fn snapshot_json_has_renderer_fields() {
    let state = GameState::new(4, 1);
    let value: Value = serde_json::to_value(state.snapshot()).unwrap();

    for key in ["size", "cells", "score", "score_gained", "won", "over", "episode_id", "seed"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["size"], 4);
    assert_eq!(value["cells"].as_array().unwrap().len(), 4);
    assert!(value["cells"]
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row.as_array().unwrap().len() == 4));
}

#[test]
fn merged_tile_serializes_sources_and_empty_cells_are_null() {
    let mut state = GameState::with_grid(Grid::from_rows(&[[2, 2], [0, 0]]), 5);
    let snap = state.handle_command(Command::Move(Direction::Left)).unwrap();
    let value = serde_json::to_value(&snap).unwrap();

    assert_eq!(
        value["cells"][0][0],
        json!({ "value": 4, "is_new": false, "merged_from": [2, 2] })
    );
    // Two of the three cells freed by the merge stay empty after the spawn.
    let nulls = value["cells"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .filter(|cell| cell.is_null())
        .count();
    assert_eq!(nulls, 2);
}

#[test]
fn moved_tile_serializes_previous_position() {
    let mut state = GameState::with_grid(Grid::from_rows(&[[0, 8], [0, 0]]), 5);
    let snap = state.handle_command(Command::Move(Direction::Left)).unwrap();
    let value = serde_json::to_value(&snap).unwrap();

    assert_eq!(
        value["cells"][0][0],
        json!({ "value": 8, "is_new": false, "previous_position": { "x": 1, "y": 0 } })
    );
}
