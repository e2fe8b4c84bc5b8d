//! Integration tests for the game controller

use tui_2048::core::{GameState, GameStatus, Grid};
use tui_2048::types::{Command, Direction, START_TILES};

fn stuck_after_left() -> Grid {
    // Sliding left opens only (3, 0), and no value fits there with a match.
    Grid::from_rows(&[
        [0, 2, 8, 16],
        [8, 16, 32, 64],
        [16, 32, 64, 128],
        [32, 64, 128, 256],
    ])
}

#[test]
fn test_game_lifecycle() {
    let state = GameState::new(4, 12345);

    assert_eq!(state.status(), GameStatus::Active);
    assert!(state.playable());
    assert_eq!(state.score(), 0);
    assert_eq!(state.grid().tile_count(), START_TILES);
}

#[test]
fn test_start_tiles_on_every_size() {
    for size in 2..=8 {
        let state = GameState::new(size, size as u64);
        assert_eq!(state.grid().size(), size);
        assert_eq!(state.grid().tile_count(), 2);
    }
}

#[test]
fn test_move_command_emits_snapshot() {
    let mut state = GameState::with_grid(
        Grid::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]),
        3,
    );

    let snap = state
        .handle_command(Command::Move(Direction::Left))
        .expect("effective move emits a snapshot");

    assert_eq!(snap.score, 4);
    assert_eq!(snap.score_gained, 4);
    assert_eq!(snap.value_at(0, 0), Some(4));
    assert_eq!(snap.cells[0][0].unwrap().merged_from, Some([2, 2]));
    assert_eq!(snap.tile_count(), 2);

    // The spawned tile is the only new one.
    let new_tiles: Vec<_> = snap
        .cells
        .iter()
        .flatten()
        .flatten()
        .filter(|t| t.is_new)
        .collect();
    assert_eq!(new_tiles.len(), 1);
    assert!(new_tiles[0].value == 2 || new_tiles[0].value == 4);
}

#[test]
fn test_noop_move_emits_nothing() {
    let mut state = GameState::with_grid(
        Grid::from_rows(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]),
        3,
    );
    let before = state.snapshot();

    assert!(state.handle_command(Command::Move(Direction::Left)).is_none());
    assert!(state.handle_command(Command::Move(Direction::Up)).is_none());
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_score_accumulates() {
    let mut state = GameState::with_grid(
        Grid::from_rows(&[[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]),
        3,
    );

    state.move_tiles(Direction::Left).unwrap();
    assert_eq!(state.score(), 12);

    let mut last = state.score();
    for _ in 0..50 {
        for direction in Direction::ALL {
            state.move_tiles(direction);
            assert!(state.score() >= last);
            last = state.score();
        }
    }
}

#[test]
fn test_win_transition_and_lockout() {
    let mut state = GameState::with_grid(
        Grid::from_rows(&[[0; 4], [0, 1024, 1024, 0], [0; 4], [0; 4]]),
        9,
    );

    let snap = state.handle_command(Command::Move(Direction::Right)).unwrap();
    assert!(snap.won);
    assert!(!snap.playable());
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.score(), 2048);

    for direction in Direction::ALL {
        assert!(state.handle_command(Command::Move(direction)).is_none());
    }
    assert_eq!(state.score(), 2048);
}

#[test]
fn test_game_over_transition() {
    let mut state = GameState::with_grid(stuck_after_left(), 1);

    let snap = state.handle_command(Command::Move(Direction::Left)).unwrap();
    assert!(snap.over);
    assert!(!snap.won);
    assert_eq!(state.status(), GameStatus::Over);
    assert!(!state.grid().has_available_positions());
    assert!(!state.grid().tile_matches_available());

    for direction in Direction::ALL {
        assert!(state.handle_command(Command::Move(direction)).is_none());
    }
}

#[test]
fn test_restart_law() {
    let mut state = GameState::with_grid(stuck_after_left(), 1);
    state.move_tiles(Direction::Left);
    assert!(state.over());

    let snap = state.handle_command(Command::Restart).unwrap();
    assert_eq!(snap.score, 0);
    assert!(!snap.won);
    assert!(!snap.over);
    assert_eq!(snap.size, 4);
    assert_eq!(snap.tile_count(), 2);
    for tile in snap.cells.iter().flatten().flatten() {
        assert!(tile.value == 2 || tile.value == 4);
        assert!(tile.is_new);
    }

    // Playable again.
    assert!(Direction::ALL
        .iter()
        .any(|&d| state.handle_command(Command::Move(d)).is_some()));
}

#[test]
fn test_restart_from_active_game() {
    let mut state = GameState::new(4, 77);
    for direction in Direction::ALL {
        state.move_tiles(direction);
    }

    state.restart();
    assert_eq!(state.score(), 0);
    assert_eq!(state.grid().tile_count(), 2);
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn test_full_random_game_terminates() {
    let mut state = GameState::new(4, 2024);
    let mut moves = 0;

    while state.playable() && moves < 100_000 {
        let moved = Direction::ALL
            .iter()
            .any(|&d| state.move_tiles(d).is_some());
        assert!(moved || !state.playable(), "active game with no effective move");
        moves += 1;
    }

    assert!(!state.playable());
    assert!(state.won() || !state.moves_available());
}
