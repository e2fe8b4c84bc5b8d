//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic attached, making them usable
//! in any context (rules engine, terminal rendering, headless drivers).
//!
//! # Grid Dimensions
//!
//! - **Default size**: 4x4
//! - **Supported sizes**: 2 through 16
//! - **Coordinates**: `(x, y)` where `x` grows to the right and `y` grows downwards
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_TILES` | 2 | Tiles spawned by a fresh game |
//! | `WIN_VALUE` | 2048 | Merging into this value wins the game |
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance that a spawned tile is a 2 (otherwise 4) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Command, Direction, Position};
//!
//! // Directions map to unit vectors
//! assert_eq!(Direction::Up.vector(), (0, -1));
//! assert_eq!(Direction::Right.vector(), (1, 0));
//!
//! // Stepping a position
//! let pos = Position::new(1, 1);
//! assert_eq!(pos.step(Direction::Left), Position::new(0, 1));
//!
//! // Parse commands (case-insensitive)
//! assert_eq!(Command::from_str("left"), Some(Command::Move(Direction::Left)));
//! assert_eq!(Command::from_str("Restart"), Some(Command::Restart));
//! assert_eq!(Command::from_str("jump"), None);
//! ```

use serde::{Deserialize, Serialize};

/// Default grid size (4x4)
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Smallest supported grid size
pub const MIN_GRID_SIZE: u8 = 2;

/// Largest supported grid size
pub const MAX_GRID_SIZE: u8 = 16;

/// Number of tiles spawned when a game is set up or restarted
pub const START_TILES: usize = 2;

/// Tile value that wins the game when produced by a merge
pub const WIN_VALUE: u32 = 2048;

/// Probability that a spawned tile has value 2 (otherwise 4)
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that stepping off the edge produces a position
/// that is simply out of bounds rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step along `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, in the order Up, Right, Down, Left
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector `(dx, dy)` for this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.vector(), (0, -1));
    /// assert_eq!(Direction::Right.vector(), (1, 0));
    /// assert_eq!(Direction::Down.vector(), (0, 1));
    /// assert_eq!(Direction::Left.vector(), (-1, 0));
    /// ```
    pub fn vector(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Commands accepted by the game controller
///
/// These commands are produced by keyboard input and by the headless driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide all tiles in the given direction
    Move(Direction),
    /// Start a fresh game (accepted in any state)
    Restart,
}

impl Command {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str("up"), Some(Command::Move(Direction::Up)));
    /// assert_eq!(Command::from_str(" DOWN "), Some(Command::Move(Direction::Down)));
    /// assert_eq!(Command::from_str("restart"), Some(Command::Restart));
    /// assert_eq!(Command::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("restart") {
            return Some(Command::Restart);
        }
        Direction::from_str(s).map(Command::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(direction) => direction.as_str(),
            Command::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_constants() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(START_TILES, 2);
        assert_eq!(WIN_VALUE, 2048);
        assert!(WIN_VALUE.is_power_of_two());
        assert!(MIN_GRID_SIZE <= DEFAULT_GRID_SIZE && DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
    }

    #[test]
    fn opposite_directions_cancel_out() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.step(Direction::Up).step(Direction::Down), origin);
        assert_eq!(origin.step(Direction::Left).step(Direction::Right), origin);
    }

    #[test]
    fn stepping_off_the_edge_goes_negative() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up), Position::new(0, -1));
        assert_eq!(corner.step(Direction::Left), Position::new(-1, 0));
    }

    #[test]
    fn command_string_forms_are_consistent() {
        for direction in Direction::ALL {
            let command = Command::Move(direction);
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
        assert_eq!(Command::from_str(Command::Restart.as_str()), Some(Command::Restart));
    }
}
