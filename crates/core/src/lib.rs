//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the sliding-tile merge puzzle: the grid
//! and tile model, move resolution, tile spawning and the turn controller.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Runs behind a terminal, a headless driver, or anything else
//!
//! # Module Structure
//!
//! - [`tile`]: A numbered tile with per-turn render metadata
//! - [`grid`]: N x N grid of optional tiles and all spatial queries
//! - [`resolver`]: Slides and merges every tile for one turn
//! - [`spawner`]: Drops a 2 (90%) or 4 (10%) into a random empty cell
//! - [`game_state`]: Turn controller owning score and won/over flags
//! - [`snapshot`]: Immutable copies of the game handed to renderers
//!
//! # Game Rules
//!
//! - **Sliding**: Every tile slides as far as possible in the chosen direction
//! - **Merging**: Two equal tiles merge into one of double value; a merged tile
//!   cannot merge again in the same move
//! - **Scoring**: Each merge adds the merged value to the score
//! - **Spawning**: Every move that changes the grid spawns one new tile
//! - **Winning**: Producing a 2048 tile wins; the game then ignores moves
//! - **Losing**: The game is over when no cell is empty and no neighbours match
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Command, Direction};
//!
//! // Create a game with a fixed seed
//! let mut game = GameState::new(4, 12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Apply commands; a snapshot comes back whenever something changed
//! for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     if let Some(snapshot) = game.handle_command(Command::Move(direction)) {
//!         assert_eq!(snapshot.score, game.score());
//!     }
//! }
//!
//! // Restart always yields a fresh game
//! let snapshot = game.handle_command(Command::Restart).unwrap();
//! assert_eq!(snapshot.score, 0);
//! ```

pub mod game_state;
pub mod grid;
pub mod resolver;
pub mod snapshot;
pub mod spawner;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, GameStatus};
pub use grid::{FarthestPosition, Grid};
pub use resolver::{resolve_move, MoveOutcome, Traversals};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use spawner::{random_tile_value, spawn_one};
pub use tile::Tile;
