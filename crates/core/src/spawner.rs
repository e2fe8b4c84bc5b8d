//! Spawner - drops a new tile into a random empty cell
//!
//! New tiles are a 2 with probability [`SPAWN_TWO_PROBABILITY`], otherwise a 4.

use rand::Rng;

use crate::grid::Grid;
use crate::tile::Tile;
use crate::types::{Position, SPAWN_TWO_PROBABILITY};

/// Value for a freshly spawned tile
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(SPAWN_TWO_PROBABILITY) {
        2
    } else {
        4
    }
}

/// Place one new tile on a random empty cell.
///
/// Returns the position of the new tile, or `None` (doing nothing) when the
/// grid is full.
pub fn spawn_one<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Position> {
    let position = grid.random_available_position(rng)?;
    let value = random_tile_value(rng);
    grid.place(Tile::new(position, value));
    log::trace!("spawned {} at ({}, {})", value, position.x, position.y);
    Some(position)
}
