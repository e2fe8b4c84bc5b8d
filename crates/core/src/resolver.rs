//! Move resolution - slides and merges every tile for one turn
//!
//! Tiles are visited starting from the edge they are moving towards, so a
//! tile that is already at its destination is settled before the tiles behind
//! it try to stack onto it. Each destination cell takes part in at most one
//! merge per turn: the merged tile records its sources, and a tile with
//! sources refuses further merges until the next turn's pre-pass clears them.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::tile::Tile;
use crate::types::{Direction, Position, MAX_GRID_SIZE, WIN_VALUE};

/// What one turn of move resolution did to the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// At least one tile ended the turn on a different cell
    pub moved: bool,
    /// Sum of the values of every tile produced by a merge this turn
    pub score_gained: u32,
    /// A merge produced the winning tile
    pub reached_win_value: bool,
}

/// Coordinate visiting order for one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversals {
    pub x: ArrayVec<i8, { MAX_GRID_SIZE as usize }>,
    pub y: ArrayVec<i8, { MAX_GRID_SIZE as usize }>,
}

impl Traversals {
    /// Ascending orders, with an axis reversed when the direction points
    /// towards its high end.
    pub fn new(size: u8, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        let mut x: ArrayVec<i8, { MAX_GRID_SIZE as usize }> = (0..size as i8).collect();
        let mut y: ArrayVec<i8, { MAX_GRID_SIZE as usize }> = (0..size as i8).collect();
        if dx == 1 {
            x.reverse();
        }
        if dy == 1 {
            y.reverse();
        }
        Self { x, y }
    }
}

/// Slide every tile on `grid` in `direction`, merging equal neighbours.
///
/// When nothing can move the grid is left untouched (including per-turn tile
/// metadata) and the outcome reports `moved == false`.
pub fn resolve_move(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    if !grid.can_shift(direction) {
        return outcome;
    }

    let traversals = Traversals::new(grid.size(), direction);

    // Must run before any tile moves so stale merge markers cannot block merges.
    grid.prepare_tiles();

    for &x in &traversals.x {
        for &y in &traversals.y {
            let cell = Position::new(x, y);
            let Some(mut tile) = grid.remove(cell) else {
                continue;
            };

            let positions = grid.find_farthest_position(cell, direction);
            let mergeable = grid
                .tile(positions.next)
                .is_some_and(|other| other.accepts_merge_from(&tile));
            let partner = if mergeable {
                grid.remove(positions.next)
            } else {
                None
            };

            let destination = match partner {
                Some(stationary) => {
                    let merged = Tile::merged(tile, stationary);
                    outcome.score_gained += merged.value;
                    if merged.value == WIN_VALUE {
                        outcome.reached_win_value = true;
                    }
                    let destination = merged.position;
                    grid.place(merged);
                    destination
                }
                None => {
                    tile.position = positions.farthest;
                    grid.place(tile);
                    positions.farthest
                }
            };

            if destination != cell {
                outcome.moved = true;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row0(grid: &Grid) -> Vec<u32> {
        grid.to_rows()[0].clone()
    }

    #[test]
    fn test_traversals_follow_direction() {
        let t = Traversals::new(4, Direction::Left);
        assert_eq!(t.x.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(t.y.as_slice(), &[0, 1, 2, 3]);

        let t = Traversals::new(4, Direction::Right);
        assert_eq!(t.x.as_slice(), &[3, 2, 1, 0]);
        assert_eq!(t.y.as_slice(), &[0, 1, 2, 3]);

        let t = Traversals::new(4, Direction::Down);
        assert_eq!(t.x.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(t.y.as_slice(), &[3, 2, 1, 0]);

        let t = Traversals::new(4, Direction::Up);
        assert_eq!(t.y.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_simple_merge() {
        let mut grid = Grid::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let outcome = resolve_move(&mut grid, Direction::Left);

        assert_eq!(row0(&grid), vec![4, 0, 0, 0]);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 4);
        assert!(!outcome.reached_win_value);
    }

    #[test]
    fn test_merged_cell_is_immune() {
        let mut grid = Grid::from_rows(&[[2, 0, 2, 2], [0; 4], [0; 4], [0; 4]]);
        let outcome = resolve_move(&mut grid, Direction::Left);

        assert_eq!(row0(&grid), vec![4, 2, 0, 0]);
        assert_eq!(outcome.score_gained, 4);
    }

    #[test]
    fn test_full_line_merges_pairwise() {
        let mut grid = Grid::from_rows(&[[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
        let outcome = resolve_move(&mut grid, Direction::Left);

        assert_eq!(row0(&grid), vec![4, 4, 0, 0]);
        assert_eq!(outcome.score_gained, 8);
    }

    #[test]
    fn test_merge_prefers_tiles_nearest_the_wall() {
        let mut grid = Grid::from_rows(&[[0, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
        resolve_move(&mut grid, Direction::Right);
        assert_eq!(row0(&grid), vec![0, 0, 2, 4]);
    }

    #[test]
    fn test_no_op_leaves_metadata_alone() {
        let mut grid = Grid::from_rows(&[[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = grid.clone();
        let outcome = resolve_move(&mut grid, Direction::Left);

        assert_eq!(outcome, MoveOutcome::default());
        assert_eq!(grid, before);
        assert!(grid.tiles().all(|t| t.previous_position.is_none()));
    }

    #[test]
    fn test_winning_merge() {
        let mut grid = Grid::from_rows(&[[0; 4], [1024, 1024, 0, 0], [0; 4], [0; 4]]);
        let outcome = resolve_move(&mut grid, Direction::Right);

        assert!(outcome.reached_win_value);
        assert_eq!(outcome.score_gained, 2048);
        assert_eq!(grid.value_at(Position::new(3, 1)), Some(2048));
    }

    #[test]
    fn test_previous_positions_recorded() {
        let mut grid = Grid::from_rows(&[[0; 4], [0; 4], [0; 4], [0, 0, 8, 0]]);
        resolve_move(&mut grid, Direction::Up);

        let tile = grid.tile(Position::new(2, 0)).unwrap();
        assert_eq!(tile.previous_position, Some(Position::new(2, 3)));
    }
}
