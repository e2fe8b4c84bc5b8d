use serde::Serialize;

use crate::grid::Grid;
use crate::tile::Tile;
use crate::types::{Position, DEFAULT_GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileSnapshot {
    pub value: u32,
    pub is_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_from: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_position: Option<Position>,
}

impl From<&Tile> for TileSnapshot {
    fn from(tile: &Tile) -> Self {
        Self {
            value: tile.value,
            is_new: tile.is_new(),
            merged_from: tile.merged_from_values(),
            previous_position: tile.previous_position,
        }
    }
}

/// Point-in-time copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub size: u8,
    /// Indexed `[y][x]`
    pub cells: Vec<Vec<Option<TileSnapshot>>>,
    pub score: u32,
    /// Score added by the move that produced this snapshot
    pub score_gained: u32,
    pub won: bool,
    pub over: bool,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    /// Copy the grid contents in, reusing the row allocations when the size
    /// has not changed.
    pub fn write_grid(&mut self, grid: &Grid) {
        let size = grid.size() as usize;
        self.size = grid.size();
        self.cells.resize_with(size, Vec::new);
        for (y, row) in self.cells.iter_mut().enumerate() {
            row.clear();
            row.extend((0..size).map(|x| {
                grid.tile(Position::new(x as i8, y as i8))
                    .map(TileSnapshot::from)
            }));
        }
    }

    pub fn value_at(&self, x: usize, y: usize) -> Option<u32> {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|cell| cell.map(|tile| tile.value))
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().flatten().count()
    }

    pub fn playable(&self) -> bool {
        !self.won && !self.over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let size = DEFAULT_GRID_SIZE as usize;
        Self {
            size: DEFAULT_GRID_SIZE,
            cells: vec![vec![None; size]; size],
            score: 0,
            score_gained: 0,
            won: false,
            over: false,
            episode_id: 0,
            seed: 0,
        }
    }
}
