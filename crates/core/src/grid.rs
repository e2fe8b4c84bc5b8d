//! Grid module - the square playing field
//!
//! The grid is an N x N matrix where each cell is empty or holds one tile.
//! Uses a flat vector in row-major order (`y * size + x`).
//! Coordinates: `(x, y)` where `x` ranges `0..size` (left to right) and `y`
//! ranges `0..size` (top to bottom).
//!
//! All spatial queries live here; the move resolver and the spawner only ever
//! talk to the grid through these methods.

use rand::Rng;

use crate::tile::Tile;
use crate::types::{Direction, Position, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Result of searching along a direction from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarthestPosition {
    /// Last empty cell reached (the starting cell if the first step is blocked)
    pub farthest: Position,
    /// First occupied or out-of-bounds cell after `farthest`
    pub next: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// Panics if `size` is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn new(size: u8) -> Self {
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size),
            "unsupported grid size {size}"
        );
        let len = size as usize * size as usize;
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Build a grid from rows of tile values, `0` meaning empty.
    ///
    /// `rows[y][x]` is the value at `(x, y)`. Panics if the rows are not square
    /// or hold a value that is not a valid tile value.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Self {
        let size = u8::try_from(rows.len()).unwrap_or(u8::MAX);
        let mut grid = Self::new(size);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), rows.len(), "row {y} is not {size} cells wide");
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    grid.place(Tile::new(Position::new(x as i8, y as i8), value));
                }
            }
        }
        grid
    }

    /// Rows of tile values, `0` meaning empty (inverse of [`Grid::from_rows`])
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size as i8)
            .map(|y| {
                (0..self.size as i8)
                    .map(|x| self.value_at(Position::new(x, y)).unwrap_or(0))
                    .collect()
            })
            .collect()
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.within_bounds(pos) {
            return None;
        }
        Some(pos.y as usize * self.size as usize + pos.x as usize)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn within_bounds(&self, pos: Position) -> bool {
        let size = self.size as i8;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    /// Tile at `pos`, or `None` if the cell is empty or out of bounds
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn value_at(&self, pos: Position) -> Option<u32> {
        self.tile(pos).map(|tile| tile.value)
    }

    /// Check if position holds a tile (false when out of bounds)
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.tile(pos).is_some()
    }

    /// Check if position is within bounds and empty
    pub fn is_available(&self, pos: Position) -> bool {
        self.within_bounds(pos) && !self.is_occupied(pos)
    }

    /// Every position in x-outer, y-inner order
    fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i8;
        (0..size).flat_map(move |x| (0..size).map(move |y| Position::new(x, y)))
    }

    /// Every empty position, x-outer then y-inner.
    ///
    /// The iterator is lazy and borrows the grid; call again to restart it.
    pub fn available_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&pos| !self.is_occupied(pos))
    }

    pub fn has_available_positions(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Uniformly pick one of [`Grid::available_positions`]; `None` on a full grid
    pub fn random_available_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        let count = self.available_positions().count();
        if count == 0 {
            return None;
        }
        self.available_positions().nth(rng.gen_range(0..count))
    }

    /// Insert a tile at its own position, replacing whatever was there.
    ///
    /// Panics if the tile lies outside the grid.
    pub fn place(&mut self, tile: Tile) {
        let Some(idx) = self.index(tile.position) else {
            panic!(
                "tile at ({}, {}) is outside the {}x{} grid",
                tile.position.x, tile.position.y, self.size, self.size
            );
        };
        self.cells[idx] = Some(tile);
    }

    /// Clear the cell at `pos`, handing back the tile that was there
    pub fn remove(&mut self, pos: Position) -> Option<Tile> {
        let idx = self.index(pos)?;
        self.cells[idx].take()
    }

    /// All tiles, in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Reset per-turn metadata on every tile
    pub fn prepare_tiles(&mut self) {
        for tile in self.cells.iter_mut().flatten() {
            tile.prepare();
        }
    }

    /// Walk from `cell` along `direction` until the next step would leave the
    /// grid or hit a tile.
    pub fn find_farthest_position(&self, cell: Position, direction: Direction) -> FarthestPosition {
        let mut farthest = cell;
        let mut next = cell.step(direction);
        while self.is_available(next) {
            farthest = next;
            next = next.step(direction);
        }
        FarthestPosition { farthest, next }
    }

    /// Whether sliding in `direction` would change anything.
    ///
    /// True iff some tile has an in-bounds neighbour in that direction that is
    /// empty or holds an equal value.
    pub fn can_shift(&self, direction: Direction) -> bool {
        self.tiles().any(|tile| {
            let ahead = tile.position.step(direction);
            self.is_available(ahead) || self.value_at(ahead) == Some(tile.value)
        })
    }

    /// Whether any two orthogonally adjacent tiles hold equal values.
    ///
    /// Equality is symmetric, so checking the right and lower neighbour of
    /// every tile covers all pairs.
    pub fn tile_matches_available(&self) -> bool {
        self.tiles().any(|tile| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .any(|direction| self.value_at(tile.position.step(direction)) == Some(tile.value))
        })
    }

    /// At least one move would change the grid
    pub fn moves_available(&self) -> bool {
        self.has_available_positions() || self.tile_matches_available()
    }
}
