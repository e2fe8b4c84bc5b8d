//! Tile module - a single numbered piece on the grid
//!
//! Besides its value and position a tile carries two pieces of per-turn
//! metadata for renderers: where it was before the current turn, and which
//! two tiles it was merged from. Both are reset by [`Tile::prepare`] at the
//! start of every turn.

use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub position: Position,
    pub value: u32,
    /// Position at the start of the current turn (`None` for tiles created this turn)
    pub previous_position: Option<Position>,
    /// The two tiles consumed by the merge that produced this tile this turn
    pub merged_from: Option<Box<[Tile; 2]>>,
}

impl Tile {
    /// Create a fresh tile
    ///
    /// Panics if `value` is not a power of two of at least 2.
    pub fn new(position: Position, value: u32) -> Self {
        assert!(
            value >= 2 && value.is_power_of_two(),
            "tile value {value} is not a power of two >= 2"
        );
        Self {
            position,
            value,
            previous_position: None,
            merged_from: None,
        }
    }

    /// Merge `moving` into `stationary`, producing a tile of double value at
    /// the stationary tile's position.
    pub fn merged(mut moving: Tile, stationary: Tile) -> Self {
        debug_assert_eq!(moving.value, stationary.value);

        // Both sources converge on the destination cell.
        moving.position = stationary.position;

        let mut tile = Tile::new(stationary.position, stationary.value * 2);
        tile.merged_from = Some(Box::new([moving, stationary]));
        tile
    }

    /// Reset per-turn metadata and remember the current position
    pub fn prepare(&mut self) {
        self.merged_from = None;
        self.previous_position = Some(self.position);
    }

    /// Whether `other` may merge into this tile during the current turn.
    ///
    /// A tile produced by a merge this turn is immune to further merges.
    pub fn accepts_merge_from(&self, other: &Tile) -> bool {
        self.value == other.value && self.merged_from.is_none()
    }

    /// Values of the two merge sources, if this tile was produced by a merge this turn
    pub fn merged_from_values(&self) -> Option<[u32; 2]> {
        self.merged_from
            .as_deref()
            .map(|[moving, stationary]| [moving.value, stationary.value])
    }

    /// Spawned this turn (neither moved from an earlier position nor merged)
    pub fn is_new(&self) -> bool {
        self.previous_position.is_none() && self.merged_from.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_new() {
        let tile = Tile::new(Position::new(1, 2), 2);
        assert!(tile.is_new());
        assert_eq!(tile.merged_from_values(), None);
    }

    #[test]
    #[should_panic]
    fn test_rejects_non_power_of_two() {
        let _ = Tile::new(Position::new(0, 0), 6);
    }

    #[test]
    #[should_panic]
    fn test_rejects_one() {
        let _ = Tile::new(Position::new(0, 0), 1);
    }

    #[test]
    fn test_merged_doubles_value_and_records_sources() {
        let moving = Tile::new(Position::new(3, 0), 8);
        let stationary = Tile::new(Position::new(1, 0), 8);

        let merged = Tile::merged(moving, stationary);
        assert_eq!(merged.value, 16);
        assert_eq!(merged.position, Position::new(1, 0));
        assert_eq!(merged.merged_from_values(), Some([8, 8]));
        assert!(!merged.is_new());

        let sources = merged.merged_from.as_deref().unwrap();
        assert!(sources.iter().all(|t| t.position == Position::new(1, 0)));
    }

    #[test]
    fn test_merged_tile_refuses_second_merge() {
        let merged = Tile::merged(
            Tile::new(Position::new(1, 0), 4),
            Tile::new(Position::new(0, 0), 4),
        );
        let incoming = Tile::new(Position::new(2, 0), 8);
        assert!(!merged.accepts_merge_from(&incoming));
    }

    #[test]
    fn test_prepare_clears_merge_and_saves_position() {
        let mut merged = Tile::merged(
            Tile::new(Position::new(1, 0), 2),
            Tile::new(Position::new(0, 0), 2),
        );
        merged.prepare();

        assert!(merged.merged_from.is_none());
        assert_eq!(merged.previous_position, Some(Position::new(0, 0)));
        assert!(merged.accepts_merge_from(&Tile::new(Position::new(1, 0), 4)));
    }
}
