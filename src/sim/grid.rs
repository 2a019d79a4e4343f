//! Tile grid model
//!
//! Owns the tile matrix and tile-type semantics. Out-of-range reads come back
//! Solid so every caller sees the world as walled-in; mutation goes through
//! intent-named operations that encode the legal tile transitions.

use serde::{Deserialize, Serialize};

/// One grid cell's terrain state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    /// Permanent wall, stops blasts
    Solid,
    /// Breakable wall, possibly hiding a clue
    Destructible,
    /// Breakable wall with a clue behind it
    ClueHidden,
    /// Uncovered clue, walkable for pickup
    ClueRevealed,
}

impl Tile {
    /// Whether the player's bounding box may not overlap this tile
    pub fn blocks_movement(&self) -> bool {
        match self {
            Tile::Solid | Tile::Destructible | Tile::ClueHidden => true,
            Tile::Empty | Tile::ClueRevealed => false,
        }
    }

    /// Whether an explosion may remove this tile (one layer per blast)
    pub fn is_breakable(&self) -> bool {
        matches!(self, Tile::Destructible | Tile::ClueHidden)
    }
}

/// Fixed-size tile matrix, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid filled with Empty tiles
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![Tile::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile at (row, col); out-of-range reads are Solid
    pub fn tile_at(&self, row: isize, col: isize) -> Tile {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return Tile::Solid;
        }
        self.tiles[row as usize * self.cols + col as usize]
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Raw cell write, generation-time only
    pub(crate) fn fill(&mut self, row: usize, col: usize, tile: Tile) {
        debug_assert!(row < self.rows && col < self.cols);
        self.tiles[row * self.cols + col] = tile;
    }

    /// Destructible/ClueHidden -> Empty (blast removed the wall). No-op otherwise.
    pub fn blast_clear(&mut self, row: isize, col: isize) {
        if self.in_bounds(row, col) && self.tile_at(row, col).is_breakable() {
            self.fill(row as usize, col as usize, Tile::Empty);
        }
    }

    /// Destructible/ClueHidden -> ClueRevealed (blast uncovered a clue). No-op otherwise.
    pub fn reveal_clue(&mut self, row: isize, col: isize) {
        if self.in_bounds(row, col) && self.tile_at(row, col).is_breakable() {
            self.fill(row as usize, col as usize, Tile::ClueRevealed);
        }
    }

    /// ClueRevealed -> Empty (fake clue picked up). No-op otherwise.
    pub fn consume_clue(&mut self, row: isize, col: isize) {
        if self.in_bounds(row, col) && self.tile_at(row, col) == Tile::ClueRevealed {
            self.fill(row as usize, col as usize, Tile::Empty);
        }
    }

    /// Iterate all cells as (row, col, tile)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (i / self.cols, i % self.cols, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_reads_are_solid() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.tile_at(-1, 0), Tile::Solid);
        assert_eq!(grid.tile_at(0, -1), Tile::Solid);
        assert_eq!(grid.tile_at(5, 0), Tile::Solid);
        assert_eq!(grid.tile_at(0, 5), Tile::Solid);
        assert_eq!(grid.tile_at(2, 2), Tile::Empty);
    }

    #[test]
    fn test_blast_clear_only_breakables() {
        let mut grid = Grid::new(5, 5);
        grid.fill(1, 1, Tile::Solid);
        grid.blast_clear(1, 1);
        assert_eq!(grid.tile_at(1, 1), Tile::Solid);

        grid.fill(1, 2, Tile::Destructible);
        grid.blast_clear(1, 2);
        assert_eq!(grid.tile_at(1, 2), Tile::Empty);

        grid.fill(1, 3, Tile::ClueHidden);
        grid.blast_clear(1, 3);
        assert_eq!(grid.tile_at(1, 3), Tile::Empty);
    }

    #[test]
    fn test_reveal_and_consume() {
        let mut grid = Grid::new(5, 5);
        grid.fill(2, 2, Tile::ClueHidden);
        grid.reveal_clue(2, 2);
        assert_eq!(grid.tile_at(2, 2), Tile::ClueRevealed);

        // Consuming a revealed clue empties the cell
        grid.consume_clue(2, 2);
        assert_eq!(grid.tile_at(2, 2), Tile::Empty);

        // Consume on anything else is a no-op
        grid.fill(3, 3, Tile::Destructible);
        grid.consume_clue(3, 3);
        assert_eq!(grid.tile_at(3, 3), Tile::Destructible);
    }

    #[test]
    fn test_mutations_ignore_out_of_range() {
        let mut grid = Grid::new(5, 5);
        grid.blast_clear(-1, 0);
        grid.reveal_clue(9, 9);
        grid.consume_clue(0, -3);
        assert!(grid.cells().all(|(_, _, t)| t == Tile::Empty));
    }
}
