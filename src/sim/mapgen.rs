//! Random map generation
//!
//! Builds the maze lattice plus the clue placement list. All randomness comes
//! from the caller's seeded RNG so a given seed always produces the same map.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use super::grid::{Grid, Tile};
use super::state::{Clue, ClueKind};
use crate::config::GameConfig;
use crate::consts::{FAKE_CLUE_COLORS, REAL_CLUE_COLOR};

/// A freshly generated map: the tile grid and its hidden clues
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    pub grid: Grid,
    pub clues: Vec<Clue>,
}

/// The 2x2 pocket around the spawn corner that always stays open
pub const SPAWN_POCKET: [(usize, usize); 3] = [(1, 1), (1, 2), (2, 1)];

/// Generate a maze of the given (odd) dimensions
///
/// Border lines and every cell with both indices even are Solid pillars.
/// The spawn pocket is forced open. Remaining cells draw against the
/// destructible probability; one shuffled destructible cell hides the real
/// clue, and up to `total_clues - 1` more hide fakes.
pub fn generate_map(rows: usize, cols: usize, config: &GameConfig, rng: &mut Pcg32) -> GeneratedMap {
    let mut grid = Grid::new(rows, cols);
    let mut destructible: Vec<(usize, usize)> = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            let tile = if r == 0 || r == rows - 1 || c == 0 || c == cols - 1 {
                Tile::Solid
            } else if r % 2 == 0 && c % 2 == 0 {
                Tile::Solid
            } else if SPAWN_POCKET.contains(&(r, c)) {
                Tile::Empty
            } else if rng.random::<f64>() > config.block_destructible_probability {
                destructible.push((r, c));
                Tile::Destructible
            } else {
                Tile::Empty
            };
            grid.fill(r, c, tile);
        }
    }

    let mut clues = Vec::new();
    if destructible.is_empty() {
        // Degenerate but legal: an open maze with nothing to find
        log::warn!("Generated map has no destructible blocks; no clues placed");
        return GeneratedMap { grid, clues };
    }

    let total_clues = (destructible.len() as f64 * 0.1).floor().max(1.0) as usize;
    destructible.shuffle(rng);

    if let Some((r, c)) = destructible.pop() {
        grid.fill(r, c, Tile::ClueHidden);
        clues.push(Clue::new(r, c, ClueKind::Real, REAL_CLUE_COLOR));
    }

    for i in 0..total_clues.saturating_sub(1) {
        let Some((r, c)) = destructible.pop() else {
            break;
        };
        grid.fill(r, c, Tile::ClueHidden);
        clues.push(Clue::new(
            r,
            c,
            ClueKind::Fake,
            FAKE_CLUE_COLORS[i % FAKE_CLUE_COLORS.len()],
        ));
    }

    log::debug!(
        "Generated {rows}x{cols} map: {} destructible blocks, {} clues",
        destructible.len() + clues.len(),
        clues.len()
    );

    GeneratedMap { grid, clues }
}
