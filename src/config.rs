//! Game tunables
//!
//! Everything the simulation balances on lives here so a map or timer tweak
//! never touches gameplay code. Timer values are in nominal frames (60 Hz),
//! matching the delta units `sim::tick` works in.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{clamp_odd, consts};

/// Game balance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player speed in pixels per nominal frame
    pub player_speed: f32,
    /// Starting life count
    pub player_lives: u8,
    /// Player bounding box size as a fraction of one tile
    pub player_size_factor: f32,
    /// Invincibility window after a non-fatal hit (frames)
    pub invincibility_frames: f32,

    /// Bomb fuse (frames)
    pub bomb_frames: f32,
    /// Blast reach in tiles along each cardinal direction
    pub bomb_range: usize,
    /// Lifetime of a single explosion cell (frames)
    pub explosion_frames: f32,

    /// Duration of the full-screen fake-clue banner (frames)
    pub fake_clue_frames: f32,

    /// Probability threshold for map fill: draws above it become
    /// destructible walls, draws at or below it stay empty
    pub block_destructible_probability: f64,

    /// Grid dimensions; clamped to odd counts within the platform limits
    pub rows: usize,
    pub cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 4.0,
            player_lives: 3,
            player_size_factor: 0.8,
            invincibility_frames: 120.0,
            bomb_frames: 90.0,
            bomb_range: 2,
            explosion_frames: 20.0,
            fake_clue_frames: 100.0,
            block_destructible_probability: 0.1,
            rows: 13,
            cols: 17,
        }
    }
}

impl GameConfig {
    /// Load config from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Bad config in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Grid row count after odd-clamping
    pub fn clamped_rows(&self) -> usize {
        clamp_odd(self.rows, consts::MIN_ROWS, consts::MAX_ROWS)
    }

    /// Grid column count after odd-clamping
    pub fn clamped_cols(&self) -> usize {
        clamp_odd(self.cols, consts::MIN_COLS, consts::MAX_COLS)
    }
}
