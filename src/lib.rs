//! Clue Bomber - a tile-grid maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (map generation, collisions, game state)
//! - `config`: Data-driven game tunables
//!
//! Rendering, input capture and asset loading are external collaborators: each
//! frame they hand the core a time delta plus an input snapshot, then read the
//! resulting state back to draw and to surface notification events.

pub mod config;
pub mod sim;

pub use config::GameConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Edge length of one grid tile in logical pixels
    pub const TILE_SIZE: f32 = 40.0;

    /// Nominal frame rate the per-frame timers are expressed against
    pub const NOMINAL_FPS: f32 = 60.0;
    /// Lower clamp of the normalized per-frame delta (in nominal frames)
    pub const MIN_FRAME_DELTA: f32 = 0.1;
    /// Upper clamp - a single resumed frame never advances more than 2 frames' worth
    pub const MAX_FRAME_DELTA: f32 = 2.0;

    /// Grid dimension limits (odd counts only)
    pub const MIN_ROWS: usize = 5;
    pub const MAX_ROWS: usize = 13;
    pub const MIN_COLS: usize = 5;
    pub const MAX_COLS: usize = 17;

    /// Joystick dead zone per axis
    pub const JOYSTICK_DEAD_ZONE: f32 = 0.1;

    /// Marker color of the one real clue (packed 0xRRGGBB)
    pub const REAL_CLUE_COLOR: u32 = 0xADD8E6;
    /// Fake clue palette, assigned round-robin at generation time
    pub const FAKE_CLUE_COLORS: [u32; 7] = [
        0xFFC0CB, 0xFFB6C1, 0xF08080, 0xFA8072, 0x72CAFA, 0x08A8FF, 0x056599,
    ];
}

/// Tile index containing a continuous coordinate
#[inline]
pub fn tile_coord(v: f32) -> isize {
    (v / consts::TILE_SIZE).floor() as isize
}

/// Center point of the tile at (row, col)
#[inline]
pub fn tile_center(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        (col as f32 + 0.5) * consts::TILE_SIZE,
        (row as f32 + 0.5) * consts::TILE_SIZE,
    )
}

/// Clamp a grid dimension to an odd value within [lo, hi]
#[inline]
pub fn clamp_odd(n: usize, lo: usize, hi: usize) -> usize {
    let n = n.clamp(lo, hi);
    if n % 2 == 0 { n - 1 } else { n }
}
