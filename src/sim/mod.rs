//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-frame deltas normalized and clamped by the step itself
//! - Seeded RNG only (map generation)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod mapgen;
pub mod state;
pub mod tick;

pub use collision::{is_blocked, move_player};
pub use grid::{Grid, Tile};
pub use mapgen::{GeneratedMap, SPAWN_POCKET, generate_map};
pub use state::{
    Bomb, Clue, ClueKind, ExplosionCell, FakeClueBanner, GameEvent, GameMode, GameState, Player,
};
pub use tick::{TickInput, normalize_delta, tick};
