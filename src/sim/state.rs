//! Game state and core simulation types
//!
//! The whole mutable simulation lives in one owned `GameState` aggregate that
//! gets passed into `tick` - no globals, so tests can run many deterministic
//! instances side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::mapgen::generate_map;
use crate::config::GameConfig;
use crate::consts::TILE_SIZE;
use crate::{tile_center, tile_coord};

/// Current state of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Playing,
    /// The real clue was picked up
    Won,
    /// Lives ran out
    Over,
}

impl GameMode {
    /// Terminal modes stop the simulation until an external restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameMode::Won | GameMode::Over)
    }
}

/// Whether a hidden clue wins the game or just distracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueKind {
    Real,
    Fake,
}

/// A hidden objective buried under a breakable wall
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Clue {
    pub row: usize,
    pub col: usize,
    pub kind: ClueKind,
    /// Packed 0xRRGGBB display color
    pub color: u32,
    /// Flips when an explosion uncovers the tile
    pub revealed: bool,
}

impl Clue {
    pub fn new(row: usize, col: usize, kind: ClueKind, color: u32) -> Self {
        Self {
            row,
            col,
            kind,
            color,
            revealed: false,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Continuous center position in logical pixels
    pub pos: Vec2,
    /// Respawn point (center of the spawn tile)
    pub spawn: Vec2,
    /// Bounding box edge length
    pub size: f32,
    /// Pixels per nominal frame
    pub speed: f32,
    pub lives: u8,
    pub invincible: bool,
    /// Remaining invincibility window (frames)
    pub invincible_timer: f32,
}

impl Player {
    pub fn new(spawn: Vec2, config: &GameConfig) -> Self {
        Self {
            pos: spawn,
            spawn,
            size: TILE_SIZE * config.player_size_factor,
            speed: config.player_speed,
            lives: config.player_lives,
            invincible: false,
            invincible_timer: 0.0,
        }
    }

    /// Tile coordinates of the player's center
    pub fn tile(&self) -> (isize, isize) {
        (tile_coord(self.pos.y), tile_coord(self.pos.x))
    }

    /// Render hint: skip drawing on alternating invincibility intervals
    pub fn blink_hidden(&self) -> bool {
        self.invincible && (self.invincible_timer / 10.0).floor() as i64 % 2 == 0
    }
}

/// A placed bomb, tile-aligned
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bomb {
    pub row: isize,
    pub col: isize,
    /// Frames until detonation
    pub timer: f32,
    /// Blast reach in tiles per cardinal direction
    pub range: usize,
}

impl Bomb {
    /// Render hint: the fuse animation alternates between two scales
    pub fn pulse_contracted(&self) -> bool {
        self.timer.rem_euclid(20.0) < 10.0
    }
}

/// One burning cell of a detonation burst
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosionCell {
    pub row: isize,
    pub col: isize,
    /// Frames until the flame fades
    pub timer: f32,
}

impl ExplosionCell {
    /// Render hint: remaining fraction of the cell's lifetime, in [0, 1]
    pub fn intensity(&self, lifetime: f32) -> f32 {
        (self.timer / lifetime).clamp(0.0, 1.0)
    }
}

/// Full-screen fake-clue interstitial; while its timer runs the whole
/// simulation step is suspended
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FakeClueBanner {
    /// Frames remaining; inactive at or below zero
    pub timer: f32,
    /// Background color of the interstitial (the picked clue's color)
    pub color: u32,
}

impl FakeClueBanner {
    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}

/// Discrete notifications for the external sink (toasts, screens)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An explosion uncovered a clue tile
    ClueFound,
    /// A fake clue was picked up; the banner uses its color
    FakeCluePicked { color: u32 },
    GameWon,
    GameOver,
}

impl GameEvent {
    /// Display string for toast rendering
    pub fn message(&self) -> &'static str {
        match self {
            GameEvent::ClueFound => "You found something!",
            GameEvent::FakeCluePicked { .. } => "Fake clue, keep playing",
            GameEvent::GameWon => "You found the real clue!",
            GameEvent::GameOver => "GAME OVER",
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance tunables this run was built with
    pub config: GameConfig,
    /// Map seed for reproducibility
    pub seed: u64,
    pub grid: Grid,
    /// Clues still in play (picked fakes are removed)
    pub clues: Vec<Clue>,
    pub bombs: Vec<Bomb>,
    pub explosions: Vec<ExplosionCell>,
    pub player: Player,
    pub banner: FakeClueBanner,
    pub mode: GameMode,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending notifications, drained by the sink each frame
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run: generate the map and spawn the player
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let rows = config.clamped_rows();
        let cols = config.clamped_cols();
        let mut rng = Pcg32::seed_from_u64(seed);
        let map = generate_map(rows, cols, &config, &mut rng);
        let player = Player::new(tile_center(1, 1), &config);

        log::info!("New game: {rows}x{cols} map, seed {seed}");

        Self {
            config,
            seed,
            grid: map.grid,
            clues: map.clues,
            bombs: Vec::new(),
            explosions: Vec::new(),
            player,
            banner: FakeClueBanner::default(),
            mode: GameMode::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset everything and regenerate the map; valid at any time, including
    /// from a terminal mode
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(self.config.clone(), seed);
    }

    /// Drop a bomb on the player's tile; silently ignored if one is already there
    pub fn place_bomb(&mut self) {
        let (row, col) = self.player.tile();
        if self.bombs.iter().any(|b| b.row == row && b.col == col) {
            return;
        }
        log::debug!("Bomb placed at ({row}, {col})");
        self.bombs.push(Bomb {
            row,
            col,
            timer: self.config.bomb_frames,
            range: self.config.bomb_range,
        });
    }

    /// Apply a hit to the player: lose a life, then either end the run or
    /// respawn with an invincibility window
    pub(crate) fn player_hit(&mut self) {
        if self.player.invincible {
            return;
        }
        self.player.lives = self.player.lives.saturating_sub(1);
        if self.player.lives == 0 {
            self.mode = GameMode::Over;
            self.push_event(GameEvent::GameOver);
            log::info!("Game over after {} ticks", self.time_ticks);
        } else {
            self.player.pos = self.player.spawn;
            self.player.invincible = true;
            self.player.invincible_timer = self.config.invincibility_frames;
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
