//! Per-frame simulation step
//!
//! `tick` advances the whole game by one frame's worth of time: movement,
//! bomb fuses, blast propagation, explosion decay, invincibility and clue
//! pickup. The caller supplies wall-clock seconds; the step normalizes them
//! to nominal-frame units and clamps so a backgrounded session can never
//! advance more than two frames at once.

use glam::Vec2;

use super::collision::move_player;
use super::grid::Tile;
use super::state::{Bomb, ClueKind, ExplosionCell, FakeClueBanner, GameEvent, GameState};
use crate::consts::{JOYSTICK_DEAD_ZONE, MAX_FRAME_DELTA, MIN_FRAME_DELTA, NOMINAL_FPS};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Bomb placement edge trigger (set for one tick per press)
    pub place_bomb: bool,
    /// Continuous direction vector from a virtual joystick, per-axis in [-1, 1]
    pub joystick: Vec2,
    /// Whether the joystick is currently being touched
    pub joystick_active: bool,
}

/// Convert a wall-clock delta to clamped nominal-frame units
pub fn normalize_delta(dt_secs: f32) -> f32 {
    (dt_secs * NOMINAL_FPS).clamp(MIN_FRAME_DELTA, MAX_FRAME_DELTA)
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt_secs: f32) {
    if state.mode.is_terminal() {
        return;
    }

    let delta = normalize_delta(dt_secs);

    // The fake-clue interstitial freezes the whole world
    if state.banner.active() {
        state.banner.timer -= delta;
        return;
    }

    state.time_ticks += 1;

    let dir = desired_direction(input);
    if dir != Vec2::ZERO {
        let displacement = dir * state.player.speed * delta;
        move_player(&state.grid, &mut state.player, displacement);
    }

    if input.place_bomb {
        state.place_bomb();
    }

    update_bombs(state, delta);
    update_explosions(state, delta);
    update_invincibility(state, delta);
    check_clue_pickup(state);
}

/// Resolve the active input source into a direction vector
///
/// The joystick wins while touched and outside its dead zone on either axis;
/// otherwise keys apply, with opposing keys cancelling and orthogonal keys
/// combining.
fn desired_direction(input: &TickInput) -> Vec2 {
    if input.joystick_active
        && (input.joystick.x.abs() > JOYSTICK_DEAD_ZONE
            || input.joystick.y.abs() > JOYSTICK_DEAD_ZONE)
    {
        return input.joystick;
    }
    Vec2::new(
        (input.right as i8 - input.left as i8) as f32,
        (input.down as i8 - input.up as i8) as f32,
    )
}

fn update_bombs(state: &mut GameState, delta: f32) {
    for bomb in &mut state.bombs {
        bomb.timer -= delta;
    }
    let exploded: Vec<Bomb> = state
        .bombs
        .iter()
        .filter(|b| b.timer <= 0.0)
        .copied()
        .collect();
    state.bombs.retain(|b| b.timer > 0.0);
    for bomb in exploded {
        detonate(state, &bomb);
    }
}

/// Produce the cross-shaped burst for one bomb
///
/// One cell on the bomb's own tile, then each cardinal ray walks outward up
/// to `range` tiles. A ray halts at a Solid tile without marking it, and
/// destroys at most one breakable tile before halting - a blast only ever
/// chews through a single wall layer per direction.
fn detonate(state: &mut GameState, bomb: &Bomb) {
    log::debug!("Bomb detonated at ({}, {})", bomb.row, bomb.col);
    spawn_explosion_cell(state, bomb.row, bomb.col);

    for (dr, dc) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
        for i in 1..=bomb.range as isize {
            let row = bomb.row + dr * i;
            let col = bomb.col + dc * i;
            let tile = state.grid.tile_at(row, col);

            if tile == Tile::Solid {
                break;
            }
            spawn_explosion_cell(state, row, col);

            if tile.is_breakable() {
                if let Some(clue) = state
                    .clues
                    .iter_mut()
                    .find(|c| c.row as isize == row && c.col as isize == col)
                {
                    clue.revealed = true;
                    state.grid.reveal_clue(row, col);
                    state.push_event(GameEvent::ClueFound);
                } else {
                    state.grid.blast_clear(row, col);
                }
                break;
            }
        }
    }
}

fn spawn_explosion_cell(state: &mut GameState, row: isize, col: isize) {
    state.explosions.push(ExplosionCell {
        row,
        col,
        timer: state.config.explosion_frames,
    });
}

fn update_explosions(state: &mut GameState, delta: f32) {
    let (player_row, player_col) = state.player.tile();
    let mut player_in_blast = false;

    for cell in &mut state.explosions {
        cell.timer -= delta;
        if cell.row == player_row && cell.col == player_col {
            player_in_blast = true;
        }
    }
    state.explosions.retain(|c| c.timer > 0.0);

    if player_in_blast && !state.player.invincible {
        state.player_hit();
    }
}

fn update_invincibility(state: &mut GameState, delta: f32) {
    if state.player.invincible {
        state.player.invincible_timer -= delta;
        if state.player.invincible_timer <= 0.0 {
            state.player.invincible = false;
            state.player.invincible_timer = 0.0;
        }
    }
}

fn check_clue_pickup(state: &mut GameState) {
    let (row, col) = state.player.tile();
    if state.grid.tile_at(row, col) != Tile::ClueRevealed {
        return;
    }
    let Some(index) = state
        .clues
        .iter()
        .position(|c| c.revealed && c.row as isize == row && c.col as isize == col)
    else {
        return;
    };

    match state.clues[index].kind {
        ClueKind::Real => {
            state.mode = super::state::GameMode::Won;
            state.push_event(GameEvent::GameWon);
            log::info!("Real clue found after {} ticks", state.time_ticks);
        }
        ClueKind::Fake => {
            let clue = state.clues.remove(index);
            state.banner = FakeClueBanner {
                timer: state.config.fake_clue_frames,
                color: clue.color,
            };
            state.grid.consume_clue(row, col);
            state.push_event(GameEvent::FakeCluePicked { color: clue.color });
        }
    }
}
