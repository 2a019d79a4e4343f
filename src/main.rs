//! Clue Bomber entry point
//!
//! Headless demo driver: plays a short scripted run against the simulation
//! core and renders the final grid as ASCII. In the real game this role is
//! filled by a canvas renderer and touch/keyboard capture; the binary mostly
//! exists to show the collaborator contract (delta + input in, snapshot +
//! events out).

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use clue_bomber::sim::{GameMode, GameState, Tile, TickInput, tick};
use clue_bomber::GameConfig;

const FRAME_SECS: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let config = GameConfig::load(Path::new("config.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::new(config, seed);
    log::info!("Objective: find the hidden clue!");

    // Scripted session: wander right, drop a bomb, retreat, wait out the blast
    let script: [(u32, TickInput); 4] = [
        (
            30,
            TickInput {
                right: true,
                ..Default::default()
            },
        ),
        (
            1,
            TickInput {
                place_bomb: true,
                ..Default::default()
            },
        ),
        (
            40,
            TickInput {
                left: true,
                down: true,
                ..Default::default()
            },
        ),
        (120, TickInput::default()),
    ];

    for (frames, input) in script {
        for _ in 0..frames {
            tick(&mut state, &input, FRAME_SECS);
            for event in state.drain_events() {
                log::info!("{}", event.message());
            }
            if state.mode != GameMode::Playing {
                break;
            }
        }
    }

    println!("{}", render_ascii(&state));
    println!(
        "seed {} | mode {:?} | lives {} | {} clue(s) left",
        state.seed,
        state.mode,
        state.player.lives,
        state.clues.len()
    );
}

/// Draw the grid, bombs, explosions and player as one character per tile
fn render_ascii(state: &GameState) -> String {
    let (player_row, player_col) = state.player.tile();
    let mut out = String::new();

    for row in 0..state.grid.rows() as isize {
        for col in 0..state.grid.cols() as isize {
            let ch = if row == player_row && col == player_col {
                if state.player.blink_hidden() { 'p' } else { 'P' }
            } else if state.bombs.iter().any(|b| b.row == row && b.col == col) {
                'o'
            } else if state.explosions.iter().any(|e| e.row == row && e.col == col) {
                '*'
            } else {
                match state.grid.tile_at(row, col) {
                    Tile::Empty => '.',
                    Tile::Solid => '#',
                    Tile::Destructible => '+',
                    Tile::ClueHidden => '+',
                    Tile::ClueRevealed => '?',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
