//! Tile-grid collision resolution
//!
//! The player is an axis-aligned box moving over the tile grid. Movement is
//! resolved one axis at a time so diagonal motion into a corner slides along
//! the wall instead of stopping dead.

use glam::Vec2;

use super::grid::Grid;
use super::state::Player;
use crate::tile_coord;

/// Whether a box centered at `center` with the given half-size overlaps any
/// blocking tile. Tests the four corners; out-of-bounds corners block.
pub fn is_blocked(grid: &Grid, center: Vec2, half: f32) -> bool {
    let corners = [
        Vec2::new(center.x - half, center.y - half),
        Vec2::new(center.x + half, center.y - half),
        Vec2::new(center.x - half, center.y + half),
        Vec2::new(center.x + half, center.y + half),
    ];
    corners.iter().any(|corner| {
        grid.tile_at(tile_coord(corner.y), tile_coord(corner.x))
            .blocks_movement()
    })
}

/// Apply a displacement with axis-separated sliding: commit X if the candidate
/// is clear, then commit Y against the (possibly updated) X.
pub fn move_player(grid: &Grid, player: &mut Player, displacement: Vec2) {
    let half = player.size / 2.0;

    if displacement.x != 0.0 {
        let candidate = Vec2::new(player.pos.x + displacement.x, player.pos.y);
        if !is_blocked(grid, candidate, half) {
            player.pos.x = candidate.x;
        }
    }
    if displacement.y != 0.0 {
        let candidate = Vec2::new(player.pos.x, player.pos.y + displacement.y);
        if !is_blocked(grid, candidate, half) {
            player.pos.y = candidate.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::TILE_SIZE;
    use crate::sim::grid::Tile;
    use crate::tile_center;
    use proptest::prelude::*;

    /// 5x5 grid: solid ring, open interior except a wall at (2, 2)
    fn walled_grid() -> Grid {
        let mut grid = Grid::new(5, 5);
        for r in 0..5 {
            for c in 0..5 {
                if r == 0 || r == 4 || c == 0 || c == 4 {
                    grid.fill(r, c, Tile::Solid);
                }
            }
        }
        grid.fill(2, 2, Tile::Destructible);
        grid
    }

    fn player_at(row: usize, col: usize) -> Player {
        Player::new(tile_center(row, col), &GameConfig::default())
    }

    #[test]
    fn test_open_tile_is_clear() {
        let grid = walled_grid();
        let player = player_at(1, 1);
        assert!(!is_blocked(&grid, player.pos, player.size / 2.0));
    }

    #[test]
    fn test_revealed_clue_is_walkable() {
        let mut grid = walled_grid();
        grid.fill(2, 2, Tile::ClueRevealed);
        let player = player_at(2, 2);
        assert!(!is_blocked(&grid, player.pos, player.size / 2.0));
    }

    #[test]
    fn test_wall_stops_movement() {
        let grid = walled_grid();
        let mut player = player_at(2, 1);
        let before = player.pos;
        // Push straight into the destructible at (2, 2)
        move_player(&grid, &mut player, Vec2::new(TILE_SIZE, 0.0));
        assert_eq!(player.pos, before);
    }

    #[test]
    fn test_diagonal_slides_along_wall() {
        let grid = walled_grid();
        let mut player = player_at(1, 1);
        let before = player.pos;
        // Down-right into the corner formed by (2,2): X is clear, Y then blocked
        move_player(&grid, &mut player, Vec2::new(6.0, TILE_SIZE));
        assert_eq!(player.pos.x, before.x + 6.0);
        assert_eq!(player.pos.y, before.y);
    }

    #[test]
    fn test_border_blocks_via_out_of_bounds() {
        let grid = Grid::new(3, 3); // all Empty, bounds do the blocking
        let mut player = player_at(1, 1);
        move_player(&grid, &mut player, Vec2::new(-3.0 * TILE_SIZE, 0.0));
        assert_eq!(player.pos, tile_center(1, 1));
    }

    proptest! {
        #[test]
        fn prop_resolved_position_never_blocked(
            steps in proptest::collection::vec((-8.0f32..8.0, -8.0f32..8.0), 1..60)
        ) {
            let grid = walled_grid();
            let mut player = player_at(1, 1);
            let half = player.size / 2.0;
            for (dx, dy) in steps {
                move_player(&grid, &mut player, Vec2::new(dx, dy));
                prop_assert!(!is_blocked(&grid, player.pos, half));
            }
        }
    }
}
