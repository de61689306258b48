//! Player/obstacle overlap test
//!
//! Sprites are approximated by circles around padded centers. The offsets
//! compensate for transparent padding in the sprite sheets; a hit is a center
//! distance under a third of each sprite's width, summed.

use glam::Vec2;

use super::obstacle::Obstacle;
use super::player::Player;

/// Horizontal shift of the obstacle hit center (sprite faces left)
pub const OBSTACLE_CENTER_OFFSET_X: f32 = -30.0;
/// Vertical shift of the player hit center (feet padding)
pub const PLAYER_CENTER_OFFSET_Y: f32 = 20.0;

/// Hit center of the player
#[inline]
pub fn player_center(player: &Player) -> Vec2 {
    player.pos + player.size * 0.5 + Vec2::new(0.0, PLAYER_CENTER_OFFSET_Y)
}

/// Hit center of an obstacle
#[inline]
pub fn obstacle_center(obstacle: &Obstacle) -> Vec2 {
    obstacle.pos + obstacle.size * 0.5 + Vec2::new(OBSTACLE_CENTER_OFFSET_X, 0.0)
}

/// Hit radius sum for a player/obstacle pair
#[inline]
pub fn hit_distance(player: &Player, obstacle: &Obstacle) -> f32 {
    obstacle.size.x / 3.0 + player.size.x / 3.0
}

/// Whether the player touches the obstacle
pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    obstacle_center(obstacle).distance(player_center(player)) < hit_distance(player, obstacle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    /// Obstacle whose hit center sits `dx` to the right of the player's hit center
    fn pair(dx: f32) -> (Player, Obstacle) {
        let player = Player::new();
        let mut obstacle = Obstacle::new();
        let target = player_center(&player) + Vec2::new(dx, 0.0);
        obstacle.pos = target - obstacle.size * 0.5 - Vec2::new(OBSTACLE_CENTER_OFFSET_X, 0.0);
        (player, obstacle)
    }

    #[test]
    fn test_centers_use_sprite_padding() {
        let mut player = Player::new();
        player.pos = Vec2::new(100.0, 300.0);
        assert_eq!(player_center(&player), Vec2::new(200.0, 420.0));

        let mut obstacle = Obstacle::new();
        obstacle.pos = Vec2::new(400.0, 581.0);
        assert_eq!(obstacle_center(&obstacle), Vec2::new(450.0, 640.5));
    }

    #[test]
    fn test_hit_distance_is_about_120() {
        let (player, obstacle) = pair(0.0);
        let d = hit_distance(&player, &obstacle);
        assert!((d - 120.0).abs() < 1e-3);
        assert_eq!(PLAYER_WIDTH / 3.0 + OBSTACLE_WIDTH / 3.0, d);
    }

    #[test]
    fn test_collision_boundary() {
        let (player, obstacle) = pair(119.9);
        assert!(collides(&player, &obstacle));

        let (player, obstacle) = pair(120.1);
        assert!(!collides(&player, &obstacle));
    }

    #[test]
    fn test_collision_is_radial() {
        // 72^2 + 96^2 = 120^2, just inside on the diagonal
        let player = Player::new();
        let mut obstacle = Obstacle::new();
        let target = player_center(&player) + Vec2::new(71.9, 95.9);
        obstacle.pos = target - obstacle.size * 0.5 - Vec2::new(OBSTACLE_CENTER_OFFSET_X, 0.0);
        assert!(collides(&player, &obstacle));
    }
}
