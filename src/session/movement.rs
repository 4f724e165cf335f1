//! Player movement
//!
//! Top-down four-direction movement from polled directional input. Axes are
//! resolved independently: left beats right, up beats down, and a diagonal
//! applies full speed on both axes at once (diagonal traversal is faster than
//! cardinal; the original shipped that way and it is kept).

use super::state::Player;
use super::tick::TickInput;
use super::world::{Bounds, WorldModel};
use crate::consts::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Maps directional input to player velocity/facing and keeps the player
/// inside its bounds rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementController {
    /// Rectangle the player center is clamped to
    bounds: Bounds,
    /// Per-axis speed in px/s
    speed: f32,
}

impl MovementController {
    /// Full-world movement, bounds inset by the player hitbox
    pub fn for_world(world: &WorldModel) -> Self {
        Self {
            bounds: world.bounds().inset(PLAYER_HALF_W, PLAYER_HALF_H),
            speed: PLAYER_SPEED,
        }
    }

    /// Tutorial practice pen: slower, clamped to a sub-rectangle of the
    /// first screen. The pen clamps the player center directly.
    pub fn for_practice() -> Self {
        Self {
            bounds: Bounds::new(
                Vec2::new(PRACTICE_MIN_X, PRACTICE_MIN_Y),
                Vec2::new(PRACTICE_MAX_X, PRACTICE_MAX_Y),
            ),
            speed: PRACTICE_SPEED,
        }
    }

    /// Apply one tick of movement. Velocity is set fresh every tick from the
    /// polled input; facing only changes while a horizontal key is held.
    pub fn apply(&self, player: &mut Player, input: &TickInput, dt: f32) {
        let mut vel = Vec2::ZERO;

        if input.left {
            vel.x = -self.speed;
            player.facing_left = true;
        } else if input.right {
            vel.x = self.speed;
            player.facing_left = false;
        }

        if input.up {
            vel.y = -self.speed;
        } else if input.down {
            vel.y = self.speed;
        }

        player.vel = vel;
        player.pos = self.bounds.clamp(player.pos + vel * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(left: bool, right: bool, up: bool, down: bool) -> TickInput {
        TickInput {
            left,
            right,
            up,
            down,
            ..Default::default()
        }
    }

    fn controller() -> MovementController {
        MovementController::for_world(&WorldModel::the_hive())
    }

    #[test]
    fn test_left_beats_right() {
        let mut player = Player::spawn();
        controller().apply(&mut player, &input(true, true, false, false), 0.1);
        assert_eq!(player.vel.x, -PLAYER_SPEED);
        assert!(player.facing_left);
    }

    #[test]
    fn test_up_beats_down() {
        let mut player = Player::spawn();
        controller().apply(&mut player, &input(false, false, true, true), 0.1);
        assert_eq!(player.vel.y, -PLAYER_SPEED);
    }

    #[test]
    fn test_diagonal_not_normalized() {
        let mut player = Player::spawn();
        controller().apply(&mut player, &input(false, true, false, true), 0.1);
        assert_eq!(player.vel, Vec2::new(PLAYER_SPEED, PLAYER_SPEED));
        // Faster than cardinal speed, on purpose
        assert!(player.vel.length() > PLAYER_SPEED);
    }

    #[test]
    fn test_facing_sticks_without_horizontal_input() {
        let mut player = Player::spawn();
        let ctrl = controller();
        ctrl.apply(&mut player, &input(true, false, false, false), 0.1);
        assert!(player.facing_left);
        ctrl.apply(&mut player, &input(false, false, true, false), 0.1);
        assert!(player.facing_left);
    }

    #[test]
    fn test_clamped_to_world() {
        let mut player = Player::spawn();
        let ctrl = controller();
        // Run left far longer than it takes to reach the wall
        for _ in 0..100 {
            ctrl.apply(&mut player, &input(true, false, false, false), 0.1);
        }
        assert_eq!(player.pos.x, PLAYER_HALF_W);
    }

    #[test]
    fn test_practice_pen_clamp() {
        let mut player = Player::spawn();
        player.pos = Vec2::new(400.0, 300.0);
        let ctrl = MovementController::for_practice();
        for _ in 0..100 {
            ctrl.apply(&mut player, &input(false, true, false, true), 0.1);
        }
        assert_eq!(player.pos, Vec2::new(PRACTICE_MAX_X, PRACTICE_MAX_Y));
    }

    #[test]
    fn test_idle_input_zeroes_velocity() {
        let mut player = Player::spawn();
        player.vel = Vec2::new(100.0, 100.0);
        let start = player.pos;
        controller().apply(&mut player, &input(false, false, false, false), 0.1);
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.pos, start);
    }
}
