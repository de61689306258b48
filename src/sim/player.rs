//! The player's runner sprite

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::collides;
use super::entity::{Animation, Entity, Rect, SpriteId};
use super::input::{Action, InputState};
use super::obstacle::Obstacle;
use crate::consts::*;
use crate::frame_interval_ms;

/// Sprite-sheet row for the current pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationRow {
    #[default]
    Running,
    Airborne,
}

impl AnimationRow {
    pub fn index(&self) -> u32 {
        match self {
            AnimationRow::Running => 0,
            AnimationRow::Airborne => 1,
        }
    }
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (per tick)
    pub vy: f32,
    /// Horizontal speed applied this tick
    pub speed: f32,
    pub row: AnimationRow,
    pub animation: Animation,
    /// Field width the player is kept within
    field_width: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_GROUND_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vy: 0.0,
            speed: 0.0,
            row: AnimationRow::Running,
            animation: Animation::new(PLAYER_GROUND_MAX_FRAME, frame_interval_ms(PLAYER_FPS)),
            field_width: FIELD_WIDTH,
        }
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        PLAYER_GROUND_Y
    }

    /// Exactly on the ground line; no tolerance
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.pos.y == self.ground_y()
    }

    /// Advance one tick. Returns true if the player touched any obstacle.
    pub fn update(&mut self, input: &InputState, elapsed_ms: f32, obstacles: &[Obstacle]) -> bool {
        let collided = obstacles.iter().any(|obstacle| collides(self, obstacle));

        self.speed = if input.is_active(Action::MoveRight) {
            PLAYER_RUN_SPEED
        } else if input.is_active(Action::MoveLeft) {
            -PLAYER_RUN_SPEED
        } else {
            0.0
        };

        // Clamp last tick's position, then move: a one-tick overshoot is allowed
        self.pos.x = self.pos.x.clamp(0.0, self.field_width - self.size.x);
        self.pos.x += self.speed;

        if input.is_active(Action::Jump) && self.on_ground() {
            self.vy = PLAYER_JUMP_VELOCITY;
            self.row = AnimationRow::Airborne;
        }

        self.pos.y += self.vy;

        if !self.on_ground() {
            self.vy += GRAVITY;
            self.animation.max_frame = PLAYER_AIR_MAX_FRAME;
        } else {
            self.vy = 0.0;
            self.row = AnimationRow::Running;
            self.animation.max_frame = PLAYER_GROUND_MAX_FRAME;
        }

        self.pos.y = self.pos.y.clamp(CEILING_Y, self.ground_y());

        self.animation.advance(elapsed_ms);

        collided
    }

    /// Back to the starting spot in the running pose
    pub fn restart(&mut self) {
        self.pos = Vec2::new(PLAYER_START_X, PLAYER_GROUND_Y);
        self.vy = 0.0;
        self.speed = 0.0;
        self.row = AnimationRow::Running;
        self.animation.rewind();
        self.animation.max_frame = PLAYER_GROUND_MAX_FRAME;
    }
}

impl Entity for Player {
    fn sprite(&self) -> SpriteId {
        SpriteId::Player
    }

    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    fn source(&self) -> Rect {
        Rect::new(
            self.animation.frame as f32 * self.size.x,
            self.row.index() as f32 * self.size.y,
            self.size.x,
            self.size.y,
        )
    }
}
