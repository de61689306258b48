//! Obstacles and their spawner
//!
//! Obstacles enter at the right edge, walk left at a fixed per-tick speed and
//! score a point when they leave the field on the left.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Animation, Entity, Rect, SpriteId};
use crate::consts::*;
use crate::frame_interval_ms;

/// An obstacle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward distance per tick
    pub speed: f32,
    pub animation: Animation,
    /// Set when the obstacle leaves the field; removed at end of tick
    pub marked_for_deletion: bool,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new()
    }
}

impl Obstacle {
    /// A fresh obstacle just past the right edge, on the ground
    pub fn new() -> Self {
        Self {
            id: 0,
            pos: Vec2::new(FIELD_WIDTH, OBSTACLE_GROUND_Y),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            speed: OBSTACLE_SPEED,
            animation: Animation::new(OBSTACLE_MAX_FRAME, frame_interval_ms(OBSTACLE_FPS)),
            marked_for_deletion: false,
        }
    }

    /// Advance one tick. Returns true on the tick the obstacle leaves the field.
    pub fn update(&mut self, elapsed_ms: f32) -> bool {
        self.pos.x -= self.speed;

        let passed = !self.marked_for_deletion && self.pos.x < -self.size.x;
        if passed {
            self.marked_for_deletion = true;
        }

        self.animation.advance(elapsed_ms);

        passed
    }
}

impl Entity for Obstacle {
    fn sprite(&self) -> SpriteId {
        SpriteId::Obstacle
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
            0.0,
            self.size.x,
            self.size.y,
        )
    }
}

/// Draw the wait before the next spawn, in `[SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX)` ms
pub fn draw_spawn_interval<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX)
}

/// What a spawner tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Id of the obstacle spawned this tick
    pub spawned: Option<u32>,
    /// Obstacles that left the field this tick
    pub passed: u32,
}

/// Spawn scheduling state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Milliseconds since the last spawn
    pub timer: f32,
    /// Milliseconds to wait before the next spawn
    pub interval: f32,
    next_id: u32,
}

impl Spawner {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            timer: 0.0,
            interval: draw_spawn_interval(rng),
            next_id: 1,
        }
    }

    /// Run one tick: maybe spawn, advance every obstacle, then prune the ones
    /// that left the field.
    pub fn tick<R: Rng>(
        &mut self,
        elapsed_ms: f32,
        rng: &mut R,
        obstacles: &mut Vec<Obstacle>,
    ) -> SpawnReport {
        let mut report = SpawnReport::default();

        self.timer += elapsed_ms;
        if self.timer > self.interval {
            let mut obstacle = Obstacle::new();
            obstacle.id = self.next_id;
            self.next_id += 1;
            log::debug!("Spawned obstacle {} after {:.0}ms", obstacle.id, self.timer);
            report.spawned = Some(obstacle.id);
            obstacles.push(obstacle);
            self.timer = 0.0;
            self.interval = draw_spawn_interval(rng);
        }

        for obstacle in obstacles.iter_mut() {
            if obstacle.update(elapsed_ms) {
                report.passed += 1;
            }
        }

        obstacles.retain(|o| !o.marked_for_deletion);

        report
    }

    /// Start a fresh schedule with a newly drawn interval
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.timer = 0.0;
        self.interval = draw_spawn_interval(rng);
        self.next_id = 1;
    }
}
