//! Parallax Runner - a side-scrolling jump-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, entities, spawning, game state)
//! - `game`: Frame orchestration (clock, tick, render, audio cues)
//! - `hud`: Score and game-over text layouts
//! - `renderer`: Drawing surface abstraction and frame composition
//! - `audio`: Music and sound cue routing
//! - `platform`: Frame clock and seed source

pub mod audio;
pub mod game;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical play-field size
    pub const FIELD_WIDTH: f32 = 1500.0;
    pub const FIELD_HEIGHT: f32 = 720.0;
    /// Gap between the bottom of the field and the ground line
    pub const GROUND_MARGIN: f32 = 20.0;
    /// Highest point the player can reach
    pub const CEILING_Y: f32 = 20.0;

    /// Player sprite cell and physics
    pub const PLAYER_WIDTH: f32 = 200.0;
    pub const PLAYER_HEIGHT: f32 = 200.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_RUN_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_VELOCITY: f32 = -20.0;
    /// Added to `vy` every tick while airborne
    pub const GRAVITY: f32 = 0.5;
    pub const PLAYER_GROUND_MAX_FRAME: u32 = 8;
    pub const PLAYER_AIR_MAX_FRAME: u32 = 6;
    pub const PLAYER_FPS: f32 = 20.0;

    /// Obstacle sprite cell and motion (speed is per tick)
    pub const OBSTACLE_WIDTH: f32 = 160.0;
    pub const OBSTACLE_HEIGHT: f32 = 119.0;
    pub const OBSTACLE_SPEED: f32 = 5.0;
    pub const OBSTACLE_MAX_FRAME: u32 = 5;
    pub const OBSTACLE_FPS: f32 = 20.0;

    /// Spawn interval range in milliseconds (max exclusive)
    pub const SPAWN_INTERVAL_MIN: f32 = 200.0;
    pub const SPAWN_INTERVAL_MAX: f32 = 1300.0;

    /// Background tile and scroll (speed is per scroll step)
    pub const BACKGROUND_WIDTH: f32 = 2400.0;
    pub const BACKGROUND_HEIGHT: f32 = 720.0;
    pub const BACKGROUND_SPEED: f32 = 3.0;
    pub const BACKGROUND_FPS: f32 = 200.0;

    /// Ground line for the player's top edge
    pub const PLAYER_GROUND_Y: f32 = FIELD_HEIGHT - PLAYER_HEIGHT - GROUND_MARGIN;
    /// Ground line for an obstacle's top edge
    pub const OBSTACLE_GROUND_Y: f32 = FIELD_HEIGHT - OBSTACLE_HEIGHT - GROUND_MARGIN;
}

/// Milliseconds between animation steps at the given rate
#[inline]
pub fn frame_interval_ms(fps: f32) -> f32 {
    1000.0 / fps
}
