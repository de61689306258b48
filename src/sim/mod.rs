//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time comes in as an argument, never from a clock
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod background;
pub mod collision;
pub mod entity;
pub mod input;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;

pub use background::Background;
pub use collision::{collides, obstacle_center, player_center};
pub use entity::{Animation, Entity, Rect, SpriteId};
pub use input::{Action, DeviceEvent, InputState, action_for_key};
pub use obstacle::{Obstacle, SpawnReport, Spawner};
pub use player::{AnimationRow, Player};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Flow, Simulation, tick};
