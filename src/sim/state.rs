//! Game state and core simulation types
//!
//! Everything a run mutates lives in one owned `GameState`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::background::Background;
use super::obstacle::{Obstacle, Spawner};
use super::player::Player;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being scheduled
    #[default]
    Running,
    /// Run ended on a collision; waiting for restart
    GameOver,
}

/// Something that happened during a tick, for collaborators (audio, logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new obstacle entered the field
    Spawned { id: u32 },
    /// An obstacle left the field; `score` is the new total
    Scored { score: u64 },
    /// The player hit an obstacle
    GameOver { score: u64 },
    /// A new run began
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn-interval source
    pub rng: Pcg32,
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks since the run started
    pub frame: u64,
    pub player: Player,
    pub background: Background,
    pub spawner: Spawner,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Events since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = Spawner::new(&mut rng);
        Self {
            seed,
            rng,
            score: 0,
            phase: GamePhase::Running,
            frame: 0,
            player: Player::new(),
            background: Background::new(),
            spawner,
            obstacles: Vec::new(),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Reset everything a run touches and go back to `Running`.
    /// The RNG keeps its stream so the next run gets fresh intervals.
    pub fn restart(&mut self) {
        self.player.restart();
        self.background.restart();
        self.obstacles.clear();
        self.score = 0;
        self.frame = 0;
        self.spawner.restart(&mut self.rng);
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
