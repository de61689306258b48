//! Frame orchestration
//!
//! `Game` owns the simulation state, the input set and the frame clock. The
//! host calls `frame` from its refresh callback and keeps scheduling frames
//! while it returns `Flow::Continue`; after a restart it schedules again.

use crate::audio::{self, AudioSink};
use crate::platform::{FrameClock, run_seed};
use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::tick::try_restart;
use crate::sim::{DeviceEvent, Flow, GameState, InputState, Simulation, tick};

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    clock: FrameClock,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        Self::with_seed(run_seed(settings.seed), settings)
    }

    pub fn with_seed(seed: u64, settings: &Settings) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed),
            input: InputState::new(settings.swipe_threshold, settings.swipe_down_factor),
            clock: FrameClock::new(settings.max_frame_ms),
        }
    }

    /// Kick off the first run's music
    pub fn start(&mut self, audio: &mut impl AudioSink) {
        audio.start_music();
    }

    /// One host frame: tick, draw, then fire audio cues
    pub fn frame(
        &mut self,
        timestamp_ms: f64,
        surface: &mut impl Surface,
        audio: &mut impl AudioSink,
    ) -> Flow {
        let elapsed = self.clock.advance(timestamp_ms);
        let flow = Simulation::tick(self, elapsed);

        draw_frame(&self.state, surface);
        audio::play_events(&self.state.drain_events(), audio);

        flow
    }

    /// Feed a device event. Returns true if it started a new run, in which
    /// case the host must resume scheduling frames.
    pub fn handle_input(&mut self, event: &DeviceEvent, audio: &mut impl AudioSink) -> bool {
        let pressed = self.input.handle(event);
        if !try_restart(&mut self.state, &mut self.input, pressed) {
            return false;
        }
        self.clock.reset();
        audio::play_events(&self.state.drain_events(), audio);
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}

impl Simulation for Game {
    fn tick(&mut self, elapsed_ms: f32) -> Flow {
        tick(&mut self.state, &self.input, elapsed_ms)
    }
}
