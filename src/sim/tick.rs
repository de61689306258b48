//! Per-frame simulation tick
//!
//! Core game loop step: background, then player, then spawner. Rendering
//! happens after the tick so a drawn frame is always fully advanced.

use super::input::{Action, InputState};
use super::state::{GameEvent, GamePhase, GameState};

/// Whether the host should schedule another tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Something a host refresh callback can drive one tick at a time
pub trait Simulation {
    fn tick(&mut self, elapsed_ms: f32) -> Flow;
}

/// Advance the game state by one tick of `elapsed_ms` milliseconds
pub fn tick(state: &mut GameState, input: &InputState, elapsed_ms: f32) -> Flow {
    if state.is_game_over() {
        return Flow::Stop;
    }

    state.frame += 1;

    state.background.update(elapsed_ms);

    let collided = state.player.update(input, elapsed_ms, &state.obstacles);

    // Spawner still runs on the collision tick so the final frame is fully advanced
    let report = state
        .spawner
        .tick(elapsed_ms, &mut state.rng, &mut state.obstacles);
    if let Some(id) = report.spawned {
        state.push_event(GameEvent::Spawned { id });
    }
    for _ in 0..report.passed {
        state.score += 1;
        log::debug!("Score: {}", state.score);
        state.push_event(GameEvent::Scored { score: state.score });
    }

    if collided {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at frame {} with score {}", state.frame, state.score);
        state.push_event(GameEvent::GameOver { score: state.score });
        return Flow::Stop;
    }

    Flow::Continue
}

/// Restart if the run is over and the latest input event pressed Restart.
/// Returns true when a new run began; a restart while running is ignored,
/// as is a Restart key that was merely still held from earlier.
pub fn try_restart(
    state: &mut GameState,
    input: &mut InputState,
    pressed: Option<Action>,
) -> bool {
    if !state.is_game_over() || pressed != Some(Action::Restart) {
        return false;
    }
    state.restart();
    input.reset();
    log::info!("Restarted (seed {})", state.seed);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Obstacle;
    use proptest::prelude::*;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Obstacle sitting on top of the player
    fn obstacle_on_player(state: &GameState) -> Obstacle {
        let mut obstacle = Obstacle::new();
        obstacle.pos.x = state.player.pos.x;
        obstacle
    }

    #[test]
    fn test_tick_runs_until_collision() {
        let mut state = GameState::new(12345);
        let input = InputState::default();
        assert_eq!(tick(&mut state, &input, FRAME_MS), Flow::Continue);
        assert_eq!(state.frame, 1);

        let obstacle = obstacle_on_player(&state);
        state.obstacles.push(obstacle);
        assert_eq!(tick(&mut state, &input, FRAME_MS), Flow::Stop);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::GameOver { score: 0 })
        );
    }

    #[test]
    fn test_no_ticks_after_game_over() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let frame = state.frame;
        let bg = state.background.x;
        assert_eq!(tick(&mut state, &InputState::default(), 1000.0), Flow::Stop);
        assert_eq!(state.frame, frame);
        assert_eq!(state.background.x, bg);
    }

    #[test]
    fn test_score_once_per_obstacle() {
        let mut state = GameState::new(2);
        state.spawner.interval = f32::MAX;
        let mut leaving = Obstacle::new();
        leaving.pos.x = -OBSTACLE_WIDTH + 2.0;
        state.obstacles.push(leaving);

        let input = InputState::default();
        for _ in 0..5 {
            tick(&mut state, &input, FRAME_MS);
        }
        assert_eq!(state.score, 1);
        assert!(state.obstacles.is_empty());
        let scored: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .collect();
        assert_eq!(scored, vec![GameEvent::Scored { score: 1 }]);
    }

    #[test]
    fn test_collision_tick_still_scores() {
        let mut state = GameState::new(3);
        state.spawner.interval = f32::MAX;
        let obstacle = obstacle_on_player(&state);
        let mut leaving = Obstacle::new();
        leaving.pos.x = -OBSTACLE_WIDTH;
        state.obstacles.push(obstacle);
        state.obstacles.push(leaving);

        assert_eq!(tick(&mut state, &InputState::default(), FRAME_MS), Flow::Stop);
        assert_eq!(state.score, 1);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut state = GameState::new(4);
        let mut input = InputState::default();
        input.activate(Action::Restart);
        state.score = 3;
        assert!(!try_restart(&mut state, &mut input, Some(Action::Restart)));
        assert_eq!(state.score, 3);

        state.phase = GamePhase::GameOver;
        input.activate(Action::MoveLeft);
        assert!(try_restart(&mut state, &mut input, Some(Action::Restart)));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(input.actions().count(), 0);
    }

    #[test]
    fn test_restart_needs_restart_action() {
        let mut state = GameState::new(4);
        state.phase = GamePhase::GameOver;
        let mut input = InputState::default();
        input.activate(Action::Jump);
        assert!(!try_restart(&mut state, &mut input, Some(Action::Jump)));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_held_restart_needs_a_fresh_press() {
        let mut state = GameState::new(4);
        state.phase = GamePhase::GameOver;
        let mut input = InputState::default();
        input.activate(Action::Restart);
        assert!(!try_restart(&mut state, &mut input, None));
        assert!(!try_restart(&mut state, &mut input, Some(Action::MoveRight)));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_full_run_and_restart() {
        let mut state = GameState::new(2024);
        let mut input = InputState::default();

        // Standing still, the first obstacle always reaches the player
        let mut ticks = 0;
        while tick(&mut state, &input, FRAME_MS) == Flow::Continue {
            ticks += 1;
            assert!(ticks < 10_000, "no collision happened");
        }
        assert!(state.is_game_over());
        assert!(!state.obstacles.is_empty());

        input.activate(Action::Restart);
        assert!(try_restart(&mut state, &mut input, Some(Action::Restart)));
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.background.x, 0.0);
        assert_eq!(state.player.pos.x, PLAYER_START_X);
        assert_eq!(state.player.pos.y, PLAYER_GROUND_Y);
        assert_eq!(tick(&mut state, &input, FRAME_MS), Flow::Continue);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let mut jump = InputState::default();
        jump.activate(Action::Jump);
        let idle = InputState::default();

        for i in 0..200 {
            let input = if i % 40 < 3 { &jump } else { &idle };
            tick(&mut state1, input, FRAME_MS);
            tick(&mut state2, input, FRAME_MS);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.obstacles.len(), state2.obstacles.len());
        assert_eq!(state1.spawner.interval, state2.spawner.interval);
    }

    proptest! {
        #[test]
        fn prop_score_never_decrements(
            seed in any::<u64>(),
            steps in proptest::collection::vec((any::<bool>(), 0.0f32..50.0), 1..400)
        ) {
            let mut state = GameState::new(seed);
            let mut jump = InputState::default();
            jump.activate(Action::Jump);
            let idle = InputState::default();

            let mut last_score = 0;
            for (jumping, elapsed) in steps {
                let input = if jumping { &jump } else { &idle };
                tick(&mut state, input, elapsed);
                prop_assert!(state.score >= last_score);
                prop_assert!(state.score - last_score <= 1);
                last_score = state.score;
                prop_assert!(state.spawner.interval >= SPAWN_INTERVAL_MIN);
                prop_assert!(state.spawner.interval < SPAWN_INTERVAL_MAX);
                for obstacle in &state.obstacles {
                    prop_assert!(!obstacle.marked_for_deletion);
                    prop_assert!(obstacle.animation.frame <= obstacle.animation.max_frame);
                }
                if state.is_game_over() {
                    break;
                }
            }
        }
    }
}
