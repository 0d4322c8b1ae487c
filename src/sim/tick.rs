//! Simulation tick
//!
//! One tick per animation frame, in a fixed order: runner, camera, scene,
//! effects, obstacles, then the collision check. The camera reads the
//! runner's already-advanced position, and the collision check sees the
//! obstacle field as of this tick.

use super::state::{GameEvent, GamePhase, GameState};
use crate::sanitize_dt;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump before moving (space/tap since the last tick)
    pub jump: bool,
    /// Demo mode - jump over walls automatically
    pub autopilot: bool,
}

/// Advance the run by `dt` seconds
///
/// Does nothing once the run is over. Raised events accumulate until the
/// host calls [`GameState::drain_events`].
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    let dt = sanitize_dt(dt);

    if input.jump || (input.autopilot && autopilot_should_jump(state, dt)) {
        state.jump();
    }

    state.time_ticks += 1;
    state.elapsed += f64::from(dt);

    state.runner.advance(dt);
    state.camera.update(dt, state.runner.x(), state.runner.speed);
    state.scene.update(state.camera.x, &mut state.rng);
    state.effects.update(state.camera.x, &mut state.rng);
    state.obstacles.update(dt, state.camera.x, &mut state.rng);

    if state.obstacles.collision(state.runner.x()) {
        state.phase = GamePhase::GameOver;
        let distance = state.runner.x();
        let score = state.score();
        log::info!("Game over at x={distance:.1} after {score}s");
        state.events.push(GameEvent::GameOver { distance, score });
    }
}

/// Jump when this tick's movement would reach the next wall
fn autopilot_should_jump(state: &GameState, dt: f32) -> bool {
    let leading_edge = state.runner.x() + state.settings.hitbox_half_width;
    state
        .obstacles
        .next_wall(leading_edge)
        .is_some_and(|wall| wall - leading_edge <= state.runner.speed * dt + 1.0)
}
