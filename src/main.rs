//! Glitch Runner headless entry point
//!
//! Drives a run from a synthetic 60 Hz frame clock with the autopilot on and
//! reports how far it got. Usage:
//!
//! ```text
//! glitch-runner [SEED] [SETTINGS.json] [SECONDS]
//! ```

use glitch_runner::Settings;
use glitch_runner::sim::{Clock, GameEvent, GameState, TickInput, tick};

/// Frame interval of the synthetic clock (ms)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Default run length (s)
const DEFAULT_SECONDS: u32 = 60;

/// Game instance holding all state
struct Game {
    state: GameState,
    clock: Clock,
    input: TickInput,
    jumps: u32,
}

impl Game {
    fn new(state: GameState) -> Self {
        Self {
            state,
            clock: Clock::new(),
            input: TickInput {
                autopilot: true,
                ..Default::default()
            },
            jumps: 0,
        }
    }

    /// One animation frame: returns false once the run is over
    fn frame(&mut self, timestamp_ms: f64) -> bool {
        let dt = self.clock.tick(timestamp_ms);
        tick(&mut self.state, &self.input, dt);

        for event in self.state.drain_events() {
            match event {
                GameEvent::Jump(jump) => {
                    self.jumps += 1;
                    log::debug!("Jump from x={:.1} (frame {})", jump.pos.x, jump.frame);
                }
                GameEvent::GameOver { distance, score } => {
                    log::info!("Crashed at x={distance:.1}, score {score}");
                }
            }
        }

        !self.state.is_over()
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let settings = args
        .next()
        .map(Settings::load_or_default)
        .unwrap_or_default();
    let seconds = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let state = match GameState::with_settings(seed, settings) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Invalid settings: {err}");
            std::process::exit(2);
        }
    };

    log::info!("Glitch Runner (headless) starting, seed {seed}, {seconds}s");
    let mut game = Game::new(state);
    let frames = u64::from(seconds) * 60;
    for frame in 0..frames {
        if !game.frame(frame as f64 * FRAME_MS) {
            break;
        }
    }

    let snapshot = game.state.snapshot();
    println!(
        "{} after {}s: x={:.1}, {} jumps, {} walls in view",
        if snapshot.game_over { "Game over" } else { "Survived" },
        snapshot.score,
        snapshot.runner.x,
        game.jumps,
        snapshot.walls.len()
    );
}
