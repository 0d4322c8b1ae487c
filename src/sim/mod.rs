//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - One seeded RNG per run, owned by [`GameState`]
//! - Components never hold references to each other; the tick passes values
//! - Hosts read [`Snapshot`]s and [`GameEvent`]s only

pub mod camera;
pub mod clock;
pub mod collision;
pub mod effects;
pub mod obstacles;
pub mod runner;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::Camera;
pub use clock::Clock;
pub use collision::{Span, runner_hits_wall};
pub use effects::{Effects, Ghost, GlitchSlice};
pub use obstacles::ObstacleField;
pub use runner::{Animation, JumpEvent, Runner};
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
pub use world::Scene;
