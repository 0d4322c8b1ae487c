//! Glitch Runner - an endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Simulation (runner, chase camera, scene stream, obstacles, loop)
//! - `settings`: Data-driven tuning with validation
//! - `error`: Configuration errors
//!
//! Drawing, sprite slicing, sound and input wiring live in the host; they
//! read [`sim::Snapshot`]s and [`sim::GameEvent`]s produced here.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Tile edge length in world units
    pub const TILE_W: f32 = 32.0;
    /// Viewport dimensions
    pub const VIEW_W: f32 = 224.0;
    pub const VIEW_H: f32 = 126.0;

    /// Frame gaps above this (seconds) are treated as stalls
    pub const MAX_FRAME_GAP: f32 = 0.1;
    /// Step substituted for a stalled frame gap (seconds)
    pub const STALL_DT: f32 = 0.016;

    /// Runner defaults
    pub const RUNNER_SPEED: f32 = 64.0;
    pub const RUNNER_JUMP: f32 = 54.0;
    /// Animation rate, matched to the running speed
    pub const RUNNER_FPS: f32 = 64.0 / 3.0;
    pub const RUNNER_FRAMES: u32 = 6;
    /// Collision half-width; narrower than a tile on purpose
    pub const RUNNER_HALF_WIDTH: f32 = 5.0;

    /// Camera defaults
    pub const CAMERA_AHEAD: f32 = 64.0;
    pub const CAMERA_ACCEL: f32 = 64.0;
    pub const CAMERA_START_SPEED: f32 = 32.0;

    /// Obstacle defaults
    /// Expected spawns per second while there is room ahead
    pub const WALL_SPAWN_PROB: f32 = 1.0;
    pub const WALL_MIN_SPACING: f32 = 48.0;
    pub const SENTINEL_WALL: f32 = -1000.0;

    /// Per-tick chance that a ghost re-rolls its glitch slices
    pub const GHOST_REGLITCH_PROB: f32 = 0.05;
    pub const GHOST_MAX_SLICES: u32 = 13;
}

/// Sign with `sign(0) == 1`, so a zero error still picks a branch
#[inline]
pub fn sign(x: f32) -> f32 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Clamp a delta time to a usable non-negative value
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
