//! Run settings and tuning
//!
//! Every knob of the simulation lives here. Hosts can override any subset
//! from JSON; missing fields take the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Geometry ===
    /// Tile edge length
    pub tile_w: f32,
    /// Viewport width
    pub view_w: f32,
    /// Viewport height
    pub view_h: f32,

    // === Runner ===
    /// Forward speed (units/s)
    pub runner_speed: f32,
    /// Horizontal displacement applied by a jump
    pub runner_jump: f32,
    /// Animation frames per second
    pub runner_fps: f32,
    /// Number of frames in the runner sprite sheet
    pub runner_frames: u32,
    /// Collision half-width
    pub hitbox_half_width: f32,

    // === Camera ===
    /// Lead distance kept ahead of the runner
    pub camera_ahead: f32,
    /// Bang-bang acceleration magnitude
    pub camera_accel: f32,
    /// Camera speed at run start
    pub camera_start_speed: f32,

    // === Obstacles ===
    /// Wall spawn rate (per second) while there is room ahead
    pub wall_spawn_prob: f32,
    /// Minimum gap between a wall's trailing edge and the next spawn
    pub wall_min_spacing: f32,
    /// Far-behind wall that keeps the field non-empty
    pub sentinel_wall: f32,

    // === Tile pools (number of images per pool) ===
    pub ceiling_tiles: u32,
    pub floor_tiles: u32,
    pub background_tiles: u32,

    // === Effects ===
    /// Per-tick chance that a jump ghost re-rolls its glitch slices
    pub ghost_reglitch_prob: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tile_w: TILE_W,
            view_w: VIEW_W,
            view_h: VIEW_H,

            runner_speed: RUNNER_SPEED,
            runner_jump: RUNNER_JUMP,
            runner_fps: RUNNER_FPS,
            runner_frames: RUNNER_FRAMES,
            hitbox_half_width: RUNNER_HALF_WIDTH,

            camera_ahead: CAMERA_AHEAD,
            camera_accel: CAMERA_ACCEL,
            camera_start_speed: CAMERA_START_SPEED,

            wall_spawn_prob: WALL_SPAWN_PROB,
            wall_min_spacing: WALL_MIN_SPACING,
            sentinel_wall: SENTINEL_WALL,

            ceiling_tiles: 1,
            floor_tiles: 1,
            background_tiles: 1,

            ghost_reglitch_prob: GHOST_REGLITCH_PROB,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tile_w", self.tile_w),
            ("view_w", self.view_w),
            ("view_h", self.view_h),
            ("runner_speed", self.runner_speed),
            ("runner_fps", self.runner_fps),
            ("hitbox_half_width", self.hitbox_half_width),
            ("camera_accel", self.camera_accel),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("runner_jump", self.runner_jump),
            ("camera_ahead", self.camera_ahead),
            ("camera_start_speed", self.camera_start_speed),
            ("wall_min_spacing", self.wall_min_spacing),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !self.sentinel_wall.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "sentinel_wall",
                value: self.sentinel_wall,
            });
        }

        if !(self.wall_spawn_prob.is_finite() && self.wall_spawn_prob >= 0.0) {
            return Err(ConfigError::InvalidProbability {
                field: "wall_spawn_prob",
                value: self.wall_spawn_prob,
            });
        }
        if !(0.0..=1.0).contains(&self.ghost_reglitch_prob) {
            return Err(ConfigError::InvalidProbability {
                field: "ghost_reglitch_prob",
                value: self.ghost_reglitch_prob,
            });
        }

        if self.runner_frames == 0 {
            return Err(ConfigError::NoAnimationFrames);
        }
        for (pool, len) in [
            ("ceiling", self.ceiling_tiles),
            ("floor", self.floor_tiles),
            ("background", self.background_tiles),
        ] {
            if len == 0 {
                return Err(ConfigError::EmptyTilePool { pool });
            }
        }

        Ok(())
    }

    /// Columns in the scene window: enough to cover the viewport plus one
    pub fn scene_columns(&self) -> usize {
        (self.view_w / self.tile_w).ceil() as usize + 1
    }

    /// Tile rows covering the viewport height
    pub fn scene_rows(&self) -> usize {
        (self.view_h / self.tile_w).ceil() as usize
    }

    /// Background rows between the ceiling and floor
    pub fn background_rows(&self) -> usize {
        self.scene_rows().saturating_sub(2)
    }

    /// Vertical overhang of the tile grid past the viewport, per side
    pub fn offset_y(&self) -> f32 {
        (self.scene_rows() as f32 * self.tile_w - self.view_h) / 2.0
    }

    pub fn half_view_w(&self) -> f32 {
        self.view_w / 2.0
    }
}
