//! The runner: constant forward speed, horizontal jump impulse, cyclic
//! animation clock.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sanitize_dt;
use crate::settings::Settings;

/// Cyclic animation phase; the host owns the actual frame images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    pub fps: f32,
    pub frames: u32,
    /// Seconds into the cycle, always in `[0, cycle())`
    pub t: f32,
}

impl Animation {
    pub fn new(fps: f32, frames: u32) -> Self {
        Self { fps, frames, t: 0.0 }
    }

    /// Length of one full cycle in seconds
    #[inline]
    pub fn cycle(&self) -> f32 {
        self.frames as f32 / self.fps
    }

    pub fn advance(&mut self, dt: f32) {
        self.t = (self.t + dt) % self.cycle();
    }

    /// Current frame index
    pub fn frame(&self) -> u32 {
        // t * fps can round up to `frames` right before the wrap
        ((self.t * self.fps).floor() as u32).min(self.frames.saturating_sub(1))
    }
}

/// Emitted by [`Runner::jump`] for the ghost effect and jump sound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpEvent {
    /// Animation frame showing at the moment of the jump
    pub frame: u32,
    /// Position before the jump displacement
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runner {
    /// `x` is distance along the track, `y` the fixed lane offset
    pub pos: Vec2,
    /// Forward speed (units/s)
    pub speed: f32,
    /// Horizontal displacement per jump
    pub jump: f32,
    pub anim: Animation,
}

impl Runner {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(0.0, -settings.tile_w / 2.0),
            speed: settings.runner_speed,
            jump: settings.runner_jump,
            anim: Animation::new(settings.runner_fps, settings.runner_frames),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Move forward and step the animation
    pub fn advance(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);
        self.pos.x += self.speed * dt;
        self.anim.advance(dt);
    }

    /// Teleport forward by the jump distance
    ///
    /// The jump is a horizontal displacement, not a vertical arc: `y` never
    /// changes. Every call applies the full impulse.
    pub fn jump(&mut self) -> JumpEvent {
        let event = JumpEvent {
            frame: self.anim.frame(),
            pos: self.pos,
        };
        self.pos.x += self.jump;
        event
    }
}
