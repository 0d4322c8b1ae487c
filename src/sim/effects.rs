//! Jump ghosts
//!
//! Every jump leaves a glitched after-image of the runner at its take-off
//! point. The host draws them; this module owns where they are, which frame
//! they show and how they are currently sliced.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::runner::JumpEvent;
use crate::consts::GHOST_MAX_SLICES;
use crate::settings::Settings;

/// Chance per tick that a ghost is drawn at all
const GHOST_VISIBLE_PROB: f32 = 0.9;

/// One horizontally shifted band of the ghost sprite
///
/// The band `[dy, dy + h)` of the sprite is drawn shifted right by `dx`,
/// with the overflowing `dx` pixels wrapped to the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlitchSlice {
    pub dx: f32,
    pub dy: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ghost {
    pub frame: u32,
    pub pos: Vec2,
    /// Empty until the first re-roll
    pub slices: Vec<GlitchSlice>,
    /// Flicker state for this tick
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effects {
    /// Oldest (leftmost) first
    pub ghosts: VecDeque<Ghost>,
    reglitch_prob: f32,
    tile_w: f32,
    half_view_w: f32,
}

impl Effects {
    pub fn new(settings: &Settings) -> Self {
        Self {
            ghosts: VecDeque::new(),
            reglitch_prob: settings.ghost_reglitch_prob,
            tile_w: settings.tile_w,
            half_view_w: settings.half_view_w(),
        }
    }

    pub fn add(&mut self, jump: &JumpEvent) {
        self.ghosts.push_back(Ghost {
            frame: jump.frame,
            pos: jump.pos,
            slices: Vec::new(),
            visible: true,
        });
    }

    /// Drop ghosts that left the view, then re-roll glitches and flicker
    pub fn update<R: Rng + ?Sized>(&mut self, camera_x: f32, rng: &mut R) {
        let cam_begin = camera_x - self.half_view_w;
        while self
            .ghosts
            .front()
            .is_some_and(|g| g.pos.x + self.tile_w / 2.0 < cam_begin)
        {
            self.ghosts.pop_front();
        }

        for ghost in &mut self.ghosts {
            if rng.random::<f32>() < self.reglitch_prob {
                ghost.slices = glitch_slices(self.tile_w, rng);
            }
            ghost.visible = rng.random::<f32>() < GHOST_VISIBLE_PROB;
        }
    }
}

/// Roll a fresh set of slices for a square sprite of size `w`
pub fn glitch_slices<R: Rng + ?Sized>(w: f32, rng: &mut R) -> Vec<GlitchSlice> {
    let count = (rng.random::<f32>() * GHOST_MAX_SLICES as f32).ceil() as usize;
    (0..count)
        .map(|_| {
            let dx = rng.random::<f32>() * 0.2 * w;
            let dy = rng.random::<f32>() * w;
            let extra = (rng.random::<f32>() * w / 3.0).floor();
            let h = (extra + 5.0).min(w - dy);
            GlitchSlice { dx, dy, h }
        })
        .collect()
}
