//! Runner/wall overlap along the track
//!
//! Everything here is one-dimensional: the runner and each wall are spans on
//! the x axis. Walls are sorted by construction, so the only wall that can
//! overlap the runner is the last one starting before the runner's leading
//! edge.

use std::collections::VecDeque;

/// An open interval `(start, end)` on the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    /// Runner hitbox centered on `x`
    pub fn around(x: f32, half_width: f32) -> Self {
        Self {
            start: x - half_width,
            end: x + half_width,
        }
    }

    /// Wall occupying one tile from `x`
    pub fn wall(x: f32, tile_w: f32) -> Self {
        Self {
            start: x,
            end: x + tile_w,
        }
    }

    /// Spans that only touch at an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Index of the last wall starting strictly before `leading_edge`
pub fn nearest_wall_behind(walls: &VecDeque<f32>, leading_edge: f32) -> Option<usize> {
    walls
        .partition_point(|&wall| wall < leading_edge)
        .checked_sub(1)
}

/// Whether a runner at `runner_x` overlaps any wall
pub fn runner_hits_wall(
    walls: &VecDeque<f32>,
    runner_x: f32,
    half_width: f32,
    tile_w: f32,
) -> bool {
    let hitbox = Span::around(runner_x, half_width);
    match nearest_wall_behind(walls, hitbox.end) {
        Some(i) => hitbox.overlaps(&Span::wall(walls[i], tile_w)),
        None => false,
    }
}
