//! Obstacle field
//!
//! Walls are spawned at the right edge of the view with a constant rate,
//! never closer than `min_spacing` to the previous wall, and pruned from
//! the left once they leave the view. A far-behind sentinel wall keeps the
//! sequence from ever being empty.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::runner_hits_wall;
use crate::sanitize_dt;
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Wall x positions, ascending, never empty
    pub walls: VecDeque<f32>,
    /// Spawn rate (per second) while there is room
    pub spawn_prob: f32,
    pub min_spacing: f32,
    tile_w: f32,
    half_view_w: f32,
    half_width: f32,
}

impl ObstacleField {
    pub fn new(settings: &Settings) -> Self {
        Self {
            walls: VecDeque::from([settings.sentinel_wall]),
            spawn_prob: settings.wall_spawn_prob,
            min_spacing: settings.wall_min_spacing,
            tile_w: settings.tile_w,
            half_view_w: settings.half_view_w(),
            half_width: settings.hitbox_half_width,
        }
    }

    /// Right edge of the last wall
    fn wall_end(&self) -> f32 {
        // Never empty: the sentinel is only pruned when another wall exists
        self.walls.back().copied().unwrap_or(f32::NEG_INFINITY) + self.tile_w
    }

    /// Spawn and prune after the camera moved
    ///
    /// Returns the x of a newly spawned wall, if any.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        camera_x: f32,
        rng: &mut R,
    ) -> Option<f32> {
        let dt = sanitize_dt(dt);
        let cam_begin = camera_x - self.half_view_w;
        let cam_end = camera_x + self.half_view_w;

        let mut spawned = None;
        if self.wall_end() + self.min_spacing < cam_end
            && rng.random::<f32>() < self.spawn_prob * dt
        {
            let x = cam_end.ceil();
            self.walls.push_back(x);
            log::debug!("Wall spawned at {x}");
            spawned = Some(x);
        }

        while self.walls.len() > 1 && self.walls[0] + self.tile_w < cam_begin {
            if let Some(x) = self.walls.pop_front() {
                log::debug!("Wall at {x} pruned");
            }
        }

        spawned
    }

    /// Insert a wall ahead of every existing one
    ///
    /// Rejected (returns false) if it would break ordering or spacing.
    pub fn push_wall(&mut self, x: f32) -> bool {
        if x.is_finite() && self.wall_end() + self.min_spacing < x {
            self.walls.push_back(x);
            true
        } else {
            false
        }
    }

    /// Whether a runner at `runner_x` overlaps the nearest wall
    pub fn collision(&self, runner_x: f32) -> bool {
        runner_hits_wall(&self.walls, runner_x, self.half_width, self.tile_w)
    }

    /// Closest wall starting at or ahead of `x`
    pub fn next_wall(&self, x: f32) -> Option<f32> {
        let i = self.walls.partition_point(|&wall| wall < x);
        self.walls.get(i).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> ObstacleField {
        ObstacleField::new(&Settings::default())
    }

    #[test]
    fn test_starts_with_sentinel() {
        let f = field();
        assert_eq!(f.walls, VecDeque::from([-1000.0]));
        assert!(!f.collision(0.0));
    }

    #[test]
    fn test_collision_boundary() {
        let mut f = field();
        f.walls = VecDeque::from([-1000.0, 100.0]);
        assert!(!f.collision(95.0));
        assert!(f.collision(96.0));
    }

    #[test]
    fn test_certain_spawn_lands_at_view_edge() {
        let mut f = field();
        f.spawn_prob = 1000.0;
        let mut rng = Pcg32::seed_from_u64(7);
        let spawned = f.update(0.016, 128.3, &mut rng);
        assert_eq!(spawned, Some(241.0));
        // The sentinel is behind the view, so the new wall replaces it
        assert_eq!(f.walls, VecDeque::from([241.0]));
    }

    #[test]
    fn test_spacing_blocks_spawn() {
        let mut f = field();
        f.spawn_prob = 1000.0;
        let mut rng = Pcg32::seed_from_u64(8);
        f.walls = VecDeque::from([-1000.0, 100.0]);
        // wall_end 132 + 48 = 180, camera end 180: no room
        assert_eq!(f.update(0.016, 68.0, &mut rng), None);
        assert_eq!(f.update(0.016, 69.0, &mut rng), Some(181.0));
    }

    #[test]
    fn test_zero_probability_never_spawns() {
        let mut f = field();
        f.spawn_prob = 0.0;
        let mut rng = Pcg32::seed_from_u64(9);
        for i in 0..10_000 {
            assert_eq!(f.update(0.1, i as f32 * 10.0, &mut rng), None);
        }
        assert_eq!(f.walls.len(), 1);
    }

    #[test]
    fn test_prune_keeps_last_wall() {
        let mut f = field();
        f.spawn_prob = 0.0;
        f.walls = VecDeque::from([-1000.0, 100.0, 300.0]);
        let mut rng = Pcg32::seed_from_u64(10);
        // Camera begin at 388: every wall is behind
        f.update(0.016, 500.0, &mut rng);
        assert_eq!(f.walls, VecDeque::from([300.0]));
    }

    #[test]
    fn test_prune_waits_for_trailing_edge() {
        let mut f = field();
        f.spawn_prob = 0.0;
        f.walls = VecDeque::from([-1000.0, 100.0, 300.0]);
        let mut rng = Pcg32::seed_from_u64(11);
        // Camera begin at 132: wall 100 ends exactly there
        f.update(0.016, 244.0, &mut rng);
        assert_eq!(f.walls, VecDeque::from([100.0, 300.0]));
    }

    #[test]
    fn test_push_wall_respects_spacing() {
        let mut f = field();
        assert!(f.push_wall(100.0));
        assert!(!f.push_wall(150.0));
        assert!(!f.push_wall(f32::NAN));
        assert!(f.push_wall(181.0));
        assert_eq!(f.next_wall(101.0), Some(181.0));
        assert_eq!(f.next_wall(200.0), None);
    }

    proptest! {
        #[test]
        fn prop_walls_sorted_and_spaced(
            seed in any::<u64>(),
            steps in proptest::collection::vec((0.0f32..0.1, -5.0f32..40.0), 1..300),
        ) {
            let mut f = field();
            f.spawn_prob = 20.0;
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut camera_x = 128.0;
            for (dt, dx) in steps {
                camera_x += dx;
                f.update(dt, camera_x, &mut rng);
                prop_assert!(!f.walls.is_empty());
                for (a, b) in f.walls.iter().zip(f.walls.iter().skip(1)) {
                    prop_assert!(b - a >= f.min_spacing, "walls {} and {}", a, b);
                }
            }
        }
    }
}
