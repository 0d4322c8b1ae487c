//! Scene stream
//!
//! A fixed-width window of tile columns over an endless corridor. Each column
//! is a ceiling tile, a floor tile and one background tile per interior row;
//! tiles are indices into the host's image pools. When the leftmost column
//! scrolls out of view it is dropped and a fresh column is generated on the
//! right, so the window length never changes.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// World x of the leftmost column; advances in whole tiles
    pub origin: f32,
    pub ceiling: VecDeque<u32>,
    pub floor: VecDeque<u32>,
    /// One sequence per background row, top to bottom
    pub background: Vec<VecDeque<u32>>,
    tile_w: f32,
    half_view_w: f32,
    ceiling_pool: u32,
    floor_pool: u32,
    background_pool: u32,
}

impl Scene {
    /// Build a window pre-filled to cover the viewport
    ///
    /// Tile pools must be non-empty; [`GameState::with_settings`] checks that.
    ///
    /// [`GameState::with_settings`]: super::GameState::with_settings
    pub(crate) fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let columns = settings.scene_columns();
        let mut scene = Self {
            origin: 0.0,
            ceiling: VecDeque::with_capacity(columns),
            floor: VecDeque::with_capacity(columns),
            background: (0..settings.background_rows())
                .map(|_| VecDeque::with_capacity(columns))
                .collect(),
            tile_w: settings.tile_w,
            half_view_w: settings.half_view_w(),
            ceiling_pool: settings.ceiling_tiles,
            floor_pool: settings.floor_tiles,
            background_pool: settings.background_tiles,
        };
        for _ in 0..columns {
            scene.push_column(rng);
        }
        scene
    }

    /// Number of columns in the window
    pub fn columns(&self) -> usize {
        self.ceiling.len()
    }

    /// World x of the window's right edge
    pub fn end(&self) -> f32 {
        self.origin + self.columns() as f32 * self.tile_w
    }

    /// Scroll the window after the camera moved
    ///
    /// At most one column is recycled per call. Returns whether it was.
    pub fn update<R: Rng + ?Sized>(&mut self, camera_x: f32, rng: &mut R) -> bool {
        if self.origin + self.tile_w < camera_x - self.half_view_w {
            self.origin += self.tile_w;
            self.pop_column();
            self.push_column(rng);
            true
        } else {
            false
        }
    }

    fn push_column<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ceiling.push_back(rng.random_range(0..self.ceiling_pool));
        self.floor.push_back(rng.random_range(0..self.floor_pool));
        for row in &mut self.background {
            row.push_back(rng.random_range(0..self.background_pool));
        }
    }

    fn pop_column(&mut self) {
        self.ceiling.pop_front();
        self.floor.pop_front();
        for row in &mut self.background {
            row.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn settings() -> Settings {
        Settings {
            ceiling_tiles: 3,
            floor_tiles: 2,
            background_tiles: 5,
            ..Default::default()
        }
    }

    fn assert_window_shape(scene: &Scene, columns: usize) {
        assert_eq!(scene.ceiling.len(), columns);
        assert_eq!(scene.floor.len(), columns);
        assert!(scene.background.iter().all(|row| row.len() == columns));
    }

    #[test]
    fn test_prefilled_window() {
        let mut rng = Pcg32::seed_from_u64(1);
        let scene = Scene::new(&settings(), &mut rng);
        assert_window_shape(&scene, 8);
        assert_eq!(scene.background.len(), 2);
        assert_eq!(scene.origin, 0.0);
        assert_eq!(scene.end(), 256.0);
    }

    #[test]
    fn test_tiles_come_from_pools() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut scene = Scene::new(&settings(), &mut rng);
        for i in 0..200 {
            scene.update(i as f32 * 32.0, &mut rng);
        }
        assert!(scene.ceiling.iter().all(|&t| t < 3));
        assert!(scene.floor.iter().all(|&t| t < 2));
        assert!(scene.background.iter().flatten().all(|&t| t < 5));
    }

    #[test]
    fn test_no_scroll_until_column_leaves_view() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut scene = Scene::new(&settings(), &mut rng);
        // Left viewport edge at 32: the first column ends exactly there
        assert!(!scene.update(32.0 + 112.0, &mut rng));
        assert_eq!(scene.origin, 0.0);

        assert!(scene.update(32.5 + 112.0, &mut rng));
        assert_eq!(scene.origin, 32.0);
        assert_window_shape(&scene, 8);
    }

    #[test]
    fn test_recycles_one_column_per_update() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut scene = Scene::new(&settings(), &mut rng);
        let second = scene.ceiling[1];

        // A big camera jump still only moves the window by one tile
        assert!(scene.update(10_000.0, &mut rng));
        assert_eq!(scene.origin, 32.0);
        assert_eq!(scene.ceiling[0], second);
        assert_window_shape(&scene, 8);
    }

    #[test]
    fn test_window_covers_viewport_when_following() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut scene = Scene::new(&settings(), &mut rng);
        let mut camera_x = 128.0;
        for _ in 0..5000 {
            camera_x += 64.0 / 60.0;
            scene.update(camera_x, &mut rng);
            assert!(scene.end() >= camera_x + 112.0);
            assert!(scene.origin + 32.0 >= camera_x - 112.0 - 32.0);
        }
    }

    proptest! {
        #[test]
        fn prop_window_length_is_constant(
            seed in any::<u64>(),
            moves in proptest::collection::vec(-50.0f32..200.0, 1..200),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut scene = Scene::new(&settings(), &mut rng);
            let mut camera_x = 128.0;
            for dx in moves {
                camera_x += dx;
                scene.update(camera_x, &mut rng);
                prop_assert_eq!(scene.ceiling.len(), 8);
                prop_assert_eq!(scene.floor.len(), 8);
                for row in &scene.background {
                    prop_assert_eq!(row.len(), 8);
                }
            }
        }
    }
}
