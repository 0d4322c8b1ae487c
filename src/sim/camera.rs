//! Chase camera
//!
//! Keeps a fixed lead ahead of the runner using a bang-bang controller: the
//! camera is always either accelerating or braking at full `accel`.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::{sanitize_dt, sign};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Viewport center along the track
    pub x: f32,
    /// Fixed vertical center, for renderers
    pub y: f32,
    /// Current speed
    pub v: f32,
    /// Desired lead over the runner
    pub ahead: f32,
    /// Acceleration magnitude
    pub accel: f32,
}

impl Camera {
    pub fn new(settings: &Settings) -> Self {
        Self {
            x: settings.half_view_w() + settings.tile_w / 2.0,
            y: settings.tile_w - settings.view_h / 2.0 - settings.offset_y(),
            v: settings.camera_start_speed,
            ahead: settings.camera_ahead,
            accel: settings.camera_accel,
        }
    }

    /// Pursue `runner_x + ahead`
    ///
    /// `v` is the speed surplus over the runner and `x` the remaining
    /// positional error. `dx` is how far the camera travels (relative to the
    /// runner) while braking the surplus to zero. While the error is still
    /// ahead of the braking point, push the surplus further; otherwise brake.
    pub fn update(&mut self, dt: f32, runner_x: f32, runner_v: f32) {
        let dt = sanitize_dt(dt);

        let v = self.v - runner_v;
        let x = runner_x + self.ahead - self.x;
        let dx = sign(v) * 0.5 * v * v / self.accel;

        if x * dx >= 0.0 && dx.abs() <= x.abs() {
            self.v += sign(v) * self.accel * dt;
        } else {
            self.v -= sign(v) * self.accel * dt;
        }

        self.x += self.v * dt;
    }

    /// Left edge of the viewport
    #[inline]
    pub fn begin(&self, half_view_w: f32) -> f32 {
        self.x - half_view_w
    }

    /// Right edge of the viewport
    #[inline]
    pub fn end(&self, half_view_w: f32) -> f32 {
        self.x + half_view_w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RUNNER_V: f32 = 64.0;

    fn camera_at_lead(runner_x: f32) -> Camera {
        let mut cam = Camera::new(&Settings::default());
        cam.x = runner_x + cam.ahead;
        cam.v = RUNNER_V;
        cam
    }

    #[test]
    fn test_initial_position() {
        let cam = Camera::new(&Settings::default());
        assert_eq!(cam.x, 128.0);
        assert_eq!(cam.y, 32.0 - 63.0 - 1.0);
        assert_eq!(cam.v, 32.0);
    }

    #[test]
    fn test_accelerates_when_far_behind() {
        let mut cam = camera_at_lead(0.0);
        // Target is well ahead and speeds match: push toward it
        cam.x -= 100.0;
        cam.update(0.1, 0.0, RUNNER_V);
        assert!((cam.v - (RUNNER_V + 6.4)).abs() < 1e-4);
    }

    #[test]
    fn test_brakes_when_overshooting() {
        let mut cam = camera_at_lead(0.0);
        // Closing fast on a target only slightly ahead
        cam.x -= 1.0;
        cam.v = RUNNER_V + 40.0;
        cam.update(0.1, 0.0, RUNNER_V);
        assert!((cam.v - (RUNNER_V + 40.0 - 6.4)).abs() < 1e-4);
    }

    #[test]
    fn test_recovers_when_slower_than_runner() {
        let mut cam = camera_at_lead(0.0);
        cam.v = RUNNER_V - 20.0;
        cam.update(0.1, 0.0, RUNNER_V);
        // Surplus is negative and error zero: decelerating the negative
        // surplus raises the speed
        assert!(cam.v > RUNNER_V - 20.0);
    }

    #[test]
    fn test_zero_dt_only_holds_position() {
        let mut cam = camera_at_lead(10.0);
        let before = (cam.x, cam.v);
        cam.update(0.0, 10.0, RUNNER_V);
        assert_eq!((cam.x, cam.v), before);
    }

    #[test]
    fn test_settles_toward_lead() {
        let mut cam = Camera::new(&Settings::default());
        let mut runner_x = 0.0;
        let dt = 1.0 / 60.0;
        for _ in 0..60 * 20 {
            runner_x += RUNNER_V * dt;
            cam.update(dt, runner_x, RUNNER_V);
        }
        let error = runner_x + cam.ahead - cam.x;
        assert!(error.abs() < 4.0, "lead error {error}");
        assert!((cam.v - RUNNER_V).abs() < 8.0, "speed {}", cam.v);
    }

    proptest! {
        #[test]
        fn prop_speed_stays_bounded(steps in proptest::collection::vec(0.0f32..0.1, 1..400)) {
            let mut cam = camera_at_lead(0.0);
            let mut runner_x = 0.0;
            for dt in steps {
                runner_x += RUNNER_V * dt;
                cam.update(dt, runner_x, RUNNER_V);
                prop_assert!((cam.v - RUNNER_V).abs() < 40.0, "speed {}", cam.v);
                prop_assert!((runner_x + cam.ahead - cam.x).abs() < 24.0);
            }
        }
    }
}
