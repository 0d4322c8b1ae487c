//! Game state and run lifecycle
//!
//! A [`GameState`] owns everything a run mutates. Hosts only ever see
//! [`Snapshot`]s and [`GameEvent`]s.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::effects::{Effects, Ghost};
use super::obstacles::ObstacleField;
use super::runner::{JumpEvent, Runner};
use super::world::Scene;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Runner is moving
    Running,
    /// Runner hit a wall; terminal
    GameOver,
}

/// Things the host reacts to (ghost effect, sound, game-over screen)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump(JumpEvent),
    GameOver { distance: f32, score: u32 },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds survived
    pub elapsed: f64,
    pub runner: Runner,
    pub camera: Camera,
    pub scene: Scene,
    pub obstacles: ObstacleField,
    pub effects: Effects,
    /// Events raised since the last [`GameState::drain_events`]
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Start a run with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Settings::default())
    }

    /// Start a run with custom tuning
    pub fn with_settings(seed: u64, settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::build(seed, settings))
    }

    fn build(seed: u64, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let scene = Scene::new(&settings, &mut rng);
        log::info!(
            "Run started (seed {seed}, {} columns, spawn rate {}/s)",
            scene.columns(),
            settings.wall_spawn_prob
        );
        Self {
            seed,
            phase: GamePhase::Running,
            time_ticks: 0,
            elapsed: 0.0,
            runner: Runner::new(&settings),
            camera: Camera::new(&settings),
            scene,
            obstacles: ObstacleField::new(&settings),
            effects: Effects::new(&settings),
            events: Vec::new(),
            rng,
            settings,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Whole seconds of simulated time survived
    ///
    /// Stalled frames count as one clamped step, not their wall-clock gap.
    pub fn score(&self) -> u32 {
        self.elapsed.floor() as u32
    }

    /// Apply a jump right away (keyboard/touch handlers call this)
    ///
    /// Leaves a ghost at the take-off point and raises [`GameEvent::Jump`].
    /// Ignored once the run is over.
    pub fn jump(&mut self) -> Option<JumpEvent> {
        if self.is_over() {
            return None;
        }
        let event = self.runner.jump();
        self.effects.add(&event);
        self.events.push(GameEvent::Jump(event));
        Some(event)
    }

    /// Take the events raised so far
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            runner: RunnerView {
                x: self.runner.pos.x,
                y: self.runner.pos.y,
                frame: self.runner.anim.frame(),
            },
            camera: CameraView {
                x: self.camera.x,
                y: self.camera.y,
            },
            scene: SceneView {
                origin: self.scene.origin,
                ceiling: self.scene.ceiling.iter().copied().collect(),
                floor: self.scene.floor.iter().copied().collect(),
                background: self
                    .scene
                    .background
                    .iter()
                    .map(|row| row.iter().copied().collect())
                    .collect(),
            },
            walls: self.obstacles.walls.iter().copied().collect(),
            ghosts: self.effects.ghosts.iter().cloned().collect(),
            score: self.score(),
            game_over: self.is_over(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerView {
    pub x: f32,
    pub y: f32,
    pub frame: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneView {
    pub origin: f32,
    pub ceiling: Vec<u32>,
    pub floor: Vec<u32>,
    pub background: Vec<Vec<u32>>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub runner: RunnerView,
    pub camera: CameraView,
    pub scene: SceneView,
    pub walls: Vec<f32>,
    pub ghosts: Vec<Ghost>,
    pub score: u32,
    pub game_over: bool,
}
