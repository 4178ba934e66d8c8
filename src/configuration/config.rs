//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame pacing (warm-up burst, steps per frame, frames)
//! - [`ParametersConfig`] – step size, physical constants, box, seed and grid layout
//! - [`CameraConfig`]     – viewer placement and projection
//! - [`LightConfig`]      – shadow-casting light placement and projection
//! - [`BodyConfig`]       – optional explicit initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default matching the reference scene, so an empty
//! document is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   warmup_steps: 1000      # steps run once before the first frame
//!   steps_per_frame: 10
//!   frames: 600
//!
//! parameters:
//!   dt: 0.002
//!   gravity: 9.8
//!   radius: 0.8
//!   restitution: 0.8
//!   box_half_extent: 5.0
//!   substeps: 5
//!   seed: 2022
//!   grid: 4                 # grid^3 bodies
//!   grid_spacing: 2.0
//!
//! camera:
//!   position: [0.0, 0.0, -14.0]
//!   rotation: [0.0, 0.0, 0.0]   # pitch, yaw, roll in degrees
//!   near: 0.1
//!   far: 100.0
//!   fov: 60.0                   # vertical, degrees
//!   aspect: 1.0
//!
//! # optional, replaces the seeded grid
//! bodies:
//!   - x: [-0.7, 0.0, 0.0]
//!     v: [ 1.0, 0.0, 0.0]
//!     color: [1.0, 0.0, 0.0]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::engine::{DEFAULT_FRAMES, DEFAULT_STEPS_PER_FRAME, DEFAULT_WARMUP_STEPS};
use crate::simulation::params::{
    DEFAULT_BOX_HALF_EXTENT, DEFAULT_DT, DEFAULT_GRAVITY, DEFAULT_RADIUS, DEFAULT_RESTITUTION,
    DEFAULT_SEED, DEFAULT_SUBSTEPS,
};

/// Frame pacing of the driver
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub warmup_steps: usize, // steps run once before the first frame
    pub steps_per_frame: usize, // steps between rendered frames
    pub frames: usize, // frames run by the CLI
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            warmup_steps: DEFAULT_WARMUP_STEPS,
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            frames: DEFAULT_FRAMES,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f32, // time step size
    pub gravity: f32, // downward acceleration
    pub radius: f32, // shared sphere radius
    pub restitution: f32, // velocity kept after a bounce
    pub box_half_extent: f32, // walls at +/- this value
    pub substeps: usize, // collision passes per step
    pub seed: u64, // deterministic seed to make runs reproducible
    pub grid: usize, // bodies per grid edge
    pub grid_spacing: f32, // distance between grid neighbours
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            gravity: DEFAULT_GRAVITY,
            radius: DEFAULT_RADIUS,
            restitution: DEFAULT_RESTITUTION,
            box_half_extent: DEFAULT_BOX_HALF_EXTENT,
            substeps: DEFAULT_SUBSTEPS,
            seed: DEFAULT_SEED,
            grid: 4,
            grid_spacing: 2.0,
        }
    }
}

/// Viewer camera, angles in degrees
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub rotation: [f32; 3], // pitch, yaw, roll
    pub near: f32,
    pub far: f32,
    pub fov: f32, // vertical field of view
    pub aspect: f32, // width / height used when the caller has no surface size
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -14.0],
            rotation: [0.0, 0.0, 0.0],
            near: 0.1,
            far: 100.0,
            fov: 60.0,
            aspect: 1.0,
        }
    }
}

/// Shadow-casting light, looking from `position` at `target`
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub near: f32,
    pub far: f32,
    pub fov: f32, // degrees
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: [6.0, 10.0, -6.0],
            target: [0.0, 0.0, 0.0],
            near: 1.0,
            far: 40.0,
            fov: 90.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f32; 3], // initial position
    #[serde(default)]
    pub v: [f32; 3], // initial velocity
    #[serde(default = "default_body_color")]
    pub color: [f32; 3],
}

fn default_body_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // frame pacing
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub bodies: Option<Vec<BodyConfig>>, // explicit bodies instead of the seeded grid
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string and validate it
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a scenario file and validate it
    pub fn from_path(path: &Path) -> SimResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that cannot describe a valid scene
    pub fn validate(&self) -> SimResult<()> {
        let p = &self.parameters;
        let c = &self.camera;
        let l = &self.light;

        if !(p.dt > 0.0) {
            return Err(invalid(format!("dt must be positive, got {}", p.dt)));
        }
        if !(p.radius > 0.0) {
            return Err(invalid(format!("radius must be positive, got {}", p.radius)));
        }
        if !(0.0..=1.0).contains(&p.restitution) {
            return Err(invalid(format!("restitution must be in [0, 1], got {}", p.restitution)));
        }
        if !(p.box_half_extent > p.radius) {
            return Err(invalid(format!(
                "box_half_extent {} must exceed radius {}",
                p.box_half_extent, p.radius
            )));
        }
        if p.substeps == 0 {
            return Err(invalid("substeps must be at least 1".to_string()));
        }
        if self.bodies.is_none() {
            validate_grid(p)?;
        }
        if let Some(bodies) = &self.bodies {
            if bodies.is_empty() {
                return Err(invalid("bodies list is empty".to_string()));
            }
        }

        if !(c.near > 0.0 && c.far > c.near) {
            return Err(invalid(format!("camera needs far > near > 0, got near {} far {}", c.near, c.far)));
        }
        if !(c.fov > 0.0 && c.fov < 180.0) || !(c.aspect > 0.0) {
            return Err(invalid(format!("camera fov {} / aspect {} out of range", c.fov, c.aspect)));
        }

        if !(l.near > 0.0 && l.far > l.near) {
            return Err(invalid(format!("light needs far > near > 0, got near {} far {}", l.near, l.far)));
        }
        if !(l.fov > 0.0 && l.fov < 180.0) {
            return Err(invalid(format!("light fov {} out of range", l.fov)));
        }
        // look_at needs a direction that is neither zero nor vertical
        let dx = l.target[0] - l.position[0];
        let dz = l.target[2] - l.position[2];
        if dx == 0.0 && dz == 0.0 {
            return Err(invalid("light must not look straight up or down".to_string()));
        }

        Ok(())
    }
}

/// The generated lattice must be indexable and start with every sphere apart
/// and inside the walls
fn validate_grid(p: &ParametersConfig) -> SimResult<()> {
    if p.grid == 0 {
        return Err(invalid("grid must be at least 1".to_string()));
    }
    if p.grid.checked_mul(p.grid).and_then(|g2| g2.checked_mul(p.grid)).is_none() {
        return Err(invalid(format!("grid {} overflows the body count", p.grid)));
    }
    if !(p.grid_spacing > 2.0 * p.radius) {
        return Err(invalid(format!(
            "grid_spacing {} must exceed the sphere diameter {}",
            p.grid_spacing,
            2.0 * p.radius
        )));
    }
    let reach = (p.grid - 1) as f32 * 0.5 * p.grid_spacing;
    let limit = p.box_half_extent - p.radius;
    if reach > limit {
        return Err(invalid(format!(
            "a {}^3 grid at spacing {} reaches {}, past the wall limit {}",
            p.grid, p.grid_spacing, reach, limit
        )));
    }
    Ok(())
}

fn invalid(msg: String) -> SimError {
    SimError::InvalidConfig(msg)
}
