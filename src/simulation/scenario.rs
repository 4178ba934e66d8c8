//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - camera and light used to answer the renderer's matrix queries
//!
//! The scenario is the single owner of body state: the renderer only reads
//! it between calls to `step` / `advance_frame`.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimResult;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, UniformGravity};
use crate::simulation::integrator::{step, step_n};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::transform::Vec3;
use crate::visualization::frame::{BodyInstance, Camera, FrameData, Light};

/// Place `grid^3` bodies on a regular lattice centred on the origin, with
/// velocities uniform in `[-1, 1]` and colors uniform in `[0, 1]` per channel
///
/// Bodies are numbered x-fastest. The generator is seeded from `seed` and
/// drawn in body order (velocity xyz, then color rgb), so the same seed always
/// yields bit-identical bodies. A `grid` whose cube overflows `usize` yields
/// no bodies.
pub fn grid_bodies(seed: u64, grid: usize, spacing: f32) -> Vec<Body> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let n = match grid.checked_mul(grid).and_then(|g2| g2.checked_mul(grid)) {
        Some(n) => n,
        None => return Vec::new(),
    };
    let centre = (grid as f32 - 1.0) * 0.5;

    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let ix = (i % grid) as f32;
        let iy = ((i / grid) % grid) as f32;
        let iz = (i / (grid * grid)) as f32;

        let x = Vec3::new(
            (ix - centre) * spacing,
            (iy - centre) * spacing,
            (iz - centre) * spacing,
        );
        let v = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        let color = Vec3::new(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
        );

        bodies.push(Body::new(x, v, color));
    }
    bodies
}

/// Fully-initialized runtime bundle built from a [`ScenarioConfig`]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub camera: Camera,
    pub light: Light,
}

impl Scenario {
    /// Reference scene for `seed`: 4x4x4 grid, default constants, gravity only
    pub fn initialize(seed: u64) -> Self {
        let mut cfg = ScenarioConfig::default();
        cfg.parameters.seed = seed;
        Self::from_config(cfg)
    }

    /// Validate `cfg` and build the scenario from it
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        cfg.validate()?;
        Ok(Self::from_config(cfg))
    }

    fn from_config(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            gravity: p_cfg.gravity,
            radius: p_cfg.radius,
            restitution: p_cfg.restitution,
            box_half_extent: p_cfg.box_half_extent,
            substeps: p_cfg.substeps,
            seed: p_cfg.seed,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            warmup_steps: cfg.engine.warmup_steps,
            steps_per_frame: cfg.engine.steps_per_frame,
            frames: cfg.engine.frames,
        };

        // Bodies: explicit list wins over the seeded grid
        let bodies = match &cfg.bodies {
            Some(list) => list.iter().map(body_from_config).collect(),
            None => grid_bodies(p_cfg.seed, p_cfg.grid, p_cfg.grid_spacing),
        };
        debug!(
            "scenario: {} bodies, seed {}, box half extent {}",
            bodies.len(),
            parameters.seed,
            parameters.box_half_extent
        );

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);

        // Forces: gravity is the only acceleration of the reference scene
        let forces = AccelSet::new().with(UniformGravity {
            g: parameters.gravity,
        });

        let camera = Camera::from_config(&cfg.camera);
        let light = Light::from_config(&cfg.light);

        Self {
            engine,
            parameters,
            system,
            forces,
            camera,
            light,
        }
    }

    /// One simulation tick of `parameters.dt`
    pub fn step(&mut self) {
        step(&mut self.system, &self.forces, &self.parameters);
    }

    /// Initial burst run once before the first frame
    pub fn warm_up(&mut self) {
        info!("warming up: {} steps", self.engine.warmup_steps);
        step_n(&mut self.system, &self.forces, &self.parameters, self.engine.warmup_steps);
    }

    /// Steps between two rendered frames
    pub fn advance_frame(&mut self) {
        step_n(&mut self.system, &self.forces, &self.parameters, self.engine.steps_per_frame);
    }

    /// Position, shared radius and color of every body, in body order
    pub fn body_instances(&self) -> Vec<BodyInstance> {
        self.system
            .bodies
            .iter()
            .map(|b| BodyInstance {
                position: b.x,
                radius: self.parameters.radius,
                color: b.color,
            })
            .collect()
    }

    /// Everything the renderer needs for one frame
    pub fn frame(&self, aspect: f32) -> FrameData {
        FrameData {
            projection: self.camera.projection_matrix(aspect),
            view: self.camera.view_matrix(),
            light_view_projection: self.light.view_projection(),
            bodies: self.body_instances(),
        }
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    Body::new(Vec3::from(bc.x), Vec3::from(bc.v), Vec3::from(bc.color))
}
