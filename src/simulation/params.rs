//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt`,
//! - gravitational acceleration (applied along -y),
//! - shared sphere radius and restitution,
//! - half extent of the bounding box,
//! - number of collision substeps per step and the random seed

/// Reference constants of the bouncing-sphere scene
pub const DEFAULT_DT: f32 = 0.002;
pub const DEFAULT_GRAVITY: f32 = 9.8;
pub const DEFAULT_RADIUS: f32 = 0.8;
pub const DEFAULT_RESTITUTION: f32 = 0.8;
pub const DEFAULT_BOX_HALF_EXTENT: f32 = 5.0;
pub const DEFAULT_SUBSTEPS: usize = 5;
pub const DEFAULT_SEED: u64 = 2022;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f32, // step size
    pub gravity: f32, // downward acceleration magnitude
    pub radius: f32, // shared sphere radius
    pub restitution: f32, // fraction of velocity kept after a bounce
    pub box_half_extent: f32, // walls sit at +/- this on every axis
    pub substeps: usize, // collision passes per step, independent of dt
    pub seed: u64, // deterministic seed
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            gravity: DEFAULT_GRAVITY,
            radius: DEFAULT_RADIUS,
            restitution: DEFAULT_RESTITUTION,
            box_half_extent: DEFAULT_BOX_HALF_EXTENT,
            substeps: DEFAULT_SUBSTEPS,
            seed: DEFAULT_SEED,
        }
    }
}
