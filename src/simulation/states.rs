//! Core state types for the sphere simulation
//!
//! - `Body`   one rigid sphere (position, velocity, cosmetic color)
//! - `System` the fixed body set plus the current simulation time `t`
//!
//! The radius is shared by every body and lives in `Parameters`.
//! The body set is sized once at initialization and never grows or shrinks;
//! only positions and velocities change afterwards.

use crate::transform::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: Vec3, // position
    pub v: Vec3, // velocity
    pub color: Vec3, // rgb in [0, 1], only read by the renderer
}

impl Body {
    pub fn new(x: Vec3, v: Vec3, color: Vec3) -> Self {
        Self { x, v, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // fixed collection of spheres
    pub t: f32, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Total kinetic energy assuming unit mass per body
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(|b| 0.5 * b.v.norm_squared()).sum()
    }

    /// Snapshot of every position, in body order
    pub fn positions(&self) -> Vec<Vec3> {
        self.bodies.iter().map(|b| b.x).collect()
    }
}
