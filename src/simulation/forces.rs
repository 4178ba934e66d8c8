//! Acceleration contributors for the sphere engine
//!
//! Defines the acceleration trait the integrator sums before each step,
//! plus the uniform gravity term of the reference scene

use crate::simulation::states::System;
use crate::transform::Vec3;

/// Field terms summed into the velocity kick at the start of each step
///
/// Contacts and walls are resolved separately by `collision`; only smooth
/// field terms such as [`UniformGravity`] live here. Every sphere has unit
/// mass, so a term writes accelerations directly.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Number of registered terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Overwrite `out[i]` with the summed pull on sphere `i` at time `t`
    pub fn accumulate_accels(&self, t: f32, sys: &System, out: &mut [Vec3]) {
        for a in out.iter_mut() {
            *a = Vec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// A field acting on the spheres of a [`System`]
///
/// `out` is shared with the other terms: add into it, never assign.
pub trait Acceleration {
    fn acceleration(&self, t: f32, sys: &System, out: &mut [Vec3]);
}

/// Constant downward pull along -y
pub struct UniformGravity {
    pub g: f32, // magnitude, 9.8 in the reference scene
}

impl Acceleration for UniformGravity {
    fn acceleration(&self, _t: f32, _sys: &System, out: &mut [Vec3]) {
        for a in out.iter_mut() {
            a.y -= self.g;
        }
    }
}
