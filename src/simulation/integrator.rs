//! Fixed-step integrator for the sphere system
//!
//! One call to [`step`] is one tick of the reference simulation:
//! kick by the summed accelerations, run the collision substeps on
//! velocities, then drift positions once.

use super::collision::{reflect_walls, resolve_contacts};
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::System;
use crate::transform::Vec3;

/// Advance the system by one step of `params.dt`
///
/// Order matters and is part of the observable trajectory:
/// 1. `v += a * dt` for the accelerations in `forces`
/// 2. `params.substeps` passes of contact impulses followed by wall reflection
/// 3. `x += v * dt` once, with the post-substep velocity
pub fn step(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }
    let dt = params.dt;

    // a_n from the current state
    let mut acc = vec![Vec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    // Kick: v += dt * a
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += *a * dt;
    }

    // Substeps touch velocity only
    for _ in 0..params.substeps {
        resolve_contacts(&mut sys.bodies, params.radius, params.restitution);
        reflect_walls(
            &mut sys.bodies,
            params.radius,
            params.restitution,
            params.box_half_extent,
        );
    }

    // Drift: x += dt * v
    for b in sys.bodies.iter_mut() {
        b.x += b.v * dt;
    }

    // advance time
    sys.t += dt;
}

/// Run `count` consecutive steps
pub fn step_n(sys: &mut System, forces: &AccelSet, params: &Parameters, count: usize) {
    for _ in 0..count {
        step(sys, forces, params);
    }
}
