//! Velocity-only contact resolution
//!
//! Both passes run inside every collision substep and touch velocities only;
//! positions are integrated once per step by the integrator.

use crate::simulation::states::Body;

/// Resolve sphere-sphere contacts with inelastic impulses
///
/// Pairs are visited in ascending `(i, j)` order with `i < j` and applied
/// immediately, so a body hit twice in one pass sees the velocity left by the
/// earlier pair. Only closing pairs exchange an impulse.
pub fn resolve_contacts(bodies: &mut [Body], radius: f32, restitution: f32) {
    let n = bodies.len();
    if n < 2 {
        return;
    }

    let contact_dist = 2.0 * radius;
    let response = 0.5 + 0.5 * restitution;

    for i in 0..n {
        for j in (i + 1)..n {
            // r points from i to j
            let r = bodies[j].x - bodies[i].x;
            if r.norm() > contact_dist {
                continue;
            }

            // coincident centres give NaN here, left unguarded
            let dir = r.normalize();

            // positive when i moves towards j faster than j moves away
            let closing = dir.dot(&(bodies[i].v - bodies[j].v)).max(0.0);
            let impulse = dir * closing * response;

            bodies[i].v -= impulse;
            bodies[j].v += impulse;
        }
    }
}

/// Reflect velocities off the six walls of the box `[-half, half]^3`
///
/// A body whose centre is past `half - radius` on some axis gets the reflected,
/// restitution-scaled velocity on that axis, but only when that is less
/// outward than what it already has.
pub fn reflect_walls(bodies: &mut [Body], radius: f32, restitution: f32, half_extent: f32) {
    let limit = half_extent - radius;

    for b in bodies.iter_mut() {
        for axis in 0..3 {
            let x = b.x[axis];
            let v = b.v[axis];

            if x > limit {
                b.v[axis] = v.min(-v * restitution);
            }
            if x < -limit {
                b.v[axis] = v.max(-v * restitution);
            }
        }
    }
}
