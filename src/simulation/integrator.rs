//! Explicit-Euler kinematics for airborne particles
//!
//! Each particle advances by its own elapsed time since its last step,
//! never by a shared frame delta, so filtered or staggered iteration
//! cannot change a trajectory. A particle that has passed below ground
//! level is frozen on every axis and stops integrating; it stays in the
//! world until collected or evicted.

use super::states::{Particle, World};

/// Ground plane height. Particles at or above it keep integrating.
pub const GROUND_Y: f64 = 0.0;

/// Advance one particle to time `now` with a single Euler step:
/// x_n+1 = x_n + dt v_n, then v_n+1 = v_n + dt a, with dt taken from the
/// particle's own `last_update`. Orientation advances the same way.
///
/// A particle below ground is left untouched, `last_update` included; the
/// rest state is a freeze, not a collision response.
pub fn euler_step(p: &mut Particle, now: f64) {
    if p.pos.y < GROUND_Y {
        return;
    }
    let dt = now - p.last_update;
    if dt <= 0.0 {
        return;
    }
    p.last_update = now;

    // Drift before kick: the position update sees the pre-step velocity.
    p.pos += dt * p.vel;
    p.vel += dt * p.accel;
    p.rot += dt * p.rot_vel;
}

/// Advance every particle in the world to time `now`.
pub fn integrate_particles(world: &mut World, now: f64) {
    for p in world.particles.iter_mut() {
        euler_step(p, now);
    }
}
