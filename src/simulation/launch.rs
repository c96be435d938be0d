//! Launch-state generation and the spawn scheduler
//!
//! A `LaunchProfile` produces the randomized initial state for each spawned
//! particle. Two sources exist, selected per scenario:
//! - `UniformLaunch` draws every quantity uniformly from configured ranges
//! - `NoiseLaunch` reads lanes of a `NoiseField` and advances its cursor
//!   once per spawn, so consecutive launches drift smoothly instead of
//!   jumping independently
//!
//! `launch` is the timer-driven scheduler: once the next-launch deadline has
//! passed it spawns exactly one particle at the origin and draws a fresh
//! deadline from the profile.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::simulation::noise_field::NoiseField;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle, Rgb, World};

/// Box tint used when a scenario is not colorizing.
pub const CLASSIC_YELLOW: Rgb = [1.0, 0.9, 0.1];

/// Randomized initial state for one spawn.
#[derive(Debug, Clone)]
pub struct LaunchState {
    pub vel: NVec3,     // initial velocity (m/s), vertical component positive
    pub rot_vel: NVec3, // angular velocity about x and z (rad/s)
    pub color: Rgb,
    pub interval: f64, // seconds until the launch after this one
}

/// Launch ranges shared by both profiles: [min, max) per velocity axis
/// plus the inter-launch interval.
#[derive(Debug, Clone)]
pub struct LaunchRanges {
    pub vel_x: [f64; 2],
    pub vel_y: [f64; 2],
    pub vel_z: [f64; 2],
    pub interval: [f64; 2],
    pub colored: bool,
}

/// Source of randomized launch states.
///
/// Implementations own their generator state, so a fixed seed reproduces
/// the same spawn sequence run after run.
pub trait LaunchProfile {
    /// Produce the state for the next spawn, advancing internal generator
    /// state exactly once.
    fn next_state(&mut self) -> LaunchState;
}

/// Uniform draw over `range`, tolerant of degenerate ranges where
/// min >= max (returns min instead of panicking).
pub fn sample_range(rng: &mut StdRng, range: [f64; 2]) -> f64 {
    if range[0] >= range[1] {
        range[0]
    } else {
        rng.gen_range(range[0]..range[1])
    }
}

fn lerp(range: [f64; 2], t: f64) -> f64 {
    range[0] + (range[1] - range[0]) * t
}

fn tint(rng: &mut StdRng, colored: bool) -> Rgb {
    if colored {
        [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()]
    } else {
        CLASSIC_YELLOW
    }
}

// ============================================================
// Uniform profile
// ============================================================

pub struct UniformLaunch {
    rng: StdRng,
    ranges: LaunchRanges,
}

impl UniformLaunch {
    pub fn new(seed: u64, ranges: LaunchRanges) -> Self {
        Self {
            // Offset stream so launch draws never share the world rng.
            rng: StdRng::seed_from_u64(seed.wrapping_add(7919)),
            ranges,
        }
    }
}

impl LaunchProfile for UniformLaunch {
    fn next_state(&mut self) -> LaunchState {
        let vel = NVec3::new(
            sample_range(&mut self.rng, self.ranges.vel_x),
            sample_range(&mut self.rng, self.ranges.vel_y),
            sample_range(&mut self.rng, self.ranges.vel_z),
        );
        // Boxes tumble about x and z only.
        let rot_vel = NVec3::new(self.rng.gen_range(0.0..TAU), 0.0, self.rng.gen_range(0.0..TAU));
        let color = tint(&mut self.rng, self.ranges.colored);
        let interval = sample_range(&mut self.rng, self.ranges.interval);
        LaunchState {
            vel,
            rot_vel,
            color,
            interval,
        }
    }
}

// ============================================================
// Noise profile
// ============================================================

// Lane offsets keep the per-quantity streams decorrelated while sharing
// one cursor.
const LANE_VEL_X: f64 = 0.0;
const LANE_VEL_Y: f64 = 37.0;
const LANE_VEL_Z: f64 = 74.0;
const LANE_ROT_X: f64 = 111.0;
const LANE_ROT_Z: f64 = 148.0;
const LANE_INTERVAL: f64 = 185.0;

pub struct NoiseLaunch {
    field: NoiseField,
    rng: StdRng, // color draws only, never perturbs the field cursor
    ranges: LaunchRanges,
}

impl NoiseLaunch {
    pub fn new(seed: u64, noise_step: f64, ranges: LaunchRanges) -> Self {
        Self {
            field: NoiseField::new(seed as u32, noise_step),
            rng: StdRng::seed_from_u64(seed.wrapping_add(7919)),
            ranges,
        }
    }
}

impl LaunchProfile for NoiseLaunch {
    fn next_state(&mut self) -> LaunchState {
        let vel = NVec3::new(
            lerp(self.ranges.vel_x, self.field.lane(LANE_VEL_X)),
            lerp(self.ranges.vel_y, self.field.lane(LANE_VEL_Y)),
            lerp(self.ranges.vel_z, self.field.lane(LANE_VEL_Z)),
        );
        let rot_vel = NVec3::new(
            self.field.lane(LANE_ROT_X) * TAU,
            0.0,
            self.field.lane(LANE_ROT_Z) * TAU,
        );
        let color = tint(&mut self.rng, self.ranges.colored);
        let interval = lerp(self.ranges.interval, self.field.lane(LANE_INTERVAL));
        self.field.advance();
        LaunchState {
            vel,
            rot_vel,
            color,
            interval,
        }
    }
}

// ============================================================
// Scheduler
// ============================================================

/// Timer-driven spawn scheduler, at most one spawn per call.
///
/// A particle launches when no deadline exists yet (first frame) or when
/// `now` has moved past the stored deadline; the next deadline is then
/// drawn from the profile. If a population cap is set, the oldest
/// particles leave first.
pub fn launch(world: &mut World, profile: &mut dyn LaunchProfile, params: &Parameters, now: f64) {
    if let Some(deadline) = world.next_launch {
        if now <= deadline {
            return;
        }
    }

    let state = profile.next_state();
    let id = world.next_id;
    world.next_id += 1;
    world.particles.push(Particle {
        id,
        pos: NVec3::zeros(),
        vel: state.vel,
        accel: NVec3::new(0.0, params.gravity, 0.0),
        rot: NVec3::zeros(),
        rot_vel: state.rot_vel,
        color: state.color,
        claimed: false,
        last_update: now,
    });

    if let Some(cap) = params.particle_cap {
        while world.particles.len() > cap {
            world.particles.remove(0);
            world.evicted += 1;
        }
    }

    world.next_launch = Some(now + state.interval);
}
