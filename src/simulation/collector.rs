//! Collector agents: greedy target acquisition and fixed-step pursuit
//!
//! Every frame each collector runs one arm of a three-state loop:
//! - Idle: scan for the nearest unclaimed particle that is already falling
//!   (vel.y < 0) and low enough (pos.y below the claim ceiling), and claim it
//! - Pursuing: step horizontally toward the claim at a fixed per-frame
//!   speed (never dt-scaled), collecting it inside the capture radius
//! - Paused: sit out a short random cooldown after a capture
//!
//! Claims are single-writer. The scan skips particles that already carry a
//! claim, so two collectors can never converge on the same box; a claim
//! made by collector 0 is visible to collector 1 within the same frame.

use rand::rngs::StdRng;
use rand::Rng;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Collector, CollectorState, NVec3, Particle, World};

/// Run one frame of every collector, in stored order, against the live
/// particle set.
pub fn collectors_step(world: &mut World, params: &Parameters, now: f64) {
    let World {
        particles,
        collectors,
        rng,
        collected,
        ..
    } = world;
    for c in collectors.iter_mut() {
        step_collector(c, particles, rng, collected, params, now);
    }
}

fn step_collector(
    c: &mut Collector,
    particles: &mut Vec<Particle>,
    rng: &mut StdRng,
    collected: &mut u64,
    params: &Parameters,
    now: f64,
) {
    match c.state {
        CollectorState::Paused { until } => {
            if now < until {
                return; // cooling down: no scanning, no movement
            }
            // Cooldown over; rejoin the hunt this same frame.
            c.state = CollectorState::Idle;
            scan(c, particles, params);
        }
        CollectorState::Idle => {
            scan(c, particles, params);
        }
        CollectorState::Pursuing { target } => {
            pursue(c, particles, rng, collected, params, now, target);
        }
    }
}

/// Claim the nearest eligible particle, if any.
///
/// Eligible means unclaimed, descending (past its apex) and below the claim
/// ceiling. Nearest by squared distance; the strict comparison keeps the
/// earliest-inserted particle on ties. Movement starts next frame.
pub fn scan(c: &mut Collector, particles: &mut [Particle], params: &Parameters) {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in particles.iter().enumerate() {
        if p.claimed || p.vel.y >= 0.0 || p.pos.y >= params.claim_ceiling {
            continue;
        }
        let d2 = (p.pos - c.pos).norm_squared();
        match best {
            Some((_, best_d2)) if d2 >= best_d2 => {}
            _ => best = Some((i, d2)),
        }
    }
    if let Some((i, _)) = best {
        particles[i].claimed = true;
        c.state = CollectorState::Pursuing {
            target: particles[i].id,
        };
    }
}

fn pursue(
    c: &mut Collector,
    particles: &mut Vec<Particle>,
    rng: &mut StdRng,
    collected: &mut u64,
    params: &Parameters,
    now: f64,
    target: u64,
) {
    let idx = match particles.iter().position(|p| p.id == target) {
        Some(i) => i,
        None => {
            // The claim was evicted out from under us; rescan next frame.
            c.state = CollectorState::Idle;
            return;
        }
    };

    // Steer on the ground plane only; altitude is the particle's business.
    let mut dir = particles[idx].pos - c.pos;
    dir.y = 0.0;
    // Standing exactly under the box leaves no direction; hold position
    // rather than normalize a zero vector.
    let dir = dir.try_normalize(f64::EPSILON).unwrap_or_else(NVec3::zeros);
    c.pos += params.collector_speed * dir;

    // Contact uses the full 3D separation, so a box still high overhead is
    // not collected just because the collector stands beneath it.
    if (particles[idx].pos - c.pos).norm() < params.capture_radius {
        particles.remove(idx);
        *collected += 1;
        c.state = CollectorState::Paused {
            until: now + pause_jitter(rng, params.pause_max),
        };
    }
}

/// Uniform cooldown in [0, pause_max).
fn pause_jitter(rng: &mut StdRng, pause_max: f64) -> f64 {
    if pause_max <= 0.0 {
        0.0
    } else {
        rng.gen_range(0.0..pause_max)
    }
}
