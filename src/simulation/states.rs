//! Core state types for the falling-box world
//!
//! Defines the runtime entities:
//! - `Particle`: a launched box with kinematic and orientation state
//! - `Collector`: a ground agent that hunts descending particles
//! - `World`: owner of both populations plus the spawn scheduler state
//!
//! Membership is owned by the world alone: particles enter through the
//! spawn scheduler and leave through collection or FIFO eviction.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type NVec3 = Vector3<f64>;

/// Linear RGB triple used to tint a particle's box.
pub type Rgb = [f32; 3];

#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u64,          // unique, assigned in launch order
    pub pos: NVec3,       // position (m)
    pub vel: NVec3,       // velocity (m/s)
    pub accel: NVec3,     // constant acceleration (m/s^2)
    pub rot: NVec3,       // orientation, Euler angles (rad)
    pub rot_vel: NVec3,   // angular velocity (rad/s)
    pub color: Rgb,       // box tint, fixed at launch
    pub claimed: bool,    // set once by the collector that targets it
    pub last_update: f64, // time of this particle's own last step (s)
}

/// Per-frame behavior of a collector agent.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectorState {
    Idle,
    Pursuing { target: u64 },
    Paused { until: f64 },
}

#[derive(Debug, Clone)]
pub struct Collector {
    pub pos: NVec3, // ground position, y stays 0
    pub state: CollectorState,
}

impl Collector {
    pub fn at_ground(x: f64, z: f64) -> Self {
        Self {
            pos: NVec3::new(x, 0.0, z),
            state: CollectorState::Idle,
        }
    }

    /// Target id while pursuing, `None` otherwise.
    pub fn target(&self) -> Option<u64> {
        match self.state {
            CollectorState::Pursuing { target } => Some(target),
            _ => None,
        }
    }
}

/// The complete mutable simulation state.
///
/// `particles` stays insertion-ordered: the collector scan breaks distance
/// ties by earliest entry and the population cap evicts from the front.
#[derive(Debug, Clone)]
pub struct World {
    pub particles: Vec<Particle>,
    pub collectors: Vec<Collector>,
    pub rng: StdRng,              // collector cooldown jitter
    pub next_launch: Option<f64>, // deadline for the next spawn (s)
    pub next_id: u64,
    pub collected: u64, // particles removed by collectors
    pub evicted: u64,   // particles removed by the population cap
    pub t: f64,         // time of the last completed step (s)
}

impl World {
    pub fn new(seed: u64, collectors: Vec<Collector>) -> Self {
        Self {
            particles: Vec::new(),
            collectors,
            rng: StdRng::seed_from_u64(seed),
            next_launch: None,
            next_id: 0,
            collected: 0,
            evicted: 0,
            t: 0.0,
        }
    }

    /// Particles still above ground level, i.e. still integrating.
    pub fn airborne(&self) -> usize {
        self.particles.iter().filter(|p| p.pos.y >= 0.0).count()
    }
}
