//! Numerical and behavioral parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravity and the random seed,
//! - the particle population cap,
//! - collector tuning (claim ceiling, capture radius, speed, cooldown),
//! - end time and step size for fixed-tick runs

#[derive(Debug, Clone)]
pub struct Parameters {
    pub seed: u64,                   // deterministic seed
    pub gravity: f64,                // vertical acceleration (m/s^2), negative is down
    pub particle_cap: Option<usize>, // FIFO population cap, None = unbounded
    pub claim_ceiling: f64,          // collectors ignore particles at or above this height (m)
    pub capture_radius: f64,         // contact distance for collection (m)
    pub collector_speed: f64,        // collector step per frame (m)
    pub pause_max: f64,              // longest post-capture cooldown (s)
    pub t_end: f64,                  // fixed-tick runs: simulated end time (s)
    pub tick: f64,                   // fixed-tick runs: step size (s)
}
