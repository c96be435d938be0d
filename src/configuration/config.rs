//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run mode (interactive viewer or fixed-tick console)
//! - [`ParametersConfig`] – physical constants and collector tuning
//! - [`LaunchConfig`]     – launch-state source and its ranges
//! - [`CollectorConfig`]  – ground position for each collector agent
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   mode: "visual"          # or "headless"
//!
//! parameters:
//!   seed: 42                # deterministic seed
//!   gravity: -9.81          # vertical acceleration, negative is down
//!   particle_cap: 1000      # FIFO population cap; omit for unbounded
//!   claim_ceiling: 5.0      # collectors ignore particles above this height
//!   capture_radius: 3.0     # contact distance for collection
//!   collector_speed: 1.0    # collector step per frame
//!   pause_max: 0.1          # longest post-capture cooldown
//!   t_end: 30.0             # headless: simulated end time
//!   tick: 0.016             # headless: fixed step size
//!
//! launch:
//!   source: "uniform"       # or "noise"
//!   vel_x: [ -5.0, 15.0 ]   # launch velocity range per axis
//!   vel_y: [ 20.0, 50.0 ]
//!   vel_z: [ -30.0, 0.0 ]
//!   interval: [ 0.0, 0.3 ]  # seconds between launches
//!   colored: false          # random tint per box instead of the classic yellow
//!   noise_step: 0.05        # cursor step, used by the "noise" source only
//!
//! collectors:
//!   - { x: -20.0, z: 10.0 }
//!   - { x:  15.0, z: -15.0 }
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation, which may use different structs optimized for performance.

use serde::Deserialize;

/// How a scenario is driven
/// mode: "visual" or mode: "headless"
#[derive(Deserialize, Debug, Clone)]
pub enum RunModeConfig {
    #[serde(rename = "visual")] // Interactive Bevy viewer stepping on wall-clock time
    Visual,

    #[serde(rename = "headless")] // Fixed-tick console run printing periodic stats
    Headless,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub mode: RunModeConfig, // How the built scenario is hosted and stepped
}

/// Global physical parameters and collector tuning for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub seed: u64,                   // deterministic seed to make runs reproducable
    pub gravity: f64,                // vertical acceleration, negative is down
    pub particle_cap: Option<usize>, // FIFO population cap, omitted = unbounded
    pub claim_ceiling: f64,          // collectors ignore particles at or above this height
    pub capture_radius: f64,         // contact distance for collection
    pub collector_speed: f64,        // collector step per frame
    pub pause_max: f64,              // longest post-capture cooldown
    pub t_end: f64,                  // headless: simulated end time
    pub tick: f64,                   // headless: fixed step size
}

/// Which launch-state source feeds the spawn scheduler
/// source: "uniform" or source: "noise"
#[derive(Deserialize, Debug, Clone)]
pub enum LaunchSourceConfig {
    #[serde(rename = "uniform")] // Independent uniform draws per spawn
    Uniform,

    #[serde(rename = "noise")] // Lanes of a drifting Perlin field, correlated across spawns
    Noise,
}

/// Launch-state generation for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct LaunchConfig {
    pub source: LaunchSourceConfig, // Where launch randomness comes from
    pub vel_x: [f64; 2],            // launch velocity range per axis, [min, max)
    pub vel_y: [f64; 2],
    pub vel_z: [f64; 2],
    pub interval: [f64; 2], // seconds between launches, [min, max)
    pub colored: bool,      // random tint per box instead of the classic yellow
    #[serde(default = "default_noise_step")]
    pub noise_step: f64, // noise cursor step per spawn
}

fn default_noise_step() -> f64 {
    0.05
}

/// Ground position for a single collector agent
#[derive(Deserialize, Debug, Clone)]
pub struct CollectorConfig {
    pub x: f64,
    pub z: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // Run mode for the built scenario
    pub parameters: ParametersConfig, // Global physical parameters and collector tuning
    pub launch: LaunchConfig,         // Launch-state source and ranges
    #[serde(default)]
    pub collectors: Vec<CollectorConfig>, // Collector agents; omit for none
}
