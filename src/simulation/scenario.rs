//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - world state (`World` with collectors placed, no particles yet)
//! - the active launch profile (boxed `LaunchProfile`)
//!
//! The scenario is inserted into Bevy as a `Resource` for the viewer and
//! read by the step and sync systems; the fixed-tick runner drives it
//! directly.

use bevy::prelude::Resource;

use crate::configuration::config::{CollectorConfig, LaunchSourceConfig, ScenarioConfig};
use crate::simulation::collector::collectors_step;
use crate::simulation::engine::Engine;
use crate::simulation::integrator::integrate_particles;
use crate::simulation::launch::{launch, LaunchProfile, LaunchRanges, NoiseLaunch, UniformLaunch};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Collector, World};

/// Bevy resource representing a fully-initialized scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, the current world state,
/// and the active launch profile
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for stepping and visualization
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub world: World,
    pub launcher: Box<dyn LaunchProfile + Send + Sync>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            seed: p_cfg.seed,
            gravity: p_cfg.gravity,
            particle_cap: p_cfg.particle_cap,
            claim_ceiling: p_cfg.claim_ceiling,
            capture_radius: p_cfg.capture_radius,
            collector_speed: p_cfg.collector_speed,
            pause_max: p_cfg.pause_max,
            t_end: p_cfg.t_end,
            tick: p_cfg.tick,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            mode: cfg.engine.mode,
        };

        // Collectors: map `CollectorConfig` -> idle runtime agents on the ground
        let collectors: Vec<Collector> = cfg
            .collectors
            .iter()
            .map(|cc: &CollectorConfig| Collector::at_ground(cc.x, cc.z))
            .collect();

        // Initial world state: collectors placed, no particles until the
        // scheduler's first frame
        let world = World::new(parameters.seed, collectors);

        // Launch profile: uniform draws or the drifting noise field
        let l_cfg = cfg.launch;
        let ranges = LaunchRanges {
            vel_x: l_cfg.vel_x,
            vel_y: l_cfg.vel_y,
            vel_z: l_cfg.vel_z,
            interval: l_cfg.interval,
            colored: l_cfg.colored,
        };
        let launcher: Box<dyn LaunchProfile + Send + Sync> = match l_cfg.source {
            LaunchSourceConfig::Uniform => Box::new(UniformLaunch::new(parameters.seed, ranges)),
            LaunchSourceConfig::Noise => {
                Box::new(NoiseLaunch::new(parameters.seed, l_cfg.noise_step, ranges))
            }
        };

        Self {
            engine,
            parameters,
            world,
            launcher,
        }
    }

    /// Advance the whole world to time `now`. One call is one frame:
    /// integrate airborne particles, run every collector, then give the
    /// spawn scheduler its chance. Hosts choose the cadence.
    pub fn step(&mut self, now: f64) {
        let Scenario {
            parameters,
            world,
            launcher,
            ..
        } = self;
        integrate_particles(world, now);
        collectors_step(world, parameters, now);
        launch(world, launcher.as_mut(), parameters, now);
        world.t = now;
    }
}
