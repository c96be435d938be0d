pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Collector, CollectorState, NVec3, Particle, Rgb, World};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::clock::MonotonicClock;
pub use simulation::noise_field::NoiseField;
pub use simulation::launch::{
    launch, sample_range, LaunchProfile, LaunchRanges, LaunchState, NoiseLaunch, UniformLaunch,
    CLASSIC_YELLOW,
};
pub use simulation::integrator::{euler_step, integrate_particles, GROUND_Y};
pub use simulation::collector::{collectors_step, scan};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    CollectorConfig, EngineConfig, LaunchConfig, LaunchSourceConfig, ParametersConfig,
    RunModeConfig, ScenarioConfig,
};

pub use visualization::{boxsim_headless::run_headless, boxsim_vis3d::run_3d};

pub use benchmark::benchmark::{bench_collectors, bench_integrator, bench_step_curve};
