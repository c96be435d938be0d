pub mod states;
pub mod params;
pub mod engine;
pub mod clock;
pub mod noise_field;
pub mod launch;
pub mod integrator;
pub mod collector;
pub mod scenario;
