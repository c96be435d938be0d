use crate::simulation::collector::collectors_step;
use crate::simulation::integrator::integrate_particles;
use crate::simulation::launch::CLASSIC_YELLOW;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Collector, NVec3, Particle, World};
use std::time::Instant;

/// Helper to build a manual World of `n` airborne, descending particles
/// plus `collectors` agents near the corners
fn make_world(n: usize, collectors: usize) -> World {
    let spots = [(-20.0, -20.0), (20.0, -20.0), (-20.0, 20.0), (20.0, 20.0)];
    let mut agents = Vec::with_capacity(collectors);
    for k in 0..collectors {
        let (x, z) = spots[k % spots.len()];
        agents.push(Collector::at_ground(x, z));
    }

    let mut world = World::new(42, agents);
    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed; all below the claim
        // ceiling and falling, so every particle is scan-eligible
        world.particles.push(Particle {
            id: i as u64,
            pos: NVec3::new(
                (i_f * 0.37).sin() * 30.0,
                1.0 + (i_f * 0.13).cos().abs() * 3.0,
                (i_f * 0.07).sin() * 30.0,
            ),
            vel: NVec3::new(0.0, -5.0, 0.0),
            accel: NVec3::new(0.0, -9.81, 0.0),
            rot: NVec3::zeros(),
            rot_vel: NVec3::new(1.0, 0.0, 1.0),
            color: CLASSIC_YELLOW,
            claimed: false,
            last_update: 0.0,
        });
    }
    world.next_id = n as u64;
    world
}

fn make_params() -> Parameters {
    Parameters {
        seed: 42,
        gravity: -9.81,
        particle_cap: None,
        claim_ceiling: 5.0,
        capture_radius: 3.0,
        collector_speed: 1.0,
        pause_max: 0.1,
        t_end: 100.0,
        tick: 0.016,
    }
}

pub fn bench_integrator() {
    // Different population sizes to test
    let ns = [1000, 2000, 4000, 8000, 16000, 32000];
    let steps = 100; // frames per measurement

    for n in ns {
        let mut world = make_world(n, 0);

        // Warm up one frame
        integrate_particles(&mut world, 0.016);

        let t0 = Instant::now();
        for s in 0..steps {
            let now = (s + 2) as f64 * 0.016;
            integrate_particles(&mut world, now);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:6}, euler frame = {:8.6} s", per_step);
    }
}

pub fn bench_collectors() {
    // Scan is O(N * collectors); pursuit frames re-find the target by id
    let ns = [1000, 2000, 4000, 8000, 16000, 32000];
    let steps = 50;

    for n in ns {
        let mut world = make_world(n, 4);
        let params = make_params();

        // Warm up: first frame claims a target per collector
        collectors_step(&mut world, &params, 0.016);

        let t0 = Instant::now();
        for s in 0..steps {
            let now = (s + 2) as f64 * 0.016;
            collectors_step(&mut world, &params, now);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:6}, collector frame = {:8.6} s", per_step);
    }
}

/// Benchmark the integrator and collector passes over a range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,integrate_ms,collectors_ms");

    for n in (1000..=32000).step_by(1000) {
        // Small n: average over more frames to smooth noise
        let steps = if n <= 4000 { 20 } else { 5 };

        let world_template = make_world(n, 4);
        let params = make_params();

        // Integrator pass
        let mut world_int = world_template.clone();
        let t0 = Instant::now();
        for s in 0..steps {
            integrate_particles(&mut world_int, (s + 1) as f64 * 0.016);
        }
        let ms_int = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        // Collector pass
        let mut world_col = world_template.clone();
        let t1 = Instant::now();
        for s in 0..steps {
            collectors_step(&mut world_col, &params, (s + 1) as f64 * 0.016);
        }
        let ms_col = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_int, ms_col);
    }
}
