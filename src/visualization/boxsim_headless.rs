//! Fixed-tick console runner
//!
//! Drives a built `Scenario` on synthetic time (no window, no wall clock)
//! from t = tick to t_end, printing one CSV stats row per simulated second
//! plus a final summary. Useful for long deterministic runs and for
//! eyeballing scheduler and collector throughput.

use crate::simulation::scenario::Scenario;

pub fn run_headless(mut scenario: Scenario) {
    let tick = scenario.parameters.tick;
    let t_end = scenario.parameters.t_end;

    println!(
        "run_headless: {:.1}s simulated at {:.3}s per tick, {} collectors",
        t_end,
        tick,
        scenario.world.collectors.len()
    );
    println!("t,live,airborne,resting,spawned,collected,evicted");

    let mut now = 0.0;
    let mut next_report = 1.0;
    while now < t_end {
        now += tick;
        scenario.step(now);
        if now >= next_report {
            report(&scenario, now);
            next_report += 1.0;
        }
    }
    report(&scenario, now);

    let w = &scenario.world;
    println!(
        "done: spawned {} / collected {} / evicted {} / live {}",
        w.next_id,
        w.collected,
        w.evicted,
        w.particles.len()
    );
}

fn report(scenario: &Scenario, now: f64) {
    let w = &scenario.world;
    let airborne = w.airborne();
    println!(
        "{:.2},{},{},{},{},{},{}",
        now,
        w.particles.len(),
        airborne,
        w.particles.len() - airborne,
        w.next_id,
        w.collected,
        w.evicted
    );
}
