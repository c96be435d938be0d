use boxsim::{RunModeConfig, Scenario, ScenarioConfig};
use boxsim::{run_3d, run_headless};
use boxsim::{bench_collectors, bench_integrator, bench_step_curve};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "v4_collectors.yaml")]
    file_name: String,

    /// Run the benchmark suite instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_integrator();
        bench_collectors();
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    match scenario.engine.mode {
        RunModeConfig::Visual => run_3d(scenario),
        RunModeConfig::Headless => run_headless(scenario),
    }

    Ok(())
}
