use orbitsim::{Scenario, ScenarioConfig};
use orbitsim::{run_2d, run_headless};
use orbitsim::bench_tick;

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML; bare names are looked up in `scenarios/`. Built-in solar system if omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Run this many frames without a window, then print the final state
    #[arg(long)]
    headless: Option<usize>,

    /// Frame delta (seconds) used by --headless
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Time engine ticks for a few body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<Scenario> {
    let Some(file_name) = file_name else {
        return Ok(Scenario::default_solar());
    };

    let direct = PathBuf::from(file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(Scenario::build_scenario(scenario_cfg)?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let engine = load_scenario(args.file_name.as_deref())?.into_engine()?;

    match args.headless {
        Some(ticks) => run_headless(engine, ticks, args.dt),
        None => run_2d(engine),
    }
    Ok(())
}
