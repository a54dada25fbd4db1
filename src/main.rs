use graphsim::{bench_forces, bench_step};
use graphsim::{ScenarioConfig, Simulator};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "mesh.yaml")]
    file_name: String,

    /// Number of ticks to run headless
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Log statistics every this many ticks
    #[arg(long, default_value_t = 60)]
    log_every: u64,

    /// Run the force/step timing sweeps instead of a scenario
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
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut sim = Simulator::build_scenario(scenario_cfg)?;

    info!(
        nodes = sim.network.nodes.len(),
        edges = sim.network.edges.len(),
        "running scenario headless for {} ticks",
        args.ticks
    );

    for tick in 1..=args.ticks {
        let snapshot = sim.step();
        if tick % args.log_every == 0 {
            let s = &snapshot.stats;
            info!(
                tick,
                kinetic_energy = s.kinetic_energy,
                tension = s.tension,
                entropy = s.network_entropy,
                shockwaves = snapshot.shockwaves.len(),
                "stats"
            );
        }
    }

    Ok(())
}
