use starsim::{bench_force_pass, read_bodies, RunConfig, Scenario};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Direct-summation N-body integrator")]
struct Args {
    /// YAML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Body records, read from stdin when absent
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Iterations per advance, overrides the config
    #[arg(short = 'n', long)]
    iterations: Option<u32>,

    /// Seconds per iteration, overrides the config
    #[arg(long)]
    dt: Option<f64>,

    /// Number of advances before dumping
    #[arg(long, default_value_t = 1)]
    steps: u32,

    /// Time the force pass instead of running a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<RunConfig> {
    let mut cfg = match &args.config {
        Some(path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };
    if let Some(n) = args.iterations {
        cfg.parameters.iterations = n;
    }
    if let Some(dt) = args.dt {
        cfg.parameters.dt = dt;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the dump
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();
    let cfg = load_config(&args)?;

    if let Some(threads) = cfg.engine.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to build worker pool")?;
    }

    if args.bench {
        bench_force_pass();
        return Ok(());
    }

    // Any load failure ends the run here, before a system exists
    let bodies = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            read_bodies(BufReader::new(file))
        }
        None => read_bodies(io::stdin().lock()),
    }
    .context("invalid input")?;

    let mut scenario = Scenario::build_scenario(cfg, bodies);
    for _ in 0..args.steps {
        scenario.advance();
    }
    info!(t = scenario.system.t, iterations = scenario.system.iterations, "run finished");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "Star list:")?;
    scenario.system.dump(&mut out)?;
    out.flush()?;

    Ok(())
}
