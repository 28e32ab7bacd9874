use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bug_automata::automaton::{render_levels, run_until_repeat, RecursiveSimulation};
use bug_automata::SolverConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed grid: 5 lines of 5 `#`/`.` characters
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Generations for the recursive run
    #[arg(short, long)]
    steps: Option<usize>,

    /// Threads for stepping levels
    #[arg(short, long)]
    threads: Option<usize>,

    /// Print every populated level after the recursive run
    #[arg(long)]
    dump_levels: bool,
}

impl Args {
    fn into_config(self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SolverConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        config.dump_levels |= self.dump_levels;

        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "bug_automata=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Args::parse().into_config()?;
    info!(?config, "starting");

    let seed = config
        .read_seed()
        .with_context(|| format!("reading seed {}", config.input.display()))?;

    // --- Part One ---
    let run = run_until_repeat(&seed);
    println!("Rating: {}", run.fingerprint);

    // --- Part Two ---
    let mut sim = RecursiveSimulation::new(&seed, config.steps, config.threads);
    let count = sim.run();
    if config.dump_levels {
        print!("{}", render_levels(sim.levels()));
    }
    println!("Count: {count}");

    Ok(())
}
