//! HEXFRONT CLI - headless driver for the hex territory simulation
//!
//! Commands:
//! - run: drive the engine in real time at a fixed tick interval
//! - simulate: fast-forward on a manual clock and print the final state

use clap::{Parser, Subcommand};
use hexfront_core::{EngineConfig, HexEngine, ManualClock, SystemClock};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "hexfront")]
#[command(about = "Hex territory-control simulation driver")]
struct Cli {
    /// Optional engine config (JSON); missing fields use defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the engine in real time, logging per-second stats
    Run {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "30")]
        seconds: u64,
        #[arg(long, default_value = "50")]
        tick_ms: u64,
    },
    /// Fast-forward a deterministic simulation and print the final state
    Simulate {
        #[arg(long, default_value = "42")]
        seed: u64,
        #[arg(long, default_value = "120")]
        seconds: u64,
        #[arg(long, default_value = "50")]
        tick_ms: u64,
        /// Pretty-print the JSON snapshot
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Run {
            seed,
            seconds,
            tick_ms,
        } => run(config, seed.unwrap_or_else(rand::random), seconds, tick_ms),
        Commands::Simulate {
            seed,
            seconds,
            tick_ms,
            pretty,
        } => simulate(config, seed, seconds, tick_ms, pretty),
    }
}

fn run(config: EngineConfig, seed: u64, seconds: u64, tick_ms: u64) -> anyhow::Result<()> {
    let mut engine = HexEngine::with_config(config, Box::new(SystemClock::new()), seed);
    tracing::info!(seed, seconds, tick_ms, "starting real-time run");

    let start = Instant::now();
    let mut last_report = 0;
    while start.elapsed() < Duration::from_secs(seconds) {
        engine.update();

        let elapsed = start.elapsed().as_secs();
        if elapsed > last_report {
            last_report = elapsed;
            let state = engine.state();
            tracing::info!(
                stockpile = state.stockpile as f64,
                controlled = state.controlled_terrain,
                bigtech = state.bigtech_terrain,
                generation = state.generation_per_second as f64,
                movements = engine.movements().len(),
                "t={elapsed}s"
            );
        }

        std::thread::sleep(Duration::from_millis(tick_ms));
    }

    println!("{}", serde_json::to_string_pretty(&engine.state())?);
    Ok(())
}

fn simulate(
    config: EngineConfig,
    seed: u64,
    seconds: u64,
    tick_ms: u64,
    pretty: bool,
) -> anyhow::Result<()> {
    let clock = ManualClock::new();
    let mut engine = HexEngine::with_config(config, Box::new(clock.clone()), seed);

    let ticks = seconds * 1000 / tick_ms.max(1);
    tracing::info!(seed, seconds, ticks, "simulating");

    let bar = ProgressBar::new(ticks);
    for _ in 0..ticks {
        clock.advance(Duration::from_millis(tick_ms));
        engine.update();
        bar.inc(1);
    }
    bar.finish_and_clear();

    let snapshot = engine.state();
    let out = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{out}");
    Ok(())
}
