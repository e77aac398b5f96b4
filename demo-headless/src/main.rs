//! Headless tile fire simulation
//!
//! Runs one simulation to extinction, printing a telemetry line every
//! `report_interval` generations and a summary at the end. Ctrl-C stops the
//! run between generations and still prints the summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --package demo-headless -- --tile-count 1000 --seed 42
//! ```
//!
//! Set `RUST_LOG=debug` for per-report log events from the simulation core.

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tile_fire_core::telemetry::is_report_step;
use tile_fire_core::{RunOutcome, Simulation, SimulationConfig, UpdateMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status after an interrupted run (128 + SIGINT)
const EXIT_INTERRUPTED: u8 = 130;

/// Generation update strategy
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Compute each generation from the previous one only
    DoubleBuffered,
    /// Update tiles in place in row-major order
    InPlace,
}

impl From<Mode> for UpdateMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::DoubleBuffered => UpdateMode::DoubleBuffered,
            Mode::InPlace => UpdateMode::InPlace,
        }
    }
}

/// Tile fire simulation with configurable parameters
///
/// Flags override values from `--config`, which override built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "tile-fire")]
#[command(about = "Stochastic fire spread over a square tile grid", long_about = None)]
struct Args {
    /// Grid side length (the grid holds tile-count² tiles)
    #[arg(short, long)]
    tile_count: Option<usize>,

    /// Chance that a burning tile ignites a given neighbor each generation
    #[arg(short = 'p', long)]
    spread_probability: Option<f32>,

    /// Intensity a burning tile loses each generation
    #[arg(short, long)]
    decay_rate: Option<f32>,

    /// RNG seed (random if omitted; the seed used is printed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generation update strategy
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Generations between report lines (0 = none)
    #[arg(short, long)]
    report_interval: Option<u32>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to this JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Write the run summary to this JSON file
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Delay between generations in milliseconds, for pacing a viewer
    #[arg(long, default_value_t = 0)]
    pace_ms: u64,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(RunOutcome::Extinguished) => ExitCode::SUCCESS,
        Ok(RunOutcome::Cancelled) => ExitCode::from(EXIT_INTERRUPTED),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer command-line flags over the config file (or defaults).
fn build_config(args: &Args) -> Result<SimulationConfig, tile_fire_core::SimError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(tile_count) = args.tile_count {
        config.tile_count = tile_count;
    }
    if let Some(probability) = args.spread_probability {
        config.spread_probability = probability;
    }
    if let Some(rate) = args.decay_rate {
        config.decay_rate = rate;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(mode) = args.mode {
        config.update_mode = mode.into();
    }
    if let Some(interval) = args.report_interval {
        config.report_interval = interval;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    let config = build_config(args)?;
    if let Some(path) = &args.save_config {
        config.to_json_file(path)?;
        info!("Saved configuration to {}", path.display());
    }

    let mut sim = Simulation::new(config)?;

    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })?;

    let tile_count = sim.config().tile_count;
    let interval = sim.config().report_interval;
    let pace = Duration::from_millis(args.pace_ms);

    println!("=== Tile Fire Simulation ===");
    println!(
        "Grid: {}x{} | Spread: {} | Decay: {} | Mode: {:?} | Seed: {}",
        tile_count,
        tile_count,
        sim.config().spread_probability,
        sim.config().decay_rate,
        sim.config().update_mode,
        sim.seed()
    );
    println!();

    let summary = sim.run(&cancel, |report, _snapshot| {
        if is_report_step(report.generation, interval) {
            println!("{report}");
        }
        if !pace.is_zero() {
            thread::sleep(pace);
        }
    });

    if summary.outcome == RunOutcome::Cancelled {
        println!("\nInterrupted after {} generations", summary.steps);
    }
    println!("\n{summary}");
    println!("Generations: {} | Seed: {}", summary.steps, summary.seed);

    if let Some(path) = &args.summary_json {
        fs::write(path, serde_json::to_string_pretty(&summary)?)?;
        info!("Wrote run summary to {}", path.display());
    }

    Ok(summary.outcome)
}
