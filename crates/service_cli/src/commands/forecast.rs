//! Forecast command implementation
//!
//! Loads historical prices, runs the Monte Carlo forecast and writes the
//! expected trajectory, one price per line.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use adapter_loader::{HistoricalDataLoader, TrajectoryWriter};
use pricer_pricing::mc::SimulationOrchestrator;
use tracing::info;

use crate::config::StockastConfig;
use crate::Result;

/// Summary of a completed forecast run.
#[derive(Debug, Clone)]
pub struct ForecastSummary {
    /// Estimated volatility
    pub volatility: f64,
    /// Seed that reproduces the run
    pub seed: u64,
    /// Number of prices written
    pub time_steps: usize,
    /// Output file
    pub output_path: PathBuf,
    /// Wall-clock duration of the whole command
    pub elapsed: Duration,
}

/// Prints the welcome banner.
pub fn print_banner() {
    println!("--Welcome to Stockast: Stock Forecasting Tool--");
    println!();
}

/// Run the forecast command
pub fn run(config: &StockastConfig) -> Result<ForecastSummary> {
    let start = Instant::now();
    let sim_config = config.simulation_config()?;

    info!("Starting forecast...");
    info!(
        "  Paths: {} x {} ({} steps)",
        sim_config.in_loops(),
        sim_config.out_loops(),
        sim_config.time_steps()
    );

    let loader = HistoricalDataLoader::new(&config.data_path);
    info!("  Historical data: {}", loader.path().display());
    let history = loader.load_expecting(sim_config.history_len())?;

    // Open the destination before simulating so a bad path fails fast
    let writer = TrajectoryWriter::create(&config.output_path)?;
    info!("  Output: {}", writer.path().display());

    let orchestrator = SimulationOrchestrator::new(sim_config);
    let params = orchestrator.parameters(&history)?;

    print_banner();
    println!("  Using market volatility = {}", params.volatility());

    let forecast = orchestrator.run_calibrated(&params);
    let output_path = writer.write(&forecast.trajectory)?;

    let elapsed = start.elapsed();
    println!(" done!");
    println!("  Time taken = {:.3}s", elapsed.as_secs_f64());
    info!(seed = forecast.seed, "Forecast complete");

    Ok(ForecastSummary {
        volatility: forecast.volatility,
        seed: forecast.seed,
        time_steps: forecast.trajectory.len(),
        output_path,
        elapsed,
    })
}
