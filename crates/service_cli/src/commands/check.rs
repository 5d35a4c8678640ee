//! Check command implementation
//!
//! Validates everything a forecast needs without simulating or touching the
//! output file.

use std::path::Path;

use adapter_loader::HistoricalDataLoader;
use tracing::info;

use crate::config::StockastConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &StockastConfig) -> Result<()> {
    let sim_config = config.simulation_config()?;

    let loader = HistoricalDataLoader::new(&config.data_path);
    let history = loader.load_expecting(sim_config.history_len())?;
    info!(path = %loader.path().display(), values = history.len(), "Historical data OK");

    check_output_dir(&config.output_path)?;
    info!("  Output directory OK");

    println!("Configuration OK");
    println!("  Historical data: {} ({} values)", loader.path().display(), history.len());
    println!("  Output: {}", config.output_path.display());
    println!(
        "  Paths: {} x {} = {} ({} steps)",
        sim_config.in_loops(),
        sim_config.out_loops(),
        sim_config.total_paths(),
        sim_config.time_steps()
    );
    match sim_config.seed() {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: random"),
    }
    Ok(())
}

fn check_output_dir(output_path: &Path) -> Result<()> {
    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };
    if parent.is_dir() {
        Ok(())
    } else {
        Err(CliError::InvalidArgument(format!(
            "output directory {} does not exist",
            parent.display()
        )))
    }
}
