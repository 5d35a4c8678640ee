//! Volatility command implementation
//!
//! Calibrates volatility from the historical data without simulating.

use adapter_loader::HistoricalDataLoader;
use pricer_pricing::mc::SimulationOrchestrator;
use tracing::info;

use crate::config::StockastConfig;
use crate::Result;

/// Run the volatility command
pub fn run(config: &StockastConfig) -> Result<f64> {
    let sim_config = config.simulation_config()?;
    let loader = HistoricalDataLoader::new(&config.data_path);
    info!("  Historical data: {}", loader.path().display());

    let history = loader.load_expecting(sim_config.history_len())?;
    let volatility = SimulationOrchestrator::new(sim_config).estimate_volatility(&history)?;

    println!("  Using market volatility = {}", volatility);
    info!(volatility, "Volatility estimated");
    Ok(volatility)
}
