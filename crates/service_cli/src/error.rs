//! Error types for the CLI.

use adapter_loader::LoaderError;
use pricer_pricing::mc::SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level CLI error.
///
/// Every variant is fatal: the process prints the message and exits with a
/// failure status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed.
    #[error("{0}")]
    Loader(#[from] LoaderError),

    /// The forecast could not be calibrated or run.
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// A command-line argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
