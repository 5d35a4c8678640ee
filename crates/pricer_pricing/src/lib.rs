//! # Pricer Engine (Layer 2: Monte Carlo Forecasting)
//!
//! ## Layer 2 Role
//!
//! pricer_pricing is the simulation engine of the workspace:
//! - Normal variate sources with seed management (`rng`)
//! - Single-path Geometric Brownian Motion simulation (`mc::paths`)
//! - Validated simulation configuration (`mc::config`)
//! - The nested-loop Monte Carlo scheme with its two-level averaging
//!   (`mc::orchestrator`)
//!
//! ## Layer Integration
//!
//! Layer 1 (pricer_core) supplies the trajectory type, the historical
//! volatility estimate and trajectory averaging. This crate performs no file
//! I/O; loading and writing live in `adapter_loader`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::HistoricalReturns;
//! use pricer_pricing::mc::{SimulationConfig, SimulationOrchestrator};
//!
//! let config = SimulationConfig::builder()
//!     .time_steps(4)
//!     .in_loops(10)
//!     .out_loops(5)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let history: HistoricalReturns = "99.5,100.2,100.8".parse().unwrap();
//! let forecast = SimulationOrchestrator::new(config).run(&history).unwrap();
//!
//! assert_eq!(forecast.trajectory.len(), 4);
//! assert_eq!(forecast.trajectory[0], 100.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    Forecast, GbmParams, SimulationConfig, SimulationError, SimulationOrchestrator,
    SimulationParameters,
};
pub use rng::{NormalSource, SimulationRng};
