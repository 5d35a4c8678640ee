//! Monte Carlo forecasting kernel.
//!
//! # Architecture
//!
//! ```text
//! SimulationOrchestrator
//! ├── SimulationConfig      (validated run configuration)
//! ├── SimulationParameters  (config + calibrated volatility)
//! ├── SimulationRng         (one stream per outer iteration)
//! └── Orchestration
//!     ├── historical_volatility()   (once)
//!     ├── simulate_path()           (in_loops × out_loops)
//!     └── TrajectoryAccumulator     (per outer iteration, then final)
//! ```
//!
//! # Examples
//!
//! ## Seeded forecast
//!
//! ```rust
//! use pricer_core::types::HistoricalReturns;
//! use pricer_pricing::mc::{SimulationConfig, SimulationOrchestrator};
//!
//! let config = SimulationConfig::builder()
//!     .time_steps(5)
//!     .in_loops(20)
//!     .out_loops(10)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let history: HistoricalReturns = "99.8,100.1,100.4,100.2".parse().unwrap();
//! let orchestrator = SimulationOrchestrator::new(config);
//!
//! let first = orchestrator.run(&history).unwrap();
//! let second = orchestrator.run(&history).unwrap();
//! assert_eq!(first.trajectory, second.trajectory);
//! ```
//!
//! ## Single path
//!
//! ```rust
//! use pricer_pricing::mc::{simulate_path, GbmParams};
//! use pricer_pricing::rng::SimulationRng;
//!
//! let mut rng = SimulationRng::from_seed(1);
//! let path = simulate_path(&GbmParams::new(100.0, 0.001, 0.2, 10), &mut rng);
//! assert_eq!(path.len(), 10);
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod paths;

// Re-exports for convenient access
pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use error::{ConfigError, SimulationError};
pub use orchestrator::{Forecast, SimulationOrchestrator, SimulationParameters};
pub use paths::{simulate_path, GbmParams};
