//! # pricer_core: Numerical Foundation for Stockast
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Owned price trajectories (`types::Trajectory`)
//! - Historical minute-end price series (`types::HistoricalReturns`)
//! - Historical volatility estimation (`math::volatility`)
//! - Elementwise trajectory averaging (`math::averaging`)
//! - Error types: `DataError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other Stockast crates and only minimal
//! external dependencies:
//! - thiserror: Structured error types
//! - tracing: Diagnostic events
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::averaging::average_trajectories;
//! use pricer_core::math::volatility::historical_volatility;
//! use pricer_core::types::{HistoricalReturns, Trajectory};
//!
//! let history: HistoricalReturns = "99.5,100.2,100.8".parse().unwrap();
//! let volatility = historical_volatility(100.0, &history).unwrap();
//! assert!((volatility - 0.009314).abs() < 1e-6);
//!
//! let a = Trajectory::from(vec![100.0, 102.0]);
//! let b = Trajectory::from(vec![100.0, 98.0]);
//! let mean = average_trajectories(&[a, b]);
//! assert_eq!(mean.as_slice(), &[100.0, 100.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
