//! Core data types for the forecasting pipeline.
//!
//! This module provides:
//! - `trajectory`: Owned price trajectory indexed by time step
//! - `historical`: Historical minute-end price series used for calibration
//! - `error`: Structured error types for historical data handling
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Trajectory`] from `trajectory`
//! - [`HistoricalReturns`] from `historical`
//! - [`DataError`] from `error`

pub mod error;
pub mod historical;
pub mod trajectory;

// Re-export commonly used types at module level
pub use error::DataError;
pub use historical::HistoricalReturns;
pub use trajectory::Trajectory;
