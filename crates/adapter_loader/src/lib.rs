//! # adapter_loader: File Adapters for Stockast
//!
//! ## Adapter Layer Role
//!
//! This crate is the only place where the forecasting pipeline touches the
//! filesystem:
//! - [`HistoricalDataLoader`]: reads the first line of a CSV file as the
//!   historical minute-end price series
//! - [`TrajectoryWriter`]: writes the final trajectory, one price per line
//!
//! Both report failures as [`LoaderError`], carrying the offending path.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use adapter_loader::{HistoricalDataLoader, TrajectoryWriter};
//! use pricer_core::types::Trajectory;
//!
//! let history = HistoricalDataLoader::new("data.csv").load_expecting(179)?;
//!
//! // Open the destination before the simulation so a bad path fails fast
//! let writer = TrajectoryWriter::create("opt.csv")?;
//! # let trajectory = Trajectory::from(vec![100.0; 180]);
//! writer.write(&trajectory)?;
//! # Ok::<(), adapter_loader::LoaderError>(())
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod historical;
pub mod output;

pub use error::LoaderError;
pub use historical::HistoricalDataLoader;
pub use output::TrajectoryWriter;
