//! Numerical routines for calibration and aggregation.
//!
//! - [`volatility`]: Historical volatility estimate used to calibrate GBM
//! - [`averaging`]: Elementwise mean of same-length trajectories

pub mod averaging;
pub mod volatility;
