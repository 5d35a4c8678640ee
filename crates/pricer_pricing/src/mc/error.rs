//! Error types for the Monte Carlo forecasting engine.
//!
//! This module defines structured error types for configuration validation
//! and for failures detected before a simulation starts.

use pricer_core::types::DataError;
use thiserror::Error;

/// Configuration error for the simulation engine.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Step count outside the valid range.
    #[error("Invalid step count {0}: must be in range [2, 100_000]")]
    InvalidStepCount(usize),

    /// Loop count outside the valid range.
    #[error("Invalid {name} {value}: must be in range [1, 10_000_000]")]
    InvalidLoopCount {
        /// Which loop (`in_loops` or `out_loops`).
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Error raised while preparing or running a forecast.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SimulationError {
    /// The simulation configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The historical data cannot calibrate the model.
    #[error(transparent)]
    Data(#[from] DataError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidStepCount(1);
        assert!(err.to_string().contains("Invalid step count 1"));

        let err = ConfigError::InvalidLoopCount {
            name: "in_loops",
            value: 0,
        };
        assert!(err.to_string().contains("Invalid in_loops 0"));

        let err = ConfigError::InvalidParameter {
            name: "spot_price",
            value: "must be positive".to_string(),
        };
        assert!(err.to_string().contains("spot_price"));
    }

    #[test]
    fn test_simulation_error_is_transparent() {
        let err: SimulationError = DataError::Empty.into();
        assert_eq!(err.to_string(), DataError::Empty.to_string());

        let err: SimulationError = ConfigError::InvalidStepCount(0).into();
        assert!(matches!(err, SimulationError::Config(_)));
    }
}
