//! Error types for structured error handling.
//!
//! This module provides:
//! - `DataError`: Errors from parsing and validating historical price data

use thiserror::Error;

/// Categorised historical data errors.
///
/// Every variant is fatal for a forecast run: the volatility estimate cannot
/// be computed from incomplete or malformed data.
///
/// # Examples
/// ```
/// use pricer_core::types::DataError;
///
/// let err = DataError::LengthMismatch { expected: 179, actual: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Historical data length mismatch: expected 179 values, found 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// No values were present in the historical data.
    #[error("Historical data is empty")]
    Empty,

    /// A token could not be parsed as a floating-point number.
    #[error("Malformed value '{token}' at position {position}")]
    Malformed {
        /// Zero-based position of the token within the line
        position: usize,
        /// The offending token
        token: String,
    },

    /// A token parsed but is NaN or infinite.
    #[error("Non-finite value '{token}' at position {position}")]
    NonFinite {
        /// Zero-based position of the token within the line
        position: usize,
        /// The offending token
        token: String,
    },

    /// The number of values does not match `time_steps - 1`.
    #[error("Historical data length mismatch: expected {expected} values, found {actual}")]
    LengthMismatch {
        /// Expected number of values
        expected: usize,
        /// Number of values found
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_display() {
        assert_eq!(DataError::Empty.to_string(), "Historical data is empty");

        let err = DataError::Malformed {
            position: 2,
            token: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("position 2"));

        let err = DataError::NonFinite {
            position: 0,
            token: "inf".to_string(),
        };
        assert!(err.to_string().starts_with("Non-finite"));
    }
}
