//! Historical minute-end price series.
//!
//! The series is read once from external input and consumed by the
//! volatility estimator. Values are interpreted directly as minute-end
//! prices, not as percentage or log returns.

use std::str::FromStr;

use super::error::DataError;

/// Ordered historical values used to calibrate volatility.
///
/// A well-formed series for a simulation of `time_steps` steps holds exactly
/// `time_steps - 1` finite values; see [`HistoricalReturns::expect_len`].
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::HistoricalReturns;
///
/// let history: HistoricalReturns = "99.5, 100.2,100.8".parse().unwrap();
/// assert_eq!(history.values(), &[99.5, 100.2, 100.8]);
/// assert!(history.expect_len(3).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HistoricalReturns {
    values: Vec<f64>,
}

impl HistoricalReturns {
    /// Builds a series from already-parsed values.
    ///
    /// # Errors
    ///
    /// - [`DataError::Empty`] if `values` is empty
    /// - [`DataError::NonFinite`] if any value is NaN or infinite
    pub fn from_values(values: Vec<f64>) -> Result<Self, DataError> {
        if values.is_empty() {
            return Err(DataError::Empty);
        }
        if let Some(position) = values.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFinite {
                position,
                token: values[position].to_string(),
            });
        }
        Ok(Self { values })
    }

    /// Parses a series from individual text fields.
    ///
    /// Surrounding whitespace is ignored. An empty field is malformed.
    ///
    /// # Errors
    ///
    /// - [`DataError::Empty`] if there are no fields, or a single blank field
    /// - [`DataError::Malformed`] if a field is not a float
    /// - [`DataError::NonFinite`] if a field parses to NaN or infinity
    pub fn parse_fields<I, S>(fields: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = fields.into_iter().collect();
        if tokens.is_empty() || (tokens.len() == 1 && tokens[0].as_ref().trim().is_empty()) {
            return Err(DataError::Empty);
        }

        let mut values = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            let token = token.as_ref().trim();
            let value: f64 = token.parse().map_err(|_| DataError::Malformed {
                position,
                token: token.to_string(),
            })?;
            if !value.is_finite() {
                return Err(DataError::NonFinite {
                    position,
                    token: token.to_string(),
                });
            }
            values.push(value);
        }

        Ok(Self { values })
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; construction rejects empty series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values in chronological order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Checks that the series holds exactly `expected` values.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::LengthMismatch`] otherwise.
    pub fn expect_len(&self, expected: usize) -> Result<(), DataError> {
        if self.values.len() != expected {
            return Err(DataError::LengthMismatch {
                expected,
                actual: self.values.len(),
            });
        }
        Ok(())
    }
}

impl FromStr for HistoricalReturns {
    type Err = DataError;

    /// Parses a single comma-separated line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse_fields(line.trim_end_matches(['\r', '\n']).split(','))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let history: HistoricalReturns = "99.5,100.2,100.8".parse().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.values(), &[99.5, 100.2, 100.8]);
    }

    #[test]
    fn test_parse_line_with_whitespace_and_newline() {
        let history: HistoricalReturns = " 1.0 , 2.0,3.0\r\n".parse().unwrap();
        assert_eq!(history.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!("".parse::<HistoricalReturns>(), Err(DataError::Empty));
        assert_eq!("   \n".parse::<HistoricalReturns>(), Err(DataError::Empty));
    }

    #[test]
    fn test_parse_malformed_token() {
        let err = "1.0,abc,3.0".parse::<HistoricalReturns>().unwrap_err();
        assert_eq!(
            err,
            DataError::Malformed {
                position: 1,
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_trailing_comma_is_malformed() {
        let err = "1.0,2.0,".parse::<HistoricalReturns>().unwrap_err();
        assert!(matches!(err, DataError::Malformed { position: 2, .. }));
    }

    #[test]
    fn test_parse_non_finite() {
        let err = "1.0,NaN".parse::<HistoricalReturns>().unwrap_err();
        assert!(matches!(err, DataError::NonFinite { position: 1, .. }));
    }

    #[test]
    fn test_from_values() {
        assert_eq!(
            HistoricalReturns::from_values(vec![]),
            Err(DataError::Empty)
        );
        assert!(matches!(
            HistoricalReturns::from_values(vec![1.0, f64::INFINITY]),
            Err(DataError::NonFinite { position: 1, .. })
        ));
        assert!(HistoricalReturns::from_values(vec![1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_expect_len() {
        let history = HistoricalReturns::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(history.expect_len(3).is_ok());
        assert_eq!(
            history.expect_len(179),
            Err(DataError::LengthMismatch {
                expected: 179,
                actual: 3
            })
        );
    }
}
