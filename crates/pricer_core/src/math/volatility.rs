//! Historical volatility estimation.
//!
//! The spot price and the historical minute-end prices are treated as one
//! series of `N + 1` observations. The estimate is the square root of the sum
//! of squared deviations from the series mean, scaled by `1/100`:
//!
//! ```text
//! mean = (S₀ + Σ pᵢ) / (N + 1)
//! SS   = (S₀ - mean)² + Σ (pᵢ - mean)²
//! σ    = √SS / 100
//! ```
//!
//! The sum of squares is not normalised by `N`. The `1/100` converts the
//! dispersion into the percentage-like unit consumed by the path simulator.

use tracing::debug;

use crate::types::{DataError, HistoricalReturns};

/// Scale applied to the root sum of squares.
pub const VOLATILITY_SCALE: f64 = 100.0;

/// Estimates volatility from the spot price and a historical price series.
///
/// Deterministic and never negative.
///
/// # Errors
///
/// Returns [`DataError::Empty`] if `history` holds no values.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use pricer_core::math::volatility::historical_volatility;
/// use pricer_core::types::HistoricalReturns;
///
/// let history: HistoricalReturns = "99.5,100.2,100.8".parse().unwrap();
/// let sigma = historical_volatility(100.0, &history).unwrap();
/// assert_relative_eq!(sigma, 0.8675_f64.sqrt() / 100.0, epsilon = 1e-12);
/// ```
pub fn historical_volatility(spot_price: f64, history: &HistoricalReturns) -> Result<f64, DataError> {
    let prices = history.values();
    if prices.is_empty() {
        return Err(DataError::Empty);
    }

    let n_observations = (prices.len() + 1) as f64;
    let mean = (spot_price + prices.iter().sum::<f64>()) / n_observations;

    let sum_sq = (spot_price - mean).powi(2)
        + prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>();

    let volatility = sum_sq.sqrt() / VOLATILITY_SCALE;
    debug!(
        observations = prices.len() + 1,
        mean,
        sum_sq,
        volatility,
        "Estimated historical volatility"
    );

    Ok(volatility)
}
