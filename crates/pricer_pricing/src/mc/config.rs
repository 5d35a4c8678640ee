//! Monte Carlo simulation configuration.
//!
//! This module provides the validated configuration of a forecast run and
//! its builder. Defaults reproduce the reference run: 100 inner paths per
//! outer iteration, 10,000 outer iterations, 180 one-minute steps, a
//! risk-free rate of 0.001 and a spot price of 100.

use super::error::ConfigError;

/// Minimum number of time steps (a start and one step).
pub const MIN_STEPS: usize = 2;

/// Maximum number of time steps allowed per trajectory.
pub const MAX_STEPS: usize = 100_000;

/// Maximum number of inner or outer loop iterations.
pub const MAX_LOOPS: usize = 10_000_000;

/// Default number of simulated paths averaged per outer iteration.
pub const DEFAULT_IN_LOOPS: usize = 100;

/// Default number of outer iterations.
pub const DEFAULT_OUT_LOOPS: usize = 10_000;

/// Default number of time steps (minutes) per trajectory.
pub const DEFAULT_TIME_STEPS: usize = 180;

/// Default risk-free rate.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.001;

/// Default spot price at time zero.
pub const DEFAULT_SPOT_PRICE: f64 = 100.0;

/// Monte Carlo forecast configuration.
///
/// Immutable configuration specifying everything about a run except the
/// volatility, which is estimated from historical data.
/// Use [`SimulationConfigBuilder`] to construct validated instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .time_steps(60)
///     .in_loops(50)
///     .out_loops(200)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.time_steps(), 60);
/// assert_eq!(config.total_paths(), 10_000);
/// assert_eq!(config.spot_price(), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Price at time zero.
    spot_price: f64,
    /// Number of prices per trajectory, including the spot.
    time_steps: usize,
    /// Drift of the GBM recurrence.
    risk_free_rate: f64,
    /// Paths averaged per outer iteration.
    in_loops: usize,
    /// Outer iterations averaged into the final trajectory.
    out_loops: usize,
    /// Optional run seed for reproducibility.
    seed: Option<u64>,
    /// Run outer iterations on the rayon thread pool.
    parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spot_price: DEFAULT_SPOT_PRICE,
            time_steps: DEFAULT_TIME_STEPS,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            in_loops: DEFAULT_IN_LOOPS,
            out_loops: DEFAULT_OUT_LOOPS,
            seed: None,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder seeded with the defaults.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the spot price at time zero.
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Returns the number of prices per trajectory.
    #[inline]
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the number of paths averaged per outer iteration.
    #[inline]
    pub fn in_loops(&self) -> usize {
        self.in_loops
    }

    /// Returns the number of outer iterations.
    #[inline]
    pub fn out_loops(&self) -> usize {
        self.out_loops
    }

    /// Returns the total number of simulated paths.
    #[inline]
    pub fn total_paths(&self) -> usize {
        self.in_loops * self.out_loops
    }

    /// Returns the number of historical values needed for calibration.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.time_steps - 1
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether outer iterations run in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `time_steps` is outside [2, 100,000]
    /// - `in_loops` or `out_loops` is outside [1, 10,000,000]
    /// - `spot_price` is not finite and positive
    /// - `risk_free_rate` is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_STEPS..=MAX_STEPS).contains(&self.time_steps) {
            return Err(ConfigError::InvalidStepCount(self.time_steps));
        }
        for (name, value) in [("in_loops", self.in_loops), ("out_loops", self.out_loops)] {
            if value == 0 || value > MAX_LOOPS {
                return Err(ConfigError::InvalidLoopCount { name, value });
            }
        }
        if !(self.spot_price.is_finite() && self.spot_price > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "spot_price",
                value: format!("{} must be finite and positive", self.spot_price),
            });
        }
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "risk_free_rate",
                value: format!("{} must be finite", self.risk_free_rate),
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Starts from the defaults; every setter overrides one field. Validation
/// happens in [`SimulationConfigBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot_price(mut self, spot_price: f64) -> Self {
        self.config.spot_price = spot_price;
        self
    }

    /// Sets the number of prices per trajectory.
    #[inline]
    pub fn time_steps(mut self, time_steps: usize) -> Self {
        self.config.time_steps = time_steps;
        self
    }

    /// Sets the risk-free rate.
    #[inline]
    pub fn risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.config.risk_free_rate = risk_free_rate;
        self
    }

    /// Sets the number of paths averaged per outer iteration.
    #[inline]
    pub fn in_loops(mut self, in_loops: usize) -> Self {
        self.config.in_loops = in_loops;
        self
    }

    /// Sets the number of outer iterations.
    #[inline]
    pub fn out_loops(mut self, out_loops: usize) -> Self {
        self.config.out_loops = out_loops;
        self
    }

    /// Sets the run seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets or clears the run seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Enables or disables parallel outer iterations.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails; see
    /// [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = SimulationConfig::builder().build().unwrap();

        assert_eq!(config.in_loops(), 100);
        assert_eq!(config.out_loops(), 10_000);
        assert_eq!(config.time_steps(), 180);
        assert_eq!(config.risk_free_rate(), 0.001);
        assert_eq!(config.spot_price(), 100.0);
        assert_eq!(config.seed(), None);
        assert!(!config.parallel());
        assert_eq!(config.total_paths(), 1_000_000);
        assert_eq!(config.history_len(), 179);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SimulationConfig::builder()
            .spot_price(50.0)
            .time_steps(5)
            .risk_free_rate(-0.01)
            .in_loops(3)
            .out_loops(4)
            .seed(9)
            .parallel(true)
            .build()
            .unwrap();

        assert_eq!(config.spot_price(), 50.0);
        assert_eq!(config.time_steps(), 5);
        assert_eq!(config.risk_free_rate(), -0.01);
        assert_eq!(config.in_loops(), 3);
        assert_eq!(config.out_loops(), 4);
        assert_eq!(config.seed(), Some(9));
        assert!(config.parallel());
    }

    #[test]
    fn test_maybe_seed_clears() {
        let config = SimulationConfig::builder()
            .seed(1)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_invalid_step_counts() {
        for steps in [0, 1, MAX_STEPS + 1] {
            let result = SimulationConfig::builder().time_steps(steps).build();
            assert_eq!(result, Err(ConfigError::InvalidStepCount(steps)));
        }
        assert!(SimulationConfig::builder().time_steps(2).build().is_ok());
    }

    #[test]
    fn test_invalid_loop_counts() {
        let result = SimulationConfig::builder().in_loops(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLoopCount {
                name: "in_loops",
                value: 0
            })
        ));

        let result = SimulationConfig::builder().out_loops(MAX_LOOPS + 1).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLoopCount {
                name: "out_loops",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_spot_price() {
        for spot in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = SimulationConfig::builder().spot_price(spot).build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter {
                    name: "spot_price",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_invalid_rate() {
        let result = SimulationConfig::builder().risk_free_rate(f64::NAN).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "risk_free_rate",
                ..
            })
        ));
    }
}
