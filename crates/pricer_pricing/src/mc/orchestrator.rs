//! Nested-loop Monte Carlo forecasting.
//!
//! The orchestrator reduces `in_loops × out_loops` simulated trajectories to
//! one expected trajectory in two passes:
//!
//! ```text
//! for o in 0..out_loops:
//!     outer[o] = mean(simulate_path() for _ in 0..in_loops)
//! final = mean(outer[0..out_loops])
//! ```
//!
//! The result is mathematically the mean of all paths, but the two-pass
//! summation order is kept so results are reproducible across execution
//! modes.
//!
//! # Randomness and Parallelism
//!
//! Outer iteration `o` draws from its own generator, seeded with
//! [`derive_stream_seed`](crate::rng::derive_stream_seed)`(run_seed, o)`.
//! With `parallel` enabled, outer iterations run on the rayon thread pool in
//! blocks of [`PARALLEL_BLOCK`]; each block is folded into the second pass in
//! index order, so a seeded run produces the same trajectory either way.
//!
//! Both passes stream through a [`TrajectoryAccumulator`], so memory stays
//! bounded by one block of outer means regardless of the loop counts.

use std::time::Instant;

use pricer_core::math::averaging::TrajectoryAccumulator;
use pricer_core::math::volatility::historical_volatility;
use pricer_core::types::{HistoricalReturns, Trajectory};
use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::config::SimulationConfig;
use super::error::{ConfigError, SimulationError};
use super::paths::{simulate_path, GbmParams};
use crate::rng::{NormalSource, SimulationRng};

/// Outer iterations simulated concurrently before folding into the final
/// mean.
pub const PARALLEL_BLOCK: usize = 4096;

/// Immutable parameter bundle for one forecast run.
///
/// Combines a validated [`SimulationConfig`] with the estimated volatility.
/// [`SimulationParameters::new`] is the only constructor, so every bundle
/// satisfies the configuration bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    spot_price: f64,
    time_steps: usize,
    risk_free_rate: f64,
    volatility: f64,
    in_loops: usize,
    out_loops: usize,
}

impl SimulationParameters {
    /// Bundles `config` with `volatility`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `volatility` is negative
    /// or not finite.
    pub fn new(config: &SimulationConfig, volatility: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = Self {
            spot_price: config.spot_price(),
            time_steps: config.time_steps(),
            risk_free_rate: config.risk_free_rate(),
            volatility,
            in_loops: config.in_loops(),
            out_loops: config.out_loops(),
        };
        if !params.gbm_params().is_valid() {
            return Err(ConfigError::InvalidParameter {
                name: "volatility",
                value: format!("{} must be finite and non-negative", volatility),
            });
        }
        Ok(params)
    }

    /// Returns the price at time zero.
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Returns the number of prices per trajectory.
    #[inline]
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Returns the drift of the GBM recurrence.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the calibrated volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
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

    /// Returns the GBM parameters shared by every simulated path.
    #[inline]
    pub fn gbm_params(&self) -> GbmParams {
        GbmParams::new(
            self.spot_price,
            self.risk_free_rate,
            self.volatility,
            self.time_steps,
        )
    }
}

/// Result of a forecast run.
#[derive(Clone, Debug, PartialEq)]
pub struct Forecast {
    /// Volatility estimated from the historical data.
    pub volatility: f64,
    /// Run seed; replaying it reproduces the trajectory.
    pub seed: u64,
    /// Expected price per time step.
    pub trajectory: Trajectory,
}

/// Drives the nested Monte Carlo loop and its two-level reduction.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{SimulationConfig, SimulationOrchestrator, SimulationParameters};
/// use pricer_pricing::rng::ConstantNormalSource;
///
/// let config = SimulationConfig::builder()
///     .time_steps(4)
///     .in_loops(1)
///     .out_loops(1)
///     .build()
///     .unwrap();
/// let orchestrator = SimulationOrchestrator::new(config);
/// let params = SimulationParameters::new(orchestrator.config(), 0.0).unwrap();
///
/// let path = orchestrator.run_with_sources(&params, |_| ConstantNormalSource::zero());
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationOrchestrator {
    config: SimulationConfig,
}

impl SimulationOrchestrator {
    /// Creates an orchestrator for a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Estimates volatility from `history`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Data`] if `history` does not hold exactly
    /// `time_steps - 1` values.
    pub fn estimate_volatility(&self, history: &HistoricalReturns) -> Result<f64, SimulationError> {
        history.expect_len(self.config.history_len())?;
        Ok(historical_volatility(self.config.spot_price(), history)?)
    }

    /// Calibrates the run parameters from `history`.
    ///
    /// # Errors
    ///
    /// See [`SimulationOrchestrator::estimate_volatility`].
    pub fn parameters(
        &self,
        history: &HistoricalReturns,
    ) -> Result<SimulationParameters, SimulationError> {
        let volatility = self.estimate_volatility(history)?;
        Ok(SimulationParameters::new(&self.config, volatility)?)
    }

    /// Runs the full forecast: calibration, simulation and reduction.
    ///
    /// # Errors
    ///
    /// Fails before any path is simulated if calibration fails.
    pub fn run(&self, history: &HistoricalReturns) -> Result<Forecast, SimulationError> {
        let params = self.parameters(history)?;
        Ok(self.run_calibrated(&params))
    }

    /// Simulates and reduces with already-calibrated parameters.
    ///
    /// Uses the configured seed, or a fresh entropy seed recorded in the
    /// returned [`Forecast`].
    pub fn run_calibrated(&self, params: &SimulationParameters) -> Forecast {
        let seed = self.config.seed().unwrap_or_else(rand::random);
        info!(
            volatility = params.volatility,
            seed,
            in_loops = params.in_loops,
            out_loops = params.out_loops,
            time_steps = params.time_steps,
            parallel = self.config.parallel(),
            "Starting Monte Carlo forecast"
        );

        let start = Instant::now();
        let trajectory = self.run_seeded(params, seed);
        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            terminal_price = trajectory.terminal_price(),
            "Monte Carlo forecast complete"
        );

        Forecast {
            volatility: params.volatility,
            seed,
            trajectory,
        }
    }

    /// Simulates and reduces with one [`SimulationRng`] stream per outer
    /// iteration, derived from `seed`.
    pub fn run_seeded(&self, params: &SimulationParameters, seed: u64) -> Trajectory {
        self.run_with_sources(params, |outer| {
            SimulationRng::for_stream(seed, outer as u64)
        })
    }

    /// Simulates and reduces using `make_source(o)` as the normal source of
    /// outer iteration `o`.
    ///
    /// Every path of an outer iteration draws from the same source, in order.
    pub fn run_with_sources<F, S>(&self, params: &SimulationParameters, make_source: F) -> Trajectory
    where
        F: Fn(usize) -> S + Sync + Send,
        S: NormalSource,
    {
        let gbm = params.gbm_params();
        let simulate_outer = |outer: usize| {
            let mut source = make_source(outer);
            let mean = outer_iteration(&gbm, params.in_loops, &mut source);
            trace!(outer, "Outer iteration averaged");
            mean
        };

        let mut total = TrajectoryAccumulator::new(params.time_steps);
        if self.config.parallel() {
            debug!(
                threads = rayon::current_num_threads(),
                block = PARALLEL_BLOCK,
                "Running outer iterations in parallel"
            );
            let mut start = 0;
            while start < params.out_loops {
                let end = (start + PARALLEL_BLOCK).min(params.out_loops);
                let block: Vec<Trajectory> =
                    (start..end).into_par_iter().map(&simulate_outer).collect();
                for mean in &block {
                    total.add(mean);
                }
                start = end;
            }
        } else {
            for outer in 0..params.out_loops {
                total.add(&simulate_outer(outer));
            }
        }

        debug!(outer_means = total.count(), "Averaging outer iterations");
        total.mean()
    }
}

/// Simulates `in_loops` paths and returns their elementwise mean.
fn outer_iteration<S: NormalSource>(gbm: &GbmParams, in_loops: usize, source: &mut S) -> Trajectory {
    let mut acc = TrajectoryAccumulator::new(gbm.time_steps);
    for _ in 0..in_loops {
        acc.add(&simulate_path(gbm, &mut *source));
    }
    acc.mean()
}
