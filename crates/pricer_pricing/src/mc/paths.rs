//! Path generation for Monte Carlo simulation.
//!
//! This module implements single-trajectory Geometric Brownian Motion (GBM)
//! generation using the log-space (exact) discretisation.
//!
//! # Time Grid
//!
//! A trajectory of `time_steps` prices spans one unit of time with
//! `dt = 1 / time_steps`; index 0 holds the spot price and each of the
//! remaining `time_steps - 1` prices consumes one fresh normal draw.

use pricer_core::types::Trajectory;

use crate::rng::NormalSource;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// The GBM model assumes asset prices follow:
/// ```text
/// dS = r S dt + σ S dW
/// ```
///
/// where:
/// - S is the spot price
/// - r is the risk-free rate (drift)
/// - σ is the volatility
/// - W is a Wiener process
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.001, 0.0093, 180);
/// assert!(params.is_valid());
/// assert_eq!(params.dt(), 1.0 / 180.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r).
    pub rate: f64,
    /// Volatility (σ).
    pub volatility: f64,
    /// Number of prices per trajectory, including the spot.
    pub time_steps: usize,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, time_steps: usize) -> Self {
        Self {
            spot,
            rate,
            volatility,
            time_steps,
        }
    }

    /// Returns the time increment `1 / time_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        1.0 / self.time_steps as f64
    }

    /// Validates the parameters.
    ///
    /// # Returns
    ///
    /// `true` if all parameters are finite, the spot is positive, the
    /// volatility is non-negative and there are at least two time steps.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.spot > 0.0
            && self.spot.is_finite()
            && self.rate.is_finite()
            && self.volatility >= 0.0
            && self.volatility.is_finite()
            && self.time_steps >= 2
    }
}

/// Simulates one GBM trajectory.
///
/// ```text
/// S[0]   = spot
/// S[i+1] = S[i] × exp((r - σ²/2)·dt + σ·z·√dt),   z ~ N(0, 1)
/// ```
///
/// Draws exactly `time_steps - 1` standard normal samples from `source`, in
/// step order.
///
/// # Panics
///
/// Panics if `params.time_steps < 2`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{simulate_path, GbmParams};
/// use pricer_pricing::rng::SimulationRng;
///
/// let params = GbmParams::new(100.0, 0.001, 0.2, 180);
/// let mut rng = SimulationRng::from_seed(42);
///
/// let path = simulate_path(&params, &mut rng);
/// assert_eq!(path.len(), 180);
/// assert_eq!(path[0], 100.0);
/// ```
pub fn simulate_path<S: NormalSource>(params: &GbmParams, source: &mut S) -> Trajectory {
    assert!(
        params.time_steps >= 2,
        "a trajectory needs at least two time steps"
    );

    let dt = params.dt();

    // Precompute drift and diffusion scale outside the step loop
    let drift_dt = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    let mut prices = Vec::with_capacity(params.time_steps);
    prices.push(params.spot);

    let mut price = params.spot;
    for _ in 1..params.time_steps {
        let z = source.sample_standard();
        price *= (drift_dt + vol_sqrt_dt * z).exp();
        prices.push(price);
    }

    Trajectory::from(prices)
}
