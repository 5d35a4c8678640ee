//! Normal variate sources.
//!
//! [`NormalSource`] is the capability the path simulator depends on: "draw
//! one normal sample with this mean and standard deviation". Production runs
//! use [`SimulationRng`]; tests substitute [`ConstantNormalSource`] or
//! [`ReplayNormalSource`] to make paths exactly predictable.

use super::prng::SimulationRng;

/// Source of normally distributed samples.
///
/// Implementations must return a finite value for finite `mean` and finite,
/// non-negative `std_dev`.
pub trait NormalSource {
    /// Draws one sample from N(`mean`, `std_dev`²).
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Draws one standard normal sample.
    #[inline]
    fn sample_standard(&mut self) -> f64 {
        self.sample(0.0, 1.0)
    }
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).sample(mean, std_dev)
    }
}

impl NormalSource for SimulationRng {
    #[inline]
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.gen_normal()
    }
}

/// Deterministic source that always returns `mean + std_dev * z`.
///
/// With `z = 0.0` every draw equals the requested mean, which reduces a GBM
/// path to pure drift.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{ConstantNormalSource, NormalSource};
///
/// let mut zeros = ConstantNormalSource::zero();
/// assert_eq!(zeros.sample(0.0, 1.0), 0.0);
///
/// let mut ones = ConstantNormalSource::new(1.0);
/// assert_eq!(ones.sample(2.0, 3.0), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstantNormalSource {
    z: f64,
}

impl ConstantNormalSource {
    /// Creates a source returning the standardised value `z` on every draw.
    #[inline]
    pub fn new(z: f64) -> Self {
        Self { z }
    }

    /// Creates a source whose standardised draws are all zero.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0)
    }
}

impl NormalSource for ConstantNormalSource {
    #[inline]
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.z
    }
}

/// Deterministic source replaying a fixed list of standardised draws.
///
/// Cycles back to the start when the list is exhausted.
///
/// # Panics
///
/// [`ReplayNormalSource::new`] panics if `draws` is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayNormalSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ReplayNormalSource {
    /// Creates a source replaying `draws` in order.
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "replay source needs at least one draw");
        Self { draws, cursor: 0 }
    }

    /// Returns how many draws have been taken.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl NormalSource for ReplayNormalSource {
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        mean + std_dev * z
    }
}
