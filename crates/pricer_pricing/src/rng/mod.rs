//! # Random Number Generation Infrastructure
//!
//! This module provides the normal variate sources consumed by the path
//! simulator.
//!
//! ## Design Rationale
//!
//! - **One generator per run**: a generator is seeded once and sampled
//!   repeatedly, never re-created per draw
//! - **Independent streams**: each outer Monte Carlo iteration draws from its
//!   own generator, seeded from the run seed and the iteration index, so
//!   sequential and parallel runs agree exactly
//! - **Injectable**: the simulator is generic over [`NormalSource`], so tests
//!   can substitute deterministic draws
//!
//! ## Module Structure
//!
//! - [`prng`]: Seeded PRNG wrapper and stream seed derivation
//! - [`source`]: The [`NormalSource`] trait and deterministic sources
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalSource, SimulationRng};
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = SimulationRng::from_seed(12345);
//!
//! // Standard normal variate
//! let z = rng.gen_normal();
//!
//! // Normal variate with explicit mean and standard deviation
//! let x = rng.sample(5.0, 2.0);
//! # assert!(z.is_finite() && x.is_finite());
//! ```

pub mod prng;
pub mod source;

// Public re-exports
pub use prng::{derive_stream_seed, SimulationRng};
pub use source::{ConstantNormalSource, NormalSource, ReplayNormalSource};

#[cfg(test)]
mod tests;
