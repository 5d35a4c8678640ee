//! Elementwise averaging of trajectories.
//!
//! Both the inner (per outer iteration) and outer (final) reduction stages of
//! the Monte Carlo scheme use these routines. For each time index the prices
//! are summed in input order, starting from `0.0`, and the sum is divided by
//! the number of trajectories.

use crate::types::Trajectory;

/// Incremental elementwise mean of same-length trajectories.
///
/// Produces the same result, bit for bit, as [`average_trajectories`] over
/// the same trajectories added in the same order.
///
/// # Examples
///
/// ```rust
/// use pricer_core::math::averaging::TrajectoryAccumulator;
/// use pricer_core::types::Trajectory;
///
/// let mut acc = TrajectoryAccumulator::new(2);
/// acc.add(&Trajectory::from(vec![100.0, 110.0]));
/// acc.add(&Trajectory::from(vec![100.0, 90.0]));
/// assert_eq!(acc.count(), 2);
/// assert_eq!(acc.mean().as_slice(), &[100.0, 100.0]);
/// ```
#[derive(Clone, Debug)]
pub struct TrajectoryAccumulator {
    sums: Vec<f64>,
    count: usize,
}

impl TrajectoryAccumulator {
    /// Creates an empty accumulator for trajectories of length `len`.
    pub fn new(len: usize) -> Self {
        Self {
            sums: vec![0.0; len],
            count: 0,
        }
    }

    /// Returns the trajectory length this accumulator expects.
    #[inline]
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    /// Returns `true` if the expected trajectory length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Returns the number of trajectories added so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Adds one trajectory to the running sums.
    ///
    /// # Panics
    ///
    /// Panics if `trajectory` does not have the expected length.
    pub fn add(&mut self, trajectory: &Trajectory) {
        assert_eq!(
            trajectory.len(),
            self.sums.len(),
            "trajectory length mismatch"
        );
        for (sum, price) in self.sums.iter_mut().zip(trajectory.iter()) {
            *sum += price;
        }
        self.count += 1;
    }

    /// Consumes the accumulator, returning the elementwise mean.
    ///
    /// # Panics
    ///
    /// Panics if no trajectory was added.
    pub fn mean(self) -> Trajectory {
        assert!(self.count > 0, "cannot average zero trajectories");
        let count = self.count as f64;
        let mut sums = self.sums;
        for sum in sums.iter_mut() {
            *sum /= count;
        }
        Trajectory::from(sums)
    }
}

/// Returns the elementwise arithmetic mean of `trajectories`.
///
/// # Panics
///
/// Panics if `trajectories` is empty or the trajectories differ in length.
/// Both are programming errors in the caller.
///
/// # Examples
///
/// ```rust
/// use pricer_core::math::averaging::average_trajectories;
/// use pricer_core::types::Trajectory;
///
/// let paths = vec![
///     Trajectory::from(vec![100.0, 104.0, 108.0]),
///     Trajectory::from(vec![100.0, 96.0, 100.0]),
/// ];
/// let mean = average_trajectories(&paths);
/// assert_eq!(mean.as_slice(), &[100.0, 100.0, 104.0]);
/// ```
pub fn average_trajectories(trajectories: &[Trajectory]) -> Trajectory {
    assert!(
        !trajectories.is_empty(),
        "cannot average zero trajectories"
    );

    let mut acc = TrajectoryAccumulator::new(trajectories[0].len());
    for trajectory in trajectories {
        acc.add(trajectory);
    }
    acc.mean()
}
