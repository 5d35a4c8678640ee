//! Owned price trajectory.

use std::ops::Index;

/// One simulated (or averaged) price path.
///
/// Index 0 holds the price at time zero (the spot price); index `i` holds the
/// price after `i` time steps. A trajectory is always owned by whoever
/// produced it and is never shared: averaging consumes borrowed inputs and
/// returns a fresh trajectory.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::Trajectory;
///
/// let path = Trajectory::from(vec![100.0, 101.5, 99.8]);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.initial_price(), Some(100.0));
/// assert_eq!(path.terminal_price(), Some(99.8));
/// assert_eq!(path[1], 101.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    prices: Vec<f64>,
}

impl Trajectory {
    /// Returns the number of time steps in the trajectory.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns `true` if the trajectory holds no prices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Returns the price at time zero.
    #[inline]
    pub fn initial_price(&self) -> Option<f64> {
        self.prices.first().copied()
    }

    /// Returns the price at the final time step.
    #[inline]
    pub fn terminal_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Returns the prices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    /// Iterates over the prices in chronological order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.prices.iter()
    }

    /// Consumes the trajectory, returning the underlying prices.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.prices
    }
}

impl From<Vec<f64>> for Trajectory {
    #[inline]
    fn from(prices: Vec<f64>) -> Self {
        Self { prices }
    }
}

impl Index<usize> for Trajectory {
    type Output = f64;

    #[inline]
    fn index(&self, step: usize) -> &f64 {
        &self.prices[step]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.prices.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.prices.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trajectory() {
        let path = Trajectory::default();
        assert!(path.is_empty());
        assert_eq!(path.initial_price(), None);
        assert_eq!(path.terminal_price(), None);
    }

    #[test]
    fn test_round_trip_through_vec() {
        let prices = vec![100.0, 100.5, 101.0];
        let path = Trajectory::from(prices.clone());
        assert_eq!(path.into_vec(), prices);
    }
}
