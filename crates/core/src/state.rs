use std::ops::Deref;

use crate::StepIntegrable;

/// The instantaneous state of a system as an ordered list of reals.
///
/// A state vector's length is fixed for the duration of an integration run.
/// It dereferences to `[f64]`, so slice methods (`len`, `iter`, indexing) are
/// available directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateVector(Vec<f64>);

impl StateVector {
    /// Creates a state vector from its components.
    #[must_use]
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl Deref for StateVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for StateVector {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}

impl From<&[f64]> for StateVector {
    fn from(components: &[f64]) -> Self {
        Self(components.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for StateVector {
    fn from(components: [f64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl FromIterator<f64> for StateVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Explicit Euler update: `state[i] + derivative[i] * delta`.
///
/// Components beyond the shorter of the two vectors are dropped, so callers
/// must check lengths before stepping.
impl StepIntegrable<f64> for StateVector {
    type Derivative = Vec<f64>;

    fn step(&self, derivative: Vec<f64>, delta: f64) -> Self {
        self.0
            .iter()
            .zip(derivative)
            .map(|(s, d)| s + d * delta)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn converts_from_arrays_and_slices() {
        let from_array = StateVector::from([3.0, 2.0]);
        let from_slice = StateVector::from(&[3.0, 2.0][..]);
        let from_vec = StateVector::new(vec![3.0, 2.0]);

        assert_eq!(from_array, from_slice);
        assert_eq!(from_array, from_vec);
        assert_eq!(from_array.len(), 2);
        assert_eq!(from_array[1], 2.0);
    }

    #[test]
    fn step_applies_scaled_derivative() {
        let state = StateVector::from([1.0, -2.0, 0.5]);

        let next = state.step(vec![2.0, 4.0, -1.0], 0.25);

        assert_relative_eq!(next[0], 1.5);
        assert_relative_eq!(next[1], -1.0);
        assert_relative_eq!(next[2], 0.25);
    }

    #[test]
    fn zero_derivative_leaves_state_unchanged() {
        let state = StateVector::from([1.0, 1.0]);
        assert_eq!(state.step(vec![0.0, 0.0], 0.1), state);
    }

    #[test]
    fn detects_non_finite_components() {
        assert!(StateVector::from([1.0, 2.0]).is_finite());
        assert!(!StateVector::from([1.0, f64::NAN]).is_finite());
        assert!(!StateVector::from([f64::INFINITY]).is_finite());
    }
}
