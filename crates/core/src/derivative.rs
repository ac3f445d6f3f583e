use std::convert::Infallible;

use crate::StateVector;

/// A function computing the instantaneous rate of change of a state vector.
///
/// Derivatives must be deterministic and free of side effects: the solvers
/// may call them any number of times and expect the same output for the same
/// `(time, state)`. The returned vector must have the same length as `state`;
/// solvers check this and report a mismatch rather than stepping.
///
/// Any closure `Fn(f64, &[f64]) -> Vec<f64>` is an infallible derivative.
/// Wrap closures that can fail with [`fallible`].
pub trait Derivative {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative at the given time and state.
    ///
    /// # Errors
    ///
    /// Each derivative defines its own `Error` type. Solvers never retry a
    /// failed evaluation; the error ends the current integration.
    fn evaluate(&self, time: f64, state: &StateVector) -> Result<Vec<f64>, Self::Error>;
}

/// Blanket implementation for infallible derivative closures.
impl<F> Derivative for F
where
    F: Fn(f64, &[f64]) -> Vec<f64>,
{
    type Error = Infallible;

    fn evaluate(&self, time: f64, state: &StateVector) -> Result<Vec<f64>, Infallible> {
        Ok(self(time, state.as_slice()))
    }
}

/// A derivative backed by a closure that may fail.
///
/// Construct with [`fallible`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(F);

/// Wraps a fallible closure as a [`Derivative`].
///
/// # Example
///
/// ```
/// use emlib_core::{Derivative, StateVector, fallible};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("population went negative")]
/// struct Extinct;
///
/// let decay = fallible(|_t, state: &[f64]| {
///     if state[0] < 0.0 {
///         return Err(Extinct);
///     }
///     Ok(vec![-state[0]])
/// });
///
/// assert!(decay.evaluate(0.0, &StateVector::from([1.0])).is_ok());
/// assert!(decay.evaluate(0.0, &StateVector::from([-1.0])).is_err());
/// ```
pub fn fallible<F, E>(f: F) -> Fallible<F>
where
    F: Fn(f64, &[f64]) -> Result<Vec<f64>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    Fallible(f)
}

impl<F, E> Derivative for Fallible<F>
where
    F: Fn(f64, &[f64]) -> Result<Vec<f64>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, time: f64, state: &StateVector) -> Result<Vec<f64>, E> {
        (self.0)(time, state.as_slice())
    }
}
