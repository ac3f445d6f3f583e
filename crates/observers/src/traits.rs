//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with every solver that emits samples.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry the time of a sample
//! - [`HasState`] — events that carry the state of a sample
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use emlib_core::Observer;
//! use emlib_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops once the first component drops below a threshold.
//! struct Extinction {
//!     threshold: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Extinction {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state()[0] < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use emlib_core::StateVector;
use emlib_solvers::transient::euler;

/// An event that carries the time of a recorded sample.
pub trait HasTime {
    fn time(&self) -> f64;
}

/// An event that carries the state of a recorded sample.
pub trait HasState {
    fn state(&self) -> &StateVector;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- euler ---

impl HasTime for euler::Event<'_> {
    fn time(&self) -> f64 {
        self.sample.time
    }
}

impl HasState for euler::Event<'_> {
    fn state(&self) -> &StateVector {
        &self.sample.state
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
