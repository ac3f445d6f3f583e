//! Solvers for initial value problems: advancing a state through time.
//!
//! A [`Derivative`] maps `(time, state)` to a rate of change. Solvers in this
//! module start at `t = 0` from an initial state and step forward until the
//! configured horizon is reached, recording each sample.
//!
//! # Solvers
//!
//! - [`euler`] — explicit (forward) Euler with a fixed step size
//!
//! Solvers take the state as a [`StateVector`] and record it into a
//! [`Trajectory`]. The update itself is the vector's [`StepIntegrable`]
//! impl, `state + rate * h`.
//!
//! [`Derivative`]: emlib_core::Derivative
//! [`StateVector`]: emlib_core::StateVector
//! [`StepIntegrable`]: emlib_core::StepIntegrable
//! [`Trajectory`]: emlib_core::Trajectory

pub mod euler;
