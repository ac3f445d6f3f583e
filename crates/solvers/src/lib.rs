//! Numerical solvers for emlib.
//!
//! Solvers take a [`Derivative`] and an initial [`StateVector`], advance the
//! state over a time horizon, and record every step as a [`Trajectory`].
//!
//! # Modules
//!
//! - [`transient`] — fixed-step time integration
//!
//! [`Derivative`]: emlib_core::Derivative
//! [`StateVector`]: emlib_core::StateVector
//! [`Trajectory`]: emlib_core::Trajectory

pub mod transient;
