//! Core traits and types for emlib.
//!
//! This crate defines the shared abstractions that the solvers, observers, and
//! the user-facing `Model` build on:
//!
//! - [`StateVector`] — the fixed-length real-valued state of a system
//! - [`Derivative`] — a function mapping `(time, state)` to a rate of change
//! - [`StepIntegrable`] — a type that can be advanced by `derivative * delta`
//! - [`Sample`], [`Trajectory`] — the time-ordered record of an integration
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Renderer`] — consumes a finished trajectory to produce a visual artifact

mod derivative;
mod observer;
mod render;
mod state;
mod step;
mod trajectory;

pub use derivative::{Derivative, Fallible, fallible};
pub use observer::Observer;
pub use render::Renderer;
pub use state::StateVector;
pub use step::{DerivativeOf, StepIntegrable};
pub use trajectory::{Sample, Trajectory, TrajectoryError};
