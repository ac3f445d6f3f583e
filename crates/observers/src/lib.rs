//! Reusable observers and renderers for emlib.
//!
//! This crate provides [`Observer`] implementations that work with the
//! solvers in `emlib-solvers`, and [`Renderer`] implementations that turn a
//! finished [`Trajectory`] into something a person can look at.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`NonFiniteGuard`] — stops a run at the first NaN or infinite state
//!
//! # Renderers
//!
//! - [`TableRenderer`] — writes a trajectory as a plain-text table
//!
//! # Features
//!
//! - `plot` — Enables [`TrajectoryPlot`] for drawing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: emlib_core::Observer
//! [`Renderer`]: emlib_core::Renderer
//! [`Trajectory`]: emlib_core::Trajectory
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod guard;
mod table;

#[cfg(feature = "plot")]
mod plot;

pub use guard::NonFiniteGuard;
pub use table::{TableError, TableRenderer};

#[cfg(feature = "plot")]
pub use plot::{PlotError, ShowConfig, TrajectoryPlot};
