//! Wrap a derivative function in a [`Model`], integrate it over time, and
//! draw the resulting trajectory.
//!
//! # Example
//!
//! ```
//! use emlib::{IntegrationOptions, Model, TableRenderer};
//!
//! // Lotka-Volterra predator-prey dynamics.
//! let mut lv = Model::from_fn(|_t: f64, state: &[f64]| {
//!     let (prey, predator) = (state[0], state[1]);
//!     vec![prey - prey * predator, prey * predator - predator]
//! });
//!
//! lv.integrate([3.0, 2.0], &IntegrationOptions::new(20.0)?)?;
//! assert_eq!(lv.trajectory().len(), 21);
//!
//! // Each call replaces the previous run.
//! lv.integrate([3.0, 2.0], &IntegrationOptions::new(20.0)?.with_dt(0.01)?)?;
//! assert_eq!(lv.trajectory().len(), 2001);
//!
//! lv.draw(TableRenderer::new(std::io::sink()).names(["prey", "predator"]))?;
//! # Ok::<(), emlib::Error>(())
//! ```
//!
//! # Crates
//!
//! The building blocks live in separate crates and are re-exported here:
//!
//! - `emlib-core` — state vectors, derivatives, trajectories, observer and
//!   renderer traits
//! - `emlib-solvers` — the fixed-step Euler integrator ([`euler`])
//! - `emlib-observers` — ready-made observers and renderers ([`observers`])

mod error;
mod model;

pub use error::Error;
pub use model::Model;

pub use emlib_core::{
    Derivative, Fallible, Observer, Renderer, Sample, StateVector, StepIntegrable, Trajectory,
    TrajectoryError, fallible,
};
pub use emlib_observers::{self as observers, NonFiniteGuard, TableRenderer};
pub use emlib_solvers::transient::euler;

/// Options for [`Model::integrate`]: the horizon `max_dt` and step size `dt`.
pub type IntegrationOptions = euler::Config;

pub use euler::{ConfigError, DEFAULT_DT};

#[cfg(feature = "plot")]
pub use emlib_observers::{ShowConfig, TrajectoryPlot};
