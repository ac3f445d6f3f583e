use std::error::Error as StdError;

use emlib_core::TrajectoryError;
use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during Euler integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial state must have at least one component")]
    EmptyState,

    #[error("derivative returned {found} components for a state of {expected} at t = {time}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        time: f64,
    },

    #[error("derivative evaluation failed at t = {time}")]
    Derivative {
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("trajectory rejected sample: {0}")]
    Trajectory(#[from] TrajectoryError),
}

impl Error {
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(time: f64, err: E) -> Self {
        Self::Derivative {
            time,
            source: Box::new(err),
        }
    }
}
