use std::error::Error as StdError;

use emlib_solvers::transient::euler;
use thiserror::Error;

use crate::ConfigError;

/// Errors returned by [`Model`](crate::Model).
#[derive(Debug, Error)]
pub enum Error {
    /// The integration itself failed: invalid options, a derivative that
    /// failed or returned the wrong number of components.
    #[error(transparent)]
    Integrate(#[from] euler::Error),

    #[error(
        "initial state has {found} components but the model's trajectory has {expected}; \
         reset the model to change dimension"
    )]
    StateLength { expected: usize, found: usize },

    #[error("nothing to draw: the model has no trajectory yet")]
    EmptyTrajectory,

    #[error("renderer failed: {0}")]
    Render(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Integrate(euler::Error::InvalidConfig(err))
    }
}

impl Error {
    pub(crate) fn render<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Render(Box::new(err))
    }
}
