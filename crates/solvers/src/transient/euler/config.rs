use thiserror::Error;

/// Step size used when none is given.
pub const DEFAULT_DT: f64 = 1.0;

/// Distance from `max_dt`, in units of `max_dt * f64::EPSILON`, within which
/// a whole number of steps is taken to land on the horizon.
const GRID_SNAP_ULPS: f64 = 4.0;

/// Configuration for the Euler solver.
///
/// `max_dt` is the total time horizon: integration always starts at `t = 0`
/// and ends exactly at `t = max_dt`. `dt` is the fixed step size; the final
/// step is shortened when `dt` does not divide the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_dt: f64,
    dt: f64,
}

/// Errors that can occur when validating an Euler solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("max_dt must be finite and non-negative, got {0}")]
    MaxDt(f64),

    #[error("dt must be finite and positive, got {0}")]
    Dt(f64),
}

impl Config {
    /// Creates a config for the given horizon using [`DEFAULT_DT`].
    ///
    /// # Errors
    ///
    /// Returns an error if `max_dt` is negative or non-finite.
    pub fn new(max_dt: f64) -> Result<Self, ConfigError> {
        if !max_dt.is_finite() || max_dt < 0.0 {
            return Err(ConfigError::MaxDt(max_dt));
        }

        Ok(Self {
            max_dt,
            dt: DEFAULT_DT,
        })
    }

    /// Returns a copy of this config with the given step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is zero, negative, or non-finite.
    pub fn with_dt(self, dt: f64) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::Dt(dt));
        }

        Ok(Self { dt, ..self })
    }

    /// Returns the integration horizon.
    #[must_use]
    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }

    /// Returns the step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of steps needed to reach the horizon.
    ///
    /// This is `ceil(max_dt / dt)`, except that when `n * dt` lands on
    /// `max_dt` to within a few ulps for the nearest whole `n`, the count is
    /// `n`. Without this, a step size like `0.01` (not exactly representable)
    /// would leave a sliver step of around `1e-15` at the end of the run.
    /// Horizons that `dt` misses by more than rounding error keep the extra
    /// short step, so no step is ever longer than `dt`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self) -> usize {
        if self.max_dt == 0.0 {
            return 0;
        }

        let ratio = self.max_dt / self.dt;
        let nearest = ratio.round();
        let miss = (nearest * self.dt - self.max_dt).abs();
        if nearest >= 1.0 && miss <= GRID_SNAP_ULPS * f64::EPSILON * self.max_dt {
            nearest as usize
        } else {
            ratio.ceil() as usize
        }
    }

    /// Returns the time of the sample recorded after `step` steps.
    ///
    /// Times are computed as `step * dt` rather than accumulated, and the
    /// last step lands exactly on `max_dt`.
    #[must_use]
    pub(crate) fn time_at(&self, step: usize, steps: usize) -> f64 {
        if step >= steps {
            return self.max_dt;
        }

        #[allow(clippy::cast_precision_loss)]
        let t = step as f64 * self.dt;
        t.min(self.max_dt)
    }
}
