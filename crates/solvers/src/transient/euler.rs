//! Forward Euler solver for initial value problems.
//!
//! This module provides a fixed-step explicit Euler integrator. Starting from
//! an initial state at `t = 0`, it repeatedly applies
//!
//! ```text
//! h         = min(dt, max_dt - t)
//! state_{n+1} = state_n + derivative(t_n, state_n) * h
//! ```
//!
//! until `t = max_dt`, recording every sample. The derivative is evaluated
//! exactly once per step and there is no error control: accuracy is governed
//! by `dt` alone.
//!
//! # Time grid
//!
//! Sample times are `k * dt` for each step `k`, with the final sample placed
//! exactly at `max_dt`. When `dt` divides the horizon (up to floating-point
//! rounding), a run records `max_dt / dt + 1` samples; otherwise the last
//! step is shortened so the horizon is never overshot. No step is longer
//! than `dt`.
//!
//! # Example
//!
//! ```
//! use emlib_solvers::transient::euler::{self, Config};
//!
//! let decay = |_t: f64, state: &[f64]| vec![-state[0]];
//! let config = Config::new(1.0)?.with_dt(0.25)?;
//!
//! let solution = euler::solve_unobserved(&decay, [1.0], &config)?;
//!
//! assert_eq!(solution.trajectory.len(), 5);
//! assert_eq!(solution.trajectory.final_time(), Some(1.0));
//! # Ok::<(), euler::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_DT};
pub use error::Error;
pub use event::Event;
pub use solution::{Outcome, Solution, Status};

use emlib_core::{Derivative, Observer, Sample, StateVector, StepIntegrable, Trajectory};

/// Upper bound on samples reserved up front; longer runs grow as they go.
const PREALLOCATE_LIMIT: usize = 1 << 20;

/// Integrates a derivative using forward Euler.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial sample and after each
/// integration step, and may return [`Action::StopEarly`] to end the run with
/// the samples recorded so far.
///
/// # Errors
///
/// Returns an error if the initial state is empty, or if the derivative fails
/// or returns a vector whose length differs from the state.
pub fn solve<D, Obs>(
    derivative: &D,
    initial: impl Into<StateVector>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    D: Derivative + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut trajectory = Trajectory::new();
    let Outcome { status, steps } =
        solve_into(derivative, initial, config, &mut trajectory, observer)?;

    Ok(Solution {
        status,
        trajectory,
        steps,
    })
}

/// Integrates a derivative using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the initial state is empty, or if the derivative fails
/// or returns a vector whose length differs from the state.
pub fn solve_unobserved<D>(
    derivative: &D,
    initial: impl Into<StateVector>,
    config: &Config,
) -> Result<Solution, Error>
where
    D: Derivative + ?Sized,
{
    solve(derivative, initial, config, ())
}

/// Integrates a derivative using forward Euler into a caller-owned trajectory.
///
/// The trajectory is cleared before the initial sample is recorded, so it
/// always describes a single run starting at `t = 0`. If the run fails
/// partway, the trajectory keeps every sample recorded before the failing
/// step. If the initial state is empty the trajectory is left untouched.
///
/// # Algorithm
///
/// 1. Record the initial sample at `t = 0` and emit step 0.
/// 2. For each step:
///    - Evaluate the derivative at the current time and state.
///    - Check the derivative has one component per state component.
///    - Step the state forward by `min(dt, max_dt - t)`.
///    - Record the new sample and emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return how the run ended.
///
/// # Errors
///
/// Returns an error if the initial state is empty, or if the derivative fails
/// or returns a vector whose length differs from the state.
pub fn solve_into<D, Obs>(
    derivative: &D,
    initial: impl Into<StateVector>,
    config: &Config,
    trajectory: &mut Trajectory,
    mut observer: Obs,
) -> Result<Outcome, Error>
where
    D: Derivative + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let initial = initial.into();
    if initial.is_empty() {
        return Err(Error::EmptyState);
    }

    let steps = config.steps();
    trajectory.clear();
    trajectory.reserve(steps.saturating_add(1).min(PREALLOCATE_LIMIT));

    let mut time = 0.0;
    let mut state = initial;

    trajectory.push(Sample::new(time, state.clone()))?;
    if stop_requested(&mut observer, trajectory, 0) {
        return Ok(Outcome {
            status: Status::StoppedByObserver,
            steps: 0,
        });
    }

    for step in 1..=steps {
        let rate = derivative
            .evaluate(time, &state)
            .map_err(|err| Error::derivative(time, err))?;

        if rate.len() != state.len() {
            return Err(Error::DimensionMismatch {
                expected: state.len(),
                found: rate.len(),
                time,
            });
        }

        let h = config.dt().min(config.max_dt() - time);

        state = state.step(rate, h);
        time = config.time_at(step, steps);

        trajectory.push(Sample::new(time, state.clone()))?;
        if stop_requested(&mut observer, trajectory, step) {
            return Ok(Outcome {
                status: Status::StoppedByObserver,
                steps: step,
            });
        }
    }

    Ok(Outcome {
        status: Status::Complete,
        steps,
    })
}

/// Emits the most recent sample and reports whether the observer asked to stop.
fn stop_requested<Obs>(observer: &mut Obs, trajectory: &Trajectory, step: usize) -> bool
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let Some(sample) = trajectory.last() else {
        return false;
    };

    matches!(
        observer.observe(&Event { step, sample }),
        Some(Action::StopEarly)
    )
}
