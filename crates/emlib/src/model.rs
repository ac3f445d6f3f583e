use emlib_core::{Derivative, Observer, Renderer, StateVector, Trajectory};
use emlib_solvers::transient::euler::{self, Outcome};

use crate::{Error, IntegrationOptions};

/// A derivative function together with the trajectory of its latest run.
///
/// A model owns one [`Derivative`], fixed at construction, and one
/// [`Trajectory`]. [`integrate`](Model::integrate) fills the trajectory and
/// [`draw`](Model::draw) hands it to a [`Renderer`].
///
/// # Replace, don't append
///
/// Every call to `integrate` starts a fresh run from its `initial` state at
/// `t = 0` and replaces the stored trajectory. It never continues from where
/// the previous run ended, so `draw` always shows exactly one run: the most
/// recent one. Compare step sizes by drawing between calls:
///
/// ```
/// use emlib::{IntegrationOptions, Model, Trajectory};
///
/// let mut decay = Model::from_fn(|_t: f64, s: &[f64]| vec![-s[0]]);
///
/// decay.integrate([1.0], &IntegrationOptions::new(1.0)?)?;
/// let coarse: Trajectory = decay.trajectory().clone();
///
/// decay.integrate([1.0], &IntegrationOptions::new(1.0)?.with_dt(0.1)?)?;
///
/// assert_eq!(coarse.len(), 2);
/// assert_eq!(decay.trajectory().len(), 11);
/// # Ok::<(), emlib::Error>(())
/// ```
///
/// The state length is fixed by the first run. A later run with a different
/// length is rejected until [`reset`](Model::reset) is called.
///
/// A model is not synchronized internally; `integrate` takes `&mut self`, so
/// sharing one across threads requires an external lock.
#[derive(Debug, Clone)]
pub struct Model<D> {
    derivative: D,
    trajectory: Trajectory,
}

impl<D: Derivative> Model<D> {
    /// Creates a model around a derivative, with an empty trajectory.
    pub fn new(derivative: D) -> Self {
        Self {
            derivative,
            trajectory: Trajectory::new(),
        }
    }

    /// Integrates from `initial` over the horizon in `options`, replacing the
    /// stored trajectory.
    ///
    /// On success the trajectory starts with `(0, initial)` and ends exactly
    /// at `options.max_dt()`. On failure during a step it holds the samples
    /// recorded before that step.
    ///
    /// # Errors
    ///
    /// - [`Error::StateLength`] if `initial` differs in length from the
    ///   stored trajectory; the stored trajectory is kept.
    /// - [`Error::Integrate`] if `initial` is empty, or if the derivative
    ///   fails or returns a vector of the wrong length.
    pub fn integrate(
        &mut self,
        initial: impl Into<StateVector>,
        options: &IntegrationOptions,
    ) -> Result<&Trajectory, Error> {
        self.integrate_observed(initial, options, ())?;
        Ok(&self.trajectory)
    }

    /// Integrates like [`integrate`](Model::integrate), forwarding every
    /// recorded sample to `observer`.
    ///
    /// The observer may return [`euler::Action::StopEarly`], in which case
    /// the trajectory ends at that sample and the returned [`Outcome`] says
    /// so.
    ///
    /// # Errors
    ///
    /// Same as [`integrate`](Model::integrate).
    pub fn integrate_observed<Obs>(
        &mut self,
        initial: impl Into<StateVector>,
        options: &IntegrationOptions,
        observer: Obs,
    ) -> Result<Outcome, Error>
    where
        Obs: for<'a> Observer<euler::Event<'a>, euler::Action>,
    {
        let initial = initial.into();

        if let Some(expected) = self.trajectory.dimension() {
            if !initial.is_empty() && initial.len() != expected {
                return Err(Error::StateLength {
                    expected,
                    found: initial.len(),
                });
            }
        }

        let outcome = euler::solve_into(
            &self.derivative,
            initial,
            options,
            &mut self.trajectory,
            observer,
        )?;

        Ok(outcome)
    }

    /// Hands the stored trajectory to a renderer.
    ///
    /// Pass `&mut renderer` to keep using the renderer afterwards.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyTrajectory`] if nothing has been integrated yet.
    /// - [`Error::Render`] if the renderer fails.
    pub fn draw<R: Renderer>(&self, mut renderer: R) -> Result<(), Error> {
        if self.trajectory.is_empty() {
            return Err(Error::EmptyTrajectory);
        }

        renderer.render(&self.trajectory).map_err(Error::render)
    }
}

impl<F> Model<F>
where
    F: Fn(f64, &[f64]) -> Vec<f64>,
{
    /// Creates a model from a plain derivative closure.
    ///
    /// Equivalent to [`Model::new`].
    pub fn from_fn(f: F) -> Self {
        Self::new(f)
    }
}

impl<D> Model<D> {
    /// Returns the trajectory of the most recent run.
    ///
    /// Empty until the first call to `integrate`.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Discards the stored trajectory.
    ///
    /// Afterwards the next run may use a state of any length.
    pub fn reset(&mut self) {
        self.trajectory.clear();
    }
}
