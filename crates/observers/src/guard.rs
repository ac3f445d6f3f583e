use emlib_core::Observer;

use crate::traits::{CanStopEarly, HasState, HasTime};

/// An observer that stops a run at the first non-finite state.
///
/// Solvers record NaN and infinite values without complaint. Attach this
/// guard when a blown-up trajectory is not worth finishing; after the run,
/// [`tripped_at`](NonFiniteGuard::tripped_at) reports when it happened.
///
/// Pass `&mut guard` to keep access to it after the solve completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonFiniteGuard {
    tripped_at: Option<f64>,
}

impl NonFiniteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time of the first non-finite sample, if any was seen.
    #[must_use]
    pub fn tripped_at(&self) -> Option<f64> {
        self.tripped_at
    }
}

impl<E, A> Observer<E, A> for NonFiniteGuard
where
    E: HasTime + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.state().is_finite() {
            return None;
        }

        self.tripped_at.get_or_insert(event.time());
        Some(A::stop_early())
    }
}

impl<E, A> Observer<E, A> for &mut NonFiniteGuard
where
    E: HasTime + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
