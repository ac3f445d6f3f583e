/// Watches an integration run one recorded sample at a time.
///
/// A solver hands each new sample of its trajectory to the observer as an
/// event `E`. Returning `None` lets the run continue; returning `Some(action)`
/// asks the solver to act on it, which for the Euler solver means ending the
/// trajectory at this sample.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` is the observer
/// for unwatched runs.
pub trait Observer<E, A> {
    /// Looks at the latest sample and optionally asks the solver to act.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
