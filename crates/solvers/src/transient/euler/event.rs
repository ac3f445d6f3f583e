use emlib_core::{Sample, StateVector};

/// Event emitted by the Euler solver for each recorded sample.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The sample just appended to the trajectory.
    pub sample: &'a Sample,
}

impl Event<'_> {
    #[must_use]
    pub fn time(&self) -> f64 {
        self.sample.time
    }

    #[must_use]
    pub fn state(&self) -> &StateVector {
        &self.sample.state
    }
}
