use emlib_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the configured horizon.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// How a run into a caller-owned trajectory ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// How the solver terminated.
    pub status: Status,

    /// Number of integration steps completed.
    pub steps: usize,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Every recorded sample, starting with the initial state at `t = 0`.
    pub trajectory: Trajectory,

    /// Number of integration steps completed.
    pub steps: usize,
}
