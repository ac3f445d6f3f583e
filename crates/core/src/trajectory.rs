use thiserror::Error;

use crate::StateVector;

/// A single recorded point of a trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub state: StateVector,
}

impl Sample {
    /// Creates a new sample from a time and state.
    pub fn new(time: f64, state: impl Into<StateVector>) -> Self {
        Self {
            time,
            state: state.into(),
        }
    }
}

/// Errors raised when a sample would break a trajectory's invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TrajectoryError {
    #[error("sample has {found} components but the trajectory holds {expected}")]
    Dimension { expected: usize, found: usize },

    #[error("sample time {time} precedes the last recorded time {last}")]
    TimeReversed { last: f64, time: f64 },

    #[error("sample time must be finite, got {0}")]
    NonFiniteTime(f64),
}

/// The time-ordered record of states produced by an integration.
///
/// A trajectory guarantees that:
///
/// - every recorded state has the same length as the first one, and
/// - sample times are finite and non-decreasing in insertion order.
///
/// State components themselves are not checked, so NaN or infinite values
/// produced by a derivative are recorded as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the trajectory unchanged, if the sample's
    /// state length differs from the recorded states or its time is
    /// non-finite or earlier than the last recorded time.
    pub fn push(&mut self, sample: Sample) -> Result<(), TrajectoryError> {
        if !sample.time.is_finite() {
            return Err(TrajectoryError::NonFiniteTime(sample.time));
        }

        if let Some(last) = self.samples.last() {
            if sample.state.len() != last.state.len() {
                return Err(TrajectoryError::Dimension {
                    expected: last.state.len(),
                    found: sample.state.len(),
                });
            }
            if sample.time < last.time {
                return Err(TrajectoryError::TimeReversed {
                    last: last.time,
                    time: sample.time,
                });
            }
        }

        self.samples.push(sample);
        Ok(())
    }

    /// Removes all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Reserves room for at least `additional` more samples.
    pub fn reserve(&mut self, additional: usize) {
        self.samples.reserve(additional);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Returns the state length shared by all samples, or `None` if empty.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.samples.first().map(|s| s.state.len())
    }

    /// Returns the time of the last sample, or `None` if empty.
    #[must_use]
    pub fn final_time(&self) -> Option<f64> {
        self.samples.last().map(|s| s.time)
    }

    /// Returns the recorded times in order.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// Returns `[time, state[index]]` points for one state component.
    ///
    /// `TrajectoryPlot` draws one of these per component. Returns `None` if
    /// `index` is out of range or the trajectory is empty.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<Vec<[f64; 2]>> {
        if index >= self.dimension()? {
            return None;
        }
        Some(
            self.samples
                .iter()
                .map(|s| [s.time, s.state[index]])
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
