/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the fixed-step solvers advance the type via
/// `derivative * delta`, where the derivative is with respect to `Delta`.
/// [`StateVector`](crate::StateVector) implements it for `f64` time steps,
/// and the Euler solver advances its state through that impl.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    // A scalar population with a separate growth-rate type.
    #[derive(Debug, PartialEq)]
    struct Population(f64);
    struct GrowthRate(f64);

    impl StepIntegrable<f64> for Population {
        type Derivative = GrowthRate;

        fn step(&self, derivative: GrowthRate, delta: f64) -> Self {
            Population(self.0 + derivative.0 * delta)
        }
    }

    #[test]
    fn step_scalar_state() {
        let prey = Population(3.0);
        let rate: DerivativeOf<Population, f64> = GrowthRate(-2.0);

        let next = prey.step(rate, 0.5);

        assert_eq!(next, Population(2.0));
    }
}
