use std::cell::RefCell;

use approx::assert_relative_eq;
use emlib_core::{Trajectory, fallible};
use thiserror::Error;

use super::{
    Action, Config, Error, Event, Outcome, Status, solve, solve_into, solve_unobserved,
};

#[derive(Debug, Error)]
#[error("rate undefined past t = {0}")]
struct Undefined(f64);

fn config(max_dt: f64, dt: f64) -> Config {
    Config::new(max_dt)
        .and_then(|c| c.with_dt(dt))
        .expect("test config should be valid")
}

#[test]
fn constant_rate_motion() {
    let velocity = |_t: f64, _s: &[f64]| vec![2.0];

    let solution = solve_unobserved(&velocity, [0.0], &config(1.0, 0.1)).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 10);
    assert_eq!(solution.trajectory.len(), 11); // initial + 10 steps

    let last = solution.trajectory.last().unwrap();
    assert_eq!(last.time, 1.0);
    assert_relative_eq!(last.state[0], 2.0, epsilon = 1e-12);
}

#[test]
fn exponential_decay_matches_euler_recurrence() {
    let decay = |_t: f64, s: &[f64]| vec![-0.5 * s[0]];
    let dt = 0.1;

    let solution = solve_unobserved(&decay, [1.0], &config(2.0, dt)).expect("should solve");

    // Each Euler step multiplies the state by (1 - 0.5 * dt).
    for (k, sample) in solution.trajectory.iter().enumerate() {
        let expected = (1.0 - 0.5 * dt).powi(i32::try_from(k).unwrap());
        assert_relative_eq!(sample.state[0], expected, epsilon = 1e-12);
    }
}

#[test]
fn final_step_is_shortened_to_hit_horizon() {
    let unit_rate = |_t: f64, _s: &[f64]| vec![1.0];

    let solution = solve_unobserved(&unit_rate, [0.0], &config(1.0, 0.3)).expect("should solve");

    let times = solution.trajectory.times();
    assert_eq!(times.len(), 5);
    assert_relative_eq!(times[3], 0.9, epsilon = 1e-12);
    assert_eq!(times[4], 1.0);

    // With a unit rate the state tracks elapsed time, so the short last step
    // adds 0.1 rather than 0.3.
    assert_relative_eq!(solution.trajectory.last().unwrap().state[0], 1.0, epsilon = 1e-12);
}

#[test]
fn zero_horizon_returns_initial() {
    let f = |_t: f64, s: &[f64]| vec![1.0; s.len()];

    let solution = solve_unobserved(&f, [3.0, 2.0], &config(0.0, 0.1)).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.trajectory.len(), 1);
    assert_eq!(solution.trajectory.samples()[0].time, 0.0);
    assert_eq!(solution.trajectory.samples()[0].state.as_slice(), &[3.0, 2.0]);
}

#[test]
fn derivative_sees_current_time_and_state() {
    let calls = RefCell::new(Vec::new());
    let f = |t: f64, s: &[f64]| {
        calls.borrow_mut().push((t, s[0]));
        vec![1.0]
    };

    solve_unobserved(&f, [10.0], &config(1.0, 0.5)).expect("should solve");

    let calls = calls.into_inner();
    assert_eq!(calls.len(), 2);
    assert_relative_eq!(calls[0].0, 0.0);
    assert_relative_eq!(calls[0].1, 10.0);
    assert_relative_eq!(calls[1].0, 0.5);
    assert_relative_eq!(calls[1].1, 10.5);
}

#[test]
fn dimension_mismatch_fails_on_first_step() {
    let wrong_length = |_t: f64, _s: &[f64]| vec![0.0];
    let mut trajectory = Trajectory::new();

    let err = solve_into(&wrong_length, [1.0, 1.0], &config(1.0, 0.1), &mut trajectory, ())
        .expect_err("should fail");

    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 2,
            found: 1,
            time
        } if time == 0.0
    ));
    assert_eq!(trajectory.len(), 1);
}

#[test]
fn derivative_failure_keeps_earlier_samples() {
    let f = fallible(|t, _s: &[f64]| {
        if t >= 0.5 {
            Err(Undefined(t))
        } else {
            Ok(vec![1.0])
        }
    });
    let mut trajectory = Trajectory::new();

    let err = solve_into(&f, [0.0], &config(1.0, 0.25), &mut trajectory, ())
        .expect_err("should fail");

    let Error::Derivative { time, source } = err else {
        panic!("expected a derivative error");
    };
    assert_relative_eq!(time, 0.5);
    assert!(source.downcast_ref::<Undefined>().is_some());

    // Samples at t = 0, 0.25, 0.5 were recorded before the failing step.
    assert_eq!(trajectory.times(), vec![0.0, 0.25, 0.5]);
}

#[test]
fn empty_initial_state_is_rejected() {
    let f = |_t: f64, s: &[f64]| s.to_vec();
    let mut trajectory = Trajectory::new();
    solve_into(&f, [7.0], &config(0.0, 1.0), &mut trajectory, ()).expect("should solve");

    let err = solve_into(&f, Vec::<f64>::new(), &config(1.0, 0.1), &mut trajectory, ())
        .expect_err("should fail");

    assert!(matches!(err, Error::EmptyState));
    assert_eq!(trajectory.len(), 1, "trajectory should be untouched");
}

#[test]
fn solve_into_replaces_previous_contents() {
    let f = |_t: f64, _s: &[f64]| vec![1.0];
    let mut trajectory = Trajectory::new();

    solve_into(&f, [0.0], &config(10.0, 1.0), &mut trajectory, ()).expect("should solve");
    assert_eq!(trajectory.len(), 11);

    let outcome =
        solve_into(&f, [5.0], &config(1.0, 0.5), &mut trajectory, ()).expect("should solve");

    assert_eq!(
        outcome,
        Outcome {
            status: Status::Complete,
            steps: 2
        }
    );
    assert_eq!(trajectory.len(), 3);
    assert_eq!(trajectory.first().unwrap().state[0], 5.0);
}

#[test]
fn observer_can_stop_early() {
    let f = |_t: f64, _s: &[f64]| vec![1.0];

    let observer = |event: &Event<'_>| {
        if event.step >= 5 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(&f, [0.0], &config(100.0, 0.1), observer).expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.trajectory.len(), 6); // initial + 5 steps
}

#[test]
fn observer_can_stop_before_first_step() {
    let f = |_t: f64, _s: &[f64]| vec![1.0];

    let solution = solve(&f, [0.0], &config(1.0, 0.1), |_: &Event<'_>| {
        Some(Action::StopEarly)
    })
    .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.trajectory.len(), 1);
}

#[test]
fn step_numbers_start_at_zero() {
    let f = |_t: f64, _s: &[f64]| vec![1.0];

    let mut seen = Vec::new();
    solve(&f, [0.0], &config(1.0, 0.25), |event: &Event<'_>| {
        seen.push((event.step, event.time()));
        None
    })
    .expect("should solve");

    assert_eq!(
        seen,
        vec![(0, 0.0), (1, 0.25), (2, 0.5), (3, 0.75), (4, 1.0)]
    );
}

#[test]
fn non_finite_rates_propagate() {
    let f = |_t: f64, _s: &[f64]| vec![f64::NAN, 0.0];

    let solution = solve_unobserved(&f, [1.0, 1.0], &config(1.0, 0.5)).expect("should solve");

    let last = solution.trajectory.last().unwrap();
    assert!(last.state[0].is_nan());
    assert_eq!(last.state[1], 1.0);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let lotka_volterra = |_t: f64, s: &[f64]| {
        let (x, y) = (s[0], s[1]);
        vec![x - x * y, x * y - y]
    };
    let config = config(20.0, 0.01);

    let first = solve_unobserved(&lotka_volterra, [3.0, 2.0], &config).expect("should solve");
    let second = solve_unobserved(&lotka_volterra, [3.0, 2.0], &config).expect("should solve");

    assert_eq!(first.trajectory.len(), 2001);
    assert_eq!(first.trajectory, second.trajectory);
}

#[test]
fn horizon_just_past_grid_adds_short_step() {
    let unit_rate = |_t: f64, _s: &[f64]| vec![1.0];
    let dt = 0.01;

    let solution =
        solve_unobserved(&unit_rate, [0.0], &config(20.0 + 1e-8, dt)).expect("should solve");

    let trajectory = &solution.trajectory;
    assert_eq!(trajectory.len(), 2002);
    assert_eq!(trajectory.final_time(), Some(20.0 + 1e-8));

    // With a unit rate each state increment is the step size used.
    let states: Vec<f64> = trajectory.iter().map(|s| s.state[0]).collect();
    assert!(states.windows(2).all(|w| w[1] - w[0] <= dt + 1e-12));
    assert_relative_eq!(states[2001] - states[2000], 1e-8, epsilon = 1e-12);
}
