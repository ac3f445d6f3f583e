//! Lotka-Volterra predator-prey model, integrated twice and drawn each time.
//!
//! # Usage
//!
//! ```text
//! cargo run -p emlib --example lotka_volterra --features plot
//! ```
//!
//! The first run uses the default step of 1.0 over 20 time units and the
//! Euler solution collapses after a single step. The second run uses a step
//! of 0.01 and shows the familiar oscillation, slowly spiralling outward as
//! Euler's error accumulates. Close each window to continue.

use std::error::Error;

use emlib::{IntegrationOptions, Model, ShowConfig, TrajectoryPlot};

/// Rates of change of prey and predator populations.
fn lotka_volterra(_t: f64, state: &[f64]) -> Vec<f64> {
    let (a, b, c, d) = (1.0, 1.0, 1.0, 1.0);
    let (prey, predator) = (state[0], state[1]);

    vec![
        a * prey - b * prey * predator,
        d * prey * predator - c * predator,
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut lv = Model::new(lotka_volterra);

    for options in [
        IntegrationOptions::new(20.0)?,
        IntegrationOptions::new(20.0)?.with_dt(0.01)?,
    ] {
        let trajectory = lv.integrate([3.0, 2.0], &options)?;
        if let Some(last) = trajectory.last() {
            println!(
                "dt = {}: {} samples, final state {:?} at t = {}",
                options.dt(),
                trajectory.len(),
                last.state.as_slice(),
                last.time,
            );
        }

        let plot = TrajectoryPlot::new(
            ShowConfig::new()
                .title(format!("Lotka-Volterra (dt = {})", options.dt()))
                .names(["prey", "predator"]),
        );
        lv.draw(plot)?;
    }

    Ok(())
}
