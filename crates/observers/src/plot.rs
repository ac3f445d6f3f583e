//! Drawing trajectories in an egui window.
//!
//! See [`TrajectoryPlot`] and [`ShowConfig`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use emlib_core::{Observer, Renderer, Trajectory};
use thiserror::Error;

use crate::traits::{HasState, HasTime};

/// Errors that can occur while showing a plot window.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to open plot window: {0}")]
    Window(String),
}

impl From<eframe::Error> for PlotError {
    fn from(err: eframe::Error) -> Self {
        Self::Window(err.to_string())
    }
}

/// Configuration for rendering a [`TrajectoryPlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// let plot = TrajectoryPlot::new(
///     ShowConfig::new().title("Lotka-Volterra").names(["prey", "predator"]),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ShowConfig {
    title: Option<String>,
    names: Vec<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, legend shown,
    /// components named `x0`, `x1`, ...
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            names: Vec::new(),
            legend: true,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Names the state components, in order.
    ///
    /// Components without a name fall back to `x{index}`.
    #[must_use]
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Hides the legend.
    #[must_use]
    pub fn no_legend(mut self) -> Self {
        self.legend = false;
        self
    }

    fn name(&self, index: usize) -> String {
        self.names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("x{index}"))
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws one curve per state component against time.
///
/// A `TrajectoryPlot` can be filled two ways:
///
/// - **As a renderer** — pass it to `Model::draw` (or call
///   [`Renderer::render`]). The plot is rebuilt from the trajectory and the
///   window opens immediately.
/// - **As an observer** — pass `&mut TrajectoryPlot` to a solver to record
///   samples as they are produced, then call [`show`](TrajectoryPlot::show).
///
/// Showing the plot opens a blocking window that returns once closed.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryPlot {
    config: ShowConfig,
    series: Vec<Vec<[f64; 2]>>,
}

impl TrajectoryPlot {
    #[must_use]
    pub fn new(config: ShowConfig) -> Self {
        Self {
            config,
            series: Vec::new(),
        }
    }

    /// Records a single sample, one point per state component.
    pub fn record(&mut self, time: f64, state: &[f64]) {
        if self.series.len() < state.len() {
            self.series.resize_with(state.len(), Vec::new);
        }
        for (series, &value) in self.series.iter_mut().zip(state) {
            series.push([time, value]);
        }
    }

    /// Replaces the recorded points with one curve per trajectory component.
    fn load(&mut self, trajectory: &Trajectory) {
        let dimension = trajectory.dimension().unwrap_or(0);
        self.series = (0..dimension)
            .filter_map(|i| trajectory.component(i))
            .collect();
    }

    /// Opens a blocking egui window displaying the recorded curves.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(&self) -> Result<(), PlotError> {
        let title = self.config.title.clone().unwrap_or_default();
        let curves: Vec<(String, Vec<[f64; 2]>)> = self
            .series
            .iter()
            .enumerate()
            .map(|(i, points)| (self.config.name(i), points.clone()))
            .collect();
        let legend = self.config.legend;

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(PlotApp { curves, legend }))),
        )?;

        Ok(())
    }
}

impl Renderer for TrajectoryPlot {
    type Error = PlotError;

    fn render(&mut self, trajectory: &Trajectory) -> Result<(), PlotError> {
        self.load(trajectory);
        self.show()
    }
}

impl<E, A> Observer<E, A> for TrajectoryPlot
where
    E: HasTime + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.time(), event.state());
        None
    }
}

/// Allows `&mut TrajectoryPlot` to be passed to solvers that take an
/// observer by value, so [`TrajectoryPlot::show`] can be called afterwards.
impl<E, A> Observer<E, A> for &mut TrajectoryPlot
where
    E: HasTime + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders recorded curves.
struct PlotApp {
    curves: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory_plot").x_axis_label("t");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.curves {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}
