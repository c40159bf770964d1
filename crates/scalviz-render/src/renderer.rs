//! ChartRenderer trait and HeadlessRenderer stub.
//!
//! A renderer turns one [`ChartSpec`] into one saved image. The headless
//! renderer performs the same validation but writes nothing, serving as
//! a dry-run backend for planning and tests.

use std::path::PathBuf;

use scalviz_types::{ScalvizError, ScalvizResult};

use crate::spec::{ChartSpec, ComparisonChart};

/// Trait for chart output backends.
///
/// # Implementations
/// - [`HeadlessRenderer`]: Records paths, writes nothing (dry runs, tests)
/// - [`crate::BitmapChartRenderer`]: PNG output through plotters
pub trait ChartRenderer: Send {
    /// Draw a single-series chart to `spec.output_path()`, overwriting it.
    fn render(&mut self, spec: &ChartSpec) -> ScalvizResult<()>;

    /// Draw several raw-time curves on shared axes.
    fn render_comparison(&mut self, chart: &ComparisonChart) -> ScalvizResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of charts produced so far.
    fn chart_count(&self) -> u32;
}

/// Rejects specs that have nothing to plot.
pub(crate) fn ensure_plottable(spec: &ChartSpec) -> ScalvizResult<()> {
    if spec.points().is_empty() {
        return Err(ScalvizError::EmptySeries(spec.describe()));
    }
    Ok(())
}

/// Rejects comparison charts with a missing or empty curve, or with
/// curves that do not share one thread-count axis.
pub(crate) fn ensure_comparable(chart: &ComparisonChart) -> ScalvizResult<()> {
    if chart.is_degenerate() {
        return Err(ScalvizError::EmptySeries(format!(
            "comparison chart ({})",
            chart.output_path.display()
        )));
    }
    if let Some(curve) = chart.series.iter().find(|c| !chart.series[0].same_axis(c)) {
        return Err(ScalvizError::InvalidSeries(format!(
            "comparison chart ({}): '{}' does not share the thread axis of '{}'",
            chart.output_path.display(),
            curve.label,
            chart.series[0].label
        )));
    }
    Ok(())
}

/// Headless renderer: validates and records, never touches the disk.
pub struct HeadlessRenderer {
    rendered: Vec<PathBuf>,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self {
            rendered: Vec::new(),
        }
    }

    /// Output paths that would have been written, in order.
    pub fn rendered(&self) -> &[PathBuf] {
        &self.rendered
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for HeadlessRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ScalvizResult<()> {
        ensure_plottable(spec)?;
        self.rendered.push(spec.output_path().to_path_buf());
        Ok(())
    }

    fn render_comparison(&mut self, chart: &ComparisonChart) -> ScalvizResult<()> {
        ensure_comparable(chart)?;
        self.rendered.push(chart.output_path.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn chart_count(&self) -> u32 {
        self.rendered.len() as u32
    }
}
