//! Chart descriptions consumed by renderers.

use std::path::{Path, PathBuf};

use scalviz_metrics::{DataPoint, Series};
use scalviz_types::MetricKind;

use crate::labels::{labels_for, ChartLabels};

/// Everything needed to draw one chart. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    points: Vec<DataPoint>,
    title: String,
    metric: MetricKind,
    output_path: PathBuf,
}

impl ChartSpec {
    /// Snapshots a series into a chart description.
    pub fn new<S: Series>(
        series: &S,
        title: impl Into<String>,
        metric: MetricKind,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            points: series.points().to_vec(),
            title: title.into(),
            metric,
            output_path: output_path.into(),
        }
    }

    /// Points in ascending thread-count order.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Configuration title, without the metric suffix.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Which quantity the chart plots.
    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Where the image is written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Axis and title text for this chart's metric.
    pub fn labels(&self) -> &'static ChartLabels {
        labels_for(self.metric)
    }

    /// Full chart title, `<title> - <suffix>`.
    pub fn caption(&self) -> String {
        format!("{} - {}", self.title, self.labels().title_suffix)
    }

    /// Short description for diagnostics, e.g. `OpenMP scalability (omp_scalability.png)`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} ({})",
            self.title,
            self.metric,
            self.output_path.display()
        )
    }
}

/// One labeled curve on the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    /// Legend entry.
    pub label: String,
    /// Points in ascending thread-count order.
    pub points: Vec<DataPoint>,
}

impl LabeledSeries {
    /// Snapshots a series under a legend label.
    pub fn new<S: Series>(label: impl Into<String>, series: &S) -> Self {
        Self {
            label: label.into(),
            points: series.points().to_vec(),
        }
    }

    /// True if both curves have identical thread counts in the same order.
    pub fn same_axis(&self, other: &LabeledSeries) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.threads == b.threads)
    }
}

/// Several raw-time curves overlaid on shared axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    /// Curves in legend order.
    pub series: Vec<LabeledSeries>,
    /// Destination image.
    pub output_path: PathBuf,
}

impl ComparisonChart {
    /// Overlays `series` in legend order.
    pub fn new(series: Vec<LabeledSeries>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            series,
            output_path: output_path.into(),
        }
    }

    /// True if there is no curve or any curve has no points.
    pub fn is_degenerate(&self) -> bool {
        self.series.is_empty() || self.series.iter().any(|s| s.points.is_empty())
    }
}
