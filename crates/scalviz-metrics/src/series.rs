//! Measured and derived data series keyed by thread count.

use serde::{Deserialize, Serialize};

use scalviz_types::{MetricKind, ScalvizError, ScalvizResult};

/// One (thread count, value) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Number of threads / processes used for the run.
    pub threads: u32,
    /// Measured or derived value at that thread count.
    pub value: f64,
}

impl DataPoint {
    /// Creates a sample at `threads` with `value`.
    pub fn new(threads: u32, value: f64) -> Self {
        Self { threads, value }
    }
}

/// Read-only access shared by measured and derived series.
pub trait Series {
    /// Points in ascending thread-count order.
    fn points(&self) -> &[DataPoint];

    /// Human-readable label used in error messages.
    fn name(&self) -> &str;

    /// Number of points.
    fn len(&self) -> usize {
        self.points().len()
    }

    /// True if the series has no points.
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Thread-count axis of this series.
    fn thread_counts(&self) -> Vec<u32> {
        self.points().iter().map(|p| p.threads).collect()
    }

    /// Values in axis order.
    fn values(&self) -> Vec<f64> {
        self.points().iter().map(|p| p.value).collect()
    }

    /// Returns true if both series share the same thread-count axis.
    fn same_axis<S: Series + ?Sized>(&self, other: &S) -> bool
    where
        Self: Sized,
    {
        self.len() == other.len()
            && self
                .points()
                .iter()
                .zip(other.points())
                .all(|(a, b)| a.threads == b.threads)
    }
}

/// Raw benchmark measurements, one per thread count.
///
/// Thread counts are positive and strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSeries {
    name: String,
    points: Vec<DataPoint>,
}

impl MeasurementSeries {
    /// Creates a series, checking the thread-count ordering.
    pub fn new(points: Vec<DataPoint>) -> ScalvizResult<Self> {
        check_axis(&points)?;
        Ok(Self {
            name: String::from("unnamed series"),
            points,
        })
    }

    /// Zips a thread-count axis with a value column.
    pub fn from_axis(thread_counts: &[u32], values: &[f64]) -> ScalvizResult<Self> {
        if thread_counts.len() != values.len() {
            return Err(ScalvizError::InvalidSeries(format!(
                "{} thread counts but {} values",
                thread_counts.len(),
                values.len()
            )));
        }
        let points = thread_counts
            .iter()
            .zip(values)
            .map(|(&threads, &value)| DataPoint::new(threads, value))
            .collect();
        Self::new(points)
    }

    /// Attaches a label used in diagnostics (e.g. `"omp total_time"`).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Series for MeasurementSeries {
    fn points(&self) -> &[DataPoint] {
        &self.points
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A series computed from measurements. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSeries {
    kind: MetricKind,
    name: String,
    points: Vec<DataPoint>,
}

impl DerivedSeries {
    pub(crate) fn new(kind: MetricKind, name: String, points: Vec<DataPoint>) -> Self {
        Self { kind, name, points }
    }

    /// Which metric this series holds.
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Value at the given thread count, if present.
    pub fn at(&self, threads: u32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.threads == threads)
            .map(|p| p.value)
    }
}

impl Series for DerivedSeries {
    fn points(&self) -> &[DataPoint] {
        &self.points
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn check_axis(points: &[DataPoint]) -> ScalvizResult<()> {
    if let Some(p) = points.iter().find(|p| p.threads == 0) {
        return Err(ScalvizError::InvalidSeries(format!(
            "thread count must be positive (value {} at 0 threads)",
            p.value
        )));
    }
    for pair in points.windows(2) {
        if pair[1].threads <= pair[0].threads {
            return Err(ScalvizError::InvalidSeries(format!(
                "thread counts must be strictly increasing ({} followed by {})",
                pair[0].threads, pair[1].threads
            )));
        }
    }
    Ok(())
}
