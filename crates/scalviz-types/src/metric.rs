//! Metric kinds plotted by the report.

use serde::{Deserialize, Serialize};

/// What a chart's series measures.
///
/// Closed set; axis text and file naming are looked up per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Total execution time in seconds.
    Raw,
    /// Speedup relative to the serial run, S(n) = T(1) / T(n).
    Scalability,
    /// Speedup normalized by thread count, E(n) = S(n) / n.
    Efficiency,
    /// Execution time per rendered frame in seconds.
    FrameTime,
}

impl MetricKind {
    /// Returns all metric kinds in composite order.
    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::Raw,
            MetricKind::Scalability,
            MetricKind::Efficiency,
            MetricKind::FrameTime,
        ]
    }

    /// Position of this kind in lookup tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns a machine-readable name.
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Raw => "raw",
            MetricKind::Scalability => "scalability",
            MetricKind::Efficiency => "efficiency",
            MetricKind::FrameTime => "frame_time",
        }
    }

    /// Suffix appended to the configuration name in output file stems.
    ///
    /// `None` for raw time, whose chart is named after the configuration alone.
    pub fn file_suffix(self) -> Option<&'static str> {
        match self {
            MetricKind::Raw => None,
            other => Some(other.name()),
        }
    }

    /// Builds the output file name for a configuration, e.g. `omp_efficiency.png`.
    pub fn file_name(self, config_name: &str) -> String {
        match self.file_suffix() {
            Some(suffix) => format!("{config_name}_{suffix}.png"),
            None => format!("{config_name}.png"),
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
