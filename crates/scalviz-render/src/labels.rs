//! Axis and title text per metric kind.

use scalviz_types::MetricKind;

/// X-axis label shared by every chart.
pub const X_AXIS_LABEL: &str = "Thread Count";

/// Title of the cross-configuration comparison chart.
pub const COMPARISON_TITLE: &str = "Comparison";

/// Y-axis label of the comparison chart.
pub const COMPARISON_Y_AXIS: &str = "Time (s)";

/// Text attached to a chart of one metric kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLabels {
    /// Y-axis description.
    pub y_axis: &'static str,
    /// Appended to the configuration title as `<title> - <suffix>`.
    pub title_suffix: &'static str,
}

// Indexed by `MetricKind::index()`.
static LABELS: [ChartLabels; 4] = [
    ChartLabels {
        y_axis: "Time (s)",
        title_suffix: "Total Execution Time",
    },
    ChartLabels {
        y_axis: "S(n) = T(1) / T(n)",
        title_suffix: "Scalability",
    },
    ChartLabels {
        y_axis: "E(n) = S(n) / n",
        title_suffix: "Efficiency",
    },
    ChartLabels {
        y_axis: "Time (s)",
        title_suffix: "Per-Frame Execution Time",
    },
];

/// Looks up the axis/title text for a metric kind.
pub fn labels_for(kind: MetricKind) -> &'static ChartLabels {
    &LABELS[kind.index()]
}
