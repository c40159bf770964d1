//! Report event types.
//!
//! Lightweight value types describing each output the report produces.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use scalviz_types::MetricKind;

/// An event emitted while generating a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEvent {
    /// Emission order within the run (0-indexed).
    pub sequence: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A single-series chart was written.
    ChartRendered {
        /// Strategy the chart belongs to.
        configuration: String,
        /// Metric plotted.
        metric: MetricKind,
        /// Output image.
        path: PathBuf,
    },

    /// A grid composite was written.
    CompositeWritten {
        /// Strategy the composite belongs to.
        configuration: String,
        /// Number of tiles.
        tiles: usize,
        /// Output image.
        path: PathBuf,
    },

    /// The cross-strategy comparison chart was written.
    ComparisonWritten {
        /// Number of overlaid curves.
        curves: usize,
        /// Output image.
        path: PathBuf,
    },

    /// All outputs were produced.
    ReportFinished {
        /// Total images written.
        files: usize,
        /// Wall-clock duration of the run (seconds).
        wall_time: f64,
    },
}

impl ReportEvent {
    /// Creates a new event with the given sequence number.
    pub fn new(sequence: u32, kind: EventKind) -> Self {
        Self { sequence, kind }
    }
}
