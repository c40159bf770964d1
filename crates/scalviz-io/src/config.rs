//! Report configuration.
//!
//! One shared thread-count axis, a serial baseline, and per-strategy
//! timing columns. `ReportConfig::default()` carries the measurements
//! of the per-frame Canny edge detection benchmark (OpenMP, Open MPI,
//! pthreads, Open MPI + OpenMP on 1 to 16 threads).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use scalviz_types::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_ROW_SIZE};
use scalviz_types::{ScalvizError, ScalvizResult};

/// Measurements of one parallelization strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Short identifier; used as the output file stem (e.g. `omp`).
    pub name: String,
    /// Display title used in chart captions and the comparison legend.
    pub title: String,
    /// Total execution time per thread count (seconds).
    pub total_time: Vec<f64>,
    /// Per-frame execution time per thread count (seconds).
    pub frame_time: Vec<f64>,
    /// Overrides the report-wide serial time for this strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
}

impl Configuration {
    /// Serial time used as T(1) for this strategy's speedup.
    pub fn effective_baseline(&self, report_baseline: f64) -> f64 {
        self.baseline.unwrap_or(report_baseline)
    }
}

/// Canvas and grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Chart width in pixels.
    pub canvas_width: u32,
    /// Chart height in pixels.
    pub canvas_height: u32,
    /// Tiles per composite row.
    pub row_size: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            row_size: DEFAULT_ROW_SIZE,
        }
    }
}

/// Complete input for one report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Thread counts shared by every series (x axis).
    pub thread_counts: Vec<u32>,
    /// Directory receiving all images.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Whether to draw the cross-strategy comparison chart.
    #[serde(default = "default_true")]
    pub comparison: bool,
    /// Total execution time of the serial run (seconds), T(1).
    pub baseline: f64,
    /// Canvas and grid geometry.
    #[serde(default)]
    pub layout: Layout,
    /// Strategies in report order.
    pub configurations: Vec<Configuration>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

impl ReportConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> ScalvizResult<Self> {
        toml::from_str(content).map_err(|e| ScalvizError::Serialization(e.to_string()))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> ScalvizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ScalvizError::Serialization(msg) => {
                ScalvizError::Serialization(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Renders this configuration as TOML.
    pub fn to_toml_string(&self) -> ScalvizResult<String> {
        toml::to_string_pretty(self).map_err(|e| ScalvizError::Serialization(e.to_string()))
    }

    /// Looks up a strategy by name.
    pub fn configuration(&self, name: &str) -> Option<&Configuration> {
        self.configurations.iter().find(|c| c.name == name)
    }

    /// Returns a copy writing into `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        let strategy = |name: &str, title: &str, total: [f64; 9], frame: [f64; 9]| Configuration {
            name: name.to_string(),
            title: title.to_string(),
            total_time: total.to_vec(),
            frame_time: frame.to_vec(),
            baseline: None,
        };

        Self {
            thread_counts: vec![1, 2, 4, 6, 8, 10, 12, 14, 16],
            output_dir: default_output_dir(),
            comparison: true,
            baseline: 941.751,
            layout: Layout::default(),
            configurations: vec![
                strategy(
                    "omp",
                    "OpenMP",
                    [941.751, 520.624, 315.977, 258.002, 237.726, 201.365, 189.464, 180.272, 213.566],
                    [7.037056, 3.702026, 2.065648, 1.553605, 1.426003, 1.105929, 0.998395, 0.903751, 0.955066],
                ),
                strategy(
                    "mpi",
                    "Open MPI",
                    [941.751, 517.055, 360.12, 244.75, 200.419, 170.603, 157.034, 146.127, 158.261],
                    [7.037056, 3.628033, 2.256552, 1.382628, 1.151234, 0.815097, 0.707006, 0.618487, 0.636365],
                ),
                strategy(
                    "pthreads",
                    "pthreads",
                    [941.751, 571.262, 309.834, 225.784, 188.145, 168.175, 151.594, 147.202, 136.023],
                    [7.037056, 3.943, 1.925, 1.293, 0.998, 0.829, 0.709, 0.649, 0.588],
                ),
                strategy(
                    "mpi_omp",
                    "Open MPI + omp",
                    [941.751, 627.573, 338.469, 288.16, 281.583, 286.568, 298.561, 313.241, 338.822],
                    [7.037, 4.070, 1.795, 1.345, 1.244, 1.210, 1.264, 1.361, 1.439],
                ),
            ],
        }
    }
}
