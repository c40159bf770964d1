//! Report planning: derived series, chart specs and output names.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use scalviz_io::{validate_config, Layout, ReportConfig};
use scalviz_metrics::{compute_efficiency, compute_scalability, MeasurementSeries, MetricRow};
use scalviz_render::{ChartSpec, ComparisonChart, LabeledSeries};
use scalviz_types::constants::{COMBINED_SUFFIX, COMPARISON_FILE};
use scalviz_types::{MetricKind, ScalvizError, ScalvizResult};

/// Images tiled into one composite.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeGroup {
    /// Tiles in grid order.
    pub images: Vec<PathBuf>,
    /// Composite destination.
    pub output_path: PathBuf,
}

impl CompositeGroup {
    /// Creates a group, checking the tile count fills whole rows.
    pub fn new(images: Vec<PathBuf>, output_path: PathBuf, row_size: usize) -> ScalvizResult<Self> {
        if row_size == 0 || images.is_empty() || images.len() % row_size != 0 {
            return Err(ScalvizError::MalformedGroup {
                count: images.len(),
                row_size,
            });
        }
        Ok(Self {
            images,
            output_path,
        })
    }
}

/// Everything produced for one parallelization strategy.
#[derive(Debug, Clone)]
pub struct StrategyPlan {
    /// Configuration name (file stem).
    pub name: String,
    /// Display title.
    pub title: String,
    /// One chart per metric kind, in [`MetricKind::all`] order.
    pub charts: Vec<ChartSpec>,
    /// Composite of `charts`.
    pub composite: CompositeGroup,
    /// Flattened metrics for CSV export.
    pub rows: Vec<MetricRow>,
}

/// Fully resolved report: nothing left to compute but pixels.
#[derive(Debug, Clone)]
pub struct ReportPlan {
    /// Directory receiving every output.
    pub output_dir: PathBuf,
    /// Canvas and grid geometry.
    pub layout: Layout,
    /// Per-strategy outputs in configuration order.
    pub strategies: Vec<StrategyPlan>,
    /// Cross-strategy raw-time overlay, if enabled.
    pub comparison: Option<ComparisonChart>,
}

impl ReportPlan {
    /// Validates `config` and derives every series and output path.
    ///
    /// Fails before anything is written if two outputs share a path.
    pub fn build(config: &ReportConfig) -> ScalvizResult<Self> {
        validate_config(config)?;

        let threads = &config.thread_counts;
        let out = &config.output_dir;
        let mut strategies = Vec::with_capacity(config.configurations.len());
        let mut curves = Vec::with_capacity(config.configurations.len());

        for c in &config.configurations {
            let total = MeasurementSeries::from_axis(threads, &c.total_time)?
                .named(format!("{} total_time", c.name));
            let frame = MeasurementSeries::from_axis(threads, &c.frame_time)?
                .named(format!("{} frame_time", c.name));
            let scalability = compute_scalability(c.effective_baseline(config.baseline), &total)?;
            let efficiency = compute_efficiency(&scalability);

            let charts: Vec<ChartSpec> = MetricKind::all()
                .iter()
                .map(|&kind| {
                    let path = out.join(kind.file_name(&c.name));
                    match kind {
                        MetricKind::Raw => ChartSpec::new(&total, &c.title, kind, path),
                        MetricKind::Scalability => ChartSpec::new(&scalability, &c.title, kind, path),
                        MetricKind::Efficiency => ChartSpec::new(&efficiency, &c.title, kind, path),
                        MetricKind::FrameTime => ChartSpec::new(&frame, &c.title, kind, path),
                    }
                })
                .collect();

            let composite = CompositeGroup::new(
                charts.iter().map(|s| s.output_path().to_path_buf()).collect(),
                out.join(format!("{}_{COMBINED_SUFFIX}.png", c.name)),
                config.layout.row_size,
            )?;
            let rows = MetricRow::collect(&c.name, &total, &frame, &scalability, &efficiency)?;

            curves.push(LabeledSeries::new(&c.title, &total));
            strategies.push(StrategyPlan {
                name: c.name.clone(),
                title: c.title.clone(),
                charts,
                composite,
                rows,
            });
        }

        let comparison = config
            .comparison
            .then(|| ComparisonChart::new(curves, out.join(COMPARISON_FILE)));

        let plan = Self {
            output_dir: out.clone(),
            layout: config.layout,
            strategies,
            comparison,
        };
        plan.check_unique_outputs()?;
        Ok(plan)
    }

    /// All single-series charts in render order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.strategies.iter().flat_map(|s| s.charts.iter())
    }

    /// Every file the report writes, in write order.
    pub fn output_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.charts().map(|c| c.output_path()).collect();
        paths.extend(
            self.strategies
                .iter()
                .map(|s| s.composite.output_path.as_path()),
        );
        if let Some(ref comparison) = self.comparison {
            paths.push(&comparison.output_path);
        }
        paths
    }

    /// Derived metrics of every strategy, in configuration order.
    pub fn metric_rows(&self) -> Vec<MetricRow> {
        self.strategies
            .iter()
            .flat_map(|s| s.rows.iter().cloned())
            .collect()
    }

    fn check_unique_outputs(&self) -> ScalvizResult<()> {
        let mut seen = HashSet::new();
        for path in self.output_paths() {
            if !seen.insert(path) {
                return Err(ScalvizError::InvalidConfig(format!(
                    "output {} would be written twice; rename a configuration",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
