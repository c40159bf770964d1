//! Report runner: renders a plan and collects what was written.

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use scalviz_render::{ChartRenderer, Compositor, HeadlessRenderer};
use scalviz_telemetry::{EventBus, EventKind};
use scalviz_types::ScalvizResult;

use crate::plan::ReportPlan;

/// Files produced by a report run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Single-series charts.
    pub charts: Vec<PathBuf>,
    /// Per-strategy composites.
    pub composites: Vec<PathBuf>,
    /// Comparison chart, if drawn.
    pub comparison: Option<PathBuf>,
    /// Wall-clock time of the run (seconds).
    pub wall_time: f64,
}

impl ReportSummary {
    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        self.charts.len() + self.composites.len() + usize::from(self.comparison.is_some())
    }

    /// All written paths in write order.
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.charts
            .iter()
            .chain(self.composites.iter())
            .chain(self.comparison.iter())
    }
}

/// Runs report plans.
pub struct ReportRunner;

impl ReportRunner {
    /// Render every chart, composite and the comparison chart of `plan`.
    ///
    /// Creates the output directory if needed. Stops at the first error;
    /// files already written stay in place, and events emitted before the
    /// failure still reach the sinks.
    pub fn run(
        plan: &ReportPlan,
        renderer: &mut dyn ChartRenderer,
        bus: &mut EventBus,
    ) -> ScalvizResult<ReportSummary> {
        let start = Instant::now();
        let mut summary = ReportSummary::default();

        tracing::info!(
            strategies = plan.strategies.len(),
            output_dir = %plan.output_dir.display(),
            renderer = renderer.name(),
            "generating report"
        );

        if let Err(e) = Self::write_outputs(plan, renderer, bus, &mut summary) {
            bus.finish();
            tracing::warn!(
                error = %e,
                files = summary.file_count(),
                "report aborted"
            );
            return Err(e);
        }

        summary.wall_time = start.elapsed().as_secs_f64();
        bus.emit(EventKind::ReportFinished {
            files: summary.file_count(),
            wall_time: summary.wall_time,
        });
        bus.finish();

        tracing::info!(
            files = summary.file_count(),
            wall_time = summary.wall_time,
            "report complete"
        );
        Ok(summary)
    }

    fn write_outputs(
        plan: &ReportPlan,
        renderer: &mut dyn ChartRenderer,
        bus: &mut EventBus,
        summary: &mut ReportSummary,
    ) -> ScalvizResult<()> {
        std::fs::create_dir_all(&plan.output_dir)?;
        let compositor = Compositor::new(plan.layout.row_size)?;

        for strategy in &plan.strategies {
            for spec in &strategy.charts {
                renderer.render(spec)?;
                bus.emit(EventKind::ChartRendered {
                    configuration: strategy.name.clone(),
                    metric: spec.metric(),
                    path: spec.output_path().to_path_buf(),
                });
                summary.charts.push(spec.output_path().to_path_buf());
            }

            let group = &strategy.composite;
            compositor.combine(&group.images, &group.output_path)?;
            bus.emit(EventKind::CompositeWritten {
                configuration: strategy.name.clone(),
                tiles: group.images.len(),
                path: group.output_path.clone(),
            });
            summary.composites.push(group.output_path.clone());
            bus.flush();
        }

        if let Some(ref comparison) = plan.comparison {
            renderer.render_comparison(comparison)?;
            bus.emit(EventKind::ComparisonWritten {
                curves: comparison.series.len(),
                path: comparison.output_path.clone(),
            });
            summary.comparison = Some(comparison.output_path.clone());
        }
        Ok(())
    }

    /// Walk the plan without touching the disk.
    ///
    /// Charts go through a [`HeadlessRenderer`], so empty series are still
    /// reported; composites are listed but not assembled.
    pub fn dry_run(plan: &ReportPlan) -> ScalvizResult<ReportSummary> {
        let start = Instant::now();
        let mut renderer = HeadlessRenderer::new();
        for spec in plan.charts() {
            renderer.render(spec)?;
        }
        if let Some(ref comparison) = plan.comparison {
            renderer.render_comparison(comparison)?;
        }

        Ok(ReportSummary {
            charts: plan.charts().map(|s| s.output_path().to_path_buf()).collect(),
            composites: plan
                .strategies
                .iter()
                .map(|s| s.composite.output_path.clone())
                .collect(),
            comparison: plan.comparison.as_ref().map(|c| c.output_path.clone()),
            wall_time: start.elapsed().as_secs_f64(),
        })
    }
}
