//! CLI command implementations.

use std::path::{Path, PathBuf};

use scalviz_io::ReportConfig;
use scalviz_metrics::MetricRow;
use scalviz_render::BitmapChartRenderer;
use scalviz_report::{ReportPlan, ReportRunner, ReportSummary};
use scalviz_telemetry::sinks::TracingSink;
use scalviz_telemetry::EventBus;

fn load_config(path: Option<&Path>) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ReportConfig::load(path)?),
        None => Ok(ReportConfig::default()),
    }
}

/// Generate every configured output.
pub fn generate(
    config_path: Option<&Path>,
    output_dir: Option<PathBuf>,
    no_comparison: bool,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;
    if let Some(dir) = output_dir {
        config = config.with_output_dir(dir);
    }
    if no_comparison {
        config.comparison = false;
    }

    let plan = ReportPlan::build(&config)?;

    let summary = if dry_run {
        ReportRunner::dry_run(&plan)?
    } else {
        let mut renderer =
            BitmapChartRenderer::new(config.layout.canvas_width, config.layout.canvas_height)?;
        let mut bus = EventBus::new();
        bus.add_sink(Box::new(TracingSink::new()));
        ReportRunner::run(&plan, &mut renderer, &mut bus)?
    };

    print_summary(&summary, dry_run);
    Ok(())
}

fn print_summary(summary: &ReportSummary, dry_run: bool) {
    println!("scalviz Report");
    println!("══════════════");
    println!();
    let verb = if dry_run { "Would write" } else { "Wrote" };
    println!("{verb} {} files:", summary.file_count());
    for path in summary.files() {
        println!("  {}", path.display());
    }
    if !dry_run {
        println!();
        println!("Done in {:.3}s", summary.wall_time);
    }
}

/// Print or write derived metrics as CSV.
pub fn table(
    config_path: Option<&Path>,
    output_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let plan = ReportPlan::build(&config)?;
    let csv = MetricRow::to_csv(&plan.metric_rows());

    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Metrics written to: {}", path.display());
    } else {
        println!("{csv}");
    }
    Ok(())
}

/// Validate a report config.
pub fn validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("scalviz Validator");
    println!("─────────────────");
    println!();
    println!("Validating config: {}", path.display());

    let config = ReportConfig::load(path)?;
    match ReportPlan::build(&config) {
        Ok(plan) => {
            println!(
                "✅ Config is valid ({} configurations, {} thread counts, {} output files).",
                plan.strategies.len(),
                config.thread_counts.len(),
                plan.output_paths().len()
            );
            Ok(())
        }
        Err(e) => {
            println!("❌ Config validation failed: {e}");
            Err(e.into())
        }
    }
}

/// Print the built-in config as TOML.
pub fn dump_config() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", ReportConfig::default().to_toml_string()?);
    Ok(())
}
