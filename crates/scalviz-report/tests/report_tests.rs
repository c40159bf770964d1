//! Integration tests for scalviz-report.

use std::path::Path;

use scalviz_io::ReportConfig;
use scalviz_render::{BitmapChartRenderer, ChartRenderer, HeadlessRenderer};
use scalviz_report::{ReportPlan, ReportRunner, ReportSummary};
use scalviz_telemetry::sinks::VecSink;
use scalviz_telemetry::{EventBus, EventKind};
use scalviz_types::{MetricKind, ScalvizError};

fn small_config(dir: &Path) -> ReportConfig {
    let mut config = ReportConfig::from_toml_str(
        r#"
thread_counts = [1, 2, 4]
baseline = 253.321

[layout]
canvas_width = 160
canvas_height = 120

[[configurations]]
name = "omp"
title = "OpenMP"
total_time = [253.321, 150.229, 85.085]
frame_time = [2.5, 1.4, 0.8]

[[configurations]]
name = "pthreads"
title = "pthreads"
total_time = [253.321, 140.0, 80.0]
frame_time = [2.5, 1.3, 0.7]
"#,
    )
    .unwrap();
    config.output_dir = dir.to_path_buf();
    config
}

// ─── Plan Tests ───────────────────────────────────────────────

#[test]
fn default_plan_shape() {
    let plan = ReportPlan::build(&ReportConfig::default()).unwrap();
    assert_eq!(plan.strategies.len(), 4);
    assert_eq!(plan.charts().count(), 16);
    assert!(plan.comparison.is_some());
    // 16 charts + 4 composites + comparison
    assert_eq!(plan.output_paths().len(), 21);
    assert_eq!(plan.metric_rows().len(), 36);
}

#[test]
fn chart_names_follow_convention() {
    let plan = ReportPlan::build(&ReportConfig::default()).unwrap();
    let omp = &plan.strategies[0];
    let names: Vec<_> = omp
        .charts
        .iter()
        .map(|c| c.output_path().file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "omp.png",
            "omp_scalability.png",
            "omp_efficiency.png",
            "omp_frame_time.png"
        ]
    );
    assert_eq!(omp.composite.output_path, Path::new("./omp_combined.png"));
    assert_eq!(omp.composite.images.len(), 4);
}

#[test]
fn chart_metrics_in_composite_order() {
    let plan = ReportPlan::build(&ReportConfig::default()).unwrap();
    let kinds: Vec<_> = plan.strategies[1].charts.iter().map(|c| c.metric()).collect();
    assert_eq!(kinds, MetricKind::all());
    assert_eq!(plan.strategies[1].charts[2].caption(), "Open MPI - Efficiency");
}

#[test]
fn scalability_uses_serial_baseline() {
    let plan = ReportPlan::build(&ReportConfig::default()).unwrap();
    let scal = &plan.strategies[0].charts[1];
    let first = scal.points()[0];
    assert_eq!(first.threads, 1);
    assert!((first.value - 1.0).abs() < 1e-9);
    let last = scal.points()[8];
    assert!((last.value - 941.751 / 213.566).abs() < 1e-9);
}

#[test]
fn comparison_can_be_disabled() {
    let mut config = ReportConfig::default();
    config.comparison = false;
    let plan = ReportPlan::build(&config).unwrap();
    assert!(plan.comparison.is_none());
    assert_eq!(plan.output_paths().len(), 20);
}

#[test]
fn colliding_outputs_rejected() {
    let mut config = ReportConfig::default();
    config.configurations[1].name = "omp_scalability".into();
    let err = ReportPlan::build(&config).unwrap_err();
    assert!(err.to_string().contains("omp_scalability.png"));
}

#[test]
fn row_size_must_divide_group() {
    let mut config = ReportConfig::default();
    config.layout.row_size = 3;
    let err = ReportPlan::build(&config).unwrap_err();
    assert!(matches!(err, ScalvizError::MalformedGroup { count: 4, row_size: 3 }));
}

#[test]
fn invalid_config_fails_plan() {
    let mut config = ReportConfig::default();
    config.configurations[0].total_time.pop();
    assert!(ReportPlan::build(&config).is_err());
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn dry_run_lists_outputs() {
    let plan = ReportPlan::build(&ReportConfig::default()).unwrap();
    let summary = ReportRunner::dry_run(&plan).unwrap();
    assert_eq!(summary.charts.len(), 16);
    assert_eq!(summary.composites.len(), 4);
    assert_eq!(summary.file_count(), 21);
    assert_eq!(summary.files().count(), 21);
}

#[test]
fn full_run_writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report");
    let plan = ReportPlan::build(&small_config(&out)).unwrap();
    let mut renderer = BitmapChartRenderer::new(160, 120).unwrap();
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    let summary = ReportRunner::run(&plan, &mut renderer, &mut bus).unwrap();

    assert_eq!(summary.file_count(), 8 + 2 + 1);
    for path in summary.files() {
        assert!(path.exists(), "missing {}", path.display());
    }
    assert_eq!(renderer.chart_count(), 9);
    assert_eq!(
        image::image_dimensions(out.join("omp_combined.png")).unwrap(),
        (320, 240)
    );
    assert_eq!(
        image::image_dimensions(out.join("comparison.png")).unwrap(),
        (160, 120)
    );

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 12);
    assert!(matches!(
        events.last().unwrap().kind,
        EventKind::ReportFinished { files: 11, .. }
    ));
}

#[test]
fn headless_run_fails_at_composite() {
    // Headless charts are never written, so compositing has nothing to read.
    let dir = tempfile::tempdir().unwrap();
    let plan = ReportPlan::build(&small_config(dir.path())).unwrap();
    let mut renderer = HeadlessRenderer::new();
    let mut bus = EventBus::new();
    let err = ReportRunner::run(&plan, &mut renderer, &mut bus).unwrap_err();
    assert!(matches!(err, ScalvizError::Image { .. }));
    assert_eq!(renderer.chart_count(), 4);
}

#[test]
fn failed_run_still_delivers_events() {
    let dir = tempfile::tempdir().unwrap();
    let plan = ReportPlan::build(&small_config(dir.path())).unwrap();
    let mut renderer = HeadlessRenderer::new();
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    assert!(ReportRunner::run(&plan, &mut renderer, &mut bus).is_err());

    // The four omp charts were announced before the composite failed.
    let events = events.lock().unwrap();
    assert_eq!(events.len(), 4);
    assert!(events
        .iter()
        .all(|e| matches!(e.kind, EventKind::ChartRendered { .. })));
    assert!(!events
        .iter()
        .any(|e| matches!(e.kind, EventKind::ReportFinished { .. })));
}

#[test]
fn summary_json_round_trip() {
    let plan = ReportPlan::build(&ReportConfig::default()).unwrap();
    let summary = ReportRunner::dry_run(&plan).unwrap();
    let json = serde_json::to_string(&summary).unwrap();
    let recovered: ReportSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.charts, summary.charts);
}
