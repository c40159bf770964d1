//! Integration tests for scalviz-io.

use scalviz_io::{validate_config, ReportConfig};

const SAMPLE: &str = r#"
thread_counts = [1, 2, 4]
output_dir = "plots"
baseline = 253.321

[layout]
row_size = 2

[[configurations]]
name = "omp"
title = "OpenMP"
total_time = [253.321, 150.229, 85.085]
frame_time = [2.5, 1.4, 0.8]

[[configurations]]
name = "mpi"
title = "Open MPI"
total_time = [253.321, 140.0, 80.0]
frame_time = [2.5, 1.3, 0.7]
baseline = 250.0
"#;

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_tables() {
    let config = ReportConfig::default();
    assert_eq!(config.thread_counts, vec![1, 2, 4, 6, 8, 10, 12, 14, 16]);
    assert_eq!(config.configurations.len(), 4);
    assert!((config.baseline - 941.751).abs() < 1e-9);
    assert!(config.comparison);
    assert_eq!(config.layout.row_size, 2);
    assert_eq!(config.configuration("pthreads").unwrap().title, "pthreads");
}

#[test]
fn default_config_is_valid() {
    assert!(validate_config(&ReportConfig::default()).is_ok());
}

#[test]
fn parse_toml_with_defaults() {
    let config = ReportConfig::from_toml_str(SAMPLE).unwrap();
    assert_eq!(config.thread_counts, vec![1, 2, 4]);
    assert_eq!(config.output_dir.to_str(), Some("plots"));
    assert!(config.comparison);
    assert_eq!(config.layout.canvas_width, 800);
    assert_eq!(config.layout.canvas_height, 600);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn per_configuration_baseline_override() {
    let config = ReportConfig::from_toml_str(SAMPLE).unwrap();
    let omp = config.configuration("omp").unwrap();
    let mpi = config.configuration("mpi").unwrap();
    assert_eq!(omp.effective_baseline(config.baseline), 253.321);
    assert_eq!(mpi.effective_baseline(config.baseline), 250.0);
}

#[test]
fn toml_round_trip() {
    let config = ReportConfig::default();
    let text = config.to_toml_string().unwrap();
    let recovered = ReportConfig::from_toml_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn json_round_trip() {
    let config = ReportConfig::from_toml_str(SAMPLE).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let recovered: ReportConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.configurations.len(), 2);
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.toml");
    std::fs::write(&path, SAMPLE).unwrap();
    let config = ReportConfig::load(&path).unwrap();
    assert_eq!(config.configurations[0].name, "omp");
}

#[test]
fn malformed_toml_names_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "thread_counts = [1, 2").unwrap();
    let err = ReportConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn missing_file_is_io_error() {
    let err = ReportConfig::load(std::path::Path::new("/nonexistent/report.toml")).unwrap_err();
    assert!(matches!(err, scalviz_types::ScalvizError::Io(_)));
}

// ─── Validator Tests ──────────────────────────────────────────

fn valid() -> ReportConfig {
    ReportConfig::from_toml_str(SAMPLE).unwrap()
}

#[test]
fn empty_axis_rejected() {
    let mut config = valid();
    config.thread_counts.clear();
    assert!(validate_config(&config).is_err());
}

#[test]
fn unordered_axis_rejected() {
    let mut config = valid();
    config.thread_counts = vec![1, 4, 2];
    assert!(validate_config(&config).is_err());
}

#[test]
fn zero_thread_count_rejected() {
    let mut config = valid();
    config.thread_counts = vec![0, 2, 4];
    assert!(validate_config(&config).is_err());
}

#[test]
fn short_column_rejected() {
    let mut config = valid();
    config.configurations[0].frame_time.pop();
    let msg = validate_config(&config).unwrap_err().to_string();
    assert!(msg.contains("omp"));
    assert!(msg.contains("frame_time"));
}

#[test]
fn zero_measurement_rejected() {
    let mut config = valid();
    config.configurations[1].total_time[2] = 0.0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn non_positive_baseline_rejected() {
    let mut config = valid();
    config.baseline = 0.0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn duplicate_names_rejected() {
    let mut config = valid();
    config.configurations[1].name = "omp".into();
    assert!(validate_config(&config).is_err());
}

#[test]
fn unsafe_name_rejected() {
    let mut config = valid();
    config.configurations[0].name = "../omp".into();
    assert!(validate_config(&config).is_err());
}

#[test]
fn zero_row_size_rejected() {
    let mut config = valid();
    config.layout.row_size = 0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn no_configurations_rejected() {
    let mut config = valid();
    config.configurations.clear();
    assert!(validate_config(&config).is_err());
}

#[test]
fn sample_config_matches_builtin_tables() {
    let sample = ReportConfig::from_toml_str(include_str!("../../../report.toml")).unwrap();
    assert!(validate_config(&sample).is_ok());
    let builtin = ReportConfig::default();
    assert_eq!(sample.thread_counts, builtin.thread_counts);
    assert_eq!(sample.configurations, builtin.configurations);
    assert_eq!(sample.output_dir.to_str(), Some("plots"));
}
