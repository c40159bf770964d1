//! Integration tests for scalviz-types.

use std::path::PathBuf;

use scalviz_types::{MetricKind, ScalvizError};

// ─── MetricKind Tests ─────────────────────────────────────────

#[test]
fn metric_kinds_in_composite_order() {
    let kinds = MetricKind::all();
    assert_eq!(kinds.len(), 4);
    assert_eq!(kinds[0], MetricKind::Raw);
    assert_eq!(kinds[3], MetricKind::FrameTime);
    for (i, kind) in kinds.iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn raw_file_name_has_no_suffix() {
    assert_eq!(MetricKind::Raw.file_name("omp"), "omp.png");
}

#[test]
fn derived_file_names() {
    assert_eq!(MetricKind::Scalability.file_name("mpi"), "mpi_scalability.png");
    assert_eq!(MetricKind::Efficiency.file_name("mpi"), "mpi_efficiency.png");
    assert_eq!(MetricKind::FrameTime.file_name("mpi_omp"), "mpi_omp_frame_time.png");
}

#[test]
fn metric_kind_serializes_snake_case() {
    let json = serde_json::to_string(&MetricKind::FrameTime).unwrap();
    assert_eq!(json, "\"frame_time\"");
    let back: MetricKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, MetricKind::FrameTime);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn division_error_names_thread_count() {
    let err = ScalvizError::DivisionByZero {
        threads: 8,
        context: "omp total_time".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("8 threads"));
    assert!(msg.contains("omp total_time"));
}

#[test]
fn malformed_group_display() {
    let err = ScalvizError::MalformedGroup { count: 3, row_size: 2 };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains('2'));
}

#[test]
fn render_error_names_path() {
    let err = ScalvizError::Render {
        path: PathBuf::from("out/omp.png"),
        message: "backend failure".into(),
    };
    assert!(err.to_string().contains("out/omp.png"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ScalvizError = io.into();
    assert!(matches!(err, ScalvizError::Io(_)));
}
