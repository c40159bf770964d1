//! Integration tests for scalviz-telemetry.

use std::path::PathBuf;

use scalviz_telemetry::bus::EventBus;
use scalviz_telemetry::events::{EventKind, ReportEvent};
use scalviz_telemetry::sinks::{EventSink, TracingSink, VecSink};
use scalviz_types::MetricKind;

fn chart_event(name: &str) -> EventKind {
    EventKind::ChartRendered {
        configuration: name.into(),
        metric: MetricKind::Scalability,
        path: PathBuf::from(format!("{name}_scalability.png")),
    }
}

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    bus.emit(chart_event("omp"));
    bus.emit(chart_event("mpi"));
    assert!(events.lock().unwrap().is_empty());

    bus.flush();
    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].sequence, 0);
    assert_eq!(events[1].sequence, 1);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(chart_event("omp"));
    bus.flush();
    assert!(events.lock().unwrap().is_empty());
    assert_eq!(bus.emitted(), 0);
}

#[test]
fn multiple_sinks_each_receive() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    let (ha, hb) = (a.events(), b.events());
    bus.add_sink(Box::new(a));
    bus.add_sink(Box::new(b));
    assert_eq!(bus.sink_count(), 2);

    bus.emit(EventKind::ReportFinished {
        files: 21,
        wall_time: 0.5,
    });
    bus.finish();
    assert_eq!(ha.lock().unwrap().len(), 1);
    assert_eq!(hb.lock().unwrap().len(), 1);
}

#[test]
fn tracing_sink_handles_every_kind() {
    let mut sink = TracingSink::new();
    assert_eq!(sink.name(), "tracing_sink");
    let kinds = [
        chart_event("omp"),
        EventKind::CompositeWritten {
            configuration: "omp".into(),
            tiles: 4,
            path: PathBuf::from("omp_combined.png"),
        },
        EventKind::ComparisonWritten {
            curves: 4,
            path: PathBuf::from("comparison.png"),
        },
        EventKind::ReportFinished {
            files: 21,
            wall_time: 1.0,
        },
    ];
    for (i, kind) in kinds.into_iter().enumerate() {
        sink.handle(&ReportEvent::new(i as u32, kind));
    }
}

#[test]
fn event_serialization() {
    let event = ReportEvent::new(
        3,
        EventKind::CompositeWritten {
            configuration: "pthreads".into(),
            tiles: 4,
            path: PathBuf::from("pthreads_combined.png"),
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("pthreads_combined.png"));
    let recovered: ReportEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}
