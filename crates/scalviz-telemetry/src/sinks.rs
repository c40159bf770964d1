//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, ReportEvent};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &ReportEvent);

    /// Called when the report ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events into a shared `Vec` for testing and inspection.
///
/// The sink is moved into the bus; keep the handle from
/// [`VecSink::events`] to read what it received.
pub struct VecSink {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared view of the collected events.
    pub fn events(&self) -> Arc<Mutex<Vec<ReportEvent>>> {
        Arc::clone(&self.events)
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &ReportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs events through `tracing` at INFO level.
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &ReportEvent) {
        match &event.kind {
            EventKind::ChartRendered {
                configuration,
                metric,
                path,
            } => tracing::info!(
                seq = event.sequence,
                configuration = %configuration,
                metric = %metric,
                path = %path.display(),
                "chart"
            ),
            EventKind::CompositeWritten {
                configuration,
                tiles,
                path,
            } => tracing::info!(
                seq = event.sequence,
                configuration = %configuration,
                tiles,
                path = %path.display(),
                "composite"
            ),
            EventKind::ComparisonWritten { curves, path } => tracing::info!(
                seq = event.sequence,
                curves,
                path = %path.display(),
                "comparison"
            ),
            EventKind::ReportFinished { files, wall_time } => tracing::info!(
                seq = event.sequence,
                files,
                wall_time,
                "report finished"
            ),
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
