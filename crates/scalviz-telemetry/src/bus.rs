//! Event bus: broadcast-style event dispatch with pluggable sinks.
//!
//! The bus uses `std::sync::mpsc` to queue events; queued events reach
//! sinks on `flush`.

use std::sync::mpsc;

use crate::events::{EventKind, ReportEvent};
use crate::sinks::EventSink;

/// Broadcast event bus for report telemetry.
pub struct EventBus {
    sender: mpsc::Sender<ReportEvent>,
    receiver: mpsc::Receiver<ReportEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Next sequence number.
    sequence: u32,
    /// Disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            sequence: 0,
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event, stamping it with the next sequence number.
    pub fn emit(&mut self, kind: EventKind) {
        if !self.enabled {
            return;
        }
        let event = ReportEvent::new(self.sequence, kind);
        self.sequence += 1;
        // Receiver lives as long as the bus.
        let _ = self.sender.send(event);
    }

    /// Flush all pending events to registered sinks.
    pub fn flush(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flush pending events and let every sink finalize.
    pub fn finish(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Number of events emitted so far.
    pub fn emitted(&self) -> u32 {
        self.sequence
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
