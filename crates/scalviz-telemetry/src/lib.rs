//! # scalviz-telemetry
//!
//! Event bus for report telemetry. Emits structured events (charts
//! rendered, composites written, run finished) that can be consumed
//! by pluggable sinks (tracing logs, in-memory capture).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, ReportEvent};
