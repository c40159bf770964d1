//! # scalviz-metrics
//!
//! Metric derivation for parallel benchmark timings.
//!
//! Turns a serial baseline and per-thread-count measurements into
//! scalability S(n) = T(1) / T(n) and efficiency E(n) = S(n) / n
//! series, and flattens them into a CSV-exportable table.

pub mod derive;
pub mod series;
pub mod table;

pub use derive::{compute_efficiency, compute_scalability};
pub use series::{DataPoint, DerivedSeries, MeasurementSeries, Series};
pub use table::MetricRow;
