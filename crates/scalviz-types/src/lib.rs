//! # scalviz-types
//!
//! Shared error type, metric vocabulary and layout defaults
//! for the scalviz benchmark report generator.
//!
//! This crate has zero rendering or numeric logic: it defines the
//! vocabulary that all other scalviz crates share.

pub mod constants;
pub mod error;
pub mod metric;

pub use error::{ScalvizError, ScalvizResult};
pub use metric::MetricKind;
