//! # scalviz-report
//!
//! Turns a [`ReportConfig`](scalviz_io::ReportConfig) into images.
//!
//! The planner derives every series and names every output up front;
//! the runner then renders charts, composites and the comparison chart
//! in order, stopping at the first error.

pub mod plan;
pub mod runner;

pub use plan::{CompositeGroup, ReportPlan, StrategyPlan};
pub use runner::{ReportRunner, ReportSummary};
