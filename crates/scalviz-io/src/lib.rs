//! # scalviz-io
//!
//! Report configuration and input validation.
//!
//! Defines the boundary types that the CLI loads from TOML and hands to
//! the report runner, and checks them before any chart is drawn.

pub mod config;
pub mod validator;

pub use config::{Configuration, Layout, ReportConfig};
pub use validator::validate_config;
