//! Error types for scalviz.
//!
//! All crates return `ScalvizResult<T>` from fallible operations.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for scalviz.
#[derive(Debug, Error)]
pub enum ScalvizError {
    /// A measurement used as a denominator was exactly zero.
    #[error("Division by zero: measurement at {threads} threads is 0 ({context})")]
    DivisionByZero {
        /// Thread count of the offending point.
        threads: u32,
        /// Which configuration/metric the series belongs to.
        context: String,
    },

    /// A chart was requested for a series with no points.
    #[error("Empty series: nothing to plot for {0}")]
    EmptySeries(String),

    /// Composite image count is not a positive multiple of the row size.
    #[error("Malformed composite group: {count} images cannot fill rows of {row_size}")]
    MalformedGroup {
        /// Number of images supplied.
        count: usize,
        /// Configured row length.
        row_size: usize,
    },

    /// Series data violates an ordering or length invariant.
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Chart drawing failed.
    #[error("Render error for {path}: {message}")]
    Render {
        /// Output file being drawn.
        path: PathBuf,
        /// Backend error text.
        message: String,
    },

    /// Decoding or encoding a raster image failed.
    #[error("Image error for {path}: {message}")]
    Image {
        /// File being read or written.
        path: PathBuf,
        /// Codec error text.
        message: String,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, ScalvizError>`.
pub type ScalvizResult<T> = Result<T, ScalvizError>;
