//! # scalviz-render
//!
//! Chart rendering and image compositing for scalviz.
//!
//! Provides a `ChartRenderer` trait with a plotters-backed
//! `BitmapChartRenderer` (PNG output) and a `HeadlessRenderer` stub,
//! plus a `Compositor` that tiles rendered charts into a grid image.

pub mod bitmap;
pub mod compositor;
pub mod font;
pub mod labels;
pub mod output;
pub mod renderer;
pub mod spec;

pub use bitmap::BitmapChartRenderer;
pub use compositor::{CompositeLayout, Compositor};
pub use labels::{labels_for, ChartLabels};
pub use renderer::{ChartRenderer, HeadlessRenderer};
pub use spec::{ChartSpec, ComparisonChart, LabeledSeries};
