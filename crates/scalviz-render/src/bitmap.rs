//! Plotters-backed PNG chart renderer.
//!
//! Every call draws into its own RGB buffer through a scoped drawing
//! area; buffer and area are dropped before the call returns, so peak
//! memory stays at one canvas regardless of how many charts a report has.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use plotters_backend::DrawingBackend;

use scalviz_metrics::DataPoint;
use scalviz_types::constants::{ANNOTATION_PRECISION, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use scalviz_types::{ScalvizError, ScalvizResult};

use crate::font::FontSafeBackend;
use crate::labels::{COMPARISON_TITLE, COMPARISON_Y_AXIS, X_AXIS_LABEL};
use crate::output::{rgb_from_buffer, write_atomic};
use crate::renderer::{ensure_comparable, ensure_plottable, ChartRenderer};
use crate::spec::{ChartSpec, ComparisonChart};

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Renders charts to PNG files of a fixed canvas size.
pub struct BitmapChartRenderer {
    width: u32,
    height: u32,
    charts: u32,
}

impl BitmapChartRenderer {
    /// Creates a renderer producing `width` x `height` images.
    pub fn new(width: u32, height: u32) -> ScalvizResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScalvizError::InvalidConfig(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            charts: 0,
        })
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_to_file<F>(&mut self, path: &Path, draw: F) -> ScalvizResult<()>
    where
        F: for<'b> FnOnce(&DrawingArea<FontSafeBackend<BitMapBackend<'b>>, Shift>) -> Result<(), String>,
    {
        let size = (self.width, self.height);
        let mut buffer = vec![0u8; (self.width as usize) * (self.height as usize) * 3];
        {
            let root = FontSafeBackend::new(BitMapBackend::with_buffer(&mut buffer, size))
                .into_drawing_area();
            draw(&root).map_err(|message| ScalvizError::Render {
                path: path.to_path_buf(),
                message,
            })?;
        }

        let image = rgb_from_buffer(buffer, size, path)?;
        write_atomic(&image, path)?;
        self.charts += 1;
        Ok(())
    }
}

impl Default for BitmapChartRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            charts: 0,
        }
    }
}

impl ChartRenderer for BitmapChartRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ScalvizResult<()> {
        ensure_plottable(spec)?;
        self.draw_to_file(spec.output_path(), |root| {
            draw_line_chart(root, spec).map_err(|e| e.to_string())
        })?;
        tracing::debug!(
            chart = %spec.output_path().display(),
            metric = %spec.metric(),
            points = spec.points().len(),
            "chart rendered"
        );
        Ok(())
    }

    fn render_comparison(&mut self, chart: &ComparisonChart) -> ScalvizResult<()> {
        ensure_comparable(chart)?;
        self.draw_to_file(&chart.output_path, |root| {
            draw_comparison_chart(root, chart).map_err(|e| e.to_string())
        })?;
        tracing::debug!(
            chart = %chart.output_path.display(),
            curves = chart.series.len(),
            "comparison rendered"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "bitmap"
    }

    fn chart_count(&self) -> u32 {
        self.charts
    }
}

fn draw_line_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let points = spec.points();
    let (x_range, y_range) = axis_ranges(points.iter());

    let mut chart = ChartBuilder::on(root)
        .caption(spec.caption(), ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(spec.labels().y_axis)
        .light_line_style(&BLACK.mix(0.05))
        .bold_line_style(&BLACK.mix(0.2))
        .draw()?;

    let coords: Vec<(f64, f64)> = points.iter().map(as_coord).collect();
    let line = BLUE.stroke_width(2);

    chart.draw_series(LineSeries::new(coords.iter().copied(), line))?;
    chart.draw_series(coords.iter().map(|&c| Circle::new(c, 3, BLUE.filled())))?;

    let annotation = FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Normal).color(&BLACK);
    chart.draw_series(coords.iter().map(|&(x, y)| {
        Text::new(
            format!("{:.*}", ANNOTATION_PRECISION, y),
            (x, y),
            annotation.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn draw_comparison_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    comparison: &ComparisonChart,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let all_points = comparison.series.iter().flat_map(|s| s.points.iter());
    let (x_range, y_range) = axis_ranges(all_points);

    let mut chart = ChartBuilder::on(root)
        .caption(COMPARISON_TITLE, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(COMPARISON_Y_AXIS)
        .light_line_style(&BLACK.mix(0.05))
        .bold_line_style(&BLACK.mix(0.2))
        .draw()?;

    for (idx, curve) in comparison.series.iter().enumerate() {
        let style = Palette99::pick(idx).stroke_width(2);
        chart
            .draw_series(LineSeries::new(curve.points.iter().map(as_coord), style))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn as_coord(p: &DataPoint) -> (f64, f64) {
    (f64::from(p.threads), p.value)
}

/// Padded axis ranges enclosing every point.
///
/// Single-valued axes are widened so the chart never collapses.
pub(crate) fn axis_ranges<'a, I>(points: I) -> (Range<f64>, Range<f64>)
where
    I: Iterator<Item = &'a DataPoint>,
{
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points {
        let (x, y) = as_coord(p);
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return (0.0..1.0, 0.0..1.0);
    }
    (pad(x_min, x_max, 0.05), pad(y_min, y_max, 0.1))
}

fn pad(min: f64, max: f64, fraction: f64) -> Range<f64> {
    let span = max - min;
    let margin = if span > 0.0 {
        span * fraction
    } else if min != 0.0 {
        min.abs() * fraction
    } else {
        1.0
    };
    (min - margin)..(max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_enclose_points() {
        let pts = [DataPoint::new(1, 10.0), DataPoint::new(16, 2.0)];
        let (x, y) = axis_ranges(pts.iter());
        assert!(x.start < 1.0 && x.end > 16.0);
        assert!(y.start < 2.0 && y.end > 10.0);
    }

    #[test]
    fn single_point_is_widened() {
        let pts = [DataPoint::new(1, 1.0)];
        let (x, y) = axis_ranges(pts.iter());
        assert!(x.end > x.start);
        assert!(y.end > y.start);
    }

    #[test]
    fn zero_valued_point_is_widened() {
        let (_, y) = axis_ranges([DataPoint::new(2, 0.0)].iter());
        assert_eq!(y, -1.0..1.0);
    }

    #[test]
    fn zero_canvas_rejected() {
        assert!(BitmapChartRenderer::new(0, 600).is_err());
    }
}
