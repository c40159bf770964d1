//! Scalability and efficiency derivation.
//!
//! Pure numeric transforms; no I/O and no state.

use scalviz_types::{MetricKind, ScalvizError, ScalvizResult};

use crate::series::{DataPoint, DerivedSeries, MeasurementSeries, Series};

/// Computes speedup S(n) = baseline / T(n) for every point.
///
/// The baseline is the serial execution time. Fails with
/// [`ScalvizError::DivisionByZero`] when a measurement is exactly zero.
pub fn compute_scalability(
    baseline: f64,
    series: &MeasurementSeries,
) -> ScalvizResult<DerivedSeries> {
    if !baseline.is_finite() || baseline <= 0.0 {
        return Err(ScalvizError::InvalidConfig(format!(
            "baseline for {} must be a positive time, got {baseline}",
            series.name()
        )));
    }

    let points = series
        .points()
        .iter()
        .map(|p| {
            if p.value == 0.0 {
                return Err(ScalvizError::DivisionByZero {
                    threads: p.threads,
                    context: series.name().to_string(),
                });
            }
            Ok(DataPoint::new(p.threads, baseline / p.value))
        })
        .collect::<ScalvizResult<Vec<_>>>()?;

    Ok(DerivedSeries::new(
        MetricKind::Scalability,
        format!("{} scalability", series.name()),
        points,
    ))
}

/// Computes efficiency E(n) = S(n) / n from a scalability series.
///
/// Values are not clamped; superlinear speedup yields E(n) > 1.
pub fn compute_efficiency(scalability: &DerivedSeries) -> DerivedSeries {
    let points = scalability
        .points()
        .iter()
        .map(|p| DataPoint::new(p.threads, p.value / f64::from(p.threads)))
        .collect();

    let name = match scalability.name().strip_suffix(" scalability") {
        Some(base) => format!("{base} efficiency"),
        None => format!("{} efficiency", scalability.name()),
    };
    DerivedSeries::new(MetricKind::Efficiency, name, points)
}
