//! Flat per-thread-count metric table for CSV/JSON export.

use serde::{Deserialize, Serialize};

use scalviz_types::{ScalvizError, ScalvizResult};

use crate::series::{DerivedSeries, MeasurementSeries, Series};

/// All metrics of one configuration at one thread count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Configuration name (e.g. `omp`).
    pub configuration: String,
    /// Thread count.
    pub threads: u32,
    /// Total execution time (seconds).
    pub total_time: f64,
    /// S(n) = T(1) / T(n).
    pub scalability: f64,
    /// E(n) = S(n) / n.
    pub efficiency: f64,
    /// Per-frame execution time (seconds).
    pub frame_time: f64,
}

impl MetricRow {
    /// Joins the four series of a configuration into rows.
    ///
    /// All series must share one thread-count axis.
    pub fn collect(
        configuration: &str,
        total_time: &MeasurementSeries,
        frame_time: &MeasurementSeries,
        scalability: &DerivedSeries,
        efficiency: &DerivedSeries,
    ) -> ScalvizResult<Vec<MetricRow>> {
        if !total_time.same_axis(frame_time)
            || !total_time.same_axis(scalability)
            || !total_time.same_axis(efficiency)
        {
            return Err(ScalvizError::InvalidSeries(format!(
                "series of '{configuration}' do not share a thread-count axis"
            )));
        }

        let rows = total_time
            .points()
            .iter()
            .zip(frame_time.points())
            .zip(scalability.points().iter().zip(efficiency.points()))
            .map(|((t, f), (s, e))| MetricRow {
                configuration: configuration.to_string(),
                threads: t.threads,
                total_time: t.value,
                scalability: s.value,
                efficiency: e.value,
                frame_time: f.value,
            })
            .collect();
        Ok(rows)
    }

    /// CSV header line.
    pub fn to_csv_header() -> String {
        "configuration,threads,total_time_s,scalability,efficiency,frame_time_s".to_string()
    }

    /// Format this row as a CSV data line.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{:.3},{:.3},{:.3},{:.6}",
            self.configuration,
            self.threads,
            self.total_time,
            self.scalability,
            self.efficiency,
            self.frame_time,
        )
    }

    /// Format multiple rows as a complete CSV string.
    pub fn to_csv(rows: &[MetricRow]) -> String {
        let mut csv = Self::to_csv_header();
        for row in rows {
            csv.push('\n');
            csv.push_str(&row.to_csv_row());
        }
        csv
    }
}
