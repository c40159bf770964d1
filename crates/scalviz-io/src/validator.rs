//! Report configuration validation.
//!
//! Catches table-level errors before anything is rendered, naming the
//! strategy and column at fault.

use scalviz_types::{ScalvizError, ScalvizResult};

use crate::config::{Configuration, Layout, ReportConfig};

/// Validates a complete report configuration.
///
/// Checks:
/// - Thread axis is non-empty, positive and strictly increasing
/// - Baselines are positive, finite times
/// - Every strategy has a unique, file-safe name and full-length columns
/// - Every measurement is a positive, finite time
/// - Canvas and row geometry are usable
pub fn validate_config(config: &ReportConfig) -> ScalvizResult<()> {
    validate_axis(&config.thread_counts)?;
    validate_baseline("report", config.baseline)?;
    validate_layout(&config.layout)?;

    if config.configurations.is_empty() {
        return Err(ScalvizError::InvalidConfig(
            "at least one configuration is required".into(),
        ));
    }

    for (i, c) in config.configurations.iter().enumerate() {
        if config.configurations[..i].iter().any(|o| o.name == c.name) {
            return Err(ScalvizError::InvalidConfig(format!(
                "duplicate configuration name '{}'",
                c.name
            )));
        }
        validate_configuration(c, config.thread_counts.len())?;
    }

    Ok(())
}

fn validate_axis(threads: &[u32]) -> ScalvizResult<()> {
    if threads.is_empty() {
        return Err(ScalvizError::InvalidConfig(
            "thread_counts must not be empty".into(),
        ));
    }
    if threads.contains(&0) {
        return Err(ScalvizError::InvalidConfig(
            "thread_counts must be positive".into(),
        ));
    }
    if let Some(pair) = threads.windows(2).find(|w| w[1] <= w[0]) {
        return Err(ScalvizError::InvalidConfig(format!(
            "thread_counts must be strictly increasing ({} followed by {})",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

fn validate_baseline(owner: &str, baseline: f64) -> ScalvizResult<()> {
    if !baseline.is_finite() || baseline <= 0.0 {
        return Err(ScalvizError::InvalidConfig(format!(
            "{owner} baseline must be a positive time, got {baseline}"
        )));
    }
    Ok(())
}

fn validate_layout(layout: &Layout) -> ScalvizResult<()> {
    if layout.canvas_width == 0 || layout.canvas_height == 0 {
        return Err(ScalvizError::InvalidConfig(format!(
            "canvas must be non-empty, got {}x{}",
            layout.canvas_width, layout.canvas_height
        )));
    }
    if layout.row_size == 0 {
        return Err(ScalvizError::InvalidConfig(
            "layout.row_size must be >= 1".into(),
        ));
    }
    Ok(())
}

fn validate_configuration(c: &Configuration, axis_len: usize) -> ScalvizResult<()> {
    if c.name.is_empty() {
        return Err(ScalvizError::InvalidConfig(
            "configuration name must not be empty".into(),
        ));
    }
    if !c
        .name
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
    {
        return Err(ScalvizError::InvalidConfig(format!(
            "configuration name '{}' may only contain ASCII letters, digits, '_' and '-'",
            c.name
        )));
    }

    for (column, values) in [("total_time", &c.total_time), ("frame_time", &c.frame_time)] {
        if values.len() != axis_len {
            return Err(ScalvizError::InvalidConfig(format!(
                "'{}' {column} has {} values, thread_counts has {axis_len}",
                c.name,
                values.len()
            )));
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(ScalvizError::InvalidConfig(format!(
                "'{}' {column} contains non-positive time {v}",
                c.name
            )));
        }
    }

    if let Some(baseline) = c.baseline {
        validate_baseline(&c.name, baseline)?;
    }
    Ok(())
}
