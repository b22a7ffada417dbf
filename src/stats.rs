//! Summary statistics over a part's characteristics.
//!
//! Mirrors the per-column descriptive statistics a reviewer expects next to
//! the measurement table: count, mean, sample standard deviation, min,
//! median and max per characteristic.

use polars::prelude::*;
use serde::Serialize;

use crate::constants::columns;
use crate::error::Result;
use crate::models::{Characteristic, Part};
use crate::projection::characteristic_display_name;

/// Descriptive statistics for one characteristic.
/// Statistics are `None` when the characteristic has too few measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<f64>,
}

/// Summarize a single characteristic under its resolved display name
pub fn summarize_characteristic(characteristic: &Characteristic, index: usize) -> ColumnSummary {
    let values = characteristic.values();
    let count = values.len();

    let mean = if count > 0 {
        Some(values.iter().sum::<f64>() / count as f64)
    } else {
        None
    };

    // Sample standard deviation (n - 1), matching spreadsheet conventions
    let std_dev = match (mean, count) {
        (Some(mean), n) if n >= 2 => {
            let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            Some((sum_sq / (n - 1) as f64).sqrt())
        }
        _ => None,
    };

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let min = sorted.first().copied();
    let max = sorted.last().copied();
    let median = match count {
        0 => None,
        n if n % 2 == 1 => Some(sorted[n / 2]),
        n => Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0),
    };

    ColumnSummary {
        name: characteristic_display_name(characteristic, index),
        count,
        mean,
        std_dev,
        min,
        median,
        max,
    }
}

/// Summarize every characteristic of a part, in file order
pub fn summarize_part(part: &Part) -> Vec<ColumnSummary> {
    part.get_characteristics()
        .iter()
        .enumerate()
        .map(|(index, c)| summarize_characteristic(c, index))
        .collect()
}

/// Project the part summary into a table with one row per characteristic
pub fn summary_table(part: &Part) -> Result<DataFrame> {
    let summaries = summarize_part(part);

    let names: Vec<String> = summaries.iter().map(|s| s.name.clone()).collect();
    let counts: Vec<u32> = summaries.iter().map(|s| s.count as u32).collect();
    let means: Vec<Option<f64>> = summaries.iter().map(|s| s.mean).collect();
    let std_devs: Vec<Option<f64>> = summaries.iter().map(|s| s.std_dev).collect();
    let mins: Vec<Option<f64>> = summaries.iter().map(|s| s.min).collect();
    let medians: Vec<Option<f64>> = summaries.iter().map(|s| s.median).collect();
    let maxes: Vec<Option<f64>> = summaries.iter().map(|s| s.max).collect();

    Ok(DataFrame::new(vec![
        Column::new(columns::CHARACTERISTIC.into(), names),
        Column::new(columns::COUNT.into(), counts),
        Column::new(columns::MEAN.into(), means),
        Column::new(columns::STD.into(), std_devs),
        Column::new(columns::MIN.into(), mins),
        Column::new(columns::MEDIAN.into(), medians),
        Column::new(columns::MAX.into(), maxes),
    ])?)
}
