//! Single-characteristic long-form projection.

use std::collections::HashSet;

use polars::prelude::*;

use crate::constants::columns;
use crate::error::Result;
use crate::models::Characteristic;

/// Build a long-form table for one characteristic: columns `timestamp` and
/// `value`, one row per measurement in recorded order.
///
/// With `unique` set, rows sharing an identical (timestamp, value) pair are
/// deduplicated keeping the first occurrence; repeated identical readings are
/// noise on per-characteristic export sheets. An empty characteristic yields
/// a table with zero rows.
pub fn build_characteristic_table(
    characteristic: &Characteristic,
    unique: bool,
) -> Result<DataFrame> {
    let mut timestamps: Vec<Option<i64>> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    let mut seen: HashSet<(Option<i64>, u64)> = HashSet::new();

    for measurement in characteristic.get_measurements() {
        let timestamp_ms = measurement
            .timestamp
            .map(|ts| ts.and_utc().timestamp_millis());

        if unique && !seen.insert((timestamp_ms, measurement.value.to_bits())) {
            continue;
        }

        timestamps.push(timestamp_ms);
        values.push(measurement.value);
    }

    let timestamp_column = Column::new(columns::TIMESTAMP.into(), timestamps)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    let value_column = Column::new(columns::VALUE.into(), values);

    Ok(DataFrame::new(vec![timestamp_column, value_column])?)
}
