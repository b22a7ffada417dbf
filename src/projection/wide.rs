//! Grouping/alignment engine: one part projected into a wide table.
//!
//! The wide table has one column per characteristic and one row per
//! timestamp (or per position). Characteristics with disjoint timestamp sets
//! produce sparse rows with null cells; that is expected, not an error.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;
use polars::prelude::*;
use tracing::{debug, warn};

use super::naming::{characteristic_display_name, unique_column_names};
use crate::constants::columns;
use crate::error::Result;
use crate::models::Part;

/// Row-alignment policy for the wide table.
///
/// Timestamp alignment assumes the characteristics share a compatible
/// timestamp domain; positional alignment simply zips the raw sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// One row per distinct (timestamp, occurrence) pair, sorted ascending.
    /// Falls back to positional alignment when no measurement carries a
    /// timestamp at all.
    Timestamp,

    /// One row per sequence position, no timestamp reconciliation
    Positional,
}

/// Build a wide table for one part: one row per timestamp or position, one
/// column per characteristic. Empty parts yield an empty table.
///
/// In `Timestamp` mode, measurements without a timestamp have no place on the
/// time axis and are excluded from the table (a warning is logged). Use
/// `Positional` alignment to keep every measurement.
pub fn build_wide_table(part: &Part, alignment: Alignment) -> Result<DataFrame> {
    if part.characteristic_count() == 0 || part.total_measurement_count() == 0 {
        return Ok(DataFrame::empty());
    }

    let names: Vec<String> = part
        .get_characteristics()
        .iter()
        .enumerate()
        .map(|(i, c)| characteristic_display_name(c, i))
        .collect();

    match alignment {
        Alignment::Timestamp if has_any_timestamp(part) => timestamp_aligned(part, &names),
        Alignment::Timestamp => {
            debug!("no timestamps present in part, falling back to positional alignment");
            positional(part, &names)
        }
        Alignment::Positional => positional(part, &names),
    }
}

fn has_any_timestamp(part: &Part) -> bool {
    part.get_characteristics()
        .iter()
        .flat_map(|c| c.get_measurements())
        .any(|m| m.timestamp.is_some())
}

/// Axis key: a timestamp plus its occurrence ordinal within one
/// characteristic, so repeated readings at the same instant stay distinct
/// rows instead of overwriting each other.
type AxisKey = (NaiveDateTime, u32);

fn timestamp_aligned(part: &Part, names: &[String]) -> Result<DataFrame> {
    let mut axis: BTreeSet<AxisKey> = BTreeSet::new();
    let mut per_characteristic: Vec<Vec<(AxisKey, f64)>> = Vec::new();

    for (index, characteristic) in part.get_characteristics().iter().enumerate() {
        let mut occurrences: HashMap<NaiveDateTime, u32> = HashMap::new();
        let mut entries = Vec::with_capacity(characteristic.measurement_count());
        let mut dropped = 0usize;

        for measurement in characteristic.get_measurements() {
            match measurement.timestamp {
                Some(ts) => {
                    let occurrence = occurrences.entry(ts).or_insert(0);
                    let key = (ts, *occurrence);
                    *occurrence += 1;
                    axis.insert(key);
                    entries.push((key, measurement.value));
                }
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(
                "characteristic {} has {} measurement(s) without timestamps; \
                 excluded from timestamp-aligned table",
                index + 1,
                dropped
            );
        }

        per_characteristic.push(entries);
    }

    let row_of: HashMap<AxisKey, usize> =
        axis.iter().enumerate().map(|(row, key)| (*key, row)).collect();

    let timestamps_ms: Vec<i64> = axis
        .iter()
        .map(|(ts, _)| ts.and_utc().timestamp_millis())
        .collect();
    let timestamp_column = Column::new(columns::TIMESTAMP.into(), timestamps_ms)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

    let unique_names = unique_column_names(names, &[columns::TIMESTAMP]);
    let mut table_columns = vec![timestamp_column];

    for (entries, name) in per_characteristic.iter().zip(unique_names.iter()) {
        let mut cells: Vec<Option<f64>> = vec![None; axis.len()];
        for (key, value) in entries {
            if let Some(&row) = row_of.get(key) {
                cells[row] = Some(*value);
            }
        }
        table_columns.push(Column::new(name.as_str().into(), cells));
    }

    Ok(DataFrame::new(table_columns)?)
}

fn positional(part: &Part, names: &[String]) -> Result<DataFrame> {
    let row_count = part
        .get_characteristics()
        .iter()
        .map(|c| c.measurement_count())
        .max()
        .unwrap_or(0);

    let index: Vec<u32> = (0..row_count as u32).collect();
    let unique_names = unique_column_names(names, &[columns::INDEX]);
    let mut table_columns = vec![Column::new(columns::INDEX.into(), index)];

    for (characteristic, name) in part.get_characteristics().iter().zip(unique_names.iter()) {
        let mut cells: Vec<Option<f64>> = characteristic
            .get_measurements()
            .iter()
            .map(|m| Some(m.value))
            .collect();
        cells.resize(row_count, None);
        table_columns.push(Column::new(name.as_str().into(), cells));
    }

    Ok(DataFrame::new(table_columns)?)
}
