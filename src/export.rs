//! Spreadsheet export orchestration.
//!
//! Decides which tables go to which sheets; the actual spreadsheet writing
//! lives behind the [`SheetWriter`] collaborator so this module stays free of
//! file-format mechanics.

use std::collections::HashSet;

use polars::prelude::*;
use tracing::debug;

use crate::constants::{
    columns, SHEET_MEASUREMENTS, SHEET_METADATA, SHEET_NAME_FORBIDDEN, SHEET_NAME_MAX_LEN,
    SHEET_STATISTICS,
};
use crate::error::{DfqError, Result};
use crate::models::{ParsedFile, Part};
use crate::projection::{
    build_characteristic_table, build_wide_table, characteristic_display_name, part_display_name,
    Alignment,
};
use crate::stats::summary_table;

/// External collaborator that persists one named sheet at a time
pub trait SheetWriter {
    fn write_sheet(&mut self, name: &str, table: &DataFrame) -> Result<()>;
}

/// Export layouts mirroring the review workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// One sheet with the aligned measurement table
    Measurements,

    /// Measurement table plus statistics and metadata sheets
    Detailed,

    /// Wide overview sheet followed by one sheet per characteristic, long
    /// form with duplicate rows removed
    PerCharacteristic,
}

/// Export one part of a parsed file through the given sheet writer
pub fn export_part(
    file: &ParsedFile,
    part_index: usize,
    mode: ExportMode,
    alignment: Alignment,
    writer: &mut dyn SheetWriter,
) -> Result<()> {
    let part = file
        .get_part(part_index)
        .ok_or(DfqError::PartIndexOutOfRange {
            index: part_index,
            count: file.part_count(),
        })?;

    debug!(
        "exporting part {} ({:?} mode, {:?} alignment)",
        part_index, mode, alignment
    );

    match mode {
        ExportMode::Measurements => {
            writer.write_sheet(SHEET_MEASUREMENTS, &build_wide_table(part, alignment)?)?;
        }
        ExportMode::Detailed => {
            writer.write_sheet(SHEET_MEASUREMENTS, &build_wide_table(part, alignment)?)?;
            writer.write_sheet(SHEET_STATISTICS, &summary_table(part)?)?;
            writer.write_sheet(SHEET_METADATA, &metadata_table(part, part_index)?)?;
        }
        ExportMode::PerCharacteristic => {
            writer.write_sheet(SHEET_MEASUREMENTS, &build_wide_table(part, alignment)?)?;

            let names: Vec<String> = part
                .get_characteristics()
                .iter()
                .enumerate()
                .map(|(i, c)| sanitize_sheet_name(&characteristic_display_name(c, i)))
                .collect();
            let names = unique_sheet_names(&names, &[SHEET_MEASUREMENTS]);

            for (characteristic, name) in part.get_characteristics().iter().zip(names.iter()) {
                writer.write_sheet(name, &build_characteristic_table(characteristic, true)?)?;
            }
        }
    }

    Ok(())
}

/// Key-value metadata of the part and its characteristics as a three-column
/// table (record, key, value)
fn metadata_table(part: &Part, part_index: usize) -> Result<DataFrame> {
    let mut records: Vec<String> = Vec::new();
    let mut keys: Vec<String> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    let part_name = part_display_name(part, part_index);
    for key in part.get_data_keys() {
        if let Some(value) = part.get_data(key) {
            records.push(part_name.clone());
            keys.push(key.to_string());
            values.push(value.to_string());
        }
    }

    for (index, characteristic) in part.get_characteristics().iter().enumerate() {
        let name = characteristic_display_name(characteristic, index);
        for key in characteristic.get_data_keys() {
            if let Some(value) = characteristic.get_data(key) {
                records.push(name.clone());
                keys.push(key.to_string());
                values.push(value.to_string());
            }
        }
    }

    Ok(DataFrame::new(vec![
        Column::new(columns::RECORD.into(), records),
        Column::new(columns::KEY.into(), keys),
        Column::new(columns::VALUE.into(), values),
    ])?)
}

/// Make already-sanitized sheet names unique, suffixing repeats with " (n)".
/// The suffix eats into the base name so the result never exceeds the
/// sheet-name limit. Reserved names are never reused.
fn unique_sheet_names(names: &[String], reserved: &[&str]) -> Vec<String> {
    let mut seen: HashSet<String> = reserved.iter().map(|s| s.to_string()).collect();
    let mut unique = Vec::with_capacity(names.len());

    for name in names {
        let mut candidate = name.clone();
        let mut attempt = 2;
        while seen.contains(&candidate) {
            let suffix = format!(" ({})", attempt);
            let base: String = name
                .chars()
                .take(SHEET_NAME_MAX_LEN.saturating_sub(suffix.chars().count()))
                .collect();
            candidate = format!("{}{}", base, suffix);
            attempt += 1;
        }
        seen.insert(candidate.clone());
        unique.push(candidate);
    }

    unique
}

/// Strip forbidden characters and clamp the name to the sheet-name limit
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !SHEET_NAME_FORBIDDEN.contains(c))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return "Sheet".to_string();
    }

    cleaned.chars().take(SHEET_NAME_MAX_LEN).collect()
}
