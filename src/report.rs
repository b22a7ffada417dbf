//! Nested report structure over a parsed DFQ file.
//!
//! Collects file-level counts, part identity excerpts and per-characteristic
//! metadata for the reporting collaborator. Everything is serializable so the
//! consuming layer can render or persist it as it sees fit.

use std::collections::BTreeMap;

use chrono::Local;
use serde::Serialize;

use crate::constants::PART_IDENTITY_KEYS;
use crate::models::{Characteristic, ParsedFile, Part};
use crate::projection::{characteristic_display_name, part_display_name};

/// Timestamp format used for the report generation stamp
const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File-level report with one section per part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub part_count: usize,
    pub characteristic_count: usize,
    pub total_measurements: usize,
    pub generated_at: String,
    pub parts: Vec<PartReport>,
}

/// Identity excerpt and characteristic sections for one part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartReport {
    pub index: usize,
    pub name: String,
    /// K1001-K1004 identity fields present on this part
    pub identity: BTreeMap<String, String>,
    pub characteristics: Vec<CharacteristicReport>,
}

/// Metadata and measurement count for one characteristic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicReport {
    pub index: usize,
    pub name: String,
    pub measurement_count: usize,
    /// Full key-value mapping, verbatim
    pub metadata: BTreeMap<String, String>,
}

/// Build the full report for a parsed file
pub fn build_report(file: &ParsedFile) -> FileReport {
    let parts: Vec<PartReport> = file
        .parts()
        .iter()
        .enumerate()
        .map(|(index, part)| build_part_report(part, index))
        .collect();

    FileReport {
        part_count: file.part_count(),
        characteristic_count: parts.iter().map(|p| p.characteristics.len()).sum(),
        total_measurements: file.total_measurement_count(),
        generated_at: Local::now().format(GENERATED_AT_FORMAT).to_string(),
        parts,
    }
}

fn build_part_report(part: &Part, index: usize) -> PartReport {
    let identity: BTreeMap<String, String> = PART_IDENTITY_KEYS
        .iter()
        .filter_map(|key| {
            part.get_data(key)
                .filter(|value| !value.is_empty())
                .map(|value| (key.to_string(), value.to_string()))
        })
        .collect();

    let characteristics = part
        .get_characteristics()
        .iter()
        .enumerate()
        .map(|(i, c)| build_characteristic_report(c, i))
        .collect();

    PartReport {
        index,
        name: part_display_name(part, index),
        identity,
        characteristics,
    }
}

fn build_characteristic_report(characteristic: &Characteristic, index: usize) -> CharacteristicReport {
    let metadata: BTreeMap<String, String> = characteristic
        .get_data_keys()
        .iter()
        .filter_map(|key| {
            characteristic
                .get_data(key)
                .map(|value| (key.to_string(), value.to_string()))
        })
        .collect();

    CharacteristicReport {
        index,
        name: characteristic_display_name(characteristic, index),
        measurement_count: characteristic.measurement_count(),
        metadata,
    }
}
