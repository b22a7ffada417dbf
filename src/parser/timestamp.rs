//! DFQ date/time parsing and fallback timestamp assignment.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::constants::{CHARACTERISTIC_KEY_PREFIX, DFQ_DATETIME_FORMATS, DFQ_DATE_FORMATS};
use crate::models::ParsedFile;

/// Parse a token in one of the DFQ date/time conventions.
/// Date-only values are anchored at midnight.
pub(crate) fn parse_dfq_datetime(token: &str) -> Option<NaiveDateTime> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    for format in DFQ_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(token, format) {
            return Some(dt);
        }
    }

    for format in DFQ_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    None
}

/// Secondary timestamp pass over the parsed hierarchy.
///
/// Characteristics whose measurements carry no inline timestamps are given a
/// base date taken from the first date-typed K2xxx value present (K2003-class
/// keys, used opportunistically). Characteristics without any date source keep
/// `None` timestamps and are aligned positionally downstream.
pub(crate) fn assign_fallback_timestamps(file: &mut ParsedFile) {
    for part in file.parts_mut() {
        for characteristic in part.characteristics_mut() {
            if characteristic
                .get_measurements()
                .iter()
                .any(|m| m.timestamp.is_some())
            {
                continue;
            }

            let base = characteristic
                .get_data_keys()
                .iter()
                .filter(|key| key.starts_with(CHARACTERISTIC_KEY_PREFIX))
                .filter_map(|key| characteristic.get_data(key))
                .find_map(parse_dfq_datetime);

            if let Some(base) = base {
                debug!("assigning base timestamp {} from characteristic metadata", base);
                for measurement in characteristic.measurements_mut() {
                    measurement.timestamp = Some(base);
                }
            }
        }
    }
}
