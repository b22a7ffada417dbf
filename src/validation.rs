//! Read-only data-quality checks over a parsed DFQ file.
//!
//! Produces human-readable warning strings for the consuming layer. None of
//! these conditions are errors; an empty or sparse file parses fine and is
//! merely flagged.

use tracing::debug;

use crate::constants::KEY_CHARACTERISTIC_NAME;
use crate::models::ParsedFile;
use crate::projection::{characteristic_display_name, part_display_name};

/// Inspect a parsed file and collect validation warnings.
/// Structurally empty input always yields at least one warning.
pub fn validate_parsed_file(file: &ParsedFile) -> Vec<String> {
    let mut warnings = Vec::new();

    if file.part_count() == 0 {
        warnings.push("no parts found in the DFQ file".to_string());
        return warnings;
    }

    for (part_index, part) in file.parts().iter().enumerate() {
        let part_name = part_display_name(part, part_index);

        if part.characteristic_count() == 0 {
            warnings.push(format!("part '{}': no characteristics found", part_name));
            continue;
        }

        let without_measurements: Vec<String> = part
            .get_characteristics()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.measurement_count() == 0)
            .map(|(i, c)| characteristic_display_name(c, i))
            .collect();

        if !without_measurements.is_empty() {
            warnings.push(format!(
                "part '{}': characteristics without measurements: {}",
                part_name,
                without_measurements.join(", ")
            ));
        }

        let unnamed: Vec<String> = part
            .get_characteristics()
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                c.get_data(KEY_CHARACTERISTIC_NAME)
                    .map_or(true, |name| name.trim().is_empty())
            })
            .map(|(i, _)| format!("Characteristic {}", i + 1))
            .collect();

        if !unnamed.is_empty() {
            warnings.push(format!(
                "part '{}': characteristics without a name key ({}): {}",
                part_name,
                KEY_CHARACTERISTIC_NAME,
                unnamed.join(", ")
            ));
        }
    }

    debug!("validation finished with {} warning(s)", warnings.len());
    warnings
}
