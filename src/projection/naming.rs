//! Display-name resolution for parts and characteristics.
//!
//! Fallback name synthesis is a presentation policy applied over the already
//! parsed hierarchy, not parser logic: a record with no conventional name key
//! gets an ordinal name derived from its position.

use std::collections::HashSet;

use crate::constants::{KEY_CHARACTERISTIC_NAME, KEY_PART_NAME};
use crate::models::{Characteristic, Part};

/// Resolved display name for a characteristic: the K2002 value, or
/// "Characteristic {n}" when the key is missing or blank.
pub fn characteristic_display_name(characteristic: &Characteristic, index: usize) -> String {
    match characteristic.get_data(KEY_CHARACTERISTIC_NAME) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => format!("Characteristic {}", index + 1),
    }
}

/// Resolved display name for a part: the K1001 value, or "Part {n}"
pub fn part_display_name(part: &Part, index: usize) -> String {
    match part.get_data(KEY_PART_NAME) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => format!("Part {}", index + 1),
    }
}

/// Make a list of column names unique, suffixing repeats with " (n)".
/// Reserved names (e.g. the leading axis column) are never reused.
pub fn unique_column_names(names: &[String], reserved: &[&str]) -> Vec<String> {
    let mut seen: HashSet<String> = reserved.iter().map(|s| s.to_string()).collect();
    let mut unique = Vec::with_capacity(names.len());

    for name in names {
        let mut candidate = name.clone();
        let mut attempt = 2;
        while seen.contains(&candidate) {
            candidate = format!("{} ({})", name, attempt);
            attempt += 1;
        }
        seen.insert(candidate.clone());
        unique.push(candidate);
    }

    unique
}
