//! Tests for the grouping/alignment engine

use super::{float_column, timestamp_column_ms, timestamped_file};
use crate::parser::parse_dfq;
use crate::projection::{build_wide_table, Alignment};

#[test]
fn test_timestamp_alignment_unions_and_sorts() {
    let file = timestamped_file();
    let part = file.get_part(0).unwrap();
    let table = build_wide_table(part, Alignment::Timestamp).unwrap();

    // Three distinct timestamps across the two characteristics
    assert_eq!(table.height(), 3);
    assert_eq!(
        table.get_column_names_str(),
        vec!["timestamp", "Runout", "Twist"]
    );

    let timestamps = timestamp_column_ms(&table, "timestamp");
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);

    // Shared first timestamp, then each characteristic alone
    assert_eq!(
        float_column(&table, "Runout"),
        vec![Some(0.10), Some(0.12), None]
    );
    assert_eq!(
        float_column(&table, "Twist"),
        vec![Some(0.20), None, Some(0.22)]
    );
}

#[test]
fn test_repeated_timestamps_stay_distinct_rows() {
    let file = parse_dfq(
        "K2002\tRepeat\n\
         1.0\u{14}01.02.2024/08:00:00\n\
         2.0\u{14}01.02.2024/08:00:00\n",
    );
    let part = file.get_part(0).unwrap();
    let table = build_wide_table(part, Alignment::Timestamp).unwrap();

    assert_eq!(table.height(), 2);
    assert_eq!(float_column(&table, "Repeat"), vec![Some(1.0), Some(2.0)]);
}

#[test]
fn test_positional_alignment_pads_short_columns() {
    let file = parse_dfq("K2002\tA\n1.0\n2.0\n3.0\nK2002\tB\n10.0\n");
    let part = file.get_part(0).unwrap();
    let table = build_wide_table(part, Alignment::Positional).unwrap();

    assert_eq!(table.height(), 3);
    assert_eq!(table.get_column_names_str(), vec!["index", "A", "B"]);
    assert_eq!(
        float_column(&table, "A"),
        vec![Some(1.0), Some(2.0), Some(3.0)]
    );
    assert_eq!(float_column(&table, "B"), vec![Some(10.0), None, None]);
}

#[test]
fn test_timestamp_mode_excludes_untimestamped_measurements() {
    let file = parse_dfq(
        "K2002\tA\n\
         1.0\u{14}01.02.2024/08:00:00\n\
         2.0\n",
    );
    let part = file.get_part(0).unwrap();

    let wide = build_wide_table(part, Alignment::Timestamp).unwrap();
    assert_eq!(wide.height(), 1);
    assert_eq!(float_column(&wide, "A"), vec![Some(1.0)]);

    // Positional alignment keeps the untimestamped measurement
    let positional = build_wide_table(part, Alignment::Positional).unwrap();
    assert_eq!(positional.height(), 2);
}

#[test]
fn test_timestamp_mode_falls_back_to_positional_without_timestamps() {
    let file = parse_dfq("K2002\tA\n1.0\n2.0\nK2002\tB\n3.0\n4.0\n");
    let part = file.get_part(0).unwrap();
    let table = build_wide_table(part, Alignment::Timestamp).unwrap();

    assert_eq!(table.get_column_names_str(), vec!["index", "A", "B"]);
    assert_eq!(table.height(), 2);
}

#[test]
fn test_empty_part_yields_empty_table() {
    let file = parse_dfq("K1001\tHousing\n");
    let part = file.get_part(0).unwrap();
    let table = build_wide_table(part, Alignment::Timestamp).unwrap();

    assert_eq!(table.width(), 0);
    assert_eq!(table.height(), 0);
}

#[test]
fn test_characteristics_without_measurements_yield_empty_table() {
    let file = parse_dfq("K1001\tHousing\nK2002\tA\nK2002\tB\n");
    let part = file.get_part(0).unwrap();
    let table = build_wide_table(part, Alignment::Positional).unwrap();

    assert_eq!(table.width(), 0);
}

#[test]
fn test_duplicate_display_names_are_uniquified() {
    let file = parse_dfq("K2002\tDiameter\n1.0\nK2002\tDiameter\n2.0\n");
    let part = file.get_part(0).unwrap();
    let table = build_wide_table(part, Alignment::Positional).unwrap();

    assert_eq!(
        table.get_column_names_str(),
        vec!["index", "Diameter", "Diameter (2)"]
    );
}

#[test]
fn test_unnamed_characteristics_get_ordinal_columns() {
    let file = parse_dfq("K1001\tHousing\n1.0\n");
    let part = file.get_part(0).unwrap();
    let table = build_wide_table(part, Alignment::Positional).unwrap();

    assert_eq!(table.get_column_names_str(), vec!["index", "Characteristic 1"]);
}
