//! Tests for the main DFQ parser orchestration

use std::io::Write;
use tempfile::NamedTempFile;

use super::{create_test_dfq, create_timestamped_dfq};
use crate::error::DfqError;
use crate::parser::{decode_lossy, parse_dfq, read_dfq_file, DfqParser};

#[test]
fn test_basic_hierarchy() {
    let file = parse_dfq(&create_test_dfq());

    assert_eq!(file.part_count(), 1);
    let part = file.get_part(0).unwrap();
    assert_eq!(part.get_data("K1001"), Some("Housing Front"));
    assert_eq!(part.get_data("K1002"), Some("4711"));
    assert_eq!(part.characteristic_count(), 2);

    let diameter = part.get_characteristic(0).unwrap();
    assert_eq!(diameter.get_data("K2002"), Some("Diameter"));
    assert_eq!(diameter.get_data("K2101"), Some("10.5"));
    assert_eq!(diameter.values(), vec![12.01, 12.02, 11.99]);
}

#[test]
fn test_characteristic_name_and_ordered_measurements() {
    let file = parse_dfq("K2002\tLength_mm\n1.01\n1.02\n0.99\n");
    let characteristic = file.get_part(0).unwrap().get_characteristic(0).unwrap();

    assert_eq!(characteristic.get_data("K2002"), Some("Length_mm"));
    assert_eq!(characteristic.values(), vec![1.01, 1.02, 0.99]);
}

#[test]
fn test_part_count_matches_k1001_markers() {
    let content = "K1001\tFirst\nK2002\tA\n1.0\nK1001\tSecond\nK2002\tB\n2.0\n";
    let file = parse_dfq(content);

    assert_eq!(file.part_count(), 2);
    assert_eq!(file.get_part(0).unwrap().get_data("K1001"), Some("First"));
    assert_eq!(file.get_part(1).unwrap().get_data("K1001"), Some("Second"));
    assert_eq!(file.get_part(1).unwrap().characteristic_count(), 1);
}

#[test]
fn test_content_without_k1001_yields_one_part() {
    let file = parse_dfq("K2002\tDiameter\n1.0\n");
    assert_eq!(file.part_count(), 1);

    // Raw content with no key records at all still opens a part
    let file = parse_dfq("hello world\n");
    assert_eq!(file.part_count(), 1);
}

#[test]
fn test_empty_input_yields_zero_parts() {
    assert_eq!(parse_dfq("").part_count(), 0);
    assert_eq!(parse_dfq("\n\n  \n").part_count(), 0);
}

#[test]
fn test_malformed_tokens_do_not_affect_neighbours() {
    let file = parse_dfq("K2002\tGap\n1.01\nN/A\n1.02\ngarbage line\n0.99\n");
    let characteristic = file.get_part(0).unwrap().get_characteristic(0).unwrap();

    assert_eq!(characteristic.values(), vec![1.01, 1.02, 0.99]);
}

#[test]
fn test_payload_before_any_characteristic_opens_implicit_one() {
    let file = parse_dfq("K1001\tHousing\n1.5\n2.5\n");
    let part = file.get_part(0).unwrap();

    assert_eq!(part.characteristic_count(), 1);
    let implicit = part.get_characteristic(0).unwrap();
    assert_eq!(implicit.get_data("K2002"), None);
    assert_eq!(implicit.values(), vec![1.5, 2.5]);
}

#[test]
fn test_k2002_names_characteristic_opened_by_other_key() {
    let file = parse_dfq("K2001\t42\nK2002\tDiameter\n1.0\n");
    let part = file.get_part(0).unwrap();

    assert_eq!(part.characteristic_count(), 1);
    let characteristic = part.get_characteristic(0).unwrap();
    assert_eq!(characteristic.get_data("K2001"), Some("42"));
    assert_eq!(characteristic.get_data("K2002"), Some("Diameter"));
}

#[test]
fn test_uninterpreted_keys_are_preserved_verbatim() {
    let content = "K1001\tHousing\nK0100\t3\nK2002\tDiameter\nK8500\t120\n1.0\n";
    let file = parse_dfq(content);
    let part = file.get_part(0).unwrap();

    // Before any characteristic is open, unknown keys land on the part
    assert_eq!(part.get_data("K0100"), Some("3"));

    // Afterwards they belong to the current characteristic
    let characteristic = part.get_characteristic(0).unwrap();
    assert_eq!(characteristic.get_data("K8500"), Some("120"));
}

#[test]
fn test_idempotent_parsing() {
    let content = create_timestamped_dfq();
    let first = parse_dfq(&content);
    let second = parse_dfq(&content);

    assert_eq!(first, second);
}

#[test]
fn test_parse_stats() {
    let result = DfqParser::new().parse("K1001\tHousing\nK2002\tA\n1.0 N/A 2.0\n\n");
    let stats = result.stats;

    assert_eq!(stats.total_lines, 4);
    assert_eq!(stats.key_lines, 2);
    assert_eq!(stats.payload_lines, 1);
    assert_eq!(stats.blank_lines, 1);
    assert_eq!(stats.measurements_parsed, 2);
    assert_eq!(stats.tokens_discarded, 1);
    assert!((stats.token_yield() - 66.66666666666667).abs() < 1e-9);
}

#[test]
fn test_crlf_line_endings() {
    let file = parse_dfq("K1001\tHousing\r\nK2002\tDiameter\r\n1.0\r\n");
    assert_eq!(file.get_part(0).unwrap().get_data("K1001"), Some("Housing"));
}

#[test]
fn test_decode_lossy_latin1_fallback() {
    // "Länge" encoded as Latin-1: 0xE4 is not valid UTF-8
    let bytes = b"K2002\tL\xe4nge\n1.0\n";
    let content = decode_lossy(bytes);
    let file = parse_dfq(&content);

    assert_eq!(
        file.get_part(0).unwrap().get_characteristic(0).unwrap().get_data("K2002"),
        Some("Länge")
    );
}

#[test]
fn test_read_dfq_file_roundtrip() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", create_test_dfq()).unwrap();

    let file = read_dfq_file(temp_file.path()).unwrap();
    assert_eq!(file.part_count(), 1);
    assert_eq!(file.total_measurement_count(), 6);
}

#[test]
fn test_missing_file_is_fatal() {
    let result = read_dfq_file("/nonexistent/data.dfq");
    assert!(matches!(result, Err(DfqError::FileNotFound { .. })));
}
