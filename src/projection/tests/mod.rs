//! Test fixtures shared across the projection test modules.

mod wide_tests;

use polars::prelude::*;

use crate::models::ParsedFile;
use crate::parser::parse_dfq;

/// Two characteristics with partially overlapping timestamps
pub fn timestamped_file() -> ParsedFile {
    parse_dfq(
        "K1001\u{14}Shaft\n\
         K2002\u{14}Runout\n\
         0.10\u{14}01.02.2024/08:30:00\n\
         0.12\u{14}01.02.2024/09:30:00\n\
         K2002\u{14}Twist\n\
         0.20\u{14}01.02.2024/08:30:00\n\
         0.22\u{14}01.02.2024/10:30:00\n",
    )
}

/// Extract a float column as a vector of options
pub fn float_column(table: &DataFrame, name: &str) -> Vec<Option<f64>> {
    table
        .column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

/// Extract the timestamp column as epoch milliseconds
pub fn timestamp_column_ms(table: &DataFrame, name: &str) -> Vec<Option<i64>> {
    table
        .column(name)
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}
