//! Tabular projections of the parsed hierarchy.
//!
//! Flattens parts and characteristics into Polars DataFrames for statistics,
//! charting and export:
//! - [`wide`] - grouping/alignment engine, one column per characteristic
//! - [`long`] - single-characteristic (timestamp, value) table
//! - [`naming`] - display-name resolution and column de-duplication

pub mod long;
pub mod naming;
pub mod wide;

#[cfg(test)]
mod tests;

pub use long::build_characteristic_table;
pub use naming::{characteristic_display_name, part_display_name, unique_column_names};
pub use wide::{build_wide_table, Alignment};
