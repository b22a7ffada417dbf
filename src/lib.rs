//! DFQ Reader Library
//!
//! A Rust library for reading Q-DAS AQDEF ("DFQ") quality-measurement
//! transfer files and projecting them into tabular form for review,
//! statistics and spreadsheet export.
//!
//! This library provides tools for:
//! - Parsing DFQ key-value transfer files into a part / characteristic /
//!   measurement hierarchy, tolerating malformed lines and lenient encodings
//! - Aligning measurements from multiple characteristics into a wide table,
//!   by timestamp or by position
//! - Projecting single characteristics into long-form (timestamp, value)
//!   tables
//! - Summary statistics, nested file reports and data-quality warnings
//! - Orchestrating sheet-per-table spreadsheet exports behind a writer trait
//!
//! Only a documented subset of key codes is interpreted semantically (K1xxx
//! part identity, K2002 characteristic names, date-typed K2xxx values); all
//! other keys are preserved verbatim in the record mappings.

pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod projection;
pub mod report;
pub mod stats;
pub mod validation;

// Re-export commonly used types
pub use error::{DfqError, Result};
pub use export::{export_part, ExportMode, SheetWriter};
pub use models::{Characteristic, KeyValueRecord, Measurement, ParsedFile, Part};
pub use parser::{parse_dfq, read_dfq_file, DfqParser, ParseResult, ParseStats};
pub use projection::{
    build_characteristic_table, build_wide_table, characteristic_display_name, part_display_name,
    Alignment,
};
pub use report::{build_report, CharacteristicReport, FileReport, PartReport};
pub use stats::{summarize_part, summary_table, ColumnSummary};
pub use validation::validate_parsed_file;
