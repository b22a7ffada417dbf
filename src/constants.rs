//! Application constants for the DFQ reader.
//!
//! Key codes, field delimiters, datetime formats and column names used
//! throughout the library.

// =============================================================================
// AQDEF Key Codes
// =============================================================================

/// Part name / identity key. A repeated K1001 opens a new part section.
pub const KEY_PART_NAME: &str = "K1001";

/// Part identity keys reported in file summaries (name, number, variant, drawing)
pub const PART_IDENTITY_KEYS: &[&str] = &["K1001", "K1002", "K1003", "K1004"];

/// Characteristic name key. Each occurrence opens a new characteristic.
pub const KEY_CHARACTERISTIC_NAME: &str = "K2002";

/// Key code prefix for part-level records
pub const PART_KEY_PREFIX: &str = "K1";

/// Key code prefix for characteristic-level records
pub const CHARACTERISTIC_KEY_PREFIX: &str = "K2";

/// Length of a bare AQDEF key code ("K" plus four digits)
pub const KEY_CODE_LEN: usize = 5;

// =============================================================================
// Field Delimiters
// =============================================================================

/// DC4 control character used as the field separator in the Q-DAS convention
pub const VALUE_SEPARATOR: char = '\u{14}';

// =============================================================================
// Date/Time Formats
// =============================================================================

/// Datetime formats observed in DFQ measurement payloads and date-type keys
pub const DFQ_DATETIME_FORMATS: &[&str] = &[
    "%d.%m.%Y/%H:%M:%S",
    "%d.%m.%y/%H:%M:%S",
    "%d.%m.%Y/%H:%M",
    "%d.%m.%y/%H:%M",
];

/// Date-only formats (midnight is assumed for the time component)
pub const DFQ_DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%d.%m.%y"];

// =============================================================================
// Table Column Names
// =============================================================================

/// Column names used by the tabular projections
pub mod columns {
    /// Timestamp axis of timestamp-aligned wide tables and long tables
    pub const TIMESTAMP: &str = "timestamp";

    /// Row axis of positionally aligned wide tables
    pub const INDEX: &str = "index";

    /// Measurement value column of long tables
    pub const VALUE: &str = "value";

    /// Columns of the summary statistics table
    pub const CHARACTERISTIC: &str = "characteristic";
    pub const COUNT: &str = "count";
    pub const MEAN: &str = "mean";
    pub const STD: &str = "std";
    pub const MIN: &str = "min";
    pub const MEDIAN: &str = "median";
    pub const MAX: &str = "max";

    /// Columns of the metadata table produced for detailed exports
    pub const RECORD: &str = "record";
    pub const KEY: &str = "key";
}

// =============================================================================
// Export Constants
// =============================================================================

/// Sheet names used by the export orchestration
pub const SHEET_MEASUREMENTS: &str = "Measurements";
pub const SHEET_STATISTICS: &str = "Statistics";
pub const SHEET_METADATA: &str = "Metadata";

/// Maximum sheet name length accepted by spreadsheet applications
pub const SHEET_NAME_MAX_LEN: usize = 31;

/// Characters that are not allowed in spreadsheet sheet names
pub const SHEET_NAME_FORBIDDEN: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];
