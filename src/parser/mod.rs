//! DFQ tokenizer/parser.
//!
//! Converts raw Q-DAS AQDEF transfer-format text into the part /
//! characteristic / measurement hierarchy. The parser is deliberately
//! permissive: malformed lines and tokens are skipped, never fatal, so that
//! slightly corrupt real-world files still yield usable data. The only hard
//! failure is input that cannot be read at all.
//!
//! ## Usage
//!
//! ```rust
//! use dfq_reader::parser::parse_dfq;
//!
//! let file = parse_dfq("K1001\tHousing\nK2002\tDiameter\n12.01\n12.02\n");
//! assert_eq!(file.part_count(), 1);
//! ```

pub(crate) mod payload;
pub(crate) mod record;
mod stats;
pub(crate) mod timestamp;

#[cfg(test)]
mod tests;

pub use stats::{ParseResult, ParseStats};

use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

use self::payload::{tokenize_payload, PayloadLine};
use self::record::{parse_key_record, KeyRecord};
use self::timestamp::assign_fallback_timestamps;
use crate::constants::{
    CHARACTERISTIC_KEY_PREFIX, KEY_CHARACTERISTIC_NAME, KEY_PART_NAME, PART_KEY_PREFIX,
};
use crate::error::{DfqError, Result};
use crate::models::{Characteristic, Measurement, ParsedFile, Part};

/// Read and parse a DFQ file from disk.
///
/// Byte sequences that are not valid UTF-8 are decoded leniently; a missing
/// or unreadable file is the only fatal error.
pub fn read_dfq_file(path: impl AsRef<Path>) -> Result<ParsedFile> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DfqError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DfqError::Io(e)
        }
    })?;

    let content = decode_lossy(&bytes);
    let result = DfqParser::new().parse(&content);
    debug!(
        "parsed {}: {} part(s), {} measurement(s)",
        path.display(),
        result.file.part_count(),
        result.file.total_measurement_count()
    );

    Ok(result.file)
}

/// Parse DFQ text that has already been read into memory
pub fn parse_dfq(content: &str) -> ParsedFile {
    DfqParser::new().parse(content).file
}

/// Decode raw file bytes leniently.
///
/// DFQ files are 8-bit ASCII transfer files that are frequently Latin-1
/// encoded; invalid UTF-8 input falls back to a byte-to-char mapping so a
/// stray umlaut never aborts the parse.
pub(crate) fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    }
}

/// Permissive line-oriented parser for AQDEF transfer files
#[derive(Debug, Default)]
pub struct DfqParser;

impl DfqParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the full text content of one DFQ file.
    ///
    /// Never fails: structurally empty input yields a file with zero parts,
    /// and malformed individual lines are skipped.
    pub fn parse(&self, content: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut state = ParserState::default();

        for raw_line in content.lines() {
            stats.total_lines += 1;
            let line = raw_line.trim_end_matches('\r').trim();

            if line.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            if let Some(record) = parse_key_record(line) {
                stats.key_lines += 1;
                state.apply_key_record(record);
            } else {
                stats.payload_lines += 1;
                let payload = tokenize_payload(line);
                stats.measurements_parsed += payload.values.len();
                stats.tokens_discarded += payload.tokens_discarded;
                state.apply_payload(payload);
            }
        }

        let mut file = state.finish();
        assign_fallback_timestamps(&mut file);

        debug!(
            "parse complete: {} line(s), {} key record(s), {} measurement(s), {} token(s) discarded",
            stats.total_lines, stats.key_lines, stats.measurements_parsed, stats.tokens_discarded
        );

        ParseResult { file, stats }
    }
}

/// Mutable parse state: the closed parts plus the currently open section.
///
/// The hierarchy is only committed as a whole in [`ParserState::finish`], so
/// callers never observe a half-built part.
#[derive(Debug, Default)]
struct ParserState {
    parts: Vec<Part>,
    current: Option<Part>,
}

impl ParserState {
    fn apply_key_record(&mut self, record: KeyRecord<'_>) {
        if let Some(column) = record.column {
            // Column-indexed records are folded onto their base key
            debug!("ignoring column suffix /{} on {}", column, record.code);
        }

        if record.code.starts_with(PART_KEY_PREFIX) {
            // A second K1001 marks a new top-level part section
            if record.code == KEY_PART_NAME {
                let part_open = self
                    .current
                    .as_ref()
                    .is_some_and(|p| p.get_data(KEY_PART_NAME).is_some());
                if part_open {
                    if let Some(part) = self.current.take() {
                        self.parts.push(part);
                    }
                }
            }
            self.current_part().insert_data(record.code, record.value);
        } else if record.code.starts_with(CHARACTERISTIC_KEY_PREFIX) {
            self.apply_characteristic_record(record);
        } else {
            // Uninterpreted key ranges are preserved verbatim on the innermost
            // open record
            let part = self.current_part();
            match part.last_characteristic_mut() {
                Some(characteristic) => characteristic.insert_data(record.code, record.value),
                None => part.insert_data(record.code, record.value),
            }
        }
    }

    fn apply_characteristic_record(&mut self, record: KeyRecord<'_>) {
        let part = self.current_part();

        if record.code == KEY_CHARACTERISTIC_NAME {
            // K2002 names the current characteristic when it was opened by
            // another K2xxx key and has no data yet; otherwise it opens a new
            // one and resets the cursor.
            let adopts_name = part
                .last_characteristic_mut()
                .is_some_and(|c| {
                    c.get_data(KEY_CHARACTERISTIC_NAME).is_none() && c.measurement_count() == 0
                });

            if !adopts_name {
                part.push_characteristic(Characteristic::new());
            }
        } else if part.last_characteristic_mut().is_none() {
            part.push_characteristic(Characteristic::new());
        }

        if let Some(characteristic) = part.last_characteristic_mut() {
            characteristic.insert_data(record.code, record.value);
        }
    }

    fn apply_payload(&mut self, payload: PayloadLine) {
        // Any non-blank content opens a part, even when no K1001 was seen
        let part = self.current_part();

        if payload.values.is_empty() {
            return;
        }

        if part.last_characteristic_mut().is_none() {
            part.push_characteristic(Characteristic::new());
        }

        if let Some(characteristic) = part.last_characteristic_mut() {
            for value in payload.values {
                characteristic.push_measurement(Measurement::new(value, payload.timestamp));
            }
        }
    }

    fn current_part(&mut self) -> &mut Part {
        self.current.get_or_insert_with(Part::new)
    }

    fn finish(mut self) -> ParsedFile {
        if let Some(part) = self.current.take() {
            self.parts.push(part);
        }
        ParsedFile::from_parts(self.parts)
    }
}
