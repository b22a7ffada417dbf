//! Key-record line recognition and field splitting.
//!
//! A key-record line carries an AQDEF key code ("K" plus four digits, with an
//! optional "/n" column suffix) followed by its value. Fields are separated by
//! a tab or the DC4 control character; a single space is accepted as a lenient
//! fallback for hand-edited files.

use crate::constants::{KEY_CODE_LEN, VALUE_SEPARATOR};

/// One parsed key-record line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyRecord<'a> {
    /// Normalized key code, e.g. "K2002" (column suffix stripped)
    pub code: &'a str,

    /// Column index from a "K2002/1" style suffix, if present
    pub column: Option<u32>,

    /// Value field. May be empty for bare key lines.
    pub value: &'a str,
}

/// Try to interpret a line as a key record. Returns `None` for payload lines.
pub(crate) fn parse_key_record(line: &str) -> Option<KeyRecord<'_>> {
    let delimiter = |c: char| c == '\t' || c == VALUE_SEPARATOR || c == ' ';

    let (token, rest) = match line.find(delimiter) {
        Some(pos) => (&line[..pos], &line[pos + 1..]),
        None => (line, ""),
    };

    let (code, column) = split_key_token(token)?;

    // The value is the second field; anything after a further hard delimiter
    // belongs to trailing fields and is not part of the value.
    let value = match rest.find(|c: char| c == '\t' || c == VALUE_SEPARATOR) {
        Some(pos) => &rest[..pos],
        None => rest,
    };

    Some(KeyRecord {
        code,
        column,
        value: value.trim(),
    })
}

/// Split a key token into its code and optional column suffix.
/// Rejects anything that is not "K" followed by exactly four digits.
fn split_key_token(token: &str) -> Option<(&str, Option<u32>)> {
    let (code, suffix) = match token.find('/') {
        Some(pos) => (&token[..pos], Some(&token[pos + 1..])),
        None => (token, None),
    };

    if code.len() != KEY_CODE_LEN
        || !code.starts_with('K')
        || !code[1..].bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let column = match suffix {
        Some(s) if !s.is_empty() => Some(s.parse().ok()?),
        _ => None,
    };

    Some((code, column))
}
