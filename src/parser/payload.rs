//! Measurement payload tokenization.
//!
//! Any line that is not a key record is raw measurement payload for the most
//! recently opened characteristic. Known control-character delimiters are
//! normalized to whitespace, each token is tried as a number, and everything
//! that fails to parse is silently discarded. This lossy behaviour is a
//! deliberate survivability choice for noisy real-world files.

use chrono::NaiveDateTime;

use super::timestamp::parse_dfq_datetime;
use crate::constants::VALUE_SEPARATOR;

/// Result of tokenizing one payload line
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PayloadLine {
    /// Successfully parsed numeric values, in token order
    pub values: Vec<f64>,

    /// Timestamp found among the tokens, applied to this line's values
    pub timestamp: Option<NaiveDateTime>,

    /// Tokens that were neither numeric nor a recognized date/time
    pub tokens_discarded: usize,
}

/// Tokenize a payload line into numeric values and an optional line timestamp
pub(crate) fn tokenize_payload(line: &str) -> PayloadLine {
    let normalized: String = line
        .chars()
        .map(|c| if c == VALUE_SEPARATOR || c == '\t' { ' ' } else { c })
        .collect();

    let mut payload = PayloadLine::default();

    for token in normalized.split_whitespace() {
        if let Ok(value) = token.parse::<f64>() {
            // Placeholder tokens like "NaN" would poison downstream statistics
            if value.is_finite() {
                payload.values.push(value);
            } else {
                payload.tokens_discarded += 1;
            }
        } else if let Some(timestamp) = parse_dfq_datetime(token) {
            if payload.timestamp.is_none() {
                payload.timestamp = Some(timestamp);
            } else {
                payload.tokens_discarded += 1;
            }
        } else {
            payload.tokens_discarded += 1;
        }
    }

    payload
}
