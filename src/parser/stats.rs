//! Parsing statistics for DFQ processing.

/// Parsing result with the reconstructed hierarchy and basic statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Fully populated part/characteristic/measurement hierarchy
    pub file: crate::models::ParsedFile,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of logical lines in the input
    pub total_lines: usize,

    /// Lines recognized as key records
    pub key_lines: usize,

    /// Lines treated as measurement payload
    pub payload_lines: usize,

    /// Blank lines skipped
    pub blank_lines: usize,

    /// Measurements successfully parsed from payload tokens
    pub measurements_parsed: usize,

    /// Payload tokens discarded as malformed or placeholder values
    pub tokens_discarded: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of payload tokens that produced measurements, as a percentage
    pub fn token_yield(&self) -> f64 {
        let seen = self.measurements_parsed + self.tokens_discarded;
        if seen == 0 {
            0.0
        } else {
            (self.measurements_parsed as f64 / seen as f64) * 100.0
        }
    }
}
