//! Error handling for DFQ processing operations.
//!
//! The parser itself is deliberately permissive and never fails on malformed
//! content; only unreadable input and table construction surface as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DfqError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("DFQ file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("part index {index} out of range: file has {count} part(s)")]
    PartIndexOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, DfqError>;
