//! Error types for dataset loading.
//!
//! Aggregations never fail: insufficient data surfaces as empty results or
//! `None` values, not as errors. The only fallible boundary is reading the
//! input table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
