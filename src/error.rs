//! Error taxonomy shared by the loader, chart renderer, and driver.

use std::io;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchVizError>;

/// Errors produced while loading benchmark data or rendering charts.
#[derive(Debug, Error)]
pub enum BenchVizError {
    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The input file could not be read or parsed as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The header row lacks one of the required columns.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    /// The input contained no usable rows.
    #[error("no benchmark records to aggregate")]
    EmptyTable,
    /// Chart backend or drawing failure, stringified since plotters errors
    /// are generic over the backend.
    #[error("chart rendering failed: {0}")]
    Chart(String),
    /// A caller-supplied value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
