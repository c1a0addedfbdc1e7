//! Benchmark comparison chart tool.
//!
//! Reads benchmark timing results from a CSV file, averages repeated trials
//! per (algorithm, size) pair, and renders side-by-side linear and
//! logarithmic comparison charts to a timestamped PNG.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chart;
pub mod driver;
pub mod error;
pub mod loader;
pub mod logging;

pub use error::{BenchVizError, Result};
pub use loader::{load_table, BenchmarkTable, RawRecord};
