//! Loads raw benchmark timings and reshapes them into a size-by-algorithm
//! table of mean durations.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{BenchVizError, Result};

/// Required columns in the input header row. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["algorithm", "size", "time_ms"];

/// One measured trial as it appears in the input file. Multiple records may
/// share the same (algorithm, size) pair, representing repeated trials.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawRecord {
    /// Name of the benchmarked routine, one per chart series.
    pub algorithm: String,
    /// Input-size magnitude (the x-axis variable).
    pub size: u64,
    /// Measured duration in milliseconds.
    pub time_ms: f64,
}

/// Aggregated measurements: rows keyed by unique sizes ascending, columns by
/// algorithm name, cell = mean `time_ms` over all matching trials. Absent
/// (algorithm, size) combinations are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    sizes: Vec<u64>,
    algorithms: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl BenchmarkTable {
    /// Unique input sizes, strictly ascending.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Distinct algorithm names, sorted.
    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// Mean time for the cell at `(size index, algorithm index)`.
    pub fn value(&self, size_idx: usize, algo_idx: usize) -> Option<f64> {
        self.cells
            .get(size_idx)
            .and_then(|row| row.get(algo_idx))
            .copied()
            .flatten()
    }

    /// `(size, mean time)` pairs for one algorithm column, ascending by
    /// size, with absent cells skipped.
    pub fn series(&self, algo_idx: usize) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.sizes
            .iter()
            .enumerate()
            .filter_map(move |(row, &size)| self.value(row, algo_idx).map(|t| (size, t)))
    }

    /// Minimum and maximum mean time over all defined cells.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for value in self.cells.iter().flatten().flatten() {
            bounds = match bounds {
                Some((lo, hi)) => Some((lo.min(*value), hi.max(*value))),
                None => Some((*value, *value)),
            };
        }
        bounds
    }
}

/// Reads all trial records from a CSV file with a header row.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(BenchVizError::MissingColumn(required));
        }
    }
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    debug!(count = records.len(), "loaded benchmark records");
    Ok(records)
}

/// Groups records by (algorithm, size) and averages their times into a
/// [`BenchmarkTable`]. Row and column order do not depend on input order.
pub fn aggregate(records: &[RawRecord]) -> Result<BenchmarkTable> {
    if records.is_empty() {
        return Err(BenchVizError::EmptyTable);
    }

    let mut groups: BTreeMap<(&str, u64), (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups
            .entry((record.algorithm.as_str(), record.size))
            .or_insert((0.0, 0));
        entry.0 += record.time_ms;
        entry.1 += 1;
    }

    let mut algorithms: Vec<String> = groups.keys().map(|(a, _)| (*a).to_owned()).collect();
    algorithms.sort();
    algorithms.dedup();
    let mut sizes: Vec<u64> = groups.keys().map(|&(_, s)| s).collect();
    sizes.sort_unstable();
    sizes.dedup();

    let algo_index: BTreeMap<&str, usize> = algorithms
        .iter()
        .enumerate()
        .map(|(i, a)| (a.as_str(), i))
        .collect();
    let size_index: BTreeMap<u64, usize> = sizes.iter().enumerate().map(|(i, s)| (*s, i)).collect();

    let mut cells = vec![vec![None; algorithms.len()]; sizes.len()];
    for ((algorithm, size), (sum, count)) in &groups {
        if let (Some(&row), Some(&col)) = (size_index.get(size), algo_index.get(algorithm)) {
            cells[row][col] = Some(sum / *count as f64);
        }
    }

    Ok(BenchmarkTable {
        sizes,
        algorithms,
        cells,
    })
}

/// Loads a file and aggregates it in one step.
pub fn load_table(path: &Path) -> Result<BenchmarkTable> {
    let records = load_records(path)?;
    aggregate(&records)
}
