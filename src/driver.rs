//! Interactive flow: list input files, prompt for a selection, then load,
//! render, and report the saved chart.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::chart::{self, ChartOptions};
use crate::error::Result;
use crate::loader;

/// Outcome of parsing one line of selection input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// "0": leave without rendering anything.
    Cancel,
    /// Zero-based index of the chosen file.
    Pick(usize),
    /// Non-numeric or out-of-range input; the caller re-prompts.
    Invalid,
}

/// Classifies a line of user input against a list of `count` files numbered
/// from 1.
pub fn parse_selection(line: &str, count: usize) -> Selection {
    match line.trim().parse::<usize>() {
        Ok(0) => Selection::Cancel,
        Ok(n) if n <= count => Selection::Pick(n - 1),
        _ => Selection::Invalid,
    }
}

/// CSV files in `dir`, sorted by path for stable numbering. A missing
/// directory yields an empty list rather than an error, so the caller can
/// report "nothing found" cleanly.
pub fn list_data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Default input directory: `benchmark` next to the executable, falling
/// back to the working directory when the executable path is unavailable.
pub fn default_data_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("benchmark")
}

/// Default output directory: `benchmark_plots` beside the data directory.
pub fn default_out_dir(data_dir: &Path) -> PathBuf {
    data_dir
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("benchmark_plots")
}

/// Prompts until the user cancels or picks a valid file number. Returns
/// `None` on cancel or end of input.
pub fn prompt_selection(count: usize, input: &mut impl BufRead) -> Result<Option<usize>> {
    loop {
        print!("\nSelect a file number to visualize (or 0 to exit): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed; treat like cancel
            return Ok(None);
        }
        match parse_selection(&line, count) {
            Selection::Cancel => return Ok(None),
            Selection::Pick(index) => return Ok(Some(index)),
            Selection::Invalid => println!("Invalid selection. Please try again."),
        }
    }
}

/// Runs the full list/select/load/render sequence. The output directory is
/// only created once a file has actually been selected.
pub fn run(data_dir: &Path, out_dir: &Path) -> Result<()> {
    let files = list_data_files(data_dir)?;
    if files.is_empty() {
        println!("No benchmark files found in {}", data_dir.display());
        return Ok(());
    }

    println!("\nAvailable benchmark files:");
    for (number, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        println!("{}. {}", number + 1, name);
    }

    let stdin = io::stdin();
    let Some(index) = prompt_selection(files.len(), &mut stdin.lock())? else {
        debug!("selection cancelled");
        return Ok(());
    };

    let selected = &files[index];
    info!(file = %selected.display(), "loading benchmark data");
    let table = loader::load_table(selected)?;
    info!(
        sizes = table.sizes().len(),
        algorithms = table.algorithms().len(),
        "aggregated benchmark table"
    );

    fs::create_dir_all(out_dir)?;
    let options = ChartOptions::new().with_out_dir(out_dir);
    if let Some(path) = chart::save_comparison(&table, &options)? {
        info!(chart = %path.display(), "comparison chart saved");
    }
    println!("\nPlots have been saved to {}", out_dir.display());
    Ok(())
}
