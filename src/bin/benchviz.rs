#![forbid(unsafe_code)]

use std::path::PathBuf;

use benchviz::{driver, logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Renders benchmark comparison charts from timing CSVs"
)]
struct Args {
    /// Directory containing benchmark CSV files. Defaults to `benchmark`
    /// next to the executable.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory rendered charts are written into. Defaults to
    /// `benchmark_plots` beside the data directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Tracing filter directive, e.g. `info` or `benchviz=debug`.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = logging::init_logging(&args.log_level) {
        eprintln!("Error: {err}");
    }

    let data_dir = args.data_dir.unwrap_or_else(driver::default_data_dir);
    let out_dir = args
        .out_dir
        .unwrap_or_else(|| driver::default_out_dir(&data_dir));

    // Failures are reported with the attempted directory and the process
    // still exits cleanly; nothing is retried.
    if let Err(err) = driver::run(&data_dir, &out_dir) {
        eprintln!("Error: {err}");
        eprintln!(
            "Attempted to access benchmark directory: {}",
            data_dir.display()
        );
    }
}
