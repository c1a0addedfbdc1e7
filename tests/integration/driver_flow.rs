#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::tempdir;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const FIXTURE: &str = "\
algorithm,size,time_ms
linear_scan,100,0.4
linear_scan,1000,4.2
binary_search,100,0.05
binary_search,1000,0.08
";

fn benchviz(data_dir: &Path, out_dir: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("benchviz")?;
    cmd.arg("--data-dir")
        .arg(data_dir)
        .arg("--out-dir")
        .arg(out_dir)
        .arg("--log-level")
        .arg("error");
    Ok(cmd)
}

#[test]
fn no_input_files_reports_and_exits_clean() -> Result<()> {
    let dir = tempdir()?;
    let data_dir = dir.path().join("benchmark");
    let out_dir = dir.path().join("benchmark_plots");

    let output = benchviz(&data_dir, &out_dir)?.output()?;
    assert!(output.status.success(), "clean exit with no input files");
    let stdout = String::from_utf8(output.stdout)?;
    assert!(
        stdout.contains("No benchmark files found"),
        "unexpected stdout: {stdout}"
    );
    assert!(!out_dir.exists(), "no output directory is created");
    Ok(())
}

#[test]
fn selecting_zero_renders_nothing() -> Result<()> {
    let dir = tempdir()?;
    let data_dir = dir.path().join("benchmark");
    fs::create_dir(&data_dir)?;
    fs::write(data_dir.join("search.csv"), FIXTURE)?;
    let out_dir = dir.path().join("benchmark_plots");

    let output = benchviz(&data_dir, &out_dir)?.write_stdin("0\n").output()?;
    assert!(output.status.success());
    assert!(!out_dir.exists(), "cancel must not create the output dir");
    Ok(())
}

#[test]
fn invalid_selections_reprompt_before_rendering() -> Result<()> {
    let dir = tempdir()?;
    let data_dir = dir.path().join("benchmark");
    fs::create_dir(&data_dir)?;
    fs::write(data_dir.join("search.csv"), FIXTURE)?;
    let out_dir = dir.path().join("benchmark_plots");

    let output = benchviz(&data_dir, &out_dir)?
        .write_stdin("abc\n7\n1\n")
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(
        stdout.matches("Invalid selection").count() >= 2,
        "both bad inputs re-prompt: {stdout}"
    );
    assert!(
        stdout.contains("Plots have been saved to"),
        "final pick renders: {stdout}"
    );

    let charts: Vec<_> = fs::read_dir(&out_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("benchmark_comparison_") && n.ends_with(".png"))
        .collect();
    assert_eq!(charts.len(), 1, "exactly one chart written: {charts:?}");
    Ok(())
}

#[test]
fn pipeline_failure_is_reported_with_the_data_dir() -> Result<()> {
    let dir = tempdir()?;
    let data_dir = dir.path().join("benchmark");
    fs::create_dir(&data_dir)?;
    fs::write(data_dir.join("broken.csv"), "wrong,header\n1,2\n")?;
    let out_dir = dir.path().join("benchmark_plots");

    let output = benchviz(&data_dir, &out_dir)?.write_stdin("1\n").output()?;
    assert!(output.status.success(), "errors still exit with status 0");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("Attempted to access benchmark directory"),
        "error context names the directory: {stderr}"
    );
    assert!(
        stderr.contains("missing required column"),
        "cause is printed: {stderr}"
    );
    Ok(())
}
