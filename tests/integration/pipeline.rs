#![allow(missing_docs)]

use std::fs;

use benchviz::chart::{save_comparison, ChartOptions};
use benchviz::{load_table, Result};
use tempfile::tempdir;

const FIXTURE: &str = "\
algorithm,size,time_ms
merge_sort,1000,12.5
merge_sort,1000,13.5
merge_sort,10000,160.0
bubble_sort,1000,90.0
bubble_sort,10000,9000.0
bubble_sort,10000,11000.0
quick_sort,1000,10.0
quick_sort,10000,140.0
";

#[test]
fn csv_fixture_aggregates_into_sorted_table() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("sorting.csv");
    fs::write(&input, FIXTURE)?;

    let table = load_table(&input)?;
    assert_eq!(table.sizes(), &[1000, 10000], "sizes ascend");
    assert_eq!(
        table.algorithms(),
        &[
            "bubble_sort".to_owned(),
            "merge_sort".to_owned(),
            "quick_sort".to_owned(),
        ],
        "columns sorted by algorithm name"
    );
    assert_eq!(
        table.value(0, 1),
        Some(13.0),
        "merge_sort@1000 averages 12.5 and 13.5"
    );
    assert_eq!(
        table.value(1, 0),
        Some(10000.0),
        "bubble_sort@10000 averages 9000 and 11000"
    );
    Ok(())
}

#[test]
fn chart_is_saved_with_timestamped_name() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("sorting.csv");
    fs::write(&input, FIXTURE)?;
    let out_dir = dir.path().join("plots");
    fs::create_dir(&out_dir)?;

    let table = load_table(&input)?;
    let options = ChartOptions::new()
        .with_size((1200, 480))
        .with_out_dir(&out_dir);
    let saved = save_comparison(&table, &options)?;

    let path = saved.expect("a path is returned when an output dir is set");
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name");
    assert!(
        name.starts_with("benchmark_comparison_") && name.ends_with(".png"),
        "unexpected chart name: {name}"
    );
    let metadata = fs::metadata(&path)?;
    assert!(metadata.len() > 0, "chart file is non-empty");
    Ok(())
}

#[test]
fn loading_a_missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.csv");
    assert!(load_table(&missing).is_err(), "missing file must error");
}
