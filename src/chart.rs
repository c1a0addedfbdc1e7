//! Renders side-by-side linear and logarithmic comparison charts from an
//! aggregated benchmark table.

use std::fmt::Display;
use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::coord::{CoordTranslate, Shift};
use plotters::prelude::*;
use tracing::debug;

use crate::error::{BenchVizError, Result};
use crate::loader::BenchmarkTable;

/// Point shapes cycled across series when algorithms outnumber the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle.
    Circle,
    /// Filled square.
    Square,
    /// Filled triangle.
    Triangle,
    /// Stroked cross.
    Cross,
}

const MARKERS: [Marker; 4] = [
    Marker::Circle,
    Marker::Square,
    Marker::Triangle,
    Marker::Cross,
];

impl Marker {
    /// Marker for the n-th series, wrapping around the palette.
    pub fn for_index(index: usize) -> Self {
        MARKERS[index % MARKERS.len()]
    }
}

/// Hue evenly spaced across the spectrum for the n-th of `total` series.
/// The hue range stops short of a full circle so the last series does not
/// collapse back onto the first.
pub fn series_color(index: usize, total: usize) -> HSLColor {
    let denom = total.max(1) as f64;
    HSLColor(0.83 * index as f64 / denom, 0.8, 0.45)
}

/// Linear y-range: data span plus 10% padding above and below, with the
/// lower bound clamped at zero.
pub fn padded_linear_range(min: f64, max: f64) -> Range<f64> {
    let padding = (max - min) * 0.1;
    let lo = (min - padding).max(0.0);
    let mut hi = max + padding;
    if hi <= lo {
        hi = lo + 1.0;
    }
    lo..hi
}

/// Log y-range: clamped to a small positive epsilon since a log axis cannot
/// include zero, with headroom above the maximum.
fn log_range(min: f64, max: f64) -> Range<f64> {
    let lo = (min * 0.8).max(1e-3);
    let hi = (max * 1.5).max(lo * 10.0);
    lo..hi
}

fn x_range(sizes: &[u64]) -> Range<f64> {
    let min = sizes.first().copied().unwrap_or(0) as f64;
    let max = sizes.last().copied().unwrap_or(0) as f64;
    if max > min {
        min..max
    } else {
        // a single size still renders; widen the degenerate range
        (min - 1.0)..(max + 1.0)
    }
}

fn format_thousands(value: f64) -> String {
    let n = value.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn chart_err<E: Display>(err: E) -> BenchVizError {
    BenchVizError::Chart(err.to_string())
}

/// Chart title, pixel dimensions, and optional save location.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    title: String,
    size: (u32, u32),
    out_dir: Option<PathBuf>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Benchmark Comparison".to_owned(),
            size: (3000, 1200),
            out_dir: None,
        }
    }
}

impl ChartOptions {
    /// Options with the default title and a high-resolution canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the chart title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Overrides the canvas size in pixels.
    #[must_use]
    pub fn with_size(mut self, size: (u32, u32)) -> Self {
        self.size = size;
        self
    }

    /// Directory the timestamped PNG is written into.
    #[must_use]
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }
}

/// Draws the two comparison panels onto any plotters drawing area.
pub fn render<DB: DrawingBackend>(
    table: &BenchmarkTable,
    area: &DrawingArea<DB, Shift>,
    title: &str,
) -> Result<()> {
    area.fill(&WHITE).map_err(chart_err)?;
    let titled = area.titled(title, ("sans-serif", 36)).map_err(chart_err)?;
    let panels = titled.split_evenly((1, 2));

    let (min_time, max_time) = table.time_bounds().ok_or(BenchVizError::EmptyTable)?;
    let sizes = x_range(table.sizes());

    let mut linear = ChartBuilder::on(&panels[0])
        .caption("Linear Scale", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(sizes.clone(), padded_linear_range(min_time, max_time))
        .map_err(chart_err)?;
    linear
        .configure_mesh()
        .x_desc("n")
        .y_desc("Time in milliseconds")
        .y_label_formatter(&|v| format_thousands(*v))
        .light_line_style(BLACK.mix(0.08))
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(chart_err)?;
    draw_all_series(&mut linear, table)?;
    linear
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(chart_err)?;

    let mut log = ChartBuilder::on(&panels[1])
        .caption("Logarithmic Scale", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(sizes, log_range(min_time, max_time).log_scale())
        .map_err(chart_err)?;
    log.configure_mesh()
        .x_desc("n")
        .y_desc("Time in milliseconds (log scale)")
        .light_line_style(BLACK.mix(0.15))
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(chart_err)?;
    draw_all_series(&mut log, table)?;
    log.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(chart_err)?;

    Ok(())
}

fn draw_all_series<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    table: &BenchmarkTable,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let total = table.algorithms().len();
    for (index, name) in table.algorithms().iter().enumerate() {
        let points: Vec<(f64, f64)> = table
            .series(index)
            .map(|(size, time)| (size as f64, time))
            .collect();
        if points.is_empty() {
            continue;
        }
        let color = series_color(index, total);
        let marker = Marker::for_index(index);
        draw_algorithm_series(chart, &points, name, color, marker)?;
    }
    Ok(())
}

fn draw_algorithm_series<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    points: &[(f64, f64)],
    label: &str,
    color: HSLColor,
    marker: Marker,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let line_style = color.stroke_width(2);
    chart
        .draw_series(LineSeries::new(points.iter().copied(), line_style))
        .map_err(chart_err)?
        .label(label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], line_style));

    match marker {
        Marker::Circle => chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 4, color.filled())),
        ),
        Marker::Square => chart.draw_series(points.iter().map(|&point| {
            EmptyElement::at(point) + Rectangle::new([(-3, -3), (3, 3)], color.filled())
        })),
        Marker::Triangle => chart.draw_series(
            points
                .iter()
                .map(|&point| TriangleMarker::new(point, 5, color.filled())),
        ),
        Marker::Cross => chart.draw_series(
            points
                .iter()
                .map(|&point| Cross::new(point, 4, color.stroke_width(2))),
        ),
    }
    .map_err(chart_err)?;
    Ok(())
}

/// Renders the comparison chart. With an output directory set, writes a PNG
/// named `benchmark_comparison_<YYYYMMDD_HHMMSS>.png` and returns its path;
/// without one, renders into an in-memory buffer and returns `None`.
pub fn save_comparison(table: &BenchmarkTable, options: &ChartOptions) -> Result<Option<PathBuf>> {
    match options.out_dir.as_deref() {
        Some(dir) => {
            let path = timestamped_path(dir);
            {
                let root = BitMapBackend::new(&path, options.size).into_drawing_area();
                render(table, &root, &options.title)?;
                root.present().map_err(chart_err)?;
            }
            debug!(path = %path.display(), "comparison chart written");
            Ok(Some(path))
        }
        None => {
            let (width, height) = options.size;
            let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];
            {
                let root =
                    BitMapBackend::with_buffer(&mut buffer, options.size).into_drawing_area();
                render(table, &root, &options.title)?;
                root.present().map_err(chart_err)?;
            }
            Ok(None)
        }
    }
}

fn timestamped_path(dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("benchmark_comparison_{stamp}.png"))
}
