// Summary chart rendering
//
// One 2x2 PNG per study: status pie, runtime trend, residual trend (log y),
// and the outcome bar chart. Panels that have no data to show (no successful
// rows, no numeric residuals) are simply left blank rather than failing the
// whole figure.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::SegmentValue;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::summary::{StudySummary, StudyStats};
use crate::{SUMMARY_CSV, SUMMARY_PLOT};

// 15x12 in at 150 dpi
const SUMMARY_PLOT_SIZE: (u32, u32) = (2250, 1800);

const PIE_COLORS: [RGBColor; 5] = [
    RGBColor(31, 119, 180),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(255, 127, 14),
    RGBColor(148, 103, 189),
];

// Bar colors follow the established report: blue, green, red, orange.
const BAR_COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(255, 127, 14),
];

/// Render the study summary chart into the results directory.
///
/// A missing summary.csv is a warning, not an error: the HTML report can
/// still be attempted and will simply show a broken image link. Returns the
/// plot path on success.
pub fn generate_summary_plots(results_dir: &Path) -> Option<PathBuf> {
    let summary_file = results_dir.join(SUMMARY_CSV);
    if !summary_file.exists() {
        println!("Warning: Summary file not found: {}", summary_file.display());
        return None;
    }

    let summary = match StudySummary::load(&summary_file) {
        Ok(summary) => summary,
        Err(e) => {
            println!("Error reading {}: {}", summary_file.display(), e);
            return None;
        }
    };

    println!("Processing {} simulation results", summary.cases.len());

    let plot_path = results_dir.join(SUMMARY_PLOT);
    match render_summary_chart(&summary, &plot_path) {
        Ok(()) => {
            println!("Generated summary plot: {}", plot_path.display());
            Some(plot_path)
        }
        Err(e) => {
            println!("Error rendering summary plot: {}", e);
            None
        }
    }
}

/// Compose the four panels into a single image.
pub fn render_summary_chart(
    summary: &StudySummary,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let stats = summary.stats();

    let root = BitMapBackend::new(out_path, SUMMARY_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    draw_status_pie(&panels[0], summary)?;
    draw_runtime_panel(&panels[1], summary)?;
    draw_residual_panel(&panels[2], summary)?;
    draw_outcome_bars(&panels[3], &stats)?;

    root.present()?;
    Ok(())
}

type Panel<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

fn draw_status_pie(panel: &Panel, summary: &StudySummary) -> Result<(), Box<dyn Error>> {
    let counts = summary.status_counts();
    if counts.is_empty() {
        return Ok(());
    }

    let area = panel.titled("Simulation Success Rate", ("sans-serif", 34))?;
    let dims = area.dim_in_pixel();
    let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
    let radius = (dims.0.min(dims.1) as f64 / 2.0) * 0.65;

    let sizes: Vec<f64> = counts.iter().map(|(_, n)| *n as f64).collect();
    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let colors: Vec<RGBColor> = (0..counts.len())
        .map(|i| PIE_COLORS[i % PIE_COLORS.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 26).into_font());
    pie.percentages(("sans-serif", 22).into_font().color(&WHITE));
    area.draw(&pie)?;

    Ok(())
}

fn draw_runtime_panel(panel: &Panel, summary: &StudySummary) -> Result<(), Box<dyn Error>> {
    let points: Vec<(f64, f64)> = summary
        .successful()
        .map(|c| (c.reynolds as f64, c.runtime))
        .collect();
    // Nothing to show without successful cases; leave the panel blank
    if points.is_empty() {
        return Ok(());
    }

    let (x_min, x_max) = axis_bounds(points.iter().map(|(x, _)| *x));
    let y_max = points.iter().map(|(_, y)| *y).fold(0.0f64, f64::max);

    let mut chart = ChartBuilder::on(panel)
        .caption("Computational Time vs Reynolds Number", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0f64..(y_max * 1.1).max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("Reynolds Number")
        .y_desc("Runtime (seconds)")
        .draw()?;

    chart.draw_series(LineSeries::new(points.clone(), BLUE.stroke_width(2)))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 6, BLUE.filled())),
    )?;

    Ok(())
}

fn draw_residual_panel(panel: &Panel, summary: &StudySummary) -> Result<(), Box<dyn Error>> {
    // Non-numeric residuals (including the "N/A" sentinel) are excluded,
    // never coerced to zero
    let points: Vec<(f64, f64)> = summary
        .successful()
        .filter_map(|c| c.residual_value().map(|r| (c.reynolds as f64, r)))
        .collect();
    if points.is_empty() {
        return Ok(());
    }

    let (x_min, x_max) = axis_bounds(points.iter().map(|(x, _)| *x));
    let y_min = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|(_, y)| *y).fold(0.0f64, f64::max);

    let mut chart = ChartBuilder::on(panel)
        .caption("Convergence Quality vs Reynolds Number", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, ((y_min * 0.5)..(y_max * 2.0)).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Reynolds Number")
        .y_desc("Final Residual")
        .draw()?;

    chart.draw_series(LineSeries::new(points.clone(), RED.stroke_width(2)))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 6, RED.filled())),
    )?;

    Ok(())
}

fn draw_outcome_bars(panel: &Panel, stats: &StudyStats) -> Result<(), Box<dyn Error>> {
    let categories = [
        ("Total Cases", stats.total),
        ("Successful", stats.successful),
        ("Failed", stats.failed),
        ("Poor Convergence", stats.poor),
    ];

    let y_max = (stats.total as f64 * 1.15).max(1.0);

    let mut chart = ChartBuilder::on(panel)
        .caption("Simulation Results Summary", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0i32..4i32).into_segmented(), 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if (0..4).contains(i) => {
                categories[*i as usize].0.to_string()
            }
            _ => String::new(),
        })
        .y_desc("Number of Cases")
        .draw()?;

    for (i, ((_, count), color)) in categories.iter().zip(BAR_COLORS).enumerate() {
        let i = i as i32;
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *count as f64),
            ],
            color.filled(),
        )))?;
    }

    // Count labels above each bar
    let label_style = TextStyle::from(("sans-serif", 24))
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(categories.iter().enumerate().map(|(i, (_, count))| {
        Text::new(
            format!("{}", count),
            (
                SegmentValue::CenterOf(i as i32),
                *count as f64 + y_max * 0.01,
            ),
            label_style.clone(),
        )
    }))?;

    Ok(())
}

// Padded x-axis bounds; keeps a single-point series visible.
fn axis_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad, max + pad)
}
