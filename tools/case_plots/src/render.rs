// Figure rendering for a single case
//
// All charts go through the plotters bitmap backend so the artifacts are
// plain PNG files, sized to match the established report layout.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::profiles::centerline_profile;
use crate::residuals::{load_residual_log, ResidualRecord};
use crate::{residual_plot_name, residuals_file, velocity_plot_name};

// 10x6 in at 150 dpi
const RESIDUAL_PLOT_SIZE: (u32, u32) = (1500, 900);
// 12x5 in at 150 dpi
const VELOCITY_PLOT_SIZE: (u32, u32) = (1800, 750);

/// Plot convergence residuals for one case.
///
/// Returns true when the figure was written. A missing residual log or any
/// parse/render error is reported on stdout and mapped to false so the CLI
/// can aggregate the outcome without unwinding.
pub fn plot_residuals(case_dir: &Path, reynolds: u32, output_dir: &Path) -> bool {
    let log_path = residuals_file(case_dir);

    if !log_path.exists() {
        println!("Warning: Residuals file not found: {}", log_path.display());
        return false;
    }

    let plot_path = output_dir.join(residual_plot_name(reynolds));
    match load_residual_log(&log_path)
        .map_err(Into::into)
        .and_then(|records| render_residual_chart(&records, reynolds, &plot_path))
    {
        Ok(()) => {
            println!("Generated residuals plot: {}", plot_path.display());
            true
        }
        Err(e) => {
            println!("Error plotting residuals: {}", e);
            false
        }
    }
}

/// Plot the centerline velocity profiles for one case.
///
/// The case directory is accepted for signature symmetry with
/// [`plot_residuals`]; the curves themselves are synthesized placeholders
/// (see the profiles module).
pub fn plot_velocity_profile(_case_dir: &Path, reynolds: u32, output_dir: &Path) -> bool {
    let plot_path = output_dir.join(velocity_plot_name(reynolds));
    match render_velocity_chart(reynolds, &plot_path) {
        Ok(()) => {
            println!("Generated velocity profile plot: {}", plot_path.display());
            true
        }
        Err(e) => {
            println!("Error plotting velocity profile: {}", e);
            false
        }
    }
}

fn render_residual_chart(
    records: &[ResidualRecord],
    reynolds: u32,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    if records.is_empty() {
        return Err("residual log contains no data rows".into());
    }

    let t_min = records.first().map(|r| r.time).unwrap_or(0.0);
    let mut t_max = records.last().map(|r| r.time).unwrap_or(1.0);
    if t_max <= t_min {
        t_max = t_min + 1.0;
    }

    let root = BitMapBackend::new(out_path, RESIDUAL_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Convergence History - Re = {}", reynolds),
            ("sans-serif", 30),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(t_min..t_max, (1e-6f64..1.0f64).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Residual")
        .draw()?;

    let series: [(&str, RGBColor, fn(&ResidualRecord) -> f64); 3] = [
        ("Ux", BLUE, |r| r.ux),
        ("Uy", RED, |r| r.uy),
        ("p", GREEN, |r| r.p),
    ];

    for (name, color, extract) in series {
        chart
            .draw_series(LineSeries::new(
                records.iter().map(|r| (r.time, extract(r))),
                color.stroke_width(2),
            ))?
            .label(name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn render_velocity_chart(reynolds: u32, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let profile = centerline_profile(reynolds);

    let u_max = profile.u.iter().cloned().fold(0.0f64, f64::max);

    let root = BitMapBackend::new(out_path, VELOCITY_PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    // U velocity along the vertical centerline
    let mut chart_u = ChartBuilder::on(&panels[0])
        .caption("U Velocity Profile - Vertical Centerline", ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.05f64..(u_max * 1.1).max(0.1), 0.0f64..1.0f64)?;

    chart_u
        .configure_mesh()
        .x_desc("U velocity")
        .y_desc("Y coordinate")
        .draw()?;

    chart_u
        .draw_series(LineSeries::new(
            profile.u.iter().zip(&profile.y).map(|(&u, &y)| (u, y)),
            BLUE.stroke_width(2),
        ))?
        .label(format!("Re = {}", reynolds))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart_u
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    // V velocity (zero in this approximation)
    let mut chart_v = ChartBuilder::on(&panels[1])
        .caption("V Velocity Profile - Vertical Centerline", ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.05f64..0.05f64, 0.0f64..1.0f64)?;

    chart_v
        .configure_mesh()
        .x_desc("V velocity")
        .y_desc("Y coordinate")
        .draw()?;

    chart_v
        .draw_series(LineSeries::new(
            profile.v.iter().zip(&profile.y).map(|(&v, &y)| (v, y)),
            RED.stroke_width(2),
        ))?
        .label(format!("Re = {}", reynolds))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart_v
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_residual_log_returns_false_without_writing() {
        let case_dir = Path::new("/nonexistent/case/Re100");
        let output_dir = std::env::temp_dir().join("case_plots_missing_log_test");
        let ok = plot_residuals(case_dir, 100, &output_dir);
        assert!(!ok);
        assert!(!output_dir.join(residual_plot_name(100)).exists());
    }
}
