// OpenFOAM Parametric Study Report CLI
//
// Aggregates a sweep's summary.csv into the 2x2 chart and the HTML report.
// The chart step degrades to a warning when the summary is missing; the
// report step cannot, since there is nothing to report without it.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;

use study_report::charts::generate_summary_plots;
use study_report::report::generate_html_report;
use study_report::REPORT_HTML;

/// CLI arguments for the report generator
#[derive(Parser, Debug)]
#[command(name = "generate-report")]
#[command(about = "Generate the parametric study summary chart and HTML report", long_about = None)]
struct Args {
    /// Directory holding summary.csv; artifacts are written next to it
    results_directory: PathBuf,
}

fn main() -> ExitCode {
    // Wrong or missing arguments exit 1 with the usage text
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if !args.results_directory.exists() {
        println!(
            "Error: Results directory not found: {}",
            args.results_directory.display()
        );
        return ExitCode::FAILURE;
    }

    println!(
        "Generating comprehensive report for: {}",
        args.results_directory.display()
    );

    let pb = ProgressBar::new(2);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }

    pb.set_message("Rendering summary chart...");
    // Non-fatal: a missing or unreadable summary is logged inside
    let _ = generate_summary_plots(&args.results_directory);
    pb.inc(1);

    pb.set_message("Writing HTML report...");
    if let Err(e) = generate_html_report(&args.results_directory) {
        pb.abandon_with_message("✗ Report generation failed");
        println!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    pb.inc(1);

    pb.finish_with_message("✓ Report generation complete");

    println!("Report generation completed successfully!");
    println!(
        "Open {} to view the report",
        args.results_directory.join(REPORT_HTML).display()
    );

    ExitCode::SUCCESS
}
