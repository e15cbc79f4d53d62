// OpenFOAM Case Plot Generator CLI
//
// Renders the convergence-history and centerline velocity figures for one
// cavity flow case. Run after the solver finishes; artifacts land in the
// case's plots/ subdirectory.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use case_plots::render::{plot_residuals, plot_velocity_profile};
use case_plots::PLOTS_SUBDIR;

/// CLI arguments for the plot generator
#[derive(Parser, Debug)]
#[command(name = "generate-plots")]
#[command(about = "Generate convergence and velocity plots for one cavity flow case", long_about = None)]
struct Args {
    /// Path to the OpenFOAM case directory
    case_directory: PathBuf,

    /// Reynolds number of the case (used in output filenames)
    reynolds_number: u32,
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

    let output_dir = args.case_directory.join(PLOTS_SUBDIR);
    if let Err(e) = fs::create_dir_all(&output_dir) {
        println!("Error: cannot create {}: {}", output_dir.display(), e);
        return ExitCode::FAILURE;
    }

    println!(
        "Generating plots for case: {}, Re = {}",
        args.case_directory.display(),
        args.reynolds_number
    );

    let pb = ProgressBar::new(2);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }

    pb.set_message("Plotting residuals...");
    let residuals_ok = plot_residuals(&args.case_directory, args.reynolds_number, &output_dir);
    pb.inc(1);

    pb.set_message("Plotting velocity profile...");
    let velocity_ok =
        plot_velocity_profile(&args.case_directory, args.reynolds_number, &output_dir);
    pb.inc(1);

    pb.finish_with_message("✓ Plot generation complete");

    if residuals_ok && velocity_ok {
        println!(
            "Successfully generated all plots for Re = {}",
            args.reynolds_number
        );
        ExitCode::SUCCESS
    } else {
        println!("Some plots failed for Re = {}", args.reynolds_number);
        ExitCode::FAILURE
    }
}
