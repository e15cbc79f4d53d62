// tools/case_plots/src/lib.rs

// OpenFOAM Cavity Flow Case Plotting Core
//
// This library turns a single case's solver output into convergence and
// velocity-profile figures. The solver itself (simpleFoam) runs outside this
// repository; we only consume what it leaves on disk.

pub mod profiles;
pub mod render;
pub mod residuals;

use std::path::{Path, PathBuf};

// Residual log location written by the OpenFOAM residuals functionObject,
// relative to the case directory.
pub const RESIDUALS_REL_PATH: &str = "postProcessing/residuals/0/residuals.dat";

// Subdirectory (under the case directory) that receives generated figures.
pub const PLOTS_SUBDIR: &str = "plots";

/// Residual plot filename for a given Reynolds number.
pub fn residual_plot_name(reynolds: u32) -> String {
    format!("residuals_Re{}.png", reynolds)
}

/// Velocity profile plot filename for a given Reynolds number.
pub fn velocity_plot_name(reynolds: u32) -> String {
    format!("velocity_profile_Re{}.png", reynolds)
}

/// Full path of the residual log for a case.
pub fn residuals_file(case_dir: &Path) -> PathBuf {
    case_dir.join(RESIDUALS_REL_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_names_encode_reynolds() {
        assert_eq!(residual_plot_name(100), "residuals_Re100.png");
        assert_eq!(velocity_plot_name(100), "velocity_profile_Re100.png");
        assert_eq!(residual_plot_name(2500), "residuals_Re2500.png");
    }

    #[test]
    fn test_residuals_file_layout() {
        let path = residuals_file(Path::new("cases/Re100"));
        assert!(path.ends_with("postProcessing/residuals/0/residuals.dat"));
        assert!(path.starts_with("cases/Re100"));
    }
}
