// tools/study_report/src/lib.rs

// OpenFOAM Parametric Study Reporting Core
//
// Aggregates the sweep-level summary table produced by the study driver and
// renders it as a 2x2 chart plus a self-contained HTML report. One invocation
// reads everything once, writes the artifacts, and exits; nothing is cached
// between runs.

pub mod charts;
pub mod report;
pub mod summary;

// Fixed artifact names inside the results directory.
pub const SUMMARY_CSV: &str = "summary.csv";
pub const SUMMARY_PLOT: &str = "parametric_study_summary.png";
pub const REPORT_HTML: &str = "parametric_study_report.html";
