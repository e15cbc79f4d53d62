// Summary table ingestion and aggregation
//
// summary.csv carries one row per simulated case: Reynolds number, outcome
// status, wall-clock runtime, and the final residual (or the literal "N/A"
// sentinel when the solver never reported one). Row order is preserved from
// the file; nothing here re-sorts.

use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Deserializer};

/// Outcome of one case in the sweep.
///
/// The study driver writes SUCCESS, FAILED, or CONVERGED_POOR. Anything else
/// is kept verbatim under `Other` so a malformed status stays a per-row datum
/// instead of aborting the whole report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    Success,
    Failed,
    ConvergedPoor,
    Other(String),
}

impl CaseStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "SUCCESS" => Self::Success,
            "FAILED" => Self::Failed,
            "CONVERGED_POOR" => Self::ConvergedPoor,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::ConvergedPoor => "CONVERGED_POOR",
            Self::Other(s) => s,
        }
    }

    /// CSS class used by the report table: anything that is neither a clean
    /// success nor a hard failure renders as a warning.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            _ => "warning",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CaseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Derived convergence-quality label for the report table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceQuality {
    Excellent,
    Good,
    Poor,
    Unknown,
}

impl ConvergenceQuality {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Poor => "Poor",
            Self::Unknown => "Unknown",
        }
    }
}

/// One row of summary.csv.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseSummary {
    #[serde(rename = "Reynolds")]
    pub reynolds: i64,
    #[serde(rename = "Status")]
    pub status: CaseStatus,
    #[serde(rename = "Runtime")]
    pub runtime: f64,
    #[serde(rename = "FinalResidual")]
    pub final_residual: String,
}

impl CaseSummary {
    /// Numeric final residual, or None when the field is the "N/A" sentinel
    /// or otherwise unparseable. Callers treat None as missing, never as 0.
    pub fn residual_value(&self) -> Option<f64> {
        self.final_residual.trim().parse().ok()
    }

    /// Classify convergence for the report table.
    ///
    /// "N/A" means the driver saw no residual worth flagging, which in
    /// practice happens for the cleanly converged runs; it maps to
    /// Excellent. A value that fails to parse (and is not the sentinel)
    /// maps to Unknown.
    pub fn convergence_quality(&self) -> ConvergenceQuality {
        let raw = self.final_residual.trim();
        if raw == "N/A" {
            return ConvergenceQuality::Excellent;
        }
        match raw.parse::<f64>() {
            Ok(v) if v > 1e-3 => ConvergenceQuality::Poor,
            Ok(v) if v > 1e-4 => ConvergenceQuality::Good,
            Ok(_) => ConvergenceQuality::Excellent,
            Err(_) => ConvergenceQuality::Unknown,
        }
    }
}

/// Headline metrics for the report cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub poor: usize,
    /// Percentage, 0.0 when the study is empty.
    pub success_rate: f64,
    /// Mean runtime over successful cases, 0.0 when there are none.
    pub avg_runtime: f64,
}

/// The whole summary table, rows in file order.
#[derive(Debug, Clone)]
pub struct StudySummary {
    pub cases: Vec<CaseSummary>,
}

impl StudySummary {
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let cases = csv_reader
            .deserialize()
            .collect::<Result<Vec<CaseSummary>, _>>()?;
        Ok(Self { cases })
    }

    pub fn load(path: &Path) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::Reader::from_path(path)?;
        let cases = csv_reader
            .deserialize()
            .collect::<Result<Vec<CaseSummary>, _>>()?;
        Ok(Self { cases })
    }

    pub fn successful(&self) -> impl Iterator<Item = &CaseSummary> {
        self.cases
            .iter()
            .filter(|c| c.status == CaseStatus::Success)
    }

    /// Status distribution in first-appearance order (pie chart input).
    pub fn status_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for case in &self.cases {
            let label = case.status.label();
            match counts.iter_mut().find(|(l, _)| l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label.to_string(), 1)),
            }
        }
        counts
    }

    pub fn stats(&self) -> StudyStats {
        let total = self.cases.len();
        let successful = self.successful().count();
        let failed = self
            .cases
            .iter()
            .filter(|c| c.status == CaseStatus::Failed)
            .count();
        let poor = self
            .cases
            .iter()
            .filter(|c| c.status == CaseStatus::ConvergedPoor)
            .count();

        let success_rate = if total > 0 {
            successful as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let runtime_sum: f64 = self.successful().map(|c| c.runtime).sum();
        let avg_runtime = if successful > 0 {
            runtime_sum / successful as f64
        } else {
            0.0
        };

        StudyStats {
            total,
            successful,
            failed,
            poor,
            success_rate,
            avg_runtime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Reynolds,Status,Runtime,FinalResidual
100,SUCCESS,12.5,0.0005
400,SUCCESS,30.2,0.00005
1000,SUCCESS,58.9,N/A
2500,FAILED,3.1,0.9
";

    fn sample() -> StudySummary {
        StudySummary::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_rows_preserve_file_order() {
        let summary = sample();
        let reynolds: Vec<i64> = summary.cases.iter().map(|c| c.reynolds).collect();
        assert_eq!(reynolds, vec![100, 400, 1000, 2500]);
    }

    #[test]
    fn test_success_rate_three_of_four() {
        let stats = sample().stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.successful, 3);
        assert!((stats.success_rate - 75.0).abs() < 1e-12);
    }

    #[test]
    fn test_avg_runtime_over_successful_cases_only() {
        let stats = sample().stats();
        let expected = (12.5 + 30.2 + 58.9) / 3.0;
        assert!((stats.avg_runtime - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_study_is_zero_safe() {
        let summary = StudySummary::from_reader(
            "Reynolds,Status,Runtime,FinalResidual\n".as_bytes(),
        )
        .unwrap();
        let stats = summary.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.avg_runtime, 0.0);
    }

    #[test]
    fn test_avg_runtime_with_zero_successful_rows() {
        let csv = "Reynolds,Status,Runtime,FinalResidual\n100,FAILED,3.0,0.9\n";
        let stats = StudySummary::from_reader(csv.as_bytes()).unwrap().stats();
        assert_eq!(stats.successful, 0);
        assert_eq!(stats.avg_runtime, 0.0);
    }

    #[test]
    fn test_residual_sentinel_is_missing_not_zero() {
        let summary = sample();
        assert_eq!(summary.cases[2].final_residual, "N/A");
        assert_eq!(summary.cases[2].residual_value(), None);
        assert_eq!(summary.cases[0].residual_value(), Some(0.0005));
    }

    #[test]
    fn test_convergence_quality_thresholds() {
        let case = |residual: &str| CaseSummary {
            reynolds: 100,
            status: CaseStatus::Success,
            runtime: 1.0,
            final_residual: residual.to_string(),
        };
        assert_eq!(case("0.0005").convergence_quality(), ConvergenceQuality::Good);
        assert_eq!(
            case("0.00005").convergence_quality(),
            ConvergenceQuality::Excellent
        );
        assert_eq!(case("0.01").convergence_quality(), ConvergenceQuality::Poor);
        assert_eq!(
            case("N/A").convergence_quality(),
            ConvergenceQuality::Excellent
        );
        assert_eq!(
            case("abc").convergence_quality(),
            ConvergenceQuality::Unknown
        );
    }

    #[test]
    fn test_unknown_status_kept_verbatim() {
        let csv = "Reynolds,Status,Runtime,FinalResidual\n100,TIMEOUT,3.0,N/A\n";
        let summary = StudySummary::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            summary.cases[0].status,
            CaseStatus::Other("TIMEOUT".to_string())
        );
        assert_eq!(summary.cases[0].status.css_class(), "warning");
        assert_eq!(summary.status_counts(), vec![("TIMEOUT".to_string(), 1)]);
    }

    #[test]
    fn test_status_counts_first_appearance_order() {
        let counts = sample().status_counts();
        assert_eq!(
            counts,
            vec![("SUCCESS".to_string(), 3), ("FAILED".to_string(), 1)]
        );
    }
}
