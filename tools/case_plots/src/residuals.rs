// Residual log parsing
//
// The residuals functionObject writes a whitespace-delimited table with one
// header line and four columns per iteration: Time, Ux, Uy, p.

use std::fs;
use std::path::Path;

/// One solver iteration's residuals, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualRecord {
    pub time: f64,
    pub ux: f64,
    pub uy: f64,
    pub p: f64,
}

/// Parse the residual log body. The first line is a header and is skipped;
/// every following non-empty line must carry exactly four numeric columns.
pub fn parse_residual_log(contents: &str) -> Result<Vec<ResidualRecord>, String> {
    let mut records = Vec::new();

    for (line_no, line) in contents.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(format!(
                "line {}: expected 4 columns (Time Ux Uy p), found {}",
                line_no + 1,
                fields.len()
            ));
        }

        let mut values = [0.0f64; 4];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field
                .parse()
                .map_err(|_| format!("line {}: invalid number '{}'", line_no + 1, field))?;
        }

        records.push(ResidualRecord {
            time: values[0],
            ux: values[1],
            uy: values[2],
            p: values[3],
        });
    }

    Ok(records)
}

/// Read and parse a residual log from disk.
pub fn load_residual_log(path: &Path) -> Result<Vec<ResidualRecord>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    parse_residual_log(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Time Ux Uy p
0.1 1.0 0.9 0.5
0.2 0.1 0.09 0.05
0.3 0.01 0.009 0.005
";

    #[test]
    fn test_parse_skips_header_and_keeps_order() {
        let records = parse_residual_log(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].time, 0.1);
        assert_eq!(records[0].ux, 1.0);
        assert_eq!(records[2].p, 0.005);
        // File order is preserved, not re-sorted
        assert!(records[0].time < records[1].time);
    }

    #[test]
    fn test_parse_blank_lines_ignored() {
        let with_blank = "# header\n0.1 1.0 0.9 0.5\n\n0.2 0.1 0.09 0.05\n";
        let records = parse_residual_log(with_blank).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_column_count() {
        let bad = "# header\n0.1 1.0 0.9\n";
        let err = parse_residual_log(bad).unwrap_err();
        assert!(err.contains("expected 4 columns"), "got: {}", err);
    }

    #[test]
    fn test_parse_rejects_non_numeric_field() {
        let bad = "# header\n0.1 abc 0.9 0.5\n";
        let err = parse_residual_log(bad).unwrap_err();
        assert!(err.contains("invalid number"), "got: {}", err);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = load_residual_log(Path::new("/nonexistent/residuals.dat")).unwrap_err();
        assert!(err.contains("cannot read"));
    }
}
