use std::fmt::Write;

use super::Formatter;
use crate::diagnostics::{CheckCategory, CheckOutcome, DiagnosticReport};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &DiagnosticReport) -> String {
        let mut out = String::from("--- System Self-Diagnostic ---\n");

        for result in &report.results {
            let line = match &result.outcome {
                CheckOutcome::Pass => match (self.verbose, result.actual, result.expected) {
                    (true, Some(actual), Some(expected)) => format!(
                        "[PASS] {}: {:.4} (expected {:.4} +/- {})",
                        result.name,
                        actual,
                        expected,
                        result.tolerance.unwrap_or(0.0)
                    ),
                    _ => format!("[PASS] {}", result.name),
                },
                CheckOutcome::Fail {
                    kind: Some(kind),
                    detail,
                } => format!("[FAIL] {} ({}): {}", result.name, kind, detail),
                CheckOutcome::Fail { kind: None, detail } => {
                    format!("[FAIL] {}: {}", result.name, detail)
                }
            };
            out.push_str(&line);
            out.push('\n');
        }

        for (label, category) in [
            ("Formula checks", CheckCategory::Formula),
            ("Environment checks", CheckCategory::Environment),
        ] {
            let (passed, total) = report.tally(category);
            let _ = writeln!(out, "{}: {}/{} passed", label, passed, total);
        }

        let _ = write!(
            out,
            "Result: {}/{} tests passed -- {}",
            report.passed(),
            report.total(),
            report.verdict()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CheckResult, Verdict};
    use crate::error::ErrorKind;

    fn sample_report() -> DiagnosticReport {
        let mut report = DiagnosticReport::default();
        report.push(CheckResult {
            name: "Signal mean [2,4,6]".to_string(),
            category: CheckCategory::Formula,
            expected: Some(4.0),
            actual: Some(4.0),
            tolerance: Some(0.001),
            outcome: CheckOutcome::Pass,
        });
        report.push(CheckResult {
            name: "File create/write/remove".to_string(),
            category: CheckCategory::Environment,
            expected: None,
            actual: None,
            tolerance: None,
            outcome: CheckOutcome::Fail {
                kind: Some(ErrorKind::IoFailure),
                detail: "permission denied".to_string(),
            },
        });
        report
    }

    #[test]
    fn test_text_report() {
        let report = sample_report();
        assert_eq!(report.verdict(), Verdict::ErrorsDetected);

        let text = TextFormatter::new(false).format(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "--- System Self-Diagnostic ---",
                "[PASS] Signal mean [2,4,6]",
                "[FAIL] File create/write/remove (I/O failure): permission denied",
                "Formula checks: 1/1 passed",
                "Environment checks: 0/1 passed",
                "Result: 1/2 tests passed -- ERRORS DETECTED",
            ]
        );
    }

    #[test]
    fn test_verbose_shows_values() {
        let text = TextFormatter::new(true).format(&sample_report());
        assert!(text.contains("[PASS] Signal mean [2,4,6]: 4.0000 (expected 4.0000 +/- 0.001)"));
    }
}
