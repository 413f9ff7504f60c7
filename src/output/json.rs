use serde::Serialize;

use super::{Formatter, iso8601_timestamp};
use crate::diagnostics::{CheckResult, DiagnosticReport, Verdict};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    ts: String,
    passed: usize,
    total: usize,
    verdict: Verdict,
    checks: &'a [CheckResult],
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &DiagnosticReport) -> String {
        let doc = JsonReport {
            ts: iso8601_timestamp(),
            passed: report.passed(),
            total: report.total(),
            verdict: report.verdict(),
            checks: &report.results,
        };
        serde_json::to_string(&doc).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}
