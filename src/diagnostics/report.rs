use serde::Serialize;

use crate::error::ErrorKind;

/// Which part of the system a check exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    /// Known-answer check of a calculator formula
    Formula,
    /// Smoke test of the runtime environment (memory, filesystem)
    Environment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
    Pass,
    Fail {
        /// Error classification when the check failed with an error rather
        /// than a wrong value
        kind: Option<ErrorKind>,
        detail: String,
    },
}

/// Result of one diagnostic check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub category: CheckCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.outcome == CheckOutcome::Pass
    }
}

/// Aggregate verdict of a diagnostic run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Nominal,
    ErrorsDetected,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Nominal => f.write_str("SYSTEM NOMINAL"),
            Verdict::ErrorsDetected => f.write_str("ERRORS DETECTED"),
        }
    }
}

/// Ordered results of a diagnostic run
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosticReport {
    pub results: Vec<CheckResult>,
}

impl DiagnosticReport {
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// `(passed, total)` restricted to one category
    pub fn tally(&self, category: CheckCategory) -> (usize, usize) {
        let in_category = self.results.iter().filter(|r| r.category == category);
        let total = in_category.clone().count();
        let passed = in_category.filter(|r| r.passed()).count();
        (passed, total)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Nominal only when every check passed
    pub fn verdict(&self) -> Verdict {
        if self.passed() == self.total() {
            Verdict::Nominal
        } else {
            Verdict::ErrorsDetected
        }
    }
}
