//! Self-diagnostic harness
//!
//! Runs the known-answer formula checks followed by two environment smoke
//! tests and collects everything into a [`DiagnosticReport`]. Failing checks
//! never abort the run; they become report lines and flip the verdict.

mod environment;
mod formula;
mod report;

pub use environment::{check_buffer, check_file_round_trip};
pub use formula::{KnownAnswer, known_answers};
pub use report::{CheckCategory, CheckOutcome, CheckResult, DiagnosticReport, Verdict};

use crate::config::DiagnosticsConfig;

/// Run every formula check
pub fn run_formula_checks() -> DiagnosticReport {
    let mut report = DiagnosticReport::default();
    for check in known_answers() {
        report.push(check.evaluate());
    }
    report
}

/// Run the environment smoke tests using the configured scratch location
pub fn run_environment_checks(config: &DiagnosticsConfig) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();
    report.push(environment::to_result(
        "Transient buffer allocation",
        check_buffer(config.buffer_len),
    ));
    report.push(environment::to_result(
        "File create/write/remove",
        check_file_round_trip(&config.scratch_path()),
    ));
    report
}

/// Run the full self-diagnostic suite
pub fn run_self_test(config: &DiagnosticsConfig) -> DiagnosticReport {
    log::info!("Running self-diagnostic");

    let mut report = run_formula_checks();
    report
        .results
        .extend(run_environment_checks(config).results);

    for failure in report.failures() {
        log::warn!("Self-test check failed: {} ({:?})", failure.name, failure.outcome);
    }
    log::info!(
        "Self-diagnostic finished: {}/{} passed, {}",
        report.passed(),
        report.total(),
        report.verdict()
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn config_in(dir: &std::path::Path) -> DiagnosticsConfig {
        DiagnosticsConfig {
            scratch_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_nominal_in_writable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_self_test(&config_in(dir.path()));

        assert_eq!(report.total(), 11);
        assert_eq!(report.passed(), 11);
        assert_eq!(report.verdict(), Verdict::Nominal);
        assert_eq!(report.tally(CheckCategory::Formula), (9, 9));
        assert_eq!(report.tally(CheckCategory::Environment), (2, 2));
    }

    #[test]
    fn test_unwritable_directory_detected() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_self_test(&config_in(&dir.path().join("does-not-exist")));

        assert_eq!(report.verdict(), Verdict::ErrorsDetected);
        assert_eq!(report.passed(), 10);

        let failure = report.failures().next().unwrap();
        assert_eq!(failure.category, CheckCategory::Environment);
        match &failure.outcome {
            CheckOutcome::Fail { kind, .. } => assert_eq!(*kind, Some(ErrorKind::IoFailure)),
            CheckOutcome::Pass => unreachable!(),
        }
    }

    #[test]
    fn test_formula_checks_ordered() {
        let report = run_formula_checks();
        assert_eq!(report.results[0].name, "Resistor decode (1,0,2)");
        assert_eq!(report.results.len(), 9);
        assert!(
            report
                .results
                .iter()
                .all(|r| r.category == CheckCategory::Formula)
        );
    }
}
