mod common;

use std::fs;

use common::{config_in, run_script, run_session};
use engtoolkit::ToolkitConfig;
use engtoolkit::output::ReportFormat;

#[test]
fn test_exit_option() {
    let out = run_session(&["8"], ToolkitConfig::default());
    assert!(out.contains("ENGINEERING ASSISTANT TOOLKIT"));
    assert!(out.contains("7. System Self-Diagnostic"));
    assert!(out.contains("Exiting application."));
}

#[test]
fn test_end_of_input_ends_session() {
    let out = run_session(&[], ToolkitConfig::default());
    assert!(out.contains("Select an option: "));
    assert!(!out.contains("Exiting application."));
}

#[test]
fn test_invalid_selection_redisplays_menu() {
    let out = run_session(&["banana", "0", "9", "8"], ToolkitConfig::default());
    assert_eq!(out.matches("Invalid selection. Try 1-8.").count(), 3);
    assert_eq!(out.matches("Select an option: ").count(), 4);
}

#[test]
fn test_non_utf8_selection_is_invalid() {
    let out = run_script(b"\xff\xfe\n8\n", ToolkitConfig::default());
    assert!(out.contains("Invalid selection. Try 1-8."));
    assert!(out.contains("Exiting application."));
}

#[test]
fn test_non_utf8_value_is_reprompted() {
    let out = run_script(b"4\n\xff\n1000\n1u\n8\n", ToolkitConfig::default());
    assert!(out.contains("Error: Invalid input. Please enter a number."));
    assert_eq!(out.matches("Resistance (Ohms): ").count(), 2);
    assert!(out.contains(">> Cut-off Frequency: 159.15 Hz"));
    assert!(out.contains("Exiting application."));
}

#[test]
fn test_resistor_decoder_session() {
    let out = run_session(&["1", "1", "0", "2", "1", "4", "7", "2", "8"], ToolkitConfig::default());
    assert!(out.contains("Codes: 0:Black, 1:Brown"));
    assert!(out.contains(">> Resistance: 1.00 k Ohms"));
    assert!(out.contains(">> Resistance: 4.70 k Ohms"));
}

#[test]
fn test_resistor_decoder_rejects_bad_band() {
    let out = run_session(&["1", "1", "12", "0", "8"], ToolkitConfig::default());
    assert!(out.contains("Error: Invalid input: color code 12 out of range (0-9)"));
    assert!(out.contains("Exiting application."));
}

#[test]
fn test_ohms_law_session() {
    let out = run_session(
        &["2", "2", "4", "2", "2", "3", "10", "0", "2", "7", "8"],
        ToolkitConfig::default(),
    );
    assert!(out.contains(">> Current = 2.00 A"));
    assert!(out.contains("Error: Division by zero: current cannot be zero"));
    assert!(out.contains("Error: Invalid input: unknown Ohm's law mode 7"));
}

#[test]
fn test_ohms_law_accepts_engineering_notation() {
    let out = run_session(&["2", "1", "2m", "4.7k", "8"], ToolkitConfig::default());
    assert!(out.contains(">> Voltage = 9.40 V"));
}

#[test]
fn test_statistics_session() {
    let out = run_session(&["3", "3", "2", "4", "6", "8"], ToolkitConfig::default());
    assert!(out.contains("Sample 3: "));
    assert!(out.contains(">> Mean Value: 4.0000"));
    assert!(out.contains(">> RMS Value:  4.3205"));
}

#[test]
fn test_statistics_rejects_sample_count() {
    let out = run_session(&["3", "0", "3", "101", "8"], ToolkitConfig::default());
    assert_eq!(
        out.matches("Error: Invalid input: please enter a size between 1 and 100")
            .count(),
        2
    );
    assert!(!out.contains("Sample 1: "));
}

#[test]
fn test_rc_filter_session() {
    let out = run_session(&["4", "1k", "159.155n", "4", "-1", "1u", "8"], ToolkitConfig::default());
    assert!(out.contains(">> Cut-off Frequency: 1000.00 Hz"));
    assert!(out.contains("Error: Invalid input: component values must be positive"));
}

#[test]
fn test_parallel_session() {
    let out = run_session(&["5", "2", "100", "100", "8"], ToolkitConfig::default());
    assert!(out.contains("Enter Resistor 2 value (Ohms): "));
    assert!(out.contains(">> Total Parallel Resistance: 50.00 Ohms"));
    assert!(out.contains("(Memory freed)"));
}

#[test]
fn test_parallel_reports_first_invalid_resistor() {
    let out = run_session(&["5", "3", "-5", "10", "0", "8"], ToolkitConfig::default());
    assert!(out.contains("Error: Resistor 1 has invalid value -5 (must be > 0)"));
    assert!(!out.contains("Resistor 3 has invalid value"));
    assert!(out.contains("(Memory freed)"));
}

#[test]
fn test_parallel_needs_two_resistors() {
    let out = run_session(&["5", "1", "5", "-4", "8"], ToolkitConfig::default());
    assert_eq!(
        out.matches("need at least 2 resistors for a parallel calculation").count(),
        2
    );
    assert!(!out.contains("Enter Resistor 1"));
}

#[test]
fn test_waveform_session_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let out = run_session(&["6", "5", "2", "0.5", "8"], config);
    assert!(out.contains(">> Success! 500 samples saved to"));

    let csv = fs::read_to_string(dir.path().join("waveform.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Time(s),Voltage(V)"));
    assert_eq!(lines.next(), Some("0.0000,0.0000"));
    assert_eq!(csv.lines().count(), 501);
}

#[test]
fn test_waveform_session_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.waveform.output_path = dir.path().join("missing").join("waveform.csv");

    let out = run_session(&["6", "5", "2", "0.5", "8"], config);
    assert!(out.contains("Error: I/O error:"));
    assert!(out.contains("Exiting application."));
}

#[test]
fn test_self_diagnostic_session() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_session(&["7", "8"], config_in(dir.path()));

    assert!(out.contains("[PASS] Resistor decode (1,0,2)"));
    assert!(out.contains("[PASS] File create/write/remove"));
    assert!(out.contains("Result: 11/11 tests passed -- SYSTEM NOMINAL"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_self_diagnostic_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.diagnostics.format = ReportFormat::Json;
    config.diagnostics.scratch_dir = dir.path().join("gone");

    let out = run_session(&["7", "8"], config);
    let json_line = out
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("no JSON report line");
    let report: serde_json::Value = serde_json::from_str(json_line).unwrap();

    assert_eq!(report["verdict"], "errors_detected");
    assert_eq!(report["passed"], 10);
    assert_eq!(report["total"], 11);
    assert_eq!(report["checks"][10]["outcome"]["kind"], "IoFailure");
}
