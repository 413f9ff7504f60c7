use crate::calc::{self, OhmsInputs, OhmsMode, Waveform};
use crate::constants::{CHECK_TOLERANCE, RC_CHECK_TOLERANCE};
use crate::error::Result;

use super::report::{CheckCategory, CheckOutcome, CheckResult};

/// A formula evaluated against a literal expected value
pub struct KnownAnswer {
    pub name: &'static str,
    pub expected: f64,
    pub tolerance: f64,
    pub compute: fn() -> Result<f64>,
}

impl KnownAnswer {
    pub fn evaluate(&self) -> CheckResult {
        let (actual, outcome) = match (self.compute)() {
            Ok(actual) if (actual - self.expected).abs() <= self.tolerance => {
                (Some(actual), CheckOutcome::Pass)
            }
            Ok(actual) => (
                Some(actual),
                CheckOutcome::Fail {
                    kind: None,
                    detail: format!("expected {}, got {}", self.expected, actual),
                },
            ),
            Err(e) => (
                None,
                CheckOutcome::Fail {
                    kind: Some(e.kind()),
                    detail: e.to_string(),
                },
            ),
        };

        CheckResult {
            name: self.name.to_string(),
            category: CheckCategory::Formula,
            expected: Some(self.expected),
            actual,
            tolerance: Some(self.tolerance),
            outcome,
        }
    }
}

/// The fixed known-answer checks, in report order
pub fn known_answers() -> Vec<KnownAnswer> {
    vec![
        KnownAnswer {
            name: "Resistor decode (1,0,2)",
            expected: 1000.0,
            tolerance: CHECK_TOLERANCE,
            compute: || calc::decode_bands(1, 0, 2),
        },
        KnownAnswer {
            name: "Ohm's law voltage (I=2, R=5)",
            expected: 10.0,
            tolerance: CHECK_TOLERANCE,
            compute: || {
                let inputs = OhmsInputs {
                    current: 2.0,
                    resistance: 5.0,
                    ..Default::default()
                };
                calc::ohms::solve(OhmsMode::Voltage, inputs)
            },
        },
        KnownAnswer {
            name: "Ohm's law current (V=4, R=2)",
            expected: 2.0,
            tolerance: CHECK_TOLERANCE,
            compute: || {
                let inputs = OhmsInputs {
                    voltage: 4.0,
                    resistance: 2.0,
                    ..Default::default()
                };
                calc::ohms::solve(OhmsMode::Current, inputs)
            },
        },
        KnownAnswer {
            name: "Ohm's law resistance (V=10, I=2)",
            expected: 5.0,
            tolerance: CHECK_TOLERANCE,
            compute: || {
                let inputs = OhmsInputs {
                    voltage: 10.0,
                    current: 2.0,
                    ..Default::default()
                };
                calc::ohms::solve(OhmsMode::Resistance, inputs)
            },
        },
        KnownAnswer {
            name: "Signal mean [2,4,6]",
            expected: 4.0,
            tolerance: CHECK_TOLERANCE,
            compute: || calc::mean(&[2.0, 4.0, 6.0]),
        },
        KnownAnswer {
            name: "Signal RMS [2,4,6]",
            expected: 4.3205,
            tolerance: CHECK_TOLERANCE,
            compute: || calc::rms(&[2.0, 4.0, 6.0]),
        },
        KnownAnswer {
            name: "RC cutoff (R=1k, C=159.155n)",
            expected: 1000.0,
            tolerance: RC_CHECK_TOLERANCE,
            compute: || calc::cutoff_frequency(1000.0, 1.59155e-7),
        },
        KnownAnswer {
            name: "Parallel resistance [100,100]",
            expected: 50.0,
            tolerance: CHECK_TOLERANCE,
            compute: || calc::parallel_resistance(&[100.0, 100.0]),
        },
        KnownAnswer {
            name: "Waveform sample count (1 s)",
            expected: 1000.0,
            tolerance: CHECK_TOLERANCE,
            compute: || Ok(Waveform::sine(50.0, 1.0, 1.0).len() as f64),
        },
    ]
}
