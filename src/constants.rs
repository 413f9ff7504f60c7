//! Fixed design constants
//!
//! These are part of the calculators' contracts and are intentionally not
//! exposed through [`crate::config::ToolkitConfig`].

/// Sample rate of the waveform generator in Hz.
pub const WAVEFORM_SAMPLE_RATE_HZ: u32 = 1000;

/// Maximum number of readings accepted by the statistics calculator.
pub const MAX_SAMPLES: usize = 100;

/// Highest valid color-band code (White).
pub const MAX_BAND_CODE: i64 = 9;

/// Minimum number of resistors for a parallel combination.
pub const MIN_PARALLEL_RESISTORS: usize = 2;

/// Absolute tolerance for most self-diagnostic checks.
pub const CHECK_TOLERANCE: f64 = 0.001;

/// Looser tolerance for the RC filter check; its R/C literals only
/// approximate the target frequency.
pub const RC_CHECK_TOLERANCE: f64 = 0.01;

/// CSV header written by the waveform exporter.
pub const WAVEFORM_CSV_HEADER: &str = "Time(s),Voltage(V)";
