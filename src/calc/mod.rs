pub mod ohms;
pub mod parallel;
pub mod rc_filter;
pub mod resistor;
pub mod stats;
pub mod waveform;

pub use ohms::{OhmsInputs, OhmsMode};
pub use parallel::{parallel_from_source, parallel_resistance};
pub use rc_filter::{RcLowPass, cutoff_frequency};
pub use resistor::{ColorBand, decode_bands};
pub use stats::{SampleBuffer, SignalSummary, mean, rms, summarize};
pub use waveform::{WaveSample, Waveform};
