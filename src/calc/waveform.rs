use std::f64::consts::PI;

use crate::constants::WAVEFORM_SAMPLE_RATE_HZ;

/// One generated point of a waveform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    /// Time since the start of the waveform in seconds
    pub time: f64,
    /// Instantaneous voltage in volts
    pub voltage: f64,
}

/// Sine waveform sampled at [`WAVEFORM_SAMPLE_RATE_HZ`]
///
/// Samples are computed on demand from their index, so a `Waveform` is a
/// finite iterator that can be restarted by cloning it before iterating or
/// by calling [`Waveform::samples`].
///
/// # Example
/// ```
/// use engtoolkit::calc::Waveform;
///
/// let wave = Waveform::sine(50.0, 1.0, 1.0);
/// assert_eq!(wave.len(), 1000);
/// assert_eq!(wave.sample(0).unwrap().voltage, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Waveform {
    frequency: f64,
    amplitude: f64,
    len: usize,
    next: usize,
}

impl Waveform {
    /// Sine wave of `frequency` Hz and peak `amplitude` V lasting `duration` s
    ///
    /// The sample count is `floor(duration * rate)`. Durations that produce no
    /// samples (zero, negative, NaN) give an empty waveform.
    pub fn sine(frequency: f64, amplitude: f64, duration: f64) -> Self {
        let len = sample_count(duration);
        log::debug!(
            "Sine waveform: {} Hz, {} V, {} s -> {} samples",
            frequency,
            amplitude,
            duration,
            len
        );
        Self {
            frequency,
            amplitude,
            len,
            next: 0,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn sample_rate(&self) -> u32 {
        WAVEFORM_SAMPLE_RATE_HZ
    }

    /// Total number of samples, independent of iteration progress
    pub fn total_samples(&self) -> usize {
        self.len
    }

    /// Sample at `index`, or `None` past the end
    pub fn sample(&self, index: usize) -> Option<WaveSample> {
        if index >= self.len {
            return None;
        }
        let time = index as f64 / f64::from(WAVEFORM_SAMPLE_RATE_HZ);
        let voltage = self.amplitude * (2.0 * PI * self.frequency * time).sin();
        Some(WaveSample { time, voltage })
    }

    /// Fresh iterator over every sample from the start
    pub fn samples(&self) -> Waveform {
        Waveform {
            next: 0,
            ..self.clone()
        }
    }
}

fn sample_count(duration: f64) -> usize {
    let count = (duration * f64::from(WAVEFORM_SAMPLE_RATE_HZ)).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

impl Iterator for Waveform {
    type Item = WaveSample;

    fn next(&mut self) -> Option<WaveSample> {
        let sample = self.sample(self.next)?;
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Waveform {}
