use rolling_stats::Stats;
use serde::Serialize;

use crate::constants::MAX_SAMPLES;
use crate::error::{Result, ToolkitError};

/// Bounded buffer of signal readings
///
/// Holds at most [`MAX_SAMPLES`] values. Pushing past the limit is an error
/// instead of a silent truncation.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    samples: Vec<f64>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(MAX_SAMPLES),
        }
    }

    /// Copy readings into a new buffer, rejecting slices over the limit
    pub fn from_slice(samples: &[f64]) -> Result<Self> {
        check_len(samples.len())?;
        Ok(Self {
            samples: samples.to_vec(),
        })
    }

    pub fn push(&mut self, sample: f64) -> Result<()> {
        if self.samples.len() >= MAX_SAMPLES {
            return Err(ToolkitError::invalid(format!(
                "sample buffer is full ({} values)",
                MAX_SAMPLES
            )));
        }
        self.samples.push(sample);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

/// Statistics of a block of readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalSummary {
    pub count: usize,
    pub mean: f64,
    pub rms: f64,
    pub min: f64,
    pub max: f64,
    /// Standard deviation from the running accumulator (zero for a single reading)
    pub std_dev: f64,
}

fn check_len(n: usize) -> Result<()> {
    if n == 0 || n > MAX_SAMPLES {
        log::warn!("Rejected sample count {}", n);
        return Err(ToolkitError::invalid(format!(
            "sample count must be between 1 and {}, got {}",
            MAX_SAMPLES, n
        )));
    }
    Ok(())
}

/// Arithmetic mean `Σx / n`
pub fn mean(samples: &[f64]) -> Result<f64> {
    check_len(samples.len())?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Root mean square `sqrt(Σx² / n)`
pub fn rms(samples: &[f64]) -> Result<f64> {
    check_len(samples.len())?;
    let sq_sum: f64 = samples.iter().map(|x| x * x).sum();
    Ok((sq_sum / samples.len() as f64).sqrt())
}

/// Mean, RMS and spread of a block of readings
pub fn summarize(samples: &[f64]) -> Result<SignalSummary> {
    let mean = mean(samples)?;
    let rms = rms(samples)?;

    let mut stats: Stats<f64> = Stats::new();
    for &x in samples {
        stats.update(x);
    }

    let std_dev = if stats.count > 1 { stats.std_dev } else { 0.0 };
    log::debug!(
        "Summarized {} samples: mean={:.4} rms={:.4}",
        samples.len(),
        mean,
        rms
    );

    Ok(SignalSummary {
        count: samples.len(),
        mean,
        rms,
        min: stats.min,
        max: stats.max,
        std_dev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_mean_and_rms() {
        let data = [2.0, 4.0, 6.0];
        assert!((mean(&data).unwrap() - 4.0).abs() < 1e-12);
        assert!((rms(&data).unwrap() - (56.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_constant_signal() {
        let data = vec![-3.5; 17];
        assert!((mean(&data).unwrap() + 3.5).abs() < 1e-12);
        assert!((rms(&data).unwrap() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_oversized_rejected() {
        assert_eq!(mean(&[]).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(rms(&[]).unwrap_err().kind(), ErrorKind::InvalidInput);

        let too_many = vec![1.0; MAX_SAMPLES + 1];
        assert!(mean(&too_many).is_err());
        assert!(SampleBuffer::from_slice(&too_many).is_err());
    }

    #[test]
    fn test_buffer_capacity() {
        let mut buffer = SampleBuffer::new();
        for i in 0..MAX_SAMPLES {
            buffer.push(i as f64).unwrap();
        }
        assert_eq!(buffer.len(), MAX_SAMPLES);
        assert!(buffer.push(0.0).is_err());
        assert_eq!(buffer.len(), MAX_SAMPLES);
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert!((summary.mean - 2.5).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        // 1.118 (population) to 1.291 (sample)
        assert!(summary.std_dev > 1.11 && summary.std_dev < 1.30);

        let flat = summarize(&[2.0; 8]).unwrap();
        assert!(flat.std_dev.abs() < 1e-9);
    }

    #[test]
    fn test_single_sample_summary() {
        let summary = summarize(&[5.0]).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.rms, 5.0);
    }
}
