use std::path::Path;

use hound::{WavSpec, WavWriter};

use crate::calc::Waveform;
use crate::error::Result;

/// Save a waveform as a mono 32-bit float WAV file at its sample rate
///
/// Voltages are written unscaled, so amplitudes above 1.0 clip in most
/// players. Returns the number of samples written.
pub fn save_wav<P: AsRef<Path>>(path: P, waveform: &Waveform) -> Result<usize> {
    let path = path.as_ref();
    let spec = WavSpec {
        channels: 1,
        sample_rate: waveform.sample_rate(),
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;

    let mut written = 0;
    for sample in waveform.samples() {
        writer.write_sample(sample.voltage as f32)?;
        written += 1;
    }

    writer.finalize()?;
    log::info!("Wrote {} samples to {}", written, path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_round_trip_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sine.wav");

        let wave = Waveform::sine(10.0, 0.5, 0.2005);
        assert_eq!(save_wav(&path, &wave).unwrap(), 200);

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 1000);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.len(), 200);
    }
}
