//! File sinks for generated waveforms

mod csv;
mod wav;

use std::path::Path;

pub use self::csv::{save_csv, write_csv};
pub use self::wav::save_wav;

use crate::calc::Waveform;
use crate::error::Result;

/// On-disk format of an exported waveform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Wav,
}

/// Write `waveform` to `path` in the requested format
pub fn save_waveform<P: AsRef<Path>>(
    path: P,
    waveform: &Waveform,
    format: ExportFormat,
) -> Result<usize> {
    match format {
        ExportFormat::Csv => save_csv(path, waveform.samples()),
        ExportFormat::Wav => save_wav(path, waveform),
    }
}
