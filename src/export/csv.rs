use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::calc::WaveSample;
use crate::constants::WAVEFORM_CSV_HEADER;
use crate::error::Result;

/// Write samples as `Time(s),Voltage(V)` CSV rows with four decimals
///
/// Returns the number of data rows written.
pub fn write_csv<W, I>(writer: &mut W, samples: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = WaveSample>,
{
    writeln!(writer, "{}", WAVEFORM_CSV_HEADER)?;

    let mut rows = 0;
    for sample in samples {
        writeln!(writer, "{:.4},{:.4}", sample.time, sample.voltage)?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// Create (or overwrite) `path` and write the samples to it as CSV
pub fn save_csv<P, I>(path: P, samples: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = WaveSample>,
{
    let path = path.as_ref();
    let file = File::create(path).inspect_err(|e| {
        log::error!("Could not create {}: {}", path.display(), e);
    })?;

    let rows = write_csv(&mut BufWriter::new(file), samples)?;
    log::info!("Wrote {} samples to {}", rows, path.display());
    Ok(rows)
}
