use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Result, ToolkitError};

use super::report::{CheckCategory, CheckOutcome, CheckResult};

const SCRATCH_CONTENT: &str = "engtoolkit self-test\n";

/// Reserve a transient buffer of `len` values and fill it
pub fn check_buffer(len: usize) -> Result<()> {
    let mut buffer: Vec<f64> = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| ToolkitError::AllocationFailure { requested: len })?;

    buffer.extend((0..len).map(|i| i as f64));
    log::trace!("Filled {} value scratch buffer", buffer.len());
    Ok(())
}

/// Create, write, read back and remove a scratch file at `path`
///
/// Once the file has been created it is removed on every path, including
/// when writing or reading it fails.
pub fn check_file_round_trip(path: &Path) -> Result<()> {
    let read_back = with_scratch_file(path, write_and_read_back)?;
    if read_back != SCRATCH_CONTENT {
        return Err(std::io::Error::other("scratch file contents changed").into());
    }
    Ok(())
}

fn with_scratch_file<F>(path: &Path, body: F) -> Result<String>
where
    F: FnOnce(File, &Path) -> std::io::Result<String>,
{
    let file = File::create(path)?;
    let outcome = body(file, path);
    let removed = fs::remove_file(path);

    let read_back = outcome?;
    removed?;
    Ok(read_back)
}

fn write_and_read_back(mut file: File, path: &Path) -> std::io::Result<String> {
    file.write_all(SCRATCH_CONTENT.as_bytes())?;
    file.sync_all()?;
    drop(file);

    let mut read_back = String::new();
    File::open(path)?.read_to_string(&mut read_back)?;
    Ok(read_back)
}

pub(super) fn to_result(name: &str, outcome: Result<()>) -> CheckResult {
    let outcome = match outcome {
        Ok(()) => CheckOutcome::Pass,
        Err(e) => CheckOutcome::Fail {
            kind: Some(e.kind()),
            detail: e.to_string(),
        },
    };
    CheckResult {
        name: name.to_string(),
        category: CheckCategory::Environment,
        expected: None,
        actual: None,
        tolerance: None,
        outcome,
    }
}
