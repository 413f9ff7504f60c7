//! Runtime settings for the toolkit.
//!
//! Everything here has a working default, so a config file is optional. A
//! TOML file only needs the keys it changes:
//!
//! ```toml
//! [waveform]
//! output_path = "scope/sine.wav"
//! format = "wav"
//!
//! [diagnostics]
//! scratch_dir = "/tmp"
//! format = "json"
//! ```
//!
//! Formula constants (waveform sample rate, statistics capacity, self-test
//! tolerances) are fixed in [`crate::constants`] and cannot be configured.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ToolkitError};
use crate::export::ExportFormat;
use crate::output::ReportFormat;

/// Toolkit-wide configuration
///
/// # Example
/// ```
/// use engtoolkit::config::ToolkitConfig;
///
/// let mut config = ToolkitConfig::default();
/// config.diagnostics.scratch_dir = std::env::temp_dir();
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Waveform export settings
    pub waveform: WaveformConfig,
    /// Self-diagnostic settings
    pub diagnostics: DiagnosticsConfig,
}

/// Waveform export configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveformConfig {
    /// Destination file, created or overwritten on export
    pub output_path: PathBuf,
    /// File format of the export
    pub format: ExportFormat,
}

/// Self-diagnostic configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Directory in which the file round-trip check creates its scratch file
    pub scratch_dir: PathBuf,
    /// Name of the scratch file (removed again after the check)
    pub scratch_file: String,
    /// Number of values in the transient buffer check
    pub buffer_len: usize,
    /// Report rendering
    pub format: ReportFormat,
}

impl DiagnosticsConfig {
    pub fn scratch_path(&self) -> PathBuf {
        self.scratch_dir.join(&self.scratch_file)
    }
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("waveform.csv"),
            format: ExportFormat::Csv,
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("."),
            scratch_file: "engtoolkit_selftest.tmp".to_string(),
            buffer_len: 100,
            format: ReportFormat::Text,
        }
    }
}

impl ToolkitConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ToolkitError::Config(e.to_string()))
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            ToolkitError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
