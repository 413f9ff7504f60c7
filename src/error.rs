use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resistor {} has invalid value {} (must be > 0)", .index + 1, .value)]
    InvalidResistor { index: usize, value: f64 },

    #[error("Division by zero: {0} cannot be zero")]
    DivisionByZero(&'static str),

    #[error("Memory allocation failed for {requested} values")]
    AllocationFailure { requested: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV export failed: {0}")]
    Wav(#[from] hound::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`ToolkitError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ErrorKind {
    InvalidInput,
    DivisionByZero,
    AllocationFailure,
    IoFailure,
    Config,
}

impl ToolkitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::InvalidResistor { .. } => ErrorKind::InvalidInput,
            Self::DivisionByZero(_) => ErrorKind::DivisionByZero,
            Self::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            Self::Io(_) | Self::Wav(_) => ErrorKind::IoFailure,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid input",
            Self::DivisionByZero => "division by zero",
            Self::AllocationFailure => "allocation failure",
            Self::IoFailure => "I/O failure",
            Self::Config => "configuration error",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
