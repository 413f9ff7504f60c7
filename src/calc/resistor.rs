use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_BAND_CODE;
use crate::error::{Result, ToolkitError};

/// Resistor color band
///
/// The discriminant is the printed digit (or power-of-ten multiplier) the
/// color stands for.
///
/// # Parsing formats
/// - `0` through `9` - band code
/// - `brown`, `Brown`, `BROWN` - color name (`gray` and `grey` both accepted)
///
/// # Example
/// ```
/// use engtoolkit::calc::ColorBand;
///
/// let band: ColorBand = "violet".parse().unwrap();
/// assert_eq!(band.code(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
    Grey = 8,
    White = 9,
}

impl ColorBand {
    pub const ALL: [ColorBand; 10] = [
        ColorBand::Black,
        ColorBand::Brown,
        ColorBand::Red,
        ColorBand::Orange,
        ColorBand::Yellow,
        ColorBand::Green,
        ColorBand::Blue,
        ColorBand::Violet,
        ColorBand::Grey,
        ColorBand::White,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorBand::Black => "Black",
            ColorBand::Brown => "Brown",
            ColorBand::Red => "Red",
            ColorBand::Orange => "Orange",
            ColorBand::Yellow => "Yellow",
            ColorBand::Green => "Green",
            ColorBand::Blue => "Blue",
            ColorBand::Violet => "Violet",
            ColorBand::Grey => "Grey",
            ColorBand::White => "White",
        }
    }

    /// One-line legend of all codes, e.g. `0:Black, 1:Brown, ...`
    pub fn legend() -> String {
        Self::ALL
            .iter()
            .map(|band| format!("{}:{}", band.code(), band.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TryFrom<i64> for ColorBand {
    type Error = ToolkitError;

    fn try_from(code: i64) -> Result<Self> {
        if !(0..=MAX_BAND_CODE).contains(&code) {
            return Err(ToolkitError::invalid(format!(
                "color code {} out of range (0-{})",
                code, MAX_BAND_CODE
            )));
        }
        Ok(Self::ALL[code as usize])
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorBand {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(code) = s.parse::<i64>() {
            return Self::try_from(code);
        }

        let lower = s.to_ascii_lowercase();
        if lower == "gray" {
            return Ok(ColorBand::Grey);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.name().eq_ignore_ascii_case(&lower))
            .ok_or_else(|| ToolkitError::invalid(format!("unknown color band: {}", s)))
    }
}

/// Decode a three-band resistor color code into ohms
///
/// Computes `(band1 * 10 + band2) * 10^multiplier`. Every argument must be a
/// band code in 0-9; negative or larger values are rejected rather than
/// producing a sentinel.
///
/// # Example
/// ```
/// use engtoolkit::calc::decode_bands;
///
/// // Brown, Black, Red
/// assert_eq!(decode_bands(1, 0, 2).unwrap(), 1000.0);
/// ```
pub fn decode_bands(band1: i64, band2: i64, multiplier: i64) -> Result<f64> {
    let band = |code: i64| {
        ColorBand::try_from(code).inspect_err(|e| log::warn!("Rejected color band: {}", e))
    };
    Ok(decode(band(band1)?, band(band2)?, band(multiplier)?))
}

/// Decode already-validated color bands into ohms
pub fn decode(band1: ColorBand, band2: ColorBand, multiplier: ColorBand) -> f64 {
    let significand = f64::from(band1.code()) * 10.0 + f64::from(band2.code());
    let ohms = significand * 10f64.powf(f64::from(multiplier.code()));
    log::debug!(
        "Decoded {}-{}-{} as {} ohms",
        band1,
        band2,
        multiplier,
        ohms
    );
    ohms
}
