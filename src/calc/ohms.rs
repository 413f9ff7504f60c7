use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ToolkitError};

/// Which quantity of `V = I * R` to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OhmsMode {
    /// V = I * R
    Voltage,
    /// I = V / R
    Current,
    /// R = V / I
    Resistance,
}

impl OhmsMode {
    pub const ALL: [OhmsMode; 3] = [OhmsMode::Voltage, OhmsMode::Current, OhmsMode::Resistance];

    /// Menu number (1-3) of this mode
    pub fn selector(self) -> i64 {
        match self {
            OhmsMode::Voltage => 1,
            OhmsMode::Current => 2,
            OhmsMode::Resistance => 3,
        }
    }

    /// Unit symbol of the solved quantity
    pub fn unit(self) -> &'static str {
        match self {
            OhmsMode::Voltage => "V",
            OhmsMode::Current => "A",
            OhmsMode::Resistance => "Ohms",
        }
    }
}

impl TryFrom<i64> for OhmsMode {
    type Error = ToolkitError;

    fn try_from(selector: i64) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.selector() == selector)
            .ok_or_else(|| ToolkitError::invalid(format!("unknown Ohm's law mode {}", selector)))
    }
}

impl FromStr for OhmsMode {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v" | "voltage" => Ok(OhmsMode::Voltage),
            "i" | "current" => Ok(OhmsMode::Current),
            "r" | "resistance" => Ok(OhmsMode::Resistance),
            other => match other.parse::<i64>() {
                Ok(selector) => Self::try_from(selector),
                Err(_) => Err(ToolkitError::invalid(format!(
                    "unknown Ohm's law mode: {}",
                    s
                ))),
            },
        }
    }
}

impl fmt::Display for OhmsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OhmsMode::Voltage => "Voltage",
            OhmsMode::Current => "Current",
            OhmsMode::Resistance => "Resistance",
        };
        f.write_str(name)
    }
}

/// Known quantities for an Ohm's law calculation
///
/// The slot for the quantity being solved for is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OhmsInputs {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
}

/// Solve `V = I * R` for the quantity selected by `mode`
pub fn solve(mode: OhmsMode, inputs: OhmsInputs) -> Result<f64> {
    let result = match mode {
        OhmsMode::Voltage => Ok(voltage(inputs.current, inputs.resistance)),
        OhmsMode::Current => current(inputs.voltage, inputs.resistance),
        OhmsMode::Resistance => resistance(inputs.voltage, inputs.current),
    };
    match &result {
        Ok(value) => log::debug!("Ohm's law {} = {} {}", mode, value, mode.unit()),
        Err(e) => log::warn!("Ohm's law {} failed: {}", mode, e),
    }
    result
}

/// `V = I * R`
pub fn voltage(current: f64, resistance: f64) -> f64 {
    current * resistance
}

/// `I = V / R`, failing when `R` is zero
pub fn current(voltage: f64, resistance: f64) -> Result<f64> {
    if resistance == 0.0 {
        return Err(ToolkitError::DivisionByZero("resistance"));
    }
    Ok(voltage / resistance)
}

/// `R = V / I`, failing when `I` is zero
pub fn resistance(voltage: f64, current: f64) -> Result<f64> {
    if current == 0.0 {
        return Err(ToolkitError::DivisionByZero("current"));
    }
    Ok(voltage / current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_compute_current() {
        let inputs = OhmsInputs {
            voltage: 4.0,
            resistance: 2.0,
            ..Default::default()
        };
        assert!((solve(OhmsMode::Current, inputs).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compute_voltage_with_zero_resistance() {
        let inputs = OhmsInputs {
            current: 3.0,
            resistance: 0.0,
            ..Default::default()
        };
        assert_eq!(solve(OhmsMode::Voltage, inputs).unwrap(), 0.0);
    }

    #[test]
    fn test_division_by_zero() {
        let err = current(5.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);

        let err = resistance(5.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_unknown_mode_is_invalid_input() {
        assert_eq!(OhmsMode::try_from(0).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(OhmsMode::try_from(4).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert!("power".parse::<OhmsMode>().is_err());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(OhmsMode::try_from(1).unwrap(), OhmsMode::Voltage);
        assert_eq!("2".parse::<OhmsMode>().unwrap(), OhmsMode::Current);
        assert_eq!("R".parse::<OhmsMode>().unwrap(), OhmsMode::Resistance);
    }

    #[test]
    fn test_modes_are_consistent() {
        let (v, r) = (12.0, 470.0);
        let i = current(v, r).unwrap();
        assert!((voltage(i, r) - v).abs() < 1e-9);
        assert!((resistance(v, i).unwrap() - r).abs() < 1e-9);
    }
}
