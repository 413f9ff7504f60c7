use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{Result, ToolkitError};

/// First-order RC low-pass filter
///
/// Both component values are validated on construction, so every method on
/// a constructed filter is infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcLowPass {
    resistance: f64,
    capacitance: f64,
}

impl RcLowPass {
    /// Create a filter from R in ohms and C in farads
    ///
    /// # Errors
    /// `InvalidInput` unless both values are finite and strictly positive.
    pub fn new(resistance: f64, capacitance: f64) -> Result<Self> {
        if !(resistance.is_finite() && resistance > 0.0)
            || !(capacitance.is_finite() && capacitance > 0.0)
        {
            log::warn!("Rejected RC components R={} C={}", resistance, capacitance);
            return Err(ToolkitError::invalid("component values must be positive"));
        }
        Ok(Self {
            resistance,
            capacitance,
        })
    }

    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Time constant τ = RC in seconds
    pub fn time_constant(&self) -> f64 {
        self.resistance * self.capacitance
    }

    /// -3 dB cutoff frequency `1 / (2πRC)` in Hz
    pub fn cutoff_hz(&self) -> f64 {
        1.0 / (2.0 * PI * self.time_constant())
    }

    /// Complex transfer function `H(f) = 1 / (1 + j2πfRC)`
    pub fn response(&self, freq_hz: f64) -> Complex64 {
        let omega_tau = 2.0 * PI * freq_hz * self.time_constant();
        Complex64::new(1.0, 0.0) / Complex64::new(1.0, omega_tau)
    }

    /// Magnitude response in dB at `freq_hz`
    pub fn gain_db(&self, freq_hz: f64) -> f64 {
        20.0 * self.response(freq_hz).norm().log10()
    }

    /// Phase response in degrees at `freq_hz`
    pub fn phase_degrees(&self, freq_hz: f64) -> f64 {
        self.response(freq_hz).arg().to_degrees()
    }
}

/// Cutoff frequency of an RC low-pass filter in Hz
pub fn cutoff_frequency(resistance: f64, capacitance: f64) -> Result<f64> {
    let fc = RcLowPass::new(resistance, capacitance)?.cutoff_hz();
    log::debug!("RC cutoff for R={} C={}: {} Hz", resistance, capacitance, fc);
    Ok(fc)
}
