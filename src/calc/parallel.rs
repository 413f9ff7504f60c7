use crate::constants::MIN_PARALLEL_RESISTORS;
use crate::error::{Result, ToolkitError};

fn check_count(count: usize) -> Result<()> {
    if count < MIN_PARALLEL_RESISTORS {
        log::warn!("Rejected parallel combination of {} resistor(s)", count);
        return Err(ToolkitError::invalid(format!(
            "need at least {} resistors for a parallel calculation, got {}",
            MIN_PARALLEL_RESISTORS, count
        )));
    }
    Ok(())
}

/// Equivalent resistance of resistors in parallel, `1 / Σ(1/Rᵢ)`
///
/// Needs at least two resistors. Validation stops at the first value that
/// is not strictly positive and reports its (zero-based) index.
///
/// # Example
/// ```
/// use engtoolkit::calc::parallel_resistance;
///
/// assert_eq!(parallel_resistance(&[100.0, 100.0]).unwrap(), 50.0);
/// ```
pub fn parallel_resistance(resistors: &[f64]) -> Result<f64> {
    check_count(resistors.len())?;

    let mut inverse_sum = 0.0f64;
    for (index, &value) in resistors.iter().enumerate() {
        if value.is_nan() || value <= 0.0 {
            log::warn!("Resistor {} has invalid value {}", index + 1, value);
            return Err(ToolkitError::InvalidResistor { index, value });
        }
        inverse_sum += 1.0 / value;
    }

    let total = 1.0 / inverse_sum;
    log::debug!("{} resistors in parallel: {} ohms", resistors.len(), total);
    Ok(total)
}

/// Read `count` resistor values into a freshly reserved buffer and combine
/// them
///
/// The buffer is reserved fallibly so an impossible request surfaces as
/// `AllocationFailure`. It is dropped before this function returns on every
/// path.
pub fn parallel_from_source<F>(count: usize, mut next_value: F) -> Result<f64>
where
    F: FnMut(usize) -> Result<f64>,
{
    check_count(count)?;

    let mut resistors: Vec<f64> = Vec::new();
    resistors
        .try_reserve_exact(count)
        .map_err(|_| ToolkitError::AllocationFailure { requested: count })?;

    for index in 0..count {
        resistors.push(next_value(index)?);
    }

    parallel_resistance(&resistors)
}
