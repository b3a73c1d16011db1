//! Perturbation policy.
//!
//! Every component moves independently by
//! `(CUT - u) / start_temperature * stop_temperature` with `u` drawn
//! uniformly from `[0, 1)`.

use crate::error::{AnnealError, Result};
use crate::random::UniformSource;

/// Bias that centers the uniform draw around zero.
pub const CUT: f64 = 0.5;

/// Produces a candidate from `current`.
///
/// # Errors
///
/// [`AnnealError::InvalidTemperature`] if `start_temperature` is zero or
/// non-finite. Checked before any draw is taken.
pub fn randomize<U: UniformSource + ?Sized>(
    current: &[f64],
    start_temperature: f64,
    stop_temperature: f64,
    rng: &mut U,
) -> Result<Vec<f64>> {
    let mut candidate = current.to_vec();
    randomize_in_place(&mut candidate, start_temperature, stop_temperature, rng)?;
    Ok(candidate)
}

/// In-place variant of [`randomize`].
pub fn randomize_in_place<U: UniformSource + ?Sized>(
    values: &mut [f64],
    start_temperature: f64,
    stop_temperature: f64,
    rng: &mut U,
) -> Result<()> {
    if start_temperature == 0.0 || !start_temperature.is_finite() {
        return Err(AnnealError::InvalidTemperature(start_temperature));
    }
    for v in values.iter_mut() {
        let mut add = CUT - rng.next_uniform();
        add /= start_temperature;
        add *= stop_temperature;
        *v += add;
    }
    Ok(())
}
