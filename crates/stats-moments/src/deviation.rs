//! Standard deviation by fixed-step Newton-Raphson
//!
//! The square root is computed without calling a library `sqrt`: starting from
//! `variance / 2`, the guess is refined exactly [`NEWTON_ITERATIONS`] times with
//! `guess = (guess + variance / guess) / 2`. The step count is fixed rather than
//! convergence-driven, so the result is bit-for-bit reproducible.

use num_traits::Float;
use stats_core::{Error, Result, StatsConfig};

/// Number of refinement steps applied to every root
pub const NEWTON_ITERATIONS: usize = 20;

/// Unrounded square root of a non-negative value
///
/// Zero returns zero before the first step, which would otherwise divide by a
/// zero guess. Negative input is outside the contract; use
/// [`standard_deviation`] for a checked entry point.
pub fn newton_sqrt<F: Float>(value: F) -> F {
    if value.is_zero() {
        return F::zero();
    }
    let two = F::one() + F::one();
    let mut guess = value / two;
    for _ in 0..NEWTON_ITERATIONS {
        guess = (guess + value / guess) / two;
    }
    guess
}

/// Standard deviation from a population variance, rounded
///
/// An infinite variance (from an overflowed sum of squares) gives an infinite
/// deviation; iterating on it would produce NaN.
pub fn standard_deviation(variance: f64, config: &StatsConfig) -> Result<f64> {
    if variance.is_nan() {
        return Err(Error::non_finite("variance"));
    }
    if variance < 0.0 {
        return Err(Error::InvalidInput(format!(
            "variance must be non-negative, got {variance}"
        )));
    }
    if variance.is_infinite() {
        return Ok(f64::INFINITY);
    }
    Ok(config.round(newton_sqrt(variance)))
}
