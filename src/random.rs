//! Bounded random numbers.
//!
//! The plain functions draw from the thread-local generator. Each bounded
//! helper also has a `*_with` form that takes any [`Rng`], so callers (and
//! tests) can use a seeded generator.
//!
//! Every bounded helper returns a value `r` with `start <= r < end`.

use crate::arg;
use crate::error::{ArgumentError, ArithmeticError, SugarError};
use rand::Rng;

/// Uniform `f64` in `[0, 1)`.
#[inline]
pub fn random_f64() -> f64 {
    rand::rng().random::<f64>()
}

/// Fair coin flip.
#[inline]
pub fn random_bool() -> bool {
    rand::rng().random_bool(0.5)
}

/// Uniform `f64` in `[start, end)`.
pub fn random_f64_between(start: f64, end: f64) -> Result<f64, SugarError> {
    random_f64_between_with(&mut rand::rng(), start, end)
}

/// Uniform `i32` in `[start, end)`.
pub fn random_i32_between(start: i32, end: i32) -> Result<i32, SugarError> {
    random_i32_between_with(&mut rand::rng(), start, end)
}

/// Uniform `i64` in `[start, end)`.
pub fn random_i64_between(start: i64, end: i64) -> Result<i64, SugarError> {
    random_i64_between_with(&mut rand::rng(), start, end)
}

/// [`random_f64_between`] drawing from `rng`.
///
/// Both bounds must be finite and `start < end`. If `end - start` is not
/// representable as a finite `f64` the call fails with
/// [`ArithmeticError::Overflow`].
pub fn random_f64_between_with<R: Rng>(
    rng: &mut R,
    start: f64,
    end: f64,
) -> Result<f64, SugarError> {
    arg::require_finite(start, "start")?;
    arg::require_finite(end, "end")?;
    check_order(start, end)?;

    if !(end - start).is_finite() {
        return Err(ArithmeticError::overflow(format!(
            "difference between {start} and {end}"
        ))
        .into());
    }

    // Rounding can land a float sample on `end`; draw again.
    loop {
        let value = rng.random_range(start..end);
        if value < end {
            return Ok(value);
        }
    }
}

/// [`random_i32_between`] drawing from `rng`. Requires `start < end`.
pub fn random_i32_between_with<R: Rng>(
    rng: &mut R,
    start: i32,
    end: i32,
) -> Result<i32, SugarError> {
    check_order(start, end)?;
    end.checked_sub(start)
        .ok_or_else(|| ArithmeticError::overflow(format!("{end} - {start}")))?;
    Ok(rng.random_range(start..end))
}

/// [`random_i64_between`] drawing from `rng`. Requires `start < end`.
pub fn random_i64_between_with<R: Rng>(
    rng: &mut R,
    start: i64,
    end: i64,
) -> Result<i64, SugarError> {
    check_order(start, end)?;
    end.checked_sub(start)
        .ok_or_else(|| ArithmeticError::overflow(format!("{end} - {start}")))?;
    Ok(rng.random_range(start..end))
}

fn check_order<T: PartialOrd + std::fmt::Display>(start: T, end: T) -> Result<(), ArgumentError> {
    if start >= end {
        return Err(ArgumentError::invalid(
            "start",
            format!("start: {start} end: {end}"),
        ));
    }
    Ok(())
}
