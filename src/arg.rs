//! Argument validation.
//!
//! Each check returns the validated value (or `()`) so it composes with `?`:
//!
//! ```rust
//! use sugars_util::arg;
//!
//! fn scale(factor: Option<f64>) -> Result<f64, sugars_util::ArgumentError> {
//!     let factor = arg::require(factor, "factor")?;
//!     arg::require_finite(factor, "factor")
//! }
//!
//! assert!(scale(Some(2.0)).is_ok());
//! assert!(scale(Some(f64::NAN)).is_err());
//! assert!(scale(None).is_err());
//! ```

use crate::error::ArgumentError;

/// Floating point types the NaN/infinity checks accept.
pub trait Float: Copy + PartialOrd + std::fmt::Debug {
    /// `true` for any NaN.
    fn is_nan_value(self) -> bool;
    /// `true` for positive or negative infinity.
    fn is_infinite_value(self) -> bool;
}

impl Float for f32 {
    #[inline]
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn is_infinite_value(self) -> bool {
        self.is_infinite()
    }
}

impl Float for f64 {
    #[inline]
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn is_infinite_value(self) -> bool {
        self.is_infinite()
    }
}

/// Unwraps a required value, failing with [`ArgumentError::Missing`].
#[inline]
pub fn require<T>(value: Option<T>, name: &str) -> Result<T, ArgumentError> {
    value.ok_or_else(|| ArgumentError::Missing { name: name.into() })
}

/// Rejects NaN.
#[inline]
pub fn require_not_nan<F: Float>(value: F, name: &str) -> Result<F, ArgumentError> {
    if value.is_nan_value() {
        return Err(ArgumentError::NaN { name: name.into() });
    }
    Ok(value)
}

/// Rejects positive and negative infinity.
#[inline]
pub fn require_not_infinite<F: Float>(value: F, name: &str) -> Result<F, ArgumentError> {
    if value.is_infinite_value() {
        return Err(ArgumentError::Infinite { name: name.into() });
    }
    Ok(value)
}

/// Rejects NaN and infinity. Infinity is reported first.
#[inline]
pub fn require_finite<F: Float>(value: F, name: &str) -> Result<F, ArgumentError> {
    require_not_infinite(value, name)?;
    require_not_nan(value, name)
}

/// Rejects an empty string.
#[inline]
pub fn require_non_empty<'a>(value: &'a str, name: &str) -> Result<&'a str, ArgumentError> {
    if value.is_empty() {
        return Err(ArgumentError::invalid(name, "must not be empty"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_require() {
        assert_eq!(require(Some(3), "x"), Ok(3));
        assert_eq!(
            require::<i32>(None, "x"),
            Err(ArgumentError::Missing { name: "x".into() })
        );
    }

    #[test]
    fn test_nan_and_infinite() {
        assert_eq!(
            require_not_nan(f64::NAN, "d"),
            Err(ArgumentError::NaN { name: "d".into() })
        );
        assert_eq!(require_not_nan(f64::INFINITY, "d"), Ok(f64::INFINITY));
        assert_eq!(
            require_not_infinite(f32::NEG_INFINITY, "f"),
            Err(ArgumentError::Infinite { name: "f".into() })
        );
        assert_eq!(require_not_infinite(1.5f32, "f"), Ok(1.5));
    }

    #[test]
    fn test_finite() {
        assert_eq!(require_finite(0.25f64, "d"), Ok(0.25));
        assert!(require_finite(f64::NAN, "d").is_err_and(|e| e.is_strange()));
        assert!(require_finite(f64::INFINITY, "d").is_err_and(|e| e.is_strange()));
        assert!(require_finite(f32::NAN, "f").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(require_non_empty("a", "s"), Ok("a"));
        assert!(require_non_empty("", "s").is_err());
    }
}
