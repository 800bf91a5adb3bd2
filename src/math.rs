//! Factorials, binomial coefficients and numeric predicates.
//!
//! The `*_exact` functions return `u64`; the `*_wide` ones return `u128`
//! and cover larger inputs. Both fail with [`ArithmeticError::Overflow`]
//! instead of wrapping.

use crate::error::{ArgumentError, ArithmeticError};

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_U64: u32 = 20;
/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_U128: u32 = 34;

/// `n!` as a `u64`.
pub fn factorial_exact(n: u32) -> Result<u64, ArithmeticError> {
    if n > MAX_FACTORIAL_U64 {
        return Err(ArithmeticError::overflow(format!(
            "factorial of {n} (at most {MAX_FACTORIAL_U64} fits in u64)"
        )));
    }
    Ok((2..=u64::from(n)).product())
}

/// `n!` as a `u128`.
pub fn factorial_wide(n: u32) -> Result<u128, ArithmeticError> {
    if n > MAX_FACTORIAL_U128 {
        return Err(ArithmeticError::overflow(format!(
            "factorial of {n} (at most {MAX_FACTORIAL_U128} fits in u128)"
        )));
    }
    Ok((2..=u128::from(n)).product())
}

/// `n choose r` as a `u64`. Requires `0 < r <= n`.
pub fn binomial_exact(n: u32, r: u32) -> Result<u64, ArithmeticError> {
    let wide = binomial_wide(n, r)?;
    u64::try_from(wide).map_err(|_| ArithmeticError::overflow(format!("binomial({n}, {r}) in u64")))
}

/// `n choose r` as a `u128`. Requires `0 < r <= n`.
///
/// Computed as a running product, dividing at every step, so intermediate
/// values stay close to the result.
pub fn binomial_wide(n: u32, r: u32) -> Result<u128, ArithmeticError> {
    if n == 0 || r == 0 || r > n {
        return Err(ArgumentError::invalid("r", format!("r: {r} n: {n}")).into());
    }

    let k = u128::from(r.min(n - r));
    let n = u128::from(n);
    let mut result: u128 = 1;
    for i in 1..=k {
        // result * (n - k + i) is always divisible by i
        result = result
            .checked_mul(n - k + i)
            .ok_or_else(|| ArithmeticError::overflow(format!("binomial({n}, {r})")))?
            / i;
    }
    Ok(result)
}

/// `value > 0`. NaN is neither positive nor negative.
#[inline]
pub fn is_positive<T: PartialOrd + Default>(value: T) -> bool {
    value > T::default()
}

/// `value < 0`. NaN is neither positive nor negative.
#[inline]
pub fn is_negative<T: PartialOrd + Default>(value: T) -> bool {
    value < T::default()
}

/// Even/odd tests for integers.
pub trait Parity: Copy {
    /// Divisible by two.
    fn is_even(self) -> bool;

    /// Not divisible by two.
    #[inline]
    fn is_odd(self) -> bool {
        !self.is_even()
    }
}

macro_rules! parity_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl Parity for $t {
                #[inline]
                fn is_even(self) -> bool {
                    self & 1 == 0
                }
            }
        )*
    };
}

parity_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Free-function form of [`Parity::is_even`].
#[inline]
pub fn is_even<T: Parity>(value: T) -> bool {
    value.is_even()
}

/// Free-function form of [`Parity::is_odd`].
#[inline]
pub fn is_odd<T: Parity>(value: T) -> bool {
    value.is_odd()
}
