//! Structural equality with bit-pattern semantics for floating point values.
//!
//! `f32`/`f64` compare by their canonical bit pattern instead of IEEE `==`:
//! every NaN equals every other NaN, and `+0.0` is *not* equal to `-0.0`.
//! Values that are `bit_eq` have the same
//! [`FieldHash`](crate::hash::FieldHash).

/// Equality that is reflexive for every value, floats included.
pub trait BitEq<Rhs: ?Sized = Self> {
    /// Returns true if `self` and `other` are structurally equal.
    fn bit_eq(&self, other: &Rhs) -> bool;
}

/// Free-function form of [`BitEq::bit_eq`].
#[inline]
pub fn equals<T: BitEq + ?Sized>(one: &T, two: &T) -> bool {
    one.bit_eq(two)
}

macro_rules! bit_eq_by_partial_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl BitEq for $t {
                #[inline]
                fn bit_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

bit_eq_by_partial_eq!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String);

/// Bit pattern of `value` with every NaN collapsed onto the canonical NaN.
#[inline]
pub(crate) fn canonical_bits_f32(value: f32) -> u32 {
    if value.is_nan() {
        0x7fc0_0000
    } else {
        value.to_bits()
    }
}

/// Bit pattern of `value` with every NaN collapsed onto the canonical NaN.
#[inline]
pub(crate) fn canonical_bits_f64(value: f64) -> u64 {
    if value.is_nan() {
        0x7ff8_0000_0000_0000
    } else {
        value.to_bits()
    }
}

impl BitEq for f32 {
    #[inline]
    fn bit_eq(&self, other: &Self) -> bool {
        canonical_bits_f32(*self) == canonical_bits_f32(*other)
    }
}

impl BitEq for f64 {
    #[inline]
    fn bit_eq(&self, other: &Self) -> bool {
        canonical_bits_f64(*self) == canonical_bits_f64(*other)
    }
}

impl<T: BitEq + ?Sized> BitEq for &T {
    #[inline]
    fn bit_eq(&self, other: &Self) -> bool {
        (**self).bit_eq(*other)
    }
}

impl<T: BitEq> BitEq for Option<T> {
    #[inline]
    fn bit_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.bit_eq(b),
            _ => false,
        }
    }
}

impl<T: BitEq> BitEq for [T] {
    fn bit_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.bit_eq(b))
    }
}

impl<T: BitEq, const N: usize> BitEq for [T; N] {
    #[inline]
    fn bit_eq(&self, other: &Self) -> bool {
        self.as_slice().bit_eq(other.as_slice())
    }
}

impl<T: BitEq> BitEq for Vec<T> {
    #[inline]
    fn bit_eq(&self, other: &Self) -> bool {
        self.as_slice().bit_eq(other.as_slice())
    }
}
