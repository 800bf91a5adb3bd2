//! Hash-code helpers built on the start-value / multiply-and-add accumulator.
//!
//! ```rust
//! use sugars_util::hash::{HashBuilder, HASHCODE_START, result_add_field};
//!
//! let mut result = HASHCODE_START;
//! result = result_add_field(result, &42i32);
//! result = result_add_field(result, "name");
//!
//! let built = HashBuilder::new().field(&42i32).field("name").finish();
//! assert_eq!(result, built);
//! ```
//!
//! Per-type values are stable across runs and platforms, unlike
//! [`std::hash::Hash`] with a randomly seeded hasher, so they are usable as
//! persisted fingerprints.

use crate::eq::{canonical_bits_f32, canonical_bits_f64};

/// Initial accumulator value.
pub const HASHCODE_START: i32 = 17;
/// Hash of an absent value.
pub const HASHCODE_NONE: i32 = 0;
/// Factor applied to the accumulator before each field is added.
pub const HASHCODE_MULTIPLIER: i32 = 31;

/// A deterministic 32-bit hash for a single field.
///
/// Implementations agree with [`BitEq`](crate::eq::BitEq): values that are
/// `bit_eq` hash identically.
pub trait FieldHash {
    /// The field's hash code.
    fn field_hash(&self) -> i32;
}

/// Folds `field` into `result`: `31 * result + hash(field)`, wrapping.
#[inline]
pub fn result_add_field<F: FieldHash + ?Sized>(result: i32, field: &F) -> i32 {
    HASHCODE_MULTIPLIER
        .wrapping_mul(result)
        .wrapping_add(field.field_hash())
}

/// Hash of a single field.
#[inline]
pub fn hash<F: FieldHash + ?Sized>(field: &F) -> i32 {
    field.field_hash()
}

/// Hash of a sequence: [`HASHCODE_START`] folded with every element.
pub fn hash_all<'a, F, I>(fields: I) -> i32
where
    F: FieldHash + ?Sized + 'a,
    I: IntoIterator<Item = &'a F>,
{
    fields
        .into_iter()
        .fold(HASHCODE_START, |acc, f| result_add_field(acc, f))
}

/// Fluent wrapper over the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashBuilder {
    result: i32,
}

impl HashBuilder {
    /// Starts at [`HASHCODE_START`].
    pub fn new() -> Self {
        Self {
            result: HASHCODE_START,
        }
    }

    /// Folds one more field in.
    #[must_use]
    pub fn field<F: FieldHash + ?Sized>(self, field: &F) -> Self {
        Self {
            result: result_add_field(self.result, field),
        }
    }

    /// The accumulated hash code.
    pub fn finish(self) -> i32 {
        self.result
    }
}

impl Default for HashBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldHash for bool {
    #[inline]
    fn field_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

macro_rules! field_hash_widening {
    ($($t:ty),* $(,)?) => {
        $(
            impl FieldHash for $t {
                #[inline]
                fn field_hash(&self) -> i32 {
                    i32::from(*self)
                }
            }
        )*
    };
}

field_hash_widening!(i8, i16, i32, u8, u16);

impl FieldHash for u32 {
    #[inline]
    fn field_hash(&self) -> i32 {
        *self as i32
    }
}

impl FieldHash for char {
    #[inline]
    fn field_hash(&self) -> i32 {
        *self as i32
    }
}

#[inline]
fn fold_u64(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as i32
}

impl FieldHash for i64 {
    #[inline]
    fn field_hash(&self) -> i32 {
        fold_u64(*self as u64)
    }
}

impl FieldHash for u64 {
    #[inline]
    fn field_hash(&self) -> i32 {
        fold_u64(*self)
    }
}

impl FieldHash for isize {
    #[inline]
    fn field_hash(&self) -> i32 {
        (*self as i64).field_hash()
    }
}

impl FieldHash for usize {
    #[inline]
    fn field_hash(&self) -> i32 {
        (*self as u64).field_hash()
    }
}

impl FieldHash for f32 {
    #[inline]
    fn field_hash(&self) -> i32 {
        canonical_bits_f32(*self) as i32
    }
}

impl FieldHash for f64 {
    #[inline]
    fn field_hash(&self) -> i32 {
        fold_u64(canonical_bits_f64(*self))
    }
}

// Polynomial over UTF-16 code units, so non-BMP text hashes like the
// equivalent surrogate pairs would.
impl FieldHash for str {
    fn field_hash(&self) -> i32 {
        self.encode_utf16().fold(0i32, |acc, unit| {
            acc.wrapping_mul(HASHCODE_MULTIPLIER)
                .wrapping_add(i32::from(unit))
        })
    }
}

impl FieldHash for String {
    #[inline]
    fn field_hash(&self) -> i32 {
        self.as_str().field_hash()
    }
}

impl<T: FieldHash + ?Sized> FieldHash for &T {
    #[inline]
    fn field_hash(&self) -> i32 {
        (**self).field_hash()
    }
}

impl<T: FieldHash> FieldHash for Option<T> {
    #[inline]
    fn field_hash(&self) -> i32 {
        self.as_ref().map_or(HASHCODE_NONE, FieldHash::field_hash)
    }
}

impl<T: FieldHash> FieldHash for [T] {
    #[inline]
    fn field_hash(&self) -> i32 {
        hash_all(self)
    }
}

impl<T: FieldHash, const N: usize> FieldHash for [T; N] {
    #[inline]
    fn field_hash(&self) -> i32 {
        hash_all(self.as_slice())
    }
}

impl<T: FieldHash> FieldHash for Vec<T> {
    #[inline]
    fn field_hash(&self) -> i32 {
        hash_all(self.as_slice())
    }
}

#[cfg(feature = "collections")]
impl FieldHash for crate::collections::IntRange {
    fn field_hash(&self) -> i32 {
        self.iter()
            .fold(HASHCODE_START, |acc, v| result_add_field(acc, &v))
    }
}
