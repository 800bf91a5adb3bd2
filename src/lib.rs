//! # Sugars Util
//!
//! Lazy integer ranges and a toolbox of small, dependable helpers.
//!
//! The centrepiece is [`IntRange`]: an immutable, lazily computed sequence
//! of consecutive `i32` values that counts up or down and never allocates
//! its elements. Around it sit argument checks, stable hash codes,
//! bit-exact equality, enum lookup, collection factories, a slice cursor,
//! exact combinatorics, English number words, reusable predicates and
//! suppliers, bounded randomness and pluggable error handling.
//!
//! ## Features
//!
//! - `collections` - [`IntRange`], collection factories and `ArrayCursor`
//! - `macros` - `hash_set!`, `linked_set!`, `hash_map!`, `hashcode!`, `named_enum!`
//! - `random` - bounded random numbers backed by `rand`
//! - `serde` - `Serialize` for [`IntRange`] and the hashbrown collections
//!
//! ## Example
//!
//! ```rust
//! use sugars_util::{range, text};
//!
//! let countdown = range(3, 0);
//! assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
//! assert_eq!(countdown.get(1), Ok(2));
//! assert!(countdown.get(3).is_err());
//!
//! assert_eq!(text::letter_string(42), "forty two");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod arg;
pub mod array;
pub mod enums;
pub mod eq;
pub mod error;
pub mod handler;
pub mod hash;
pub mod math;
pub mod predicates;
pub mod suppliers;
pub mod text;

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "macros")]
pub mod macros;

#[cfg(feature = "random")]
pub mod random;

pub use error::{
    ArgumentError, ArithmeticError, BoxError, CursorError, Result, SequenceError, SugarError,
};

#[cfg(feature = "collections")]
pub use collections::{range, range_of, ArrayCursor, IntRange};
