//! Collection utilities and data structures

/// Bidirectional cursor over a fixed-length slice.
pub mod cursor;
/// Factory functions for sets, lists and maps.
pub mod factory;
/// Lazy immutable integer ranges.
pub mod range;

pub use cursor::ArrayCursor;
pub use factory::{linked_set, list, map_from_alternating, map_from_pairs, set};
pub use range::{range, range_of, Bounds, Direction, IntRange, IntRangeIter};
