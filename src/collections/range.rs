// -----------------------------------------------------------------------------
// src/collections/range.rs
// -----------------------------------------------------------------------------

use crate::error::SequenceError;
use std::fmt;
use std::iter::FusedIterator;

/// Ranges longer than this render as `start..end` instead of a full list.
const DISPLAY_LIMIT: usize = 16;

/// Direction of a non-empty [`IntRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Each element is one greater than the previous
    Ascending,
    /// Each element is one less than the previous
    Descending,
}

/// Bounds of a non-empty range. Fields are private so the variant invariant
/// (`start < end` ascending, `start > end` descending) cannot be broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    start: i32,
    end: i32,
}

/// A read-only, lazily evaluated sequence of consecutive `i32`s.
///
/// The sequence is computed from its two bounds: `start` is inclusive and
/// `end` is exclusive. When `end > start` the elements ascend, when
/// `end < start` they descend, and `start == end` is the canonical
/// [`IntRange::Empty`]. No element is ever stored.
///
/// ### Complexity
/// Construction, [`get`](IntRange::get), [`index_of`](IntRange::index_of),
/// [`contains`](IntRange::contains) and [`sub_range`](IntRange::sub_range)
/// are all O(1).
///
/// ### Immutability
/// The value is `Copy` and has no interior mutability. The list-style
/// mutators ([`push`](IntRange::push), [`remove`](IntRange::remove),
/// [`clear`](IntRange::clear), ...) exist only to reject: each returns
/// [`SequenceError::Unsupported`] and leaves the range untouched.
///
/// ### Examples
/// ```rust
/// use sugars_util::collections::range;
///
/// let up = range(0, 10);
/// assert_eq!(up.len(), 10);
/// assert_eq!(up.get(2), Ok(2));
/// assert_eq!(up.index_of(10), None);
///
/// let down = range(10, 0);
/// assert_eq!(down.get(9), Ok(1));
/// assert_eq!(down.sub_range(2, 5).unwrap().to_vec(), vec![8, 7, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntRange {
    /// The empty sequence
    #[default]
    Empty,
    /// `start, start + 1, ..., end - 1`
    Ascending(Bounds),
    /// `start, start - 1, ..., end + 1`
    Descending(Bounds),
}

/// Creates the range of integers from `start` (inclusive) to `end` (exclusive).
///
/// The direction follows the sign of `end - start`.
#[inline]
pub fn range(start: i32, end: i32) -> IntRange {
    IntRange::new(start, end)
}

/// Shorthand for `range(0, size)`. A negative `size` descends from zero.
#[inline]
pub fn range_of(size: i32) -> IntRange {
    IntRange::new(0, size)
}

impl IntRange {
    /// See [`range`].
    #[inline]
    pub fn new(start: i32, end: i32) -> Self {
        use std::cmp::Ordering;

        match end.cmp(&start) {
            Ordering::Equal => IntRange::Empty,
            Ordering::Greater => IntRange::Ascending(Bounds { start, end }),
            Ordering::Less => IntRange::Descending(Bounds { start, end }),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        match *self {
            IntRange::Empty => 0,
            IntRange::Ascending(Bounds { start, end }) => (i64::from(end) - i64::from(start)) as usize,
            IntRange::Descending(Bounds { start, end }) => (i64::from(start) - i64::from(end)) as usize,
        }
    }

    /// True only for [`IntRange::Empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, IntRange::Empty)
    }

    /// The direction, or `None` for the empty range.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        match self {
            IntRange::Empty => None,
            IntRange::Ascending(_) => Some(Direction::Ascending),
            IntRange::Descending(_) => Some(Direction::Descending),
        }
    }

    /// Inclusive start bound, or `None` for the empty range.
    #[inline]
    pub fn start(&self) -> Option<i32> {
        match self {
            IntRange::Empty => None,
            IntRange::Ascending(b) | IntRange::Descending(b) => Some(b.start),
        }
    }

    /// Exclusive end bound, or `None` for the empty range.
    #[inline]
    pub fn end(&self) -> Option<i32> {
        match self {
            IntRange::Empty => None,
            IntRange::Ascending(b) | IntRange::Descending(b) => Some(b.end),
        }
    }

    /// Element at `index`.
    ///
    /// Fails with [`SequenceError::OutOfRange`] unless `index < len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i32, SequenceError> {
        let size = self.len();
        if index >= size {
            return Err(SequenceError::OutOfRange {
                name: "index",
                index,
                size,
            });
        }
        Ok(self.element_at(index))
    }

    /// First element, if any.
    #[inline]
    pub fn first(&self) -> Option<i32> {
        self.start()
    }

    /// Last element, if any.
    #[inline]
    pub fn last(&self) -> Option<i32> {
        match *self {
            IntRange::Empty => None,
            IntRange::Ascending(Bounds { end, .. }) => Some(end - 1),
            IntRange::Descending(Bounds { end, .. }) => Some(end + 1),
        }
    }

    /// Position of `value`, or `None` if the range does not contain it.
    #[inline]
    pub fn index_of(&self, value: i32) -> Option<usize> {
        match *self {
            IntRange::Empty => None,
            IntRange::Ascending(Bounds { start, end }) if start <= value && value < end => {
                Some((i64::from(value) - i64::from(start)) as usize)
            }
            IntRange::Descending(Bounds { start, end }) if end < value && value <= start => {
                Some((i64::from(start) - i64::from(value)) as usize)
            }
            _ => None,
        }
    }

    /// Same as [`index_of`](IntRange::index_of); every value occurs at most once.
    #[inline]
    pub fn last_index_of(&self, value: i32) -> Option<usize> {
        self.index_of(value)
    }

    /// Whether `value` is an element of the range.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.index_of(value).is_some()
    }

    /// The elements from `from_index` (inclusive) to `to_index` (exclusive),
    /// as a new range in the same direction.
    ///
    /// Both indices must lie in `[0, len()]` and `from_index <= to_index`.
    pub fn sub_range(&self, from_index: usize, to_index: usize) -> Result<IntRange, SequenceError> {
        self.bound_check(from_index, "from_index")?;
        self.bound_check(to_index, "to_index")?;
        if from_index > to_index {
            return Err(SequenceError::InvertedRange {
                from: from_index,
                to: to_index,
            });
        }
        if from_index == to_index {
            return Ok(IntRange::Empty);
        }
        // Both indices are at most len(), so the shifted bounds stay within
        // the parent's bounds.
        Ok(match *self {
            IntRange::Empty => IntRange::Empty,
            IntRange::Ascending(Bounds { start, .. }) => {
                IntRange::new(shift(start, from_index, 1), shift(start, to_index, 1))
            }
            IntRange::Descending(Bounds { start, .. }) => {
                IntRange::new(shift(start, from_index, -1), shift(start, to_index, -1))
            }
        })
    }

    /// Iterator over the elements in sequence order.
    #[inline]
    pub fn iter(&self) -> IntRangeIter {
        IntRangeIter {
            range: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Materialises the elements.
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    #[inline]
    fn element_at(&self, index: usize) -> i32 {
        match *self {
            IntRange::Empty => unreachable!("empty range has no elements"),
            IntRange::Ascending(Bounds { start, .. }) => shift(start, index, 1),
            IntRange::Descending(Bounds { start, .. }) => shift(start, index, -1),
        }
    }

    fn bound_check(&self, index: usize, name: &'static str) -> Result<(), SequenceError> {
        let size = self.len();
        if index > size {
            return Err(SequenceError::OutOfRange { name, index, size });
        }
        Ok(())
    }
}

/// `start + step * offset` where the caller guarantees the result is in `i32`.
#[inline]
fn shift(start: i32, offset: usize, step: i64) -> i32 {
    (i64::from(start) + step * offset as i64) as i32
}

// Mutation rejection
impl IntRange {
    #[inline]
    fn reject<T>(&self, operation: &'static str) -> Result<T, SequenceError> {
        log::trace!("rejected {} on immutable range {}", operation, self);
        Err(SequenceError::Unsupported { operation })
    }

    /// Always fails: ranges cannot grow.
    pub fn push(&self, _value: i32) -> Result<(), SequenceError> {
        self.reject("push")
    }

    /// Always fails: ranges cannot grow.
    pub fn insert(&self, _index: usize, _value: i32) -> Result<(), SequenceError> {
        self.reject("insert")
    }

    /// Always fails: ranges cannot grow.
    pub fn extend<I: IntoIterator<Item = i32>>(&self, _values: I) -> Result<(), SequenceError> {
        self.reject("extend")
    }

    /// Always fails: ranges cannot shrink.
    pub fn remove(&self, _value: i32) -> Result<bool, SequenceError> {
        self.reject("remove")
    }

    /// Always fails: ranges cannot shrink.
    pub fn remove_at(&self, _index: usize) -> Result<i32, SequenceError> {
        self.reject("remove_at")
    }

    /// Always fails: ranges cannot shrink.
    pub fn retain<F: FnMut(i32) -> bool>(&self, _keep: F) -> Result<(), SequenceError> {
        self.reject("retain")
    }

    /// Always fails: ranges cannot shrink.
    pub fn clear(&self) -> Result<(), SequenceError> {
        self.reject("clear")
    }

    /// Always fails: elements are computed, not stored.
    pub fn set(&self, _index: usize, _value: i32) -> Result<i32, SequenceError> {
        self.reject("set")
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IntRange::Empty => f.write_str("[]"),
            _ if self.len() <= DISPLAY_LIMIT => f.debug_list().entries(self.iter()).finish(),
            IntRange::Ascending(Bounds { start, end }) | IntRange::Descending(Bounds { start, end }) => {
                write!(f, "{start}..{end}")
            }
        }
    }
}

/// Double-ended iterator over an [`IntRange`].
#[derive(Debug, Clone)]
pub struct IntRangeIter {
    range: IntRange,
    front: usize,
    back: usize,
}

impl Iterator for IntRangeIter {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        if self.front >= self.back {
            return None;
        }
        let value = self.range.element_at(self.front);
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<i32> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for IntRangeIter {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.range.element_at(self.back))
    }
}

impl ExactSizeIterator for IntRangeIter {}

impl FusedIterator for IntRangeIter {}

impl IntoIterator for IntRange {
    type Item = i32;
    type IntoIter = IntRangeIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &IntRange {
    type Item = i32;
    type IntoIter = IntRangeIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<std::ops::Range<i32>> for IntRange {
    #[inline]
    fn from(r: std::ops::Range<i32>) -> Self {
        IntRange::new(r.start, r.end)
    }
}

impl From<IntRange> for Vec<i32> {
    #[inline]
    fn from(value: IntRange) -> Self {
        value.to_vec()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IntRange {
    fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_seq(self.iter())
    }
}
