//! Search and filter helpers for slices.
//!
//! "Not found" is `None` rather than a sentinel index. Element equality uses
//! [`BitEq`], so a NaN can be found in a float slice while `-0.0` does not
//! match `+0.0`.

use crate::eq::BitEq;

/// Index of the first element equal to `element`.
pub fn index_of_element<T: BitEq>(elements: &[T], element: &T) -> Option<usize> {
    elements.iter().position(|e| element.bit_eq(e))
}

/// Whether any element equals `element`.
#[inline]
pub fn contains_element<T: BitEq>(elements: &[T], element: &T) -> bool {
    index_of_element(elements, element).is_some()
}

/// Index of the first absent slot.
pub fn index_of_none<T>(elements: &[Option<T>]) -> Option<usize> {
    elements.iter().position(Option::is_none)
}

/// Whether any slot is absent.
#[inline]
pub fn contains_none<T>(elements: &[Option<T>]) -> bool {
    index_of_none(elements).is_some()
}

/// Index of the first element the predicate accepts.
pub fn index_of_matching<T, P>(elements: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    elements.iter().position(|e| predicate(e))
}

/// Whether the predicate accepts any element.
#[inline]
pub fn contains_matching<T, P>(elements: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    index_of_matching(elements, predicate).is_some()
}

/// The first element the predicate accepts.
pub fn first_matching<T, P>(elements: &[T], predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    index_of_matching(elements, predicate).map(|idx| &elements[idx])
}

/// Copies the accepted elements, keeping their order.
pub fn filter<T, P>(elements: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    elements.iter().filter(|e| predicate(e)).cloned().collect()
}
