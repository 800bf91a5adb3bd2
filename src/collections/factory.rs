//! Owned collections built from any iterable.
//!
//! These back the [`hash_set!`](crate::hash_set), [`linked_set!`](crate::linked_set)
//! and [`hash_map!`](crate::hash_map) macros. The input is consumed, so
//! later changes to the source cannot leak into the result.

use crate::error::ArgumentError;
use hashbrown::{HashMap, HashSet};
use std::hash::Hash;

/// Unordered set of the given items; duplicates collapse.
#[inline]
pub fn set<T, I>(items: I) -> HashSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect()
}

/// Deduplicated items in insertion order; the first occurrence wins.
pub fn linked_set<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let items = items.into_iter();
    let mut seen = HashSet::with_capacity(items.size_hint().0);
    let mut out = Vec::with_capacity(items.size_hint().0);
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

/// A growable list of the given items, in order.
#[inline]
pub fn list<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect()
}

/// Map from `(key, value)` pairs; a repeated key keeps its last value.
#[inline]
pub fn map_from_pairs<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}

/// Map from a flat list where even positions are keys and odd positions
/// their values.
///
/// Fails with [`ArgumentError::Invalid`] if the list has an odd length,
/// since the last key would have no value.
pub fn map_from_alternating<T>(items: Vec<T>) -> Result<HashMap<T, T>, ArgumentError>
where
    T: Eq + Hash,
{
    if items.len() % 2 != 0 {
        return Err(ArgumentError::invalid(
            "items",
            format!("an uneven number of items was passed ({})", items.len()),
        ));
    }

    let mut map = HashMap::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        map.insert(key, value);
    }
    Ok(map)
}
