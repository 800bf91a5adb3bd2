//! Reusable string predicates.
//!
//! The returned closures lower-case their needle once, at construction, and
//! compare the candidate lazily character by character.

use crate::enums::NamedEnum;

fn lowered(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Accepts strings that start with `prefix`, ignoring case.
pub fn starts_with_ignore_case(prefix: &str) -> impl Fn(&str) -> bool + Clone {
    let needle: Vec<char> = lowered(prefix).collect();
    move |candidate: &str| {
        let mut hay = lowered(candidate);
        needle.iter().all(|n| hay.next() == Some(*n))
    }
}

/// Accepts strings equal to `expected`, ignoring case.
pub fn equals_ignore_case(expected: &str) -> impl Fn(&str) -> bool + Clone {
    let needle: Vec<char> = lowered(expected).collect();
    move |candidate: &str| lowered(candidate).eq(needle.iter().copied())
}

/// Lifts a name predicate to enum values.
pub fn enum_name_matches<E, P>(predicate: P) -> impl Fn(&E) -> bool
where
    E: NamedEnum,
    P: Fn(&str) -> bool,
{
    move |value: &E| predicate(value.name())
}
