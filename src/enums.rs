//! Lookup helpers for field-less enums.
//!
//! Implement [`NamedEnum`] by hand or declare the enum with
//! [`named_enum!`](crate::named_enum):
//!
//! ```rust
//! use sugars_util::{enums, named_enum};
//!
//! named_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Day { Monday, Tuesday, Wednesday }
//! }
//!
//! assert_eq!(enums::value_by_name::<Day>("tUESday"), Some(Day::Tuesday));
//! assert_eq!(enums::value_by_name::<Day>("Tuesdays"), None);
//! ```

use crate::predicates::{enum_name_matches, equals_ignore_case};

/// An enum whose variants can be listed and named at runtime.
pub trait NamedEnum: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The variant's name as written in source.
    fn name(&self) -> &'static str;

    /// Position of the variant in [`VARIANTS`](NamedEnum::VARIANTS), or
    /// `None` if the list leaves it out.
    fn ordinal(&self) -> Option<usize>
    where
        Self: PartialEq,
    {
        Self::VARIANTS.iter().position(|v| v == self)
    }
}

/// Every variant of `E`, in declaration order.
#[inline]
pub fn values<E: NamedEnum>() -> &'static [E] {
    E::VARIANTS
}

/// The variant whose name equals `name`, ignoring case.
pub fn value_by_name<E: NamedEnum>(name: &str) -> Option<E> {
    value_matching(enum_name_matches(equals_ignore_case(name)))
}

/// The first variant the predicate accepts.
pub fn value_matching<E, P>(predicate: P) -> Option<E>
where
    E: NamedEnum,
    P: Fn(&E) -> bool,
{
    crate::array::first_matching(E::VARIANTS, |v| predicate(v)).copied()
}
