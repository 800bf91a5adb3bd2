//! Declarative shorthands for collections, hash codes and named enums.
//!
//! All macros are exported at the crate root.

/// Creates a [`hashbrown::HashSet`] from the listed values.
///
/// ```rust
/// use sugars_util::hash_set;
///
/// let set = hash_set!["a", "b", "a"];
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("b"));
/// ```
#[macro_export]
macro_rules! hash_set {
    [$($v:expr),* $(,)?] => {
        $crate::collections::factory::set([$($v,)*])
    };
}

/// Creates a deduplicated `Vec` that keeps the first occurrence of each
/// value in order.
///
/// ```rust
/// use sugars_util::linked_set;
///
/// assert_eq!(linked_set![3, 1, 3, 2, 1], vec![3, 1, 2]);
/// ```
#[macro_export]
macro_rules! linked_set {
    [$($v:expr),* $(,)?] => {
        $crate::collections::factory::linked_set([$($v,)*])
    };
}

/// Creates a [`hashbrown::HashMap`] from `key => value` pairs. A repeated
/// key keeps its last value.
///
/// ```rust
/// use sugars_util::hash_map;
///
/// let map = hash_map! {
///     "one" => 1,
///     "two" => 2,
/// };
/// assert_eq!(map["two"], 2);
/// ```
#[macro_export]
macro_rules! hash_map {
    {$($k:expr => $v:expr),* $(,)?} => {
        $crate::collections::factory::map_from_pairs([$(($k, $v),)*])
    };
}

/// Combines field hashes with the 17/31 scheme from [`crate::hash`].
///
/// ```rust
/// use sugars_util::{hash::HashBuilder, hashcode};
///
/// let name = String::from("range");
/// let code = hashcode!(1_i32, name, [4_i32, 5]);
/// let same = HashBuilder::new().field(&1_i32).field(&name).field(&[4_i32, 5]).finish();
/// assert_eq!(code, same);
/// assert_eq!(hashcode!(), 17);
/// ```
#[macro_export]
macro_rules! hashcode {
    ($($field:expr),* $(,)?) => {
        $crate::hash::HashBuilder::new()$(.field(&$field))*.finish()
    };
}

/// Declares a field-less enum and implements
/// [`NamedEnum`](crate::enums::NamedEnum) for it. Each variant is named as
/// written in source.
///
/// ```rust
/// use sugars_util::{enums::NamedEnum, named_enum};
///
/// named_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     enum Suit { Clubs, Diamonds, Hearts, Spades }
/// }
///
/// assert_eq!(Suit::Hearts.name(), "Hearts");
/// assert_eq!(Suit::VARIANTS.len(), 4);
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $crate::enums::NamedEnum for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant,)+];

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }
    };
}
