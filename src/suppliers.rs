//! Zero-argument value factories.

/// Always yields a clone of `value`.
pub fn singleton_supplier<T: Clone>(value: T) -> impl Fn() -> T + Clone {
    move || value.clone()
}

/// Yields a fresh `T::default()` on every call.
pub fn default_supplier<T: Default>() -> impl Fn() -> T + Copy {
    T::default
}

/// Always yields `None`.
pub fn none_supplier<T>() -> impl Fn() -> Option<T> + Copy {
    || None
}
