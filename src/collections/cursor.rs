use crate::error::{CursorError, SequenceError};

/// A bidirectional cursor over a mutable slice.
///
/// The cursor sits *between* elements. Right after construction
/// [`next_index`](ArrayCursor::next_index) is the start index (0 by default).
/// [`set`](ArrayCursor::set) writes through to the slice at the element most
/// recently returned by [`next`](ArrayCursor::next) or
/// [`previous`](ArrayCursor::previous). The slice length is fixed, so
/// [`add`](ArrayCursor::add) and [`remove`](ArrayCursor::remove) always fail.
///
/// ```rust
/// use sugars_util::collections::ArrayCursor;
///
/// let mut data = [1, 2, 3];
/// let mut cursor = ArrayCursor::new(&mut data);
/// assert_eq!(cursor.next().copied(), Ok(1));
/// cursor.set(10).unwrap();
/// assert_eq!(data, [10, 2, 3]);
/// ```
#[derive(Debug)]
pub struct ArrayCursor<'a, T> {
    slice: &'a mut [T],
    next_index: usize,
    current: Option<usize>,
}

impl<'a, T> ArrayCursor<'a, T> {
    /// Cursor positioned before the first element.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self::starting_at(0, slice)
    }

    /// Cursor positioned before `start_index`.
    ///
    /// A start index past the end yields a cursor with neither a next nor a
    /// previous element.
    pub fn starting_at(start_index: usize, slice: &'a mut [T]) -> Self {
        Self {
            slice,
            next_index: start_index,
            current: None,
        }
    }

    /// Whether [`next`](ArrayCursor::next) would return an element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next_index < self.slice.len()
    }

    /// Whether [`previous`](ArrayCursor::previous) would return an element.
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.next_index > 0 && self.next_index <= self.slice.len()
    }

    /// Advances past the next element and returns it.
    pub fn next(&mut self) -> Result<&T, CursorError> {
        if !self.has_next() {
            return Err(CursorError::Exhausted { direction: "next" });
        }
        let idx = self.next_index;
        self.next_index += 1;
        self.current = Some(idx);
        Ok(&self.slice[idx])
    }

    /// Steps back over the previous element and returns it.
    pub fn previous(&mut self) -> Result<&T, CursorError> {
        if !self.has_previous() {
            return Err(CursorError::Exhausted {
                direction: "previous",
            });
        }
        self.next_index -= 1;
        self.current = Some(self.next_index);
        Ok(&self.slice[self.next_index])
    }

    /// Index the next call to `next` would return.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Index the next call to `previous` would return, or `None` at the start.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.next_index.checked_sub(1)
    }

    /// Replaces the element last returned, returning the old value.
    pub fn set(&mut self, value: T) -> Result<T, CursorError> {
        let idx = self.current.ok_or(CursorError::NoCurrent)?;
        Ok(std::mem::replace(&mut self.slice[idx], value))
    }

    /// Always fails: the slice cannot grow.
    pub fn add(&mut self, _value: T) -> Result<(), CursorError> {
        Err(SequenceError::Unsupported { operation: "add" }.into())
    }

    /// Always fails: the slice cannot shrink.
    pub fn remove(&mut self) -> Result<T, CursorError> {
        Err(SequenceError::Unsupported { operation: "remove" }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_forward_walk() {
        let mut data = ["a", "b", "c"];
        let mut cursor = ArrayCursor::new(&mut data);
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.previous_index(), None);
        assert!(!cursor.has_previous());

        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(*cursor.next().expect("has next"));
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
        assert_eq!(
            cursor.next().unwrap_err(),
            CursorError::Exhausted { direction: "next" }
        );
    }

    #[test]
    fn test_backward_walk() {
        let mut data = [1, 2, 3];
        let mut cursor = ArrayCursor::starting_at(3, &mut data);
        assert!(!cursor.has_next());
        assert_eq!(cursor.previous().copied(), Ok(3));
        assert_eq!(cursor.previous().copied(), Ok(2));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.previous_index(), Some(0));
        assert_eq!(cursor.previous().copied(), Ok(1));
        assert!(cursor.previous().is_err());
    }

    #[test]
    fn test_set_writes_through() {
        let mut data = [1, 2, 3];
        {
            let mut cursor = ArrayCursor::new(&mut data);
            assert_eq!(cursor.set(0), Err(CursorError::NoCurrent));
            cursor.next().expect("first");
            cursor.next().expect("second");
            assert_eq!(cursor.set(20), Ok(2));
            cursor.previous().expect("back to second");
            cursor.previous().expect("back to first");
            assert_eq!(cursor.set(10), Ok(1));
        }
        assert_eq!(data, [10, 20, 3]);
    }

    #[test]
    fn test_size_changes_rejected() {
        let mut data = [1];
        let mut cursor = ArrayCursor::new(&mut data);
        assert!(matches!(
            cursor.add(2),
            Err(CursorError::Sequence(SequenceError::Unsupported { operation: "add" }))
        ));
        assert!(cursor.remove().is_err());
        assert!(cursor.has_next());
    }

    #[test]
    fn test_start_past_end() {
        let mut data = [1, 2];
        let mut cursor = ArrayCursor::starting_at(5, &mut data);
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert!(cursor.previous().is_err());
    }
}
