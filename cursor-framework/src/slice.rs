use crate::cursor::Cursor;
use crate::position::Position;
use std::fmt;

/// A cursor over a slice of elements.
///
/// Works for bytes (binary formats), characters, or token streams. Elements
/// are cloned out by [`peek`](Cursor::peek), so heavy tokens are best kept
/// behind an `Rc` or replaced by a `Copy` kind.
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: &'a [T]) -> Self {
        Self { data, index: 0 }
    }

    /// Creates a cursor one past the last element of `data`.
    pub fn end_of(data: &'a [T]) -> Self {
        Self {
            data,
            index: data.len(),
        }
    }

    /// Returns the `[begin, end)` cursor pair covering all of `data`.
    pub fn range(data: &'a [T]) -> (Self, Self) {
        (Self::new(data), Self::end_of(data))
    }

    /// Returns the element index of this cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the elements between `self` and `end`.
    pub fn slice(&self, end: &Self) -> &'a [T] {
        self.data.get(self.index..end.index).unwrap_or(&[])
    }

    /// Returns the position of this cursor, with the index as the column.
    pub fn position(&self) -> Position {
        Position::of_index(self.index)
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.data, other.data)
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.data.len())
            .finish()
    }
}

impl<T: Clone> Cursor for SliceCursor<'_, T> {
    type Item = T;

    #[inline]
    fn peek(&self, end: &Self) -> Option<T> {
        if self.index < end.index {
            self.data.get(self.index).cloned()
        } else {
            None
        }
    }

    #[inline]
    fn advance(self) -> Self {
        Self {
            data: self.data,
            index: self.index + 1,
        }
    }

    #[inline]
    fn advance_by(self, n: usize) -> Self {
        Self {
            data: self.data,
            index: self.index + n,
        }
    }

    #[inline]
    fn distance(&self, end: &Self) -> usize {
        end.index.saturating_sub(self.index)
    }
}
