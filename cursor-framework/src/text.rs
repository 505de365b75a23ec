use crate::cursor::Cursor;
use crate::position::Position;
use std::fmt;

/// A cursor over UTF-8 text.
///
/// Steps one `char` at a time and keeps the line/column [`Position`] up to
/// date, so a failing rule can be located in the source. Equality only looks
/// at the byte offset (and the identity of the text).
#[derive(Clone, Copy)]
pub struct TextCursor<'a> {
    text: &'a str,
    position: Position,
}

impl<'a> TextCursor<'a> {
    /// Creates a cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: Position::new(),
        }
    }

    /// Creates a cursor at the end of `text`.
    ///
    /// Walks the text once to compute the final line and column.
    pub fn end_of(text: &'a str) -> Self {
        Self {
            text,
            position: text.chars().fold(Position::new(), Position::after),
        }
    }

    /// Returns the `[begin, end)` cursor pair covering all of `text`.
    pub fn range(text: &'a str) -> (Self, Self) {
        (Self::new(text), Self::end_of(text))
    }

    /// Returns the line/column/offset of this cursor.
    pub fn location(&self) -> Position {
        self.position
    }

    /// Returns the byte offset of this cursor.
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Returns the text between `self` and `end`.
    pub fn slice(&self, end: &Self) -> &'a str {
        self.text.get(self.offset()..end.offset()).unwrap_or("")
    }

    /// Returns the remaining input from this cursor.
    pub fn remaining(&self) -> &'a str {
        self.text.get(self.offset()..).unwrap_or("")
    }
}

impl PartialEq for TextCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.position.offset == other.position.offset && std::ptr::eq(self.text, other.text)
    }
}

impl Eq for TextCursor<'_> {}

impl fmt::Debug for TextCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCursor")
            .field("position", &self.position)
            .finish()
    }
}

impl Cursor for TextCursor<'_> {
    type Item = char;

    #[inline]
    fn peek(&self, end: &Self) -> Option<char> {
        if self.offset() < end.offset() {
            self.remaining().chars().next()
        } else {
            None
        }
    }

    #[inline]
    fn advance(self) -> Self {
        match self.remaining().chars().next() {
            Some(ch) => Self {
                text: self.text,
                position: self.position.after(ch),
            },
            None => self,
        }
    }

    fn distance(&self, end: &Self) -> usize {
        self.slice(end).chars().count()
    }

    fn has_at_least(&self, n: usize, end: &Self) -> bool {
        self.slice(end).chars().take(n).count() == n
    }

    #[inline]
    fn next_item(self, end: &Self) -> Option<(char, Self)> {
        let ch = self.peek(end)?;
        Some((
            ch,
            Self {
                text: self.text,
                position: self.position.after(ch),
            },
        ))
    }
}
