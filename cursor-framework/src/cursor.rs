/// A copyable position inside an input sequence.
///
/// Rules never own their input: they receive two cursors `(i1, i2)` that
/// delimit the unconsumed remainder and hand back a new cursor describing how
/// far they got. Backtracking is just reusing an older cursor value, so a
/// cursor must be cheap to copy and compare.
///
/// Cursors being compared or measured must come from the same sequence.
pub trait Cursor: Copy + PartialEq {
    /// The element type yielded by [`peek`](Cursor::peek).
    type Item;

    /// Returns the element under the cursor, or `None` when `self == end`.
    fn peek(&self, end: &Self) -> Option<Self::Item>;

    /// Moves forward by one element.
    ///
    /// The caller must have checked that the cursor is not at the end.
    fn advance(self) -> Self;

    /// Moves forward by `n` elements.
    ///
    /// The caller must have checked that at least `n` elements remain.
    fn advance_by(self, n: usize) -> Self {
        (0..n).fold(self, |cursor, _| cursor.advance())
    }

    /// Number of elements between `self` and `end`.
    fn distance(&self, end: &Self) -> usize;

    /// Whether at least `n` elements remain before `end`.
    ///
    /// Cursors whose [`distance`](Cursor::distance) is not O(1) should
    /// override this to stop after `n` elements.
    #[inline]
    fn has_at_least(&self, n: usize, end: &Self) -> bool {
        self.distance(end) >= n
    }

    /// Returns the next element and the cursor past it, or `None` at `end`.
    #[inline]
    fn next_item(self, end: &Self) -> Option<(Self::Item, Self)> {
        let item = self.peek(end)?;
        Some((item, self.advance()))
    }
}
