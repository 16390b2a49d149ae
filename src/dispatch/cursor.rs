//! Iteration protocol: a cursor opened by `begin` and a one-past-the-end
//! position returned by `end`.

use std::iter::FusedIterator;

/// Element position in storage or link order; `end` is one past the last element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// Position of the first element
    pub const START: Position = Position(0);

    /// Position at `index`
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based index
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Iterator that tracks how many elements it has yielded.
///
/// A cursor compares equal to a [`Position`] when it sits on that position,
/// which is how `z_foreach!` decides it has reached `end`.
#[derive(Debug, Clone, Default)]
pub struct Cursor<I> {
    iter: I,
    position: usize,
}

impl<I: Iterator> Cursor<I> {
    /// Cursor at [`Position::START`] over `iter`
    #[inline]
    pub fn new(iter: I) -> Self {
        Self { iter, position: 0 }
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> Position {
        Position(self.position)
    }

    /// Element under the cursor, advancing past it
    #[inline]
    pub fn advance(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        self.position += 1;
        Some(item)
    }

    /// Unwrap the underlying iterator
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Cursor<I> {}

impl<I> PartialEq<Position> for Cursor<I> {
    #[inline]
    fn eq(&self, other: &Position) -> bool {
        self.position == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_tracks_position() {
        let data = [1, 2, 3];
        let mut cursor = Cursor::new(data.iter());
        let end = Position::new(data.len());

        assert!(cursor == Position::START);
        assert_eq!(cursor.advance(), Some(&1));
        assert_eq!(cursor.position(), Position::new(1));
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.next(), Some(&3));
        assert!(cursor == end);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position().index(), 3);
    }

    #[test]
    fn test_empty_cursor_starts_at_end() {
        let cursor: Cursor<std::iter::Empty<u8>> = Cursor::default();
        assert!(cursor == Position::START);
        assert_eq!(cursor.count(), 0);
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1) < Position::new(2));
        assert_eq!(Position::default(), Position::START);
    }
}
