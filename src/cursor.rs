/// Immutable position in a UTF-8 input string
///
/// A cursor is a `(source, offset)` pair. It never mutates in place: every
/// consuming operation returns a new cursor, so saving a position is just a
/// copy. Combinators rely on this to rewind after a failed attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    data: &'code str,
    /// Byte offset into `data`, always on a char boundary
    offset: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(data: &'code str) -> Self {
        Cursor { data, offset: 0 }
    }

    /// Check if there is input left after the current offset
    pub fn has_remaining(&self) -> bool {
        self.offset < self.data.len()
    }

    /// The unconsumed suffix of the input
    pub fn remaining(&self) -> &'code str {
        self.data.get(self.offset..).unwrap_or_default()
    }

    /// Return a cursor advanced by `n` bytes
    ///
    /// `n` must not exceed the remaining length and must land on a char
    /// boundary. This is the caller's obligation; the offset saturates at the
    /// end of input in release builds.
    pub fn advance(self, n: usize) -> Self {
        debug_assert!(n <= self.data.len() - self.offset);
        Cursor {
            data: self.data,
            offset: (self.offset + n).min(self.data.len()),
        }
    }

    /// Decode the next character and return it together with the cursor past it
    ///
    /// Returns `None` at end of input.
    pub fn next_char(self) -> Option<(char, Self)> {
        let ch = self.remaining().chars().next()?;
        Some((ch, self.advance(ch.len_utf8())))
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the whole input this cursor points into
    pub fn source(&self) -> &'code str {
        self.data
    }

    /// The text between `start` and this cursor
    ///
    /// Empty if `start` is not behind this cursor.
    pub fn consumed_since(&self, start: Cursor<'code>) -> &'code str {
        self.data.get(start.offset..self.offset).unwrap_or_default()
    }
}
