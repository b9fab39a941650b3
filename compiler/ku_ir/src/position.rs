//! Line/column source positions.

use std::fmt;

/// A 1-based line and column in the source text.
///
/// Ordering is lexicographic on `(line, column)`, which matches source order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first byte of any source.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Position after consuming a non-newline byte.
    #[inline]
    #[must_use]
    pub const fn next_column(self) -> Self {
        Position {
            line: self.line,
            column: self.column.saturating_add(1),
        }
    }

    /// Position after consuming a newline.
    #[inline]
    #[must_use]
    pub const fn next_line(self) -> Self {
        Position {
            line: self.line.saturating_add(1),
            column: 1,
        }
    }

    /// Position after consuming `byte`.
    #[inline]
    #[must_use]
    pub const fn after(self, byte: u8) -> Self {
        if byte == b'\n' {
            self.next_line()
        } else {
            self.next_column()
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
