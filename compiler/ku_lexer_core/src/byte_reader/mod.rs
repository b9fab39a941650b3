//! Sequential byte reader with end-of-input sentinel.


/// Number of codes the scanner holds ahead of the reader's cursor.
///
/// When the scanner's current code is the byte at index `i`, its next code
/// is `i + 1` and the reader's cursor is at `i + 2`.
pub const LOOKAHEAD: usize = 2;

/// One unit of scanner input: a byte, or the end-of-input sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Code {
    Byte(u8),
    Eof,
}

impl Code {
    #[inline]
    pub const fn byte(self) -> Option<u8> {
        match self {
            Code::Byte(b) => Some(b),
            Code::Eof => None,
        }
    }

    #[inline]
    pub const fn is(self, expected: u8) -> bool {
        matches!(self, Code::Byte(b) if b == expected)
    }

    #[inline]
    pub const fn is_eof(self) -> bool {
        matches!(self, Code::Eof)
    }

    /// True if the byte satisfies `pred`; always false at end of input.
    #[inline]
    pub fn is_byte_and(self, pred: impl FnOnce(u8) -> bool) -> bool {
        self.byte().is_some_and(pred)
    }
}

/// Reads a borrowed buffer one byte per call.
///
/// The cursor keeps advancing after the end of the buffer so that
/// [`ByteReader::slice_from_mark`] stays consistent while the scanner's
/// lookahead slots hold `Eof`. Reads past the end return [`Code::Eof`]
/// forever.
#[derive(Clone, Debug)]
pub struct ByteReader<'src> {
    bytes: &'src [u8],
    pos: usize,
    mark: usize,
}

impl<'src> ByteReader<'src> {
    pub fn new(bytes: &'src [u8]) -> Self {
        ByteReader {
            bytes,
            pos: 0,
            mark: 0,
        }
    }

    /// Consume one byte.
    #[inline]
    pub fn read_next(&mut self) -> Code {
        let code = match self.bytes.get(self.pos) {
            Some(&b) => Code::Byte(b),
            None => Code::Eof,
        };
        self.pos = self.pos.saturating_add(1);
        code
    }

    /// Record the offset of the scanner's current code as the start of a
    /// token.
    #[inline]
    pub fn mark(&mut self) {
        self.mark = self.pos.saturating_sub(LOOKAHEAD);
    }

    /// Bytes from the mark up to (excluding) the scanner's current code,
    /// clamped to the buffer.
    pub fn slice_from_mark(&self) -> &'src [u8] {
        let end = self.pos.saturating_sub(LOOKAHEAD).min(self.bytes.len());
        let start = self.mark.min(end);
        &self.bytes[start..end]
    }

    /// Byte offset of the scanner's current code.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos.saturating_sub(LOOKAHEAD)
    }

    #[inline]
    pub fn source(&self) -> &'src [u8] {
        self.bytes
    }
}
