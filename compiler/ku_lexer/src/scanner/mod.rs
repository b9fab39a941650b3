//! Byte-level scanner with automatic statement terminators.
//!
//! The scanner holds two codes of lookahead over a [`ByteReader`]: `code`
//! (the byte being classified) and `next`. Every decision below needs at
//! most those two, so the scanner never rewinds.
//!
//! # Terminators
//!
//! A statement may end at a line break instead of an explicit `;`. After a
//! token that can end a statement (identifier, `return`, `break`,
//! `continue`, a closing bracket, `++`, `--`) the scanner is *armed*.
//! Literals do not arm, so a lone `325290` scans as one number then `EOF`.
//! While armed, a newline, end of input, `}` or the start of a `//` comment
//! produces a synthetic `TERM` token. A newline that triggers a terminator
//! is consumed; `}` and `//` are scanned normally on the next call.
//!
//! Block-opening keywords (`fn`, `if`, `else`, `elif`, `loop`, `for`,
//! `while`, `switch`) *block* arming until the next `{`, so headers like
//! `if x {` never get a terminator before their body.


use bitflags::bitflags;
use ku_ir::{Position, Token, TokenKind};
use ku_lexer_core::{ByteReader, Code};
use tracing::trace;

use crate::TokenTable;

bitflags! {
    /// Terminator insertion state.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    struct TerminatorState: u8 {
        /// Last token can end a statement.
        const ARMED = 1 << 0;
        /// Inside a block header; nothing arms until `{`.
        const BLOCKED = 1 << 1;
    }
}

#[inline]
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Bytes that continue a name. Non-ASCII bytes pass through so UTF-8
/// identifiers stay in one token.
#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

#[inline]
fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

#[inline]
fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

/// Pull-based scanner over one source buffer.
pub struct Scanner<'src, 't> {
    reader: ByteReader<'src>,
    table: &'t TokenTable,
    code: Code,
    next: Code,
    /// Position of `code`.
    pos: Position,
    terminator: TerminatorState,
    /// `EOF` has been handed out by the iterator.
    finished: bool,
}

impl<'src, 't> Scanner<'src, 't> {
    pub fn new(source: &'src [u8], table: &'t TokenTable) -> Self {
        let mut reader = ByteReader::new(source);
        let code = reader.read_next();
        let next = reader.read_next();
        Scanner {
            reader,
            table,
            code,
            next,
            pos: Position::START,
            terminator: TerminatorState::empty(),
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// After the end of input this keeps returning `EOF`, preceded once by a
    /// `TERM` if a terminator was pending.
    pub fn scan_token(&mut self) -> Token<'src> {
        let token = self.scan();
        self.update_terminator(token.kind);
        trace!(kind = %token.kind, pos = %token.pos, "token");
        token
    }

    // ─── Cursor ───────────────────────────────────────────────

    fn advance(&mut self) {
        if let Code::Byte(b) = self.code {
            self.pos = self.pos.after(b);
            self.code = self.next;
            self.next = self.reader.read_next();
        }
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.code.is_byte_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(|b| is_horizontal_space(b) || b == b'\n');
    }

    /// Start a token at the current code.
    fn start(&mut self) -> Position {
        self.reader.mark();
        self.pos
    }

    fn literal(&self, kind: TokenKind, start: Position) -> Token<'src> {
        Token::with_literal(kind, start, self.reader.slice_from_mark())
    }

    // ─── Dispatch ─────────────────────────────────────────────

    fn scan(&mut self) -> Token<'src> {
        if self.terminator.contains(TerminatorState::ARMED) {
            if let Some(token) = self.pending_terminator() {
                return token;
            }
        }

        self.skip_whitespace();
        let Code::Byte(b) = self.code else {
            return Token::new(TokenKind::Eof, self.pos);
        };

        let start = self.start();
        match b {
            b if is_name_start(b) => self.name(start),
            b'0'..=b'9' => self.number(b, start),
            b'"' => self.string(start),
            b'\'' => self.character(start),
            b'/' if self.next.is(b'/') => self.comment(start),
            _ => self.operator(b, start),
        }
    }

    fn pending_terminator(&mut self) -> Option<Token<'src>> {
        self.advance_while(is_horizontal_space);
        let at = self.pos;
        match self.code {
            Code::Eof | Code::Byte(b'}') => {}
            Code::Byte(b'/') if self.next.is(b'/') => {}
            Code::Byte(b'\n') => self.advance(),
            Code::Byte(_) => return None,
        }
        trace!(pos = %at, "inserted terminator");
        Some(Token::new(TokenKind::Terminator, at))
    }

    fn update_terminator(&mut self, kind: TokenKind) {
        match kind {
            TokenKind::Function
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::ElseIf
            | TokenKind::Loop
            | TokenKind::For
            | TokenKind::While
            | TokenKind::Switch => {
                self.terminator = TerminatorState::BLOCKED;
            }
            TokenKind::LeftCurlyBracket => {
                self.terminator = TerminatorState::empty();
            }
            TokenKind::Identifier
            | TokenKind::Return
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::RightRoundBracket
            | TokenKind::RightSquareBracket
            | TokenKind::RightCurlyBracket
            | TokenKind::Increment
            | TokenKind::Decrement => {
                let armed = !self.terminator.contains(TerminatorState::BLOCKED);
                self.terminator.set(TerminatorState::ARMED, armed);
            }
            _ => self.terminator.remove(TerminatorState::ARMED),
        }
    }

    // ─── Sub-scanners ─────────────────────────────────────────

    fn name(&mut self, start: Position) -> Token<'src> {
        self.advance_while(is_word_byte);
        let text = self.reader.slice_from_mark();
        match self.table.lookup_keyword(text) {
            Some(kind) => Token::new(kind, start),
            None => Token::with_literal(TokenKind::Identifier, start, text),
        }
    }

    fn number(&mut self, first: u8, start: Position) -> Token<'src> {
        if first == b'0' {
            match self.next.byte() {
                Some(b'b') => return self.prefixed(start, TokenKind::BinaryInteger, is_binary_digit),
                Some(b'o') => return self.prefixed(start, TokenKind::OctalInteger, is_octal_digit),
                Some(b'x') => {
                    return self.prefixed(start, TokenKind::HexadecimalInteger, |b| {
                        b.is_ascii_hexdigit()
                    });
                }
                Some(b) if is_word_byte(b) => return self.illegal_word(start),
                _ => {}
            }
        }
        self.decimal(start)
    }

    /// `0b`, `0o` and `0x` literals. At least one digit must follow the
    /// prefix, and the digits must not run into a word byte.
    fn prefixed(
        &mut self,
        start: Position,
        kind: TokenKind,
        is_digit: impl Fn(u8) -> bool,
    ) -> Token<'src> {
        self.advance();
        self.advance();
        let mut digits = 0usize;
        while self.code.is_byte_and(&is_digit) {
            digits += 1;
            self.advance();
        }
        if digits == 0 || self.code.is_byte_and(is_word_byte) {
            return self.illegal_word(start);
        }
        self.literal(kind, start)
    }

    fn decimal(&mut self, start: Position) -> Token<'src> {
        let mut dots = 0usize;
        loop {
            match self.code.byte() {
                Some(b'0'..=b'9') => {}
                Some(b'.') if dots == 0 => dots += 1,
                _ => break,
            }
            self.advance();
        }
        if self.code.is_byte_and(|b| b == b'.' || is_word_byte(b)) {
            return self.illegal_word(start);
        }
        let kind = if dots == 0 {
            TokenKind::DecimalInteger
        } else {
            TokenKind::DecimalFloat
        };
        self.literal(kind, start)
    }

    /// Swallow the rest of a malformed number.
    fn illegal_word(&mut self, start: Position) -> Token<'src> {
        self.advance_while(|b| b == b'.' || is_word_byte(b));
        self.literal(TokenKind::Illegal, start)
    }

    /// A `"` directly after a `\` does not close the string, whatever
    /// precedes the backslash.
    fn string(&mut self, start: Position) -> Token<'src> {
        self.advance();
        let mut prev = b'"';
        loop {
            match self.code {
                Code::Eof => return self.literal(TokenKind::Illegal, start),
                Code::Byte(b'"') if prev != b'\\' => {
                    self.advance();
                    return self.literal(TokenKind::String, start);
                }
                Code::Byte(b) => {
                    prev = b;
                    self.advance();
                }
            }
        }
    }

    fn character(&mut self, start: Position) -> Token<'src> {
        self.advance();
        self.advance_while(|b| b != b'\'');
        if self.code.is_eof() {
            return self.literal(TokenKind::Illegal, start);
        }
        self.advance();
        self.literal(TokenKind::Character, start)
    }

    /// `// ...` up to the end of the line. The newline is consumed but is
    /// not part of the literal.
    fn comment(&mut self, start: Position) -> Token<'src> {
        self.advance_while(|b| b != b'\n');
        let token = self.literal(TokenKind::Comment, start);
        self.advance();
        token
    }

    /// Single-byte token, or a two-byte one when `next` matches one of
    /// `pairs`.
    fn pick(
        &mut self,
        start: Position,
        single: TokenKind,
        pairs: &[(u8, TokenKind)],
    ) -> Token<'src> {
        let pair = self
            .next
            .byte()
            .and_then(|n| pairs.iter().find(|&&(b, _)| b == n));
        self.advance();
        match pair {
            Some(&(_, kind)) => {
                self.advance();
                Token::new(kind, start)
            }
            None => Token::new(single, start),
        }
    }

    fn operator(&mut self, b: u8, start: Position) -> Token<'src> {
        use TokenKind as K;

        match b {
            b':' => self.pick(start, K::Colon, &[(b'=', K::Define)]),
            b'=' => self.pick(start, K::Assign, &[(b'=', K::Equal), (b'>', K::RightArrow)]),
            b'<' => self.pick(
                start,
                K::Less,
                &[(b'=', K::LessOrEqual), (b'<', K::LeftShift), (b'-', K::LeftArrow)],
            ),
            b'>' => self.pick(
                start,
                K::Greater,
                &[(b'=', K::GreaterOrEqual), (b'>', K::RightShift)],
            ),
            b'&' => self.pick(
                start,
                K::Ampersand,
                &[(b'&', K::LogicalAnd), (b'^', K::BitClear)],
            ),
            b'!' => self.pick(start, K::Not, &[(b'=', K::NotEqual)]),
            b'|' => self.pick(start, K::Pipe, &[(b'|', K::LogicalOr)]),
            b'+' => self.pick(start, K::Plus, &[(b'=', K::AddAssign), (b'+', K::Increment)]),
            b'-' => self.pick(
                start,
                K::Minus,
                &[(b'=', K::SubtractAssign), (b'-', K::Decrement)],
            ),
            b'*' => self.pick(start, K::Asterisk, &[(b'=', K::MultiplyAssign)]),
            b'/' => self.pick(start, K::Slash, &[(b'=', K::QuotientAssign)]),
            b'%' => self.pick(start, K::Percent, &[(b'=', K::RemainderAssign)]),
            b'^' => self.pick(start, K::Caret, &[]),
            b';' => self.pick(start, K::Semicolon, &[]),
            b'.' => self.pick(start, K::Period, &[]),
            b',' => self.pick(start, K::Comma, &[]),
            b'{' => self.pick(start, K::LeftCurlyBracket, &[]),
            b'}' => self.pick(start, K::RightCurlyBracket, &[]),
            b'(' => self.pick(start, K::LeftRoundBracket, &[]),
            b')' => self.pick(start, K::RightRoundBracket, &[]),
            b'[' => self.pick(start, K::LeftSquareBracket, &[]),
            b']' => self.pick(start, K::RightSquareBracket, &[]),
            _ => {
                self.advance();
                self.literal(K::Illegal, start)
            }
        }
    }
}

impl<'src> Iterator for Scanner<'src, '_> {
    type Item = Token<'src>;

    /// Yields every token up to and including the first `EOF`.
    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.scan_token();
        self.finished = token.kind == TokenKind::Eof;
        Some(token)
    }
}
