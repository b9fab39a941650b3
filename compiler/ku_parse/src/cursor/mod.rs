//! Token cursor for navigating the token stream.
//!
//! Pulls tokens from a [`Scanner`] on demand and keeps any tokens already
//! looked at in a small queue, so the parser can peek arbitrarily far ahead
//! without ever rewinding. Comment tokens never reach the parser.

#[cfg(test)]
mod tests;

use std::collections::VecDeque;

use ku_ir::{Identifier, Token, TokenKind};
use ku_lexer::{Scanner, TokenTable};
use tracing::trace;

use crate::{ParseError, ParseErrorKind};

/// Cursor over the tokens of one source buffer.
///
/// `current` is always a real token; after the end of input it stays `EOF`.
pub struct TokenCursor<'src, 't> {
    scanner: Scanner<'src, 't>,
    current: Token<'src>,
    /// Tokens after `current` that were pulled by a peek.
    ahead: VecDeque<Token<'src>>,
}

impl<'src, 't> TokenCursor<'src, 't> {
    pub fn new(source: &'src [u8], table: &'t TokenTable) -> Self {
        let mut scanner = Scanner::new(source, table);
        let current = Self::pull(&mut scanner);
        TokenCursor {
            scanner,
            current,
            ahead: VecDeque::new(),
        }
    }

    fn pull(scanner: &mut Scanner<'src, 't>) -> Token<'src> {
        loop {
            let token = scanner.scan_token();
            if token.kind != TokenKind::Comment {
                return token;
            }
            trace!(pos = %token.pos, "skip comment");
        }
    }

    #[inline]
    pub fn current(&self) -> &Token<'src> {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        self.check(TokenKind::Identifier)
    }

    /// Kind of the token `n` positions ahead; `peek_kind(0)` is the current
    /// token.
    pub fn peek_kind(&mut self, n: usize) -> TokenKind {
        if n == 0 {
            return self.current.kind;
        }
        while self.ahead.len() < n {
            let token = Self::pull(&mut self.scanner);
            self.ahead.push_back(token);
        }
        self.ahead
            .get(n - 1)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token<'src> {
        let next = match self.ahead.pop_front() {
            Some(token) => token,
            None => Self::pull(&mut self.scanner),
        };
        let token = std::mem::replace(&mut self.current, next);
        trace!(kind = %token.kind, pos = %token.pos, "advance");
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(ParseErrorKind::UnexpectedToken { expected: kind }))
        }
    }

    pub fn expect_ident(&mut self) -> Result<Identifier<'src>, ParseError> {
        if self.check_ident() {
            Ok(Identifier::from_token(&self.advance()))
        } else {
            Err(self.error(ParseErrorKind::ExpectedIdentifier))
        }
    }

    /// Consume the bracket that closes `open`.
    ///
    /// Running out of input reports the unclosed opener instead of the
    /// missing closer.
    pub fn expect_closing(
        &mut self,
        close: TokenKind,
        open: &Token<'src>,
    ) -> Result<Token<'src>, ParseError> {
        if self.check(close) {
            Ok(self.advance())
        } else if self.is_at_end() {
            Err(self.error(ParseErrorKind::UnclosedDelimiter {
                open: open.kind,
                open_position: open.pos,
            }))
        } else {
            Err(self.error(ParseErrorKind::UnexpectedToken { expected: close }))
        }
    }

    /// Error of `kind` at the current token.
    #[cold]
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, &self.current)
    }
}
