//! Tokens produced by the scanner.
//!
//! # Dump format
//!
//! `Display` renders a token as one line of the golden-file dump format:
//!
//! ```text
//! 1:1       fn
//! 1:4       IDENT     main
//! 3:2       TERM
//! ```
//!
//! The position is left-aligned in an 8-wide field, followed by two spaces
//! and the kind name. Dynamic kinds add two spaces and the literal. Static
//! kinds end right after the name, so the line never has trailing spaces.

mod kind;


use std::fmt;

use crate::Position;

pub use kind::TokenKind;

/// A classified lexical unit.
///
/// `literal` is `Some` exactly when `kind` is dynamic, and then borrows the
/// token's bytes from the source buffer.
#[derive(Copy, Clone, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub pos: Position,
    pub literal: Option<&'src [u8]>,
}

impl<'src> Token<'src> {
    /// Token whose text comes from the static spelling table.
    #[inline]
    pub const fn new(kind: TokenKind, pos: Position) -> Self {
        Token {
            kind,
            pos,
            literal: None,
        }
    }

    /// Token carrying a span of source text.
    #[inline]
    pub const fn with_literal(kind: TokenKind, pos: Position, literal: &'src [u8]) -> Self {
        Token {
            kind,
            pos,
            literal: Some(literal),
        }
    }

    /// Source text of the token: the literal for dynamic kinds, the static
    /// spelling otherwise. Specials have no text.
    pub fn text(&self) -> &'src [u8] {
        match self.literal {
            Some(literal) => literal,
            None => self.kind.spelling().map(str::as_bytes).unwrap_or_default(),
        }
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.pos == other.pos
            && (self.kind.has_static_literal() || self.literal == other.literal)
    }
}

impl Eq for Token<'_> {}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.pos.to_string();
        if self.kind.has_static_literal() {
            write!(f, "{pos:<8}  {}", self.kind)
        } else {
            let literal = String::from_utf8_lossy(self.literal.unwrap_or_default());
            write!(f, "{pos:<8}  {:<8}  {literal}", self.kind)
        }
    }
}
