//! Type specifiers.
//!
//! ```text
//! Type = identifier | "[" "]" Type .
//! ```
//!
//! Arrays, pointers, maps, structs, channels and interfaces are reserved
//! syntax and rejected with `NotImplemented`.

use ku_ir::{Identifier, TokenKind, TypeSpecifier};
use ku_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl<'src> Parser<'src, '_> {
    pub(crate) fn parse_type_specifier(&mut self) -> Result<TypeSpecifier<'src>, ParseError> {
        self.in_error_context(ErrorContext::TypeSpecifier, |p| {
            match p.cursor.current_kind() {
                TokenKind::Identifier => {
                    let name = Identifier::from_token(&p.cursor.advance());
                    Ok(TypeSpecifier::name(name))
                }
                TokenKind::LeftSquareBracket
                    if p.cursor.peek_kind(1) == TokenKind::RightSquareBracket =>
                {
                    p.cursor.advance();
                    p.cursor.advance();
                    let elem = ensure_sufficient_stack(|| p.parse_type_specifier())?;
                    Ok(TypeSpecifier::slice(elem))
                }
                TokenKind::LeftSquareBracket => Err(p.not_implemented("array")),
                TokenKind::Asterisk => Err(p.not_implemented("pointer")),
                TokenKind::Map => Err(p.not_implemented("map")),
                TokenKind::Struct => Err(p.not_implemented("struct")),
                TokenKind::Chan => Err(p.not_implemented("channel")),
                TokenKind::Interface => Err(p.not_implemented("interface")),
                _ => Err(p.cursor.error(ParseErrorKind::ExpectedType)),
            }
        })
    }

    #[cold]
    fn not_implemented(&self, construct: &'static str) -> ParseError {
        self.cursor
            .error(ParseErrorKind::NotImplemented { construct })
    }
}
