//! Expressions.
//!
//! ```text
//! Expression = identifier | integer | string | Call .
//! Call       = identifier "(" [ Expression ] ")" .
//! ```

use ku_ir::{Expression, Identifier, Literal, Seq, TokenKind};
use ku_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl<'src> Parser<'src, '_> {
    pub(crate) fn parse_expression(&mut self) -> Result<Expression<'src>, ParseError> {
        self.in_error_context(ErrorContext::Expression, |p| {
            match p.cursor.current_kind() {
                TokenKind::Identifier if p.cursor.peek_kind(1) == TokenKind::LeftRoundBracket => {
                    ensure_sufficient_stack(|| p.parse_call_expression())
                }
                TokenKind::Identifier => Ok(Expression::Identifier(Identifier::from_token(
                    &p.cursor.advance(),
                ))),
                TokenKind::DecimalInteger => Ok(Expression::IntegerLiteral(Literal::from_token(
                    &p.cursor.advance(),
                ))),
                TokenKind::String => Ok(Expression::StringLiteral(Literal::from_token(
                    &p.cursor.advance(),
                ))),
                _ => Err(p.cursor.error(ParseErrorKind::ExpectedExpression)),
            }
        })
    }

    /// `name(arg)` with at most one argument.
    pub(crate) fn parse_call_expression(&mut self) -> Result<Expression<'src>, ParseError> {
        self.in_error_context(ErrorContext::CallExpression, |p| {
            let callee = p.cursor.expect_ident()?;
            let open = p.cursor.expect(TokenKind::LeftRoundBracket)?;

            let mut arguments = Seq::new_empty();
            if !p.cursor.check(TokenKind::RightRoundBracket) {
                arguments.append(p.parse_expression()?);
            }

            p.cursor
                .expect_closing(TokenKind::RightRoundBracket, &open)?;
            Ok(Expression::call(callee, arguments))
        })
    }
}
