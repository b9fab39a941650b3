//! Statements and blocks.
//!
//! ```text
//! Block     = "{" { Statement } "}" .
//! Statement = identifier ":=" Expression | Call | Block .
//! ```
//!
//! An illegal token is fatal. Any other token is skipped and yields
//! `Statement::Empty`, which callers drop. A statement may be followed by one
//! `TERM` or `;`.

use ku_ir::{Block, Identifier, Seq, Statement, TokenKind};
use ku_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl<'src> Parser<'src, '_> {
    pub(crate) fn parse_block(&mut self) -> Result<Block<'src>, ParseError> {
        self.in_error_context(ErrorContext::Block, |p| {
            let open = p.cursor.expect(TokenKind::LeftCurlyBracket)?;
            let mut statements = Seq::new_empty();

            while !matches!(
                p.cursor.current_kind(),
                TokenKind::RightCurlyBracket | TokenKind::Eof | TokenKind::Illegal
            ) {
                let statement = p.parse_statement()?;
                if !statement.is_empty() {
                    statements.append(statement);
                }
            }

            p.cursor
                .expect_closing(TokenKind::RightCurlyBracket, &open)?;
            Ok(Block {
                statements,
                pos: open.pos,
            })
        })
    }

    /// Parse one statement. Always consumes at least one token or fails.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement<'src>, ParseError> {
        let statement = match (self.cursor.current_kind(), self.cursor.peek_kind(1)) {
            (TokenKind::Identifier, TokenKind::Define) => self.parse_define_statement()?,
            (TokenKind::Identifier, TokenKind::LeftRoundBracket) => {
                Statement::Expression(self.parse_call_expression()?)
            }
            (TokenKind::LeftCurlyBracket, _) => {
                Statement::Block(ensure_sufficient_stack(|| self.parse_block())?)
            }
            (TokenKind::Illegal, _) => return Err(self.cursor.error(ParseErrorKind::IllegalToken)),
            _ => {
                let skipped = self.cursor.advance();
                trace!(kind = %skipped.kind, pos = %skipped.pos, "skip");
                return Ok(Statement::Empty);
            }
        };

        if !self.cursor.eat(TokenKind::Terminator) {
            self.cursor.eat(TokenKind::Semicolon);
        }
        Ok(statement)
    }

    /// `x := expr`
    fn parse_define_statement(&mut self) -> Result<Statement<'src>, ParseError> {
        self.in_error_context(ErrorContext::DefineStatement, |p| {
            let mut left = Seq::new_empty();
            left.append(Identifier::from_token(&p.cursor.advance()));
            p.cursor.expect(TokenKind::Define)?;

            let mut right = Seq::new_empty();
            right.append(p.parse_expression()?);
            Ok(Statement::define(left, right))
        })
    }
}
