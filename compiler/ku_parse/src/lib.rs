//! Recursive descent parser for ku.
//!
//! Builds a [`SourceTree`] straight from the scanner's token stream. Leaves
//! borrow from the source buffer, so the tree lives no longer than the
//! bytes it was parsed from. Parsing stops at the first error.

mod cursor;
mod error;
mod grammar;

#[cfg(test)]
mod tests;

pub use cursor::TokenCursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use ku_ir::{Seq, SourceTree, TokenKind};
use ku_lexer::TokenTable;

/// Parser state.
pub struct Parser<'src, 't> {
    cursor: TokenCursor<'src, 't>,
}

impl<'src, 't> Parser<'src, 't> {
    pub fn new(source: &'src [u8], table: &'t TokenTable) -> Self {
        Parser {
            cursor: TokenCursor::new(source, table),
        }
    }

    /// Run `f`, tagging any error it returns with `context` unless a nested
    /// construct already did.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|err| err.or_context(context))
    }

    /// Parse function definitions and standalone statements until `EOF`.
    pub fn parse_source_tree(mut self) -> Result<SourceTree<'src>, ParseError> {
        let mut functions = Seq::new_empty();
        let mut statements = Seq::new_empty();

        loop {
            match self.cursor.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Function => functions.append(self.parse_function_definition()?),
                _ => {
                    let statement = self.parse_statement()?;
                    if !statement.is_empty() {
                        statements.append(statement);
                    }
                }
            }
        }

        Ok(SourceTree {
            functions,
            statements,
        })
    }
}

/// Parse one standalone source buffer.
pub fn parse_standalone<'src>(
    source: &'src [u8],
    table: &TokenTable,
) -> Result<SourceTree<'src>, ParseError> {
    Parser::new(source, table).parse_source_tree()
}
