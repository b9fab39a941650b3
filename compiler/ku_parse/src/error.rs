//! Parse error types.
//!
//! Parsing stops at the first error. A [`ParseError`] records what was
//! expected, the token actually found, and what was being parsed, and
//! converts into a [`Diagnostic`] for rendering.

use std::fmt;

use ku_diagnostic::{Diagnostic, ErrorCode};
use ku_ir::{Position, Token, TokenKind};

/// What was being parsed when an error occurred, for "while parsing X"
/// notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    FunctionDeclaration,
    FunctionParameters,
    FunctionResult,
    TypeSpecifier,
    Block,
    DefineStatement,
    CallExpression,
    Expression,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::FunctionDeclaration => "a function declaration",
            Self::FunctionParameters => "function parameters",
            Self::FunctionResult => "a function result",
            Self::TypeSpecifier => "a type",
            Self::Block => "a block",
            Self::DefineStatement => "a define statement",
            Self::CallExpression => "a call",
            Self::Expression => "an expression",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A specific token was required.
    UnexpectedToken { expected: TokenKind },
    ExpectedIdentifier,
    ExpectedType,
    ExpectedExpression,
    /// Input ended before the bracket opened at `open_position` was closed.
    UnclosedDelimiter {
        open: TokenKind,
        open_position: Position,
    },
    /// Syntax the grammar reserves but the parser does not build.
    NotImplemented { construct: &'static str },
    /// The scanner could not classify the input.
    IllegalToken,
}

impl ParseErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            ParseErrorKind::IllegalToken => ErrorCode::E0001,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier => ErrorCode::E1004,
            ParseErrorKind::ExpectedType => ErrorCode::E1005,
            ParseErrorKind::NotImplemented { .. } => ErrorCode::E1006,
        }
    }
}

/// `` `)` `` for punctuation and keywords, `identifier `foo`` for dynamic
/// tokens, `end of file` for the specials.
fn describe(kind: TokenKind, lexeme: &str) -> String {
    match kind.spelling() {
        Some(spelling) => format!("`{spelling}`"),
        None if lexeme.is_empty() => kind.display_name().to_string(),
        None => format!("{} `{lexeme}`", kind.display_name()),
    }
}

fn closing_of(open: TokenKind) -> TokenKind {
    match open {
        TokenKind::LeftRoundBracket => TokenKind::RightRoundBracket,
        TokenKind::LeftSquareBracket => TokenKind::RightSquareBracket,
        _ => TokenKind::RightCurlyBracket,
    }
}

/// A fatal parse error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub kind: ParseErrorKind,
    pub message: String,
    /// Kind of the offending token.
    pub found: TokenKind,
    /// Source text of the offending token; empty for `EOF` and `TERM`.
    pub lexeme: String,
    pub position: Position,
    /// Innermost construct being parsed.
    pub context: Option<ErrorContext>,
}

impl ParseError {
    /// Error of `kind` at `found`. An `Illegal` token always reports itself,
    /// whatever was expected in its place.
    #[cold]
    pub fn new(kind: ParseErrorKind, found: &Token<'_>) -> Self {
        let kind = if found.kind == TokenKind::Illegal {
            ParseErrorKind::IllegalToken
        } else {
            kind
        };
        let lexeme = String::from_utf8_lossy(found.text()).into_owned();
        let found_text = describe(found.kind, &lexeme);

        let message = match kind {
            ParseErrorKind::UnexpectedToken { expected } => {
                format!("expected {}, found {found_text}", describe(expected, ""))
            }
            ParseErrorKind::ExpectedIdentifier => format!("expected identifier, found {found_text}"),
            ParseErrorKind::ExpectedType => format!("expected type, found {found_text}"),
            ParseErrorKind::ExpectedExpression => format!("expected expression, found {found_text}"),
            ParseErrorKind::UnclosedDelimiter { open, .. } => format!(
                "unclosed {}: expected {}, found {found_text}",
                describe(open, ""),
                describe(closing_of(open), "")
            ),
            ParseErrorKind::NotImplemented { construct } => {
                format!("{construct} types are not implemented")
            }
            ParseErrorKind::IllegalToken => format!("illegal token `{lexeme}`"),
        };

        ParseError {
            code: kind.code(),
            kind,
            message,
            found: found.kind,
            lexeme,
            position: found.pos,
            context: None,
        }
    }

    /// Record `context` unless an inner construct already did.
    #[must_use]
    pub fn or_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(
                self.position,
                format!("found {}", describe(self.found, &self.lexeme)),
            );

        match self.kind {
            ParseErrorKind::UnclosedDelimiter {
                open,
                open_position,
            } => {
                diag = diag.with_secondary_label(
                    open_position,
                    format!("{} opened here", describe(open, "")),
                );
            }
            ParseErrorKind::NotImplemented { .. } => {
                diag = diag.with_suggestion("only named types and `[]T` slices are supported");
            }
            _ => {}
        }

        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }

        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests;
