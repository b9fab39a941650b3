//! Reading tokens back from the one-line dump format.
//!
//! The printer is `Token`'s `Display` impl in `ku_ir`. This parser accepts
//! what it writes, with any run of spaces (at least one) between fields:
//!
//! ```text
//! <line>:<column>  <KIND>[  <literal>]
//! ```
//!
//! A static kind must end the line. A dynamic kind takes the rest of the
//! line, after the separating spaces, verbatim as its literal.

use std::fmt;

use ku_ir::{Position, Token};

use crate::TokenTable;

/// Why a dump line could not be read back as a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenParseError {
    /// No `:` separating line and column.
    MissingLine,
    BadLine(String),
    /// Nothing after the column.
    MissingKind,
    BadColumn(String),
    /// Line or column is zero.
    ZeroPosition,
    UnknownKind(String),
    /// Text after a kind that has a static spelling.
    UnexpectedText(String),
    /// A dynamic kind with nothing after it.
    MissingLiteral,
}

impl fmt::Display for TokenParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenParseError::MissingLine => write!(f, "expected `<line>:<column>`"),
            TokenParseError::BadLine(text) => write!(f, "invalid line number `{text}`"),
            TokenParseError::MissingKind => write!(f, "missing token kind"),
            TokenParseError::BadColumn(text) => write!(f, "invalid column number `{text}`"),
            TokenParseError::ZeroPosition => write!(f, "line and column are 1-based"),
            TokenParseError::UnknownKind(text) => write!(f, "unknown token kind `{text}`"),
            TokenParseError::UnexpectedText(text) => {
                write!(f, "unexpected `{text}` after a token without literal")
            }
            TokenParseError::MissingLiteral => write!(f, "missing literal"),
        }
    }
}

impl std::error::Error for TokenParseError {}

fn number(text: &str, err: fn(String) -> TokenParseError) -> Result<u32, TokenParseError> {
    match text.parse::<u32>() {
        Ok(0) => Err(TokenParseError::ZeroPosition),
        Ok(n) => Ok(n),
        Err(_) => Err(err(text.to_string())),
    }
}

/// Parse one dump line into a token borrowing its literal from `line`.
pub fn parse_token_from_str<'a>(
    line: &'a str,
    table: &TokenTable,
) -> Result<Token<'a>, TokenParseError> {
    let (line_text, rest) = line.split_once(':').ok_or(TokenParseError::MissingLine)?;
    let line_no = number(line_text, TokenParseError::BadLine)?;

    let (column_text, rest) = rest.split_once(' ').ok_or(TokenParseError::MissingKind)?;
    let column = number(column_text, TokenParseError::BadColumn)?;

    let rest = rest.trim_start_matches(' ');
    let (kind_text, rest) = rest.split_once(' ').unwrap_or((rest, ""));
    if kind_text.is_empty() {
        return Err(TokenParseError::MissingKind);
    }
    let kind = table
        .lookup_token(kind_text.as_bytes())
        .ok_or_else(|| TokenParseError::UnknownKind(kind_text.to_string()))?;

    let pos = Position::new(line_no, column);
    let rest = rest.trim_start_matches(' ');
    if kind.has_static_literal() {
        if !rest.trim_end().is_empty() {
            return Err(TokenParseError::UnexpectedText(rest.to_string()));
        }
        return Ok(Token::new(kind, pos));
    }
    if rest.is_empty() {
        return Err(TokenParseError::MissingLiteral);
    }
    Ok(Token::with_literal(kind, pos, rest.as_bytes()))
}
