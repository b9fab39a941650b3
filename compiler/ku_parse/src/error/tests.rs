use super::*;
use pretty_assertions::assert_eq;

fn token(kind: TokenKind, line: u32, column: u32) -> Token<'static> {
    Token::new(kind, Position::new(line, column))
}

#[test]
fn unexpected_token_names_both_sides() {
    let err = ParseError::new(
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::RightRoundBracket,
        },
        &token(TokenKind::Eof, 1, 6),
    );
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected `)`, found end of file");
    assert_eq!(err.lexeme, "");
    assert_eq!(err.to_string(), "1:6: expected `)`, found end of file");
}

#[test]
fn dynamic_tokens_show_their_text() {
    let found = Token::with_literal(TokenKind::DecimalInteger, Position::new(2, 3), b"42");
    let err = ParseError::new(ParseErrorKind::ExpectedIdentifier, &found);
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.message, "expected identifier, found integer `42`");
    assert_eq!(err.lexeme, "42");
}

#[test]
fn illegal_token_overrides_expectation() {
    let found = Token::with_literal(TokenKind::Illegal, Position::new(1, 1), b"0b");
    let err = ParseError::new(ParseErrorKind::ExpectedExpression, &found);
    assert_eq!(err.kind, ParseErrorKind::IllegalToken);
    assert_eq!(err.code, ErrorCode::E0001);
    assert_eq!(err.message, "illegal token `0b`");
}

#[test]
fn innermost_context_wins() {
    let err = ParseError::new(ParseErrorKind::ExpectedType, &token(TokenKind::Comma, 1, 9))
        .or_context(ErrorContext::TypeSpecifier)
        .or_context(ErrorContext::FunctionParameters);
    assert_eq!(err.context, Some(ErrorContext::TypeSpecifier));
}

#[test]
fn unclosed_delimiter_diagnostic() {
    let err = ParseError::new(
        ParseErrorKind::UnclosedDelimiter {
            open: TokenKind::LeftCurlyBracket,
            open_position: Position::new(1, 8),
        },
        &token(TokenKind::Eof, 3, 1),
    )
    .or_context(ErrorContext::Block);

    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.message, "unclosed `{`: expected `}`, found end of file");

    let diag = err.to_diagnostic();
    assert_eq!(
        diag.to_string(),
        "error[E1003]: unclosed `{`: expected `}`, found end of file\n  \
         --> 3:1: found end of file\n      \
         1:8: `{` opened here\n  \
         = note: while parsing a block"
    );
}

#[test]
fn not_implemented_suggests_supported_forms() {
    let err = ParseError::new(
        ParseErrorKind::NotImplemented { construct: "map" },
        &token(TokenKind::Map, 1, 12),
    );
    assert_eq!(err.code, ErrorCode::E1006);
    assert_eq!(err.message, "map types are not implemented");

    let diag = err.to_diagnostic();
    assert_eq!(diag.labels[0].position, Position::new(1, 12));
    assert_eq!(
        diag.suggestions,
        vec!["only named types and `[]T` slices are supported".to_string()]
    );
}
