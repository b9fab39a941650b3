#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use ku_ir::Position;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    let table = TokenTable::new();
    let mut cursor = TokenCursor::new(source.as_bytes(), &table);
    let mut out = Vec::new();
    while !cursor.is_at_end() {
        out.push(cursor.advance().kind);
    }
    out
}

#[test]
fn skips_comments() {
    assert_eq!(
        kinds("// lead\nx := 1 // trail\n"),
        vec![
            TokenKind::Identifier,
            TokenKind::Define,
            TokenKind::DecimalInteger,
        ]
    );
}

#[test]
fn peek_does_not_consume() {
    let table = TokenTable::new();
    let mut cursor = TokenCursor::new(b"a , b )", &table);

    assert_eq!(cursor.peek_kind(0), TokenKind::Identifier);
    assert_eq!(cursor.peek_kind(3), TokenKind::RightRoundBracket);
    assert_eq!(cursor.peek_kind(1), TokenKind::Comma);
    assert_eq!(cursor.peek_kind(2), TokenKind::Identifier);

    assert_eq!(cursor.advance().text(), b"a");
    assert_eq!(cursor.advance().kind, TokenKind::Comma);
    assert_eq!(cursor.current().text(), b"b");
}

#[test]
fn peeking_past_end_sees_eof() {
    let table = TokenTable::new();
    let mut cursor = TokenCursor::new(b"(", &table);
    assert_eq!(cursor.peek_kind(5), TokenKind::Eof);
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn expect_reports_current_token() {
    let table = TokenTable::new();
    let mut cursor = TokenCursor::new(b"foo", &table);

    let err = cursor.expect(TokenKind::LeftRoundBracket).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::LeftRoundBracket
        }
    );
    assert_eq!(err.found, TokenKind::Identifier);
    assert_eq!(err.lexeme, "foo");
    assert_eq!(err.position, Position::new(1, 1));

    let ident = cursor.expect_ident().unwrap();
    assert_eq!(ident.name, b"foo");
}

#[test]
fn eat_only_matching() {
    let table = TokenTable::new();
    let mut cursor = TokenCursor::new(b";x", &table);
    assert!(!cursor.eat(TokenKind::Comma));
    assert!(cursor.eat(TokenKind::Semicolon));
    assert!(cursor.check_ident());
}

#[test]
fn closing_at_eof_is_unclosed_delimiter() {
    let table = TokenTable::new();
    let mut cursor = TokenCursor::new(b"{", &table);
    let open = cursor.advance();

    let err = cursor
        .expect_closing(TokenKind::RightCurlyBracket, &open)
        .unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnclosedDelimiter {
            open: TokenKind::LeftCurlyBracket,
            open_position: Position::new(1, 1),
        }
    );
}

#[test]
fn closing_mismatch_is_unexpected_token() {
    let table = TokenTable::new();
    let mut cursor = TokenCursor::new(b"( ]", &table);
    let open = cursor.advance();

    let err = cursor
        .expect_closing(TokenKind::RightRoundBracket, &open)
        .unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::RightRoundBracket
        }
    );
    assert_eq!(err.found, TokenKind::RightSquareBracket);
}
