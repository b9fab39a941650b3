use super::*;
use ku_ir::{Position, TokenKind};
use pretty_assertions::assert_eq;

const GOLDEN: &str = include_str!("../../testdata/scanner.test");

fn chunks(text: &str) -> Vec<(bool, &str, usize)> {
    SplitTestScanner::new(text)
        .map(|c| (c.control, c.text, c.line))
        .collect()
}

#[test]
fn splits_control_lines_and_blocks() {
    let text = "## one\nx := 1\ny\n## want\n1:1  EOF\n";
    assert_eq!(
        chunks(text),
        vec![
            (true, "## one", 1),
            (false, "x := 1\ny", 2),
            (true, "## want", 4),
            (false, "1:1  EOF", 5),
        ]
    );
}

#[test]
fn blank_line_keeps_trailing_newline() {
    assert_eq!(
        chunks("## a\nx\n\n## want\n"),
        vec![(true, "## a", 1), (false, "x\n", 2), (true, "## want", 4)]
    );
}

#[test]
fn last_block_without_newline() {
    assert_eq!(chunks("## a\nx"), vec![(true, "## a", 1), (false, "x", 2)]);
    assert_eq!(chunks(""), vec![]);
}

#[test]
fn parses_cases() {
    let table = TokenTable::new();
    let cases = parse_fixture("## empty\n## want\n1:1  EOF\n## id\nab\n## want\n1:1  IDENT  ab\n", &table)
        .unwrap_or_default();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].label, "empty");
    assert_eq!(cases[0].source, "");
    assert_eq!(cases[0].want, vec![Token::new(TokenKind::Eof, Position::new(1, 1))]);
    assert_eq!(cases[1].source, "ab");
    assert_eq!(
        cases[1].want,
        vec![Token::with_literal(TokenKind::Identifier, Position::new(1, 1), b"ab")]
    );
}

#[test]
fn reports_fixture_errors() {
    let table = TokenTable::new();
    assert_eq!(
        parse_fixture("x\n## a\n", &table),
        Err(FixtureError::BlockWithoutCase { line: 1 })
    );
    assert_eq!(
        parse_fixture("## want\n", &table),
        Err(FixtureError::WantWithoutCase { line: 1 })
    );
    assert_eq!(
        parse_fixture("## a\nx\n## want\n1:1  IDENT  x\n1:2  NOPE\n", &table),
        Err(FixtureError::BadToken {
            line: 5,
            error: TokenParseError::UnknownKind("NOPE".into()),
        })
    );
}

#[test]
fn failing_case_lists_mismatches() {
    let table = TokenTable::new();
    let text = "## wrong\n42\n## want\n1:1  DECFLT  42\n";
    let reports = run_fixture(text, &table).unwrap_or_default();
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert!(!report.passed());
    assert_eq!(report.mismatches.len(), 2);
    assert_eq!(report.mismatches[1].want, None);
    assert_eq!(
        report.mismatches[1].got,
        Some(Token::new(TokenKind::Eof, Position::new(1, 3)))
    );
    let rendered = report.to_string();
    assert!(rendered.starts_with("FAILED  wrong\n"), "{rendered}");
    assert!(rendered.contains("<nothing>"), "{rendered}");
}

#[test]
fn golden_scanner_fixture_passes() {
    let table = TokenTable::new();
    let reports = run_fixture(GOLDEN, &table).unwrap_or_default();
    assert_eq!(reports.len(), 9);
    for report in &reports {
        assert!(report.passed(), "{report}");
    }
}
