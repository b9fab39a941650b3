//! Inspection commands: `parse` and `lex`.

use ku_diagnostic::ColorMode;
use ku_lexer::{Scanner, TokenTable};
use ku_parse::parse_standalone;
use tracing::info_span;

use super::{read_source, report_parse_error};

/// Parse a file and print its tree.
pub fn parse_file(path: &str, color: ColorMode) -> i32 {
    let _span = info_span!("parse_file", path).entered();
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let table = TokenTable::new();

    match parse_standalone(source.as_bytes(), &table) {
        Ok(tree) => {
            tracing::debug!(
                functions = tree.functions.len(),
                statements = tree.statements.len(),
                "parsed"
            );
            print!("{tree}");
            0
        }
        Err(err) => {
            report_parse_error(path, &err, color);
            1
        }
    }
}

/// Print the token dump of a file, one token per line.
pub fn lex_file(path: &str) -> i32 {
    let _span = info_span!("lex_file", path).entered();
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let table = TokenTable::new();

    for token in Scanner::new(source.as_bytes(), &table) {
        println!("{token}");
    }
    0
}
