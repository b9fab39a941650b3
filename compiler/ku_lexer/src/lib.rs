//! Scanner for ku.
//!
//! Turns source bytes into [`Token`]s. The scanner is pull-based
//! ([`Scanner::scan_token`], or the `Iterator` impl) and never fails:
//! malformed input becomes `Illegal` tokens carrying the offending bytes.
//!
//! Keyword recognition goes through a [`TokenTable`] that the caller builds
//! once and lends to every scanner; there is no global state.
//!
//! The crate also owns the textual token dump used by golden tests:
//! [`parse_token_from_str`] reads back what `Token`'s `Display` writes, and
//! [`fixture`] runs split-test files made of `##` control lines and token
//! dumps.

mod dump;
pub mod fixture;
mod keywords;
mod scanner;

use ku_ir::Token;

pub use dump::{parse_token_from_str, TokenParseError};
pub use keywords::TokenTable;
pub use scanner::Scanner;

/// Scan `source` to completion. The last token is always `EOF`.
pub fn tokenize<'src>(source: &'src [u8], table: &TokenTable) -> Vec<Token<'src>> {
    Scanner::new(source, table).collect()
}
