//! Command handlers for the `ku` CLI.
//!
//! Each handler returns the process exit status; only `main` exits. Shared
//! helpers for loading sources and rendering diagnostics live here.

use std::io::{self, IsTerminal};

use ku_diagnostic::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use ku_lexer_core::SourceText;
use ku_parse::ParseError;

mod debug;
mod test_lex;

pub use debug::{lex_file, parse_file};
pub use test_lex::{run_fixture_file, run_fixtures, FixtureOutcome};

/// Load `path`, or report why not and return the exit status for it.
pub(crate) fn read_source(path: &str) -> Result<SourceText, i32> {
    SourceText::read_file(path).map_err(|err| {
        tracing::debug!(kind = ?err.kind, %path, "source read failed");
        eprintln!("error: {err}");
        err.kind.exit_code()
    })
}

/// Whether stderr should be treated as a color terminal for `ColorMode::Auto`.
fn stderr_wants_color() -> bool {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    !no_color && io::stderr().is_terminal()
}

/// Print a parse error as a diagnostic on stderr.
pub(crate) fn report_parse_error(source_name: &str, err: &ParseError, color: ColorMode) {
    let mut emitter =
        TerminalEmitter::stderr(color, stderr_wants_color()).with_source_name(source_name);
    emitter.emit(&err.to_diagnostic());
    emitter.emit_abort();
    emitter.flush();
}
