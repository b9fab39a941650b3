//! Split-test fixtures for the scanner.
//!
//! A fixture file is a sequence of `##` control lines and data blocks. A
//! data block is every line up to the next line that starts with `#`; its
//! final newline belongs to the separator, so a source that must end with a
//! newline needs a blank line before the next control line.
//!
//! ```text
//! ## decimal float
//! 325.290
//! ## want
//! 1:1       DECFLT    325.290
//! 1:8       EOF
//! ```
//!
//! `## <label>` opens a case and the block after it is the case's source
//! (absent means empty source). `## want` introduces the expected token
//! dump. Blank lines inside a `want` block are ignored.

use std::fmt;

use ku_ir::Token;

use crate::{parse_token_from_str, tokenize, TokenParseError, TokenTable};

#[cfg(test)]
mod tests;

const CONTROL_PREFIX: &str = "##";
const WANT: &str = "want";

/// One piece of a fixture file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// `##` line rather than a data block.
    pub control: bool,
    pub text: &'a str,
    /// 1-based line where the chunk starts.
    pub line: usize,
}

/// Iterator over the chunks of a fixture file.
pub struct SplitTestScanner<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> SplitTestScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        SplitTestScanner {
            text,
            pos: 0,
            line: 1,
        }
    }

    /// Offset just past the newline that ends the line starting at `from`.
    fn line_end(&self, from: usize) -> usize {
        memchr::memchr(b'\n', &self.text.as_bytes()[from..]).map_or(self.text.len(), |i| from + i)
    }
}

impl<'a> Iterator for SplitTestScanner<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let bytes = self.text.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        let line = self.line;

        if self.text[start..].starts_with(CONTROL_PREFIX) {
            let end = self.line_end(start);
            self.pos = end + 1;
            self.line += 1;
            return Some(Chunk {
                control: true,
                text: &self.text[start..end],
                line,
            });
        }

        let mut end = start;
        loop {
            end = self.line_end(end) + 1;
            self.line += 1;
            if end >= bytes.len() || bytes[end] == b'#' {
                break;
            }
        }
        self.pos = end;
        Some(Chunk {
            control: false,
            text: &self.text[start..(end - 1).min(bytes.len())],
            line,
        })
    }
}

/// A scanner test case read from a fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerCase<'a> {
    pub label: &'a str,
    pub source: &'a str,
    pub want: Vec<Token<'a>>,
}

/// Malformed fixture file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureError {
    /// Data block before any `## <label>` line.
    BlockWithoutCase { line: usize },
    /// `## want` before any `## <label>` line.
    WantWithoutCase { line: usize },
    /// Unreadable line in a `want` block.
    BadToken { line: usize, error: TokenParseError },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::BlockWithoutCase { line } => {
                write!(f, "line {line}: data block outside of a test case")
            }
            FixtureError::WantWithoutCase { line } => {
                write!(f, "line {line}: `## want` outside of a test case")
            }
            FixtureError::BadToken { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::BadToken { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Read every case of a fixture file.
pub fn parse_fixture<'a>(
    text: &'a str,
    table: &TokenTable,
) -> Result<Vec<ScannerCase<'a>>, FixtureError> {
    let mut cases: Vec<ScannerCase<'a>> = Vec::new();
    let mut in_want = false;

    for chunk in SplitTestScanner::new(text) {
        if chunk.control {
            let directive = chunk.text[CONTROL_PREFIX.len()..].trim();
            if directive == WANT {
                if cases.is_empty() {
                    return Err(FixtureError::WantWithoutCase { line: chunk.line });
                }
                in_want = true;
            } else {
                cases.push(ScannerCase {
                    label: directive,
                    source: "",
                    want: Vec::new(),
                });
                in_want = false;
            }
            continue;
        }

        let Some(case) = cases.last_mut() else {
            return Err(FixtureError::BlockWithoutCase { line: chunk.line });
        };
        if !in_want {
            case.source = chunk.text;
            continue;
        }
        for (offset, line) in chunk.text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let token = parse_token_from_str(line, table).map_err(|error| FixtureError::BadToken {
                line: chunk.line + offset,
                error,
            })?;
            case.want.push(token);
        }
    }
    Ok(cases)
}

/// One position where scanned and expected tokens differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch<'a> {
    pub index: usize,
    pub want: Option<Token<'a>>,
    pub got: Option<Token<'a>>,
}

/// Result of running one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport<'a> {
    pub label: &'a str,
    pub mismatches: Vec<Mismatch<'a>>,
}

impl CaseReport<'_> {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, name: &str, token: Option<&Token<'_>>) -> fmt::Result {
    match token {
        Some(token) => writeln!(f, "    {name} {token}"),
        None => writeln!(f, "    {name} <nothing>"),
    }
}

impl fmt::Display for CaseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "ok      {}", self.label);
        }
        writeln!(f, "FAILED  {}", self.label)?;
        for mismatch in &self.mismatches {
            writeln!(f, "  token #{}", mismatch.index)?;
            write_side(f, "want:", mismatch.want.as_ref())?;
            write_side(f, "got: ", mismatch.got.as_ref())?;
        }
        Ok(())
    }
}

/// Scan a case's source and compare against its expected tokens.
pub fn run_case<'a>(case: &ScannerCase<'a>, table: &TokenTable) -> CaseReport<'a> {
    let scanned = tokenize(case.source.as_bytes(), table);
    let len = scanned.len().max(case.want.len());
    let mismatches = (0..len)
        .filter_map(|index| {
            let want = case.want.get(index).copied();
            let got = scanned.get(index).copied();
            (want != got).then_some(Mismatch { index, want, got })
        })
        .collect();
    CaseReport {
        label: case.label,
        mismatches,
    }
}

/// Parse and run every case in a fixture file.
pub fn run_fixture<'a>(
    text: &'a str,
    table: &TokenTable,
) -> Result<Vec<CaseReport<'a>>, FixtureError> {
    let cases = parse_fixture(text, table)?;
    Ok(cases.iter().map(|case| run_case(case, table)).collect())
}

