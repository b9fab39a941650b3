//! `ku test-lex`: run split-test scanner fixtures.
//!
//! Files run in parallel; reports are printed in argument order.

use std::fmt::Write;

use ku_lexer::fixture::run_fixture;
use ku_lexer::TokenTable;
use rayon::prelude::*;

use super::read_source;

/// What running one fixture file produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixtureOutcome {
    /// One line per case, plus mismatch details for failures.
    pub report: String,
    pub passed: usize,
    pub failed: usize,
    /// The file could not be read or parsed as a fixture.
    pub broken: bool,
}

impl FixtureOutcome {
    pub fn succeeded(&self) -> bool {
        !self.broken && self.failed == 0
    }
}

/// Run every case of one fixture file.
pub fn run_fixture_file(path: &str, table: &TokenTable) -> FixtureOutcome {
    let mut outcome = FixtureOutcome::default();
    let source = match read_source(path) {
        Ok(source) => source,
        Err(_) => {
            outcome.broken = true;
            return outcome;
        }
    };
    let Ok(text) = std::str::from_utf8(source.as_bytes()) else {
        outcome.broken = true;
        let _ = writeln!(outcome.report, "error: '{path}' is not valid UTF-8");
        return outcome;
    };

    let _ = writeln!(outcome.report, "{path}");
    match run_fixture(text, table) {
        Ok(reports) => {
            for report in &reports {
                if report.passed() {
                    outcome.passed += 1;
                } else {
                    outcome.failed += 1;
                }
                let _ = writeln!(outcome.report, "  {}", report.to_string().trim_end());
            }
        }
        Err(err) => {
            outcome.broken = true;
            let _ = writeln!(outcome.report, "  error: {err}");
        }
    }
    outcome
}

/// Run fixture files in parallel and print their reports.
pub fn run_fixtures(paths: &[String]) -> i32 {
    let table = TokenTable::new();

    let outcomes = rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                paths
                    .par_iter()
                    .map(|path| run_fixture_file(path, &table))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            paths
                .iter()
                .map(|path| run_fixture_file(path, &table))
                .collect()
        });

    let mut passed = 0;
    let mut failed = 0;
    let mut all_ok = true;
    for outcome in &outcomes {
        print!("{}", outcome.report);
        passed += outcome.passed;
        failed += outcome.failed;
        all_ok &= outcome.succeeded();
    }
    println!();
    println!("{passed} passed, {failed} failed");

    i32::from(!all_ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    fn fixture_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("{e}"));
        file.write_all(contents.as_bytes())
            .unwrap_or_else(|e| panic!("{e}"));
        file
    }

    #[test]
    fn counts_passing_and_failing_cases() {
        let file = fixture_file(
            "## good\nx\n\n## want\n1:1  IDENT  x\n1:2  TERM\n2:1  EOF\n\
             ## bad\n42\n## want\n1:1  DECFLT  42\n1:3  EOF\n",
        );
        let path = file.path().to_string_lossy().into_owned();
        let outcome = run_fixture_file(&path, &TokenTable::new());

        assert_eq!(outcome.passed, 1);
        assert_eq!(outcome.failed, 1);
        assert!(!outcome.broken);
        assert!(!outcome.succeeded());
        assert!(outcome.report.contains("  ok      good\n"));
        assert!(outcome.report.contains("  FAILED  bad\n"));
    }

    #[test]
    fn malformed_fixture_is_broken() {
        let file = fixture_file("orphan\n## want\n");
        let path = file.path().to_string_lossy().into_owned();
        let outcome = run_fixture_file(&path, &TokenTable::new());

        assert!(outcome.broken);
        assert!(outcome.report.contains("error:"));
    }

    #[test]
    fn missing_file_is_broken() {
        let outcome = run_fixture_file("/definitely/not/here.test", &TokenTable::new());
        assert!(outcome.broken);
        assert_eq!(outcome.passed + outcome.failed, 0);
    }
}
