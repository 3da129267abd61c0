//! Output comparison and console reporting.

use std::io::{self, Write};
use std::path::Path;

use crate::run::{RunOutcome, Runner, rendered};

/// Result of comparing the two captured runs of one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Mismatch,
}

/// Compare the interpreter's output against the reference's.
///
/// Match only when both runs succeeded with identical bytes; there is no
/// normalization, so a stray trailing newline is a mismatch. A failure on
/// either side can never match: which runner failed is part of the outcome,
/// as in the marker convention where the two prefixes differ.
pub fn compare(actual: &RunOutcome, expected: &RunOutcome) -> Outcome {
    match (actual, expected) {
        (RunOutcome::Success(a), RunOutcome::Success(b)) if a == b => Outcome::Match,
        _ => Outcome::Mismatch,
    }
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Writes one line per test case, colorized, with both captured outputs
/// spelled out on a mismatch so a human can diff them.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Printed and flushed before the slow compile and run steps, so the
    /// case being worked on is visible while its children execute.
    pub fn on_case_start(&mut self, case_dir: &Path) -> io::Result<()> {
        write!(self.out, "{} ... ", case_dir.display())?;
        self.out.flush()
    }

    pub fn on_case_complete(
        &mut self,
        outcome: Outcome,
        actual: &RunOutcome,
        expected: &RunOutcome,
    ) -> io::Result<()> {
        match outcome {
            Outcome::Match => writeln!(self.out, "{GREEN}OK{RESET}"),
            Outcome::Mismatch => {
                writeln!(self.out, "{RED}FAILED{RESET}")?;
                let actual = rendered(Runner::UnderTest, actual);
                let expected = rendered(Runner::Reference, expected);
                writeln!(self.out, "  actual:   {}", String::from_utf8_lossy(&actual))?;
                writeln!(
                    self.out,
                    "  expected: {}",
                    String::from_utf8_lossy(&expected)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(bytes: &[u8]) -> RunOutcome {
        RunOutcome::Success(bytes.to_vec())
    }

    fn failure(bytes: &[u8]) -> RunOutcome {
        RunOutcome::Failure(bytes.to_vec())
    }

    #[test]
    fn test_identical_success_matches() {
        assert_eq!(compare(&success(b"hello\n"), &success(b"hello\n")), Outcome::Match);
    }

    #[test]
    fn test_no_normalization() {
        assert_eq!(compare(&success(b"hello"), &success(b"hello\n")), Outcome::Mismatch);
        assert_eq!(
            compare(&success(b"hello \n"), &success(b"hello\n")),
            Outcome::Mismatch
        );
        assert_eq!(
            compare(&success(b"hello\r\n"), &success(b"hello\n")),
            Outcome::Mismatch
        );
    }

    #[test]
    fn test_failure_never_matches_success() {
        assert_eq!(compare(&failure(b"42\n"), &success(b"42\n")), Outcome::Mismatch);
        assert_eq!(compare(&success(b"42\n"), &failure(b"42\n")), Outcome::Mismatch);
    }

    #[test]
    fn test_two_failures_with_same_stderr_mismatch() {
        // Distinct runners produced them, mirroring the distinct markers
        assert_eq!(compare(&failure(b"boom"), &failure(b"boom")), Outcome::Mismatch);
    }

    #[test]
    fn test_marker_text_in_stdout_is_not_a_failure() {
        // A program legitimately printing the marker text still matches
        let text = b"java failed to run: just kidding\n";
        assert_eq!(compare(&success(text), &success(text)), Outcome::Match);
    }

    #[test]
    fn test_reporter_match_line() {
        let mut buf = Vec::new();
        {
            let mut reporter = ConsoleReporter::new(&mut buf);
            reporter.on_case_start(Path::new("tests/hello")).unwrap();
            reporter
                .on_case_complete(Outcome::Match, &success(b"hello\n"), &success(b"hello\n"))
                .unwrap();
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "tests/hello ... \x1b[32mOK\x1b[0m\n"
        );
    }

    #[test]
    fn test_reporter_mismatch_shows_both_outputs() {
        let mut buf = Vec::new();
        {
            let mut reporter = ConsoleReporter::new(&mut buf);
            reporter.on_case_start(Path::new("tests/crash")).unwrap();
            reporter
                .on_case_complete(Outcome::Mismatch, &failure(b"boom\n"), &success(b"42\n"))
                .unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\x1b[31mFAILED\x1b[0m"));
        assert!(text.contains("actual:   failed to run: boom"));
        assert!(text.contains("expected: 42"));
    }
}
