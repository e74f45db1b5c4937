use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Could not read script: {0}")]
    UnreadableScript(#[from] io::Error),
}

/// Lexical failure state for one session. Diagnostics print to stderr the
/// moment they are reported; `reset` clears the flag and nothing else.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    had_error: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    // `location` stays empty until a parser exists to supply positional
    // context such as "at end" or "at 'x'".
    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {line}] Error {location}: {message}");
        self.had_error = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear() {
        let reporter = ErrorReporter::new();
        assert!(!reporter.had_error());
    }

    #[test]
    fn process_sets_the_flag() {
        let mut reporter = ErrorReporter::new();
        reporter.process(1, "Unexpected character.");
        assert!(reporter.had_error());
    }

    #[test]
    fn reset_clears_only_the_flag() {
        let mut reporter = ErrorReporter::new();
        reporter.process(2, "Unterminated string.");
        reporter.reset();
        assert!(!reporter.had_error());
        reporter.process(3, "Unexpected character.");
        assert!(reporter.had_error());
    }
}
