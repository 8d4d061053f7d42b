use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream::Stderr};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing to stderr
/// so it never interleaves with tree or JSON output on stdout.
/// Progress and completion messages are only shown in verbose mode;
/// warnings are always shown.
pub struct StderrProgressReporter {
    verbose: bool,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if !self.verbose {
            return;
        }
        let counter = format!("[{}/{}]", current, total);
        match message {
            Some(msg) => eprintln!(
                "{} {}",
                counter.if_supports_color(Stderr, |t| t.dimmed()),
                msg
            ),
            None => eprintln!("{}", counter.if_supports_color(Stderr, |t| t.dimmed())),
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!(
            "{} {}",
            "warning:".if_supports_color(Stderr, |t| t.yellow()),
            message
        );
    }

    fn report_completion(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message.if_supports_color(Stderr, |t| t.green()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_verbose() {
        let reporter = StderrProgressReporter::new(true);
        assert!(reporter.is_verbose());
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_progress(1, 2, Some("test"));
        reporter.report_progress(2, 2, None);
        reporter.report_error("Test warning");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_reporter_default_is_quiet() {
        let reporter = StderrProgressReporter::default();
        assert!(!reporter.is_verbose());
        reporter.report("Test message");
    }
}
