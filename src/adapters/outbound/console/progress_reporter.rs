use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes progress information to stderr so it doesn't interfere with
/// stdout output, and keeps an indicatif spinner alive across the
/// pipeline's sequential network steps.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(spinner) = guard.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_step(&self, current: usize, total: usize, message: &str) {
        if let Ok(mut guard) = self.spinner.lock() {
            let spinner = guard.get_or_insert_with(|| {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("   {spinner:.green} {msg}")
                        .expect("Failed to set spinner template"),
                );
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner
            });
            spinner.set_message(format!("[{}/{}] {}", current, total, message));
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!();
        eprintln!("{}", message);
    }
}

/// NullProgressReporter adapter that discards all progress output
///
/// Used by the library entry point, where a consumer embedding the search
/// should not get unsolicited stderr traffic.
pub struct NullProgressReporter;

impl NullProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_step(&self, _current: usize, _total: usize, _message: &str) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_reporter_does_not_panic() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Test message");
        reporter.report_step(1, 2, "step one");
        reporter.report_step(2, 2, "step two");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_null_reporter_discards_everything() {
        let reporter = NullProgressReporter::new();
        reporter.report("ignored");
        reporter.report_step(1, 2, "ignored");
        reporter.report_error("ignored");
        reporter.report_completion("ignored");
    }
}
