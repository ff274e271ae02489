use skyfare::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing
///
/// Records every message so tests can assert on reported progress.
/// Clones share their recorded state.
#[derive(Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Default for MockProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_step(&self, current: usize, total: usize, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("[{}/{}] {}", current, total, message));
    }

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
