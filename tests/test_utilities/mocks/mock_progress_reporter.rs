use depth::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter that records every diagnostic in the order it was sent
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Progress lines rendered as `[i/n] Resolving '<pkg>'`, in order
    pub fn resolving_steps(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Progress: ").map(str::to_string))
            .filter(|m| m.contains("Resolving '"))
            .collect()
    }

    /// Warnings passed to `report_error`
    pub fn warnings(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Warning: ").map(str::to_string))
            .collect()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let step = format!("[{}/{}]", current, total);
        self.push(match message {
            Some(m) => format!("Progress: {} {}", step, m),
            None => format!("Progress: {}", step),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Warning: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
