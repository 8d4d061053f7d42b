use depth::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter capturing everything written to it
///
/// Clones share the same buffer, so a test can keep one handle
/// while the use case owns another.
#[derive(Default, Clone)]
pub struct MockPresenter {
    output: Arc<Mutex<String>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.output.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.output.lock().unwrap().push_str(content);
        Ok(())
    }
}
