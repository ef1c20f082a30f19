use onyx_sbom::prelude::*;
use std::cell::RefCell;

/// Mock OutputPresenter for testing
///
/// Captures presented content in memory instead of touching the file system.
pub struct MockOutputPresenter {
    pub presented: RefCell<Vec<String>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self {
            presented: RefCell::new(Vec::new()),
        }
    }

    pub fn last_presented(&self) -> Option<String> {
        self.presented.borrow().last().cloned()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.borrow_mut().push(content.to_string());
        Ok(())
    }
}
