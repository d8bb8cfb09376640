use std::cell::RefCell;
use std::sync::Once;

use crate::services::matcher::classifier::MatchSink;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Captures sink output so tests can assert on log lines.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub infos: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}

impl MatchSink for RecordingSink {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
