use std::sync::Mutex;

use crate::{LogSink, Priority};

mod bridge;
mod macros;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub priority: Priority,
    pub tag: String,
    pub message: String,
}

/// Keeps every write in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Written>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<Written> {
        self.records.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|w| w.message).collect()
    }
}

impl LogSink for RecordingSink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        self.records.lock().unwrap().push(Written {
            priority,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}
