use super::LogSink;
use crate::level::Priority;

/// Forwards records to whatever `log` implementation the host installed,
/// using the tag as the record target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        log::log!(target: tag, priority.to_log_level(), "{message}");
    }

    fn forwards_to_log(&self) -> bool {
        true
    }
}
