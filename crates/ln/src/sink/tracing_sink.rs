use super::LogSink;
use crate::level::Priority;

/// Emits each record as a `tracing` event with the tag as a field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        match priority {
            Priority::Verbose => tracing::trace!(tag, "{message}"),
            Priority::Debug => tracing::debug!(tag, "{message}"),
            Priority::Info => tracing::info!(tag, "{message}"),
            Priority::Warn => tracing::warn!(tag, "{message}"),
            Priority::Error => tracing::error!(tag, "{message}"),
            Priority::Assert => tracing::error!(tag, assert = true, "{message}"),
        }
    }

    // with tracing's `log` feature, events fall through to `log` when no
    // subscriber is set
    fn forwards_to_log(&self) -> bool {
        true
    }
}
