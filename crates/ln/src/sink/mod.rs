use std::error::Error;
use std::sync::Arc;

use crate::level::Priority;

mod log_crate;
pub use log_crate::LogCrateSink;

mod tracing_sink;
pub use tracing_sink::TracingSink;

cfg_if::cfg_if! {
    if #[cfg(target_os = "android")] {
        mod android;
        pub use android::AndroidSink;
    }
}

/// Where formatted records end up.
///
/// Implementations are called synchronously on the logging thread, once per
/// record that passes the threshold. Failures inside a sink are the sink's
/// problem; the facade has nothing to report them to.
pub trait LogSink: Send + Sync {
    fn write(&self, priority: Priority, tag: &str, message: &str);

    /// Multi-line rendering of an error, appended after a newline.
    fn render_trace(&self, error: &(dyn Error + 'static)) -> String {
        render_error_chain(error)
    }

    /// True when writes end up in the `log` crate, which makes the sink
    /// unusable behind [`crate::LnLogger`].
    fn forwards_to_log(&self) -> bool {
        false
    }
}

/// The error's own message followed by one `Caused by:` line per source.
pub fn render_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Logcat on Android, the `log` crate everywhere else.
pub fn default_sink() -> Arc<dyn LogSink> {
    #[cfg(target_os = "android")]
    let sink: Arc<dyn LogSink> = Arc::new(AndroidSink);
    #[cfg(not(target_os = "android"))]
    let sink: Arc<dyn LogSink> = Arc::new(LogCrateSink);
    sink
}
