use std::ffi::CString;

use android_log_sys::{LogPriority, __android_log_write};

use super::LogSink;
use crate::level::Priority;

/// Writes straight to logcat through liblog.
#[derive(Debug, Default, Clone, Copy)]
pub struct AndroidSink;

impl LogSink for AndroidSink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        let prio = match priority {
            Priority::Verbose => LogPriority::VERBOSE,
            Priority::Debug => LogPriority::DEBUG,
            Priority::Info => LogPriority::INFO,
            Priority::Warn => LogPriority::WARN,
            Priority::Error => LogPriority::ERROR,
            Priority::Assert => LogPriority::FATAL,
        };

        let tag = c_string(tag);
        let msg = c_string(message);
        // SAFETY: both pointers come from live CStrings that outlive the call.
        unsafe { __android_log_write(prio as i32, tag.as_ptr(), msg.as_ptr()) };
    }
}

// liblog takes C strings, interior NULs would cut the record short.
fn c_string(s: &str) -> CString {
    CString::new(s.replace('\0', "")).unwrap_or_default()
}
