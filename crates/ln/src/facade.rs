use std::borrow::Cow;
use std::convert::Infallible;
use std::error::Error;
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::LnConfig;
use crate::level::Priority;
use crate::printf::{self, Arg, FormatError};
use crate::sink::{default_sink, LogSink};

/// Minimum priority a record needs to reach the sink.
///
/// Stored as a raw integer and never validated: anything above `Assert`
/// silences every call, anything below `Verbose` lets every call through.
/// Reads and writes are relaxed, so a change made on one thread may reach
/// callers on other threads a little late.
#[derive(Debug)]
pub struct Threshold(AtomicI32);

impl Threshold {
    pub fn new(level: Priority) -> Self {
        Self::from_raw(level.as_raw())
    }

    pub fn from_raw(raw: i32) -> Self {
        Self(AtomicI32::new(raw))
    }

    pub fn get(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, raw: i32) {
        self.0.store(raw, Ordering::Relaxed);
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Priority::Debug)
    }
}

/// How a logger names its records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagPolicy {
    /// `"<file>:<line>"` of the call site.
    #[default]
    CallerLocation,
    /// The same tag on every record.
    Fixed(String),
}

/// The logging facade.
///
/// Cloning an `Ln`, or deriving one with [`Ln::tagged`], shares the
/// threshold, so one `set_log_level` call reconfigures every handle that
/// came from the same root.
///
/// Every level has three shapes: message only (`d`), error only (`d_err`)
/// and both (`d_err_msg`). Nothing past the threshold check runs for
/// suppressed records.
#[derive(Clone)]
pub struct Ln {
    threshold: Arc<Threshold>,
    sink: Arc<dyn LogSink>,
    tag: TagPolicy,
}

macro_rules! level_methods {
    ($priority:ident, $msg:ident, $err:ident, $err_msg:ident) => {
        #[doc = concat!("Formats and logs a message at `", stringify!($priority), "`.")]
        #[track_caller]
        pub fn $msg(&self, template: &str, args: &[Arg<'_>]) -> Result<(), FormatError> {
            self.emit(Priority::$priority, None, template, args)
        }

        #[doc = concat!("Logs a rendered error at `", stringify!($priority), "`.")]
        #[track_caller]
        pub fn $err(&self, error: &(dyn Error + 'static)) {
            self.emit_error(Priority::$priority, error)
        }

        #[doc = concat!("Logs a message followed by a rendered error at `", stringify!($priority), "`.")]
        #[track_caller]
        pub fn $err_msg(
            &self,
            error: &(dyn Error + 'static),
            template: &str,
            args: &[Arg<'_>],
        ) -> Result<(), FormatError> {
            self.emit(Priority::$priority, Some(error), template, args)
        }
    };
}

impl Ln {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_threshold(Arc::new(Threshold::default()), sink)
    }

    pub fn with_threshold(threshold: Arc<Threshold>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            threshold,
            sink,
            tag: TagPolicy::CallerLocation,
        }
    }

    pub fn from_config(config: &LnConfig, sink: Arc<dyn LogSink>) -> Self {
        let mut ln = Self::with_threshold(Arc::new(Threshold::new(config.min_level)), sink);
        ln.tag = config.tag.clone();
        ln
    }

    /// A logger bound to a fixed tag, sharing this logger's threshold and sink.
    pub fn tagged(&self, tag: impl Into<String>) -> Self {
        Self {
            threshold: Arc::clone(&self.threshold),
            sink: Arc::clone(&self.sink),
            tag: TagPolicy::Fixed(tag.into()),
        }
    }

    pub fn tag_policy(&self) -> &TagPolicy {
        &self.tag
    }

    pub fn sink(&self) -> &dyn LogSink {
        self.sink.as_ref()
    }

    pub fn set_log_level(&self, level: Priority) {
        self.threshold.set(level.as_raw());
    }

    /// Overwrites the threshold with any integer, in range or not.
    pub fn set_raw_log_level(&self, raw: i32) {
        self.threshold.set(raw);
    }

    /// `None` when the threshold holds a value outside the known priorities.
    pub fn log_level(&self) -> Option<Priority> {
        Priority::try_from(self.threshold.get()).ok()
    }

    pub fn raw_log_level(&self) -> i32 {
        self.threshold.get()
    }

    pub fn is_loggable(&self, priority: Priority) -> bool {
        priority.as_raw() >= self.threshold.get()
    }

    level_methods!(Verbose, v, v_err, v_err_msg);
    level_methods!(Debug, d, d_err, d_err_msg);
    level_methods!(Info, i, i_err, i_err_msg);
    level_methods!(Warn, w, w_err, w_err_msg);
    level_methods!(Error, e, e_err, e_err_msg);
    level_methods!(Assert, wtf, wtf_err, wtf_err_msg);

    /// Shared path for every printf-style call.
    #[track_caller]
    pub fn emit(
        &self,
        priority: Priority,
        error: Option<&(dyn Error + 'static)>,
        template: &str,
        args: &[Arg<'_>],
    ) -> Result<(), FormatError> {
        self.dispatch(priority, error, Location::caller(), || {
            printf::format(template, args)
        })
    }

    #[track_caller]
    fn emit_error(&self, priority: Priority, error: &(dyn Error + 'static)) {
        let written = self.dispatch(priority, Some(error), Location::caller(), || {
            Ok::<_, Infallible>(String::new())
        });
        match written {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Entry point for the `ln_*!` macros; the arguments were already checked
    /// by `format_args!` and are only rendered past the threshold.
    #[doc(hidden)]
    #[track_caller]
    pub fn emit_args(
        &self,
        priority: Priority,
        error: Option<&(dyn Error + 'static)>,
        args: fmt::Arguments<'_>,
    ) {
        let written = self.dispatch(priority, error, Location::caller(), || {
            Ok::<_, Infallible>(fmt::format(args))
        });
        match written {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn dispatch<E, F>(
        &self,
        priority: Priority,
        error: Option<&(dyn Error + 'static)>,
        location: &Location<'_>,
        render: F,
    ) -> Result<(), E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        if !self.is_loggable(priority) {
            return Ok(());
        }

        let trace = match error {
            Some(error) => format!("\n{}", self.sink.render_trace(error)),
            None => String::new(),
        };
        let mut message = render()?;
        message.push_str(&trace);

        let tag = self.tag_for(location.file(), location.line());
        self.sink.write(priority, &tag, &message);
        Ok(())
    }

    fn tag_for(&self, file: &str, line: u32) -> Cow<'_, str> {
        match &self.tag {
            TagPolicy::Fixed(tag) => Cow::Borrowed(tag.as_str()),
            TagPolicy::CallerLocation => Cow::Owned(location_tag(file, line)),
        }
    }
}

impl Default for Ln {
    fn default() -> Self {
        Self::new(default_sink())
    }
}

impl fmt::Debug for Ln {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ln")
            .field("threshold", &self.threshold.get())
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// `"<file name>:<line>"`, or empty when the path has no file name.
pub fn location_tag(file: &str, line: u32) -> String {
    match file.rsplit(|c| c == '/' || c == '\\').next() {
        Some(name) if !name.is_empty() => format!("{name}:{line}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_tag_keeps_only_the_file_name() {
        assert_eq!(location_tag("src/ui/main_activity.rs", 42), "main_activity.rs:42");
        assert_eq!(location_tag("C:\\app\\src\\lib.rs", 7), "lib.rs:7");
        assert_eq!(location_tag("lib.rs", 1), "lib.rs:1");
        assert_eq!(location_tag("src/", 3), "");
    }

    #[test]
    fn threshold_accepts_out_of_range_values() {
        let threshold = Threshold::default();
        assert_eq!(threshold.get(), 3);
        threshold.set(42);
        assert_eq!(threshold.get(), 42);
        threshold.set(-1);
        assert_eq!(threshold.get(), -1);
    }
}
