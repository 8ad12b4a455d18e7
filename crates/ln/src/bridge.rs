use std::borrow::Cow;

use log::{LevelFilter, Metadata, Record};

use crate::errors::LnError;
use crate::facade::{location_tag, Ln, TagPolicy};
use crate::level::Priority;

/// Routes `log` records through an [`Ln`]: its threshold, tag policy and sink.
#[derive(Debug, Clone)]
pub struct LnLogger {
    ln: Ln,
}

impl LnLogger {
    pub fn new(ln: Ln) -> Self {
        Self { ln }
    }
}

impl log::Log for LnLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.ln.is_loggable(Priority::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let tag = match (self.ln.tag_policy(), record.file(), record.line()) {
            (TagPolicy::Fixed(tag), _, _) => Cow::Borrowed(tag.as_str()),
            (TagPolicy::CallerLocation, Some(file), Some(line)) => {
                Cow::Owned(location_tag(file, line))
            }
            // no file/line pair to show, fall back to the record target
            (TagPolicy::CallerLocation, _, _) => Cow::Borrowed(record.target()),
        };
        let message = record.args().to_string();
        self.ln
            .sink()
            .write(Priority::from(record.level()), &tag, &message);
    }

    fn flush(&self) {}
}

/// Installs `ln` as the global `log` logger.
///
/// `log`'s own max level is opened all the way, the `Ln` threshold alone
/// decides. Sinks that write back into `log` are refused.
pub fn init_logger(ln: Ln) -> Result<(), LnError> {
    if ln.sink().forwards_to_log() {
        return Err(LnError::RecursiveSink);
    }

    log::set_boxed_logger(Box::new(LnLogger::new(ln)))?;
    log::set_max_level(LevelFilter::Trace);
    log::debug!("ln installed as the log backend");
    Ok(())
}
