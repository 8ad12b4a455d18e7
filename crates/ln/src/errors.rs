use thiserror::Error;

use crate::printf::FormatError;

#[derive(Debug, Error)]
pub enum LnError {
    #[error("Formatting failed: {0}")]
    Format(#[from] FormatError),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Logger installation failed: {0}")]
    SetLogger(#[from] log::SetLoggerError),

    #[error("Sink forwards into the log crate, installing the bridge would recurse")]
    RecursiveSink,

    #[error("Subscriber installation failed: {0}")]
    Subscriber(String),
}
