//! Natural Log: leveled logging for mobile apps without the tag boilerplate.
//!
//! ```ignore
//! let ln = ln::Ln::default();
//! ln.set_log_level(ln::Priority::Info);
//! ln.d("dropped, below the threshold: %d", ln::ln_args!(1))?;
//! ln.i("server responded with %d: %s", ln::ln_args!(code, &reason))?;
//! ln.wtf_err(&illegal_state);
//! ```

mod bridge;
mod config;
mod config_loader;
mod errors;
mod facade;
mod helpers;
mod level;
mod macros;
mod printf;
mod sink;

#[cfg(test)]
mod tests;

pub use crate::bridge::{init_logger, LnLogger};
pub use crate::config::LnConfig;
pub use crate::config_loader::load_config;
pub use crate::errors::LnError;
pub use crate::facade::{location_tag, Ln, TagPolicy, Threshold};
pub use crate::helpers::init_host_tracing;
pub use crate::level::Priority;
pub use crate::printf::{format, Arg, FormatError};
pub use crate::sink::{default_sink, render_error_chain, LogCrateSink, LogSink, TracingSink};

#[cfg(target_os = "android")]
pub use crate::sink::AndroidSink;
