//! `format_args!`-based front end.
//!
//! Unlike the printf methods, template mistakes here are compile errors, and
//! argument expressions are only evaluated when the record passes the
//! threshold:
//!
//! ```ignore
//! ln_d!(ln, "user click at {}, {}", x, y);
//! ln_wtf!(ln, err = &state_error; "UH-OH! {}", reason);
//! ln_e!(ln, err = &io_error);
//! ```

#[macro_export]
macro_rules! ln_log {
    ($ln:expr, $priority:expr, err = $err:expr; $($arg:tt)+) => {{
        let ln: &$crate::Ln = &$ln;
        let priority: $crate::Priority = $priority;
        if ln.is_loggable(priority) {
            let error: &(dyn ::std::error::Error + 'static) = $err;
            ln.emit_args(priority, ::std::option::Option::Some(error), ::std::format_args!($($arg)+));
        }
    }};
    ($ln:expr, $priority:expr, err = $err:expr) => {{
        let ln: &$crate::Ln = &$ln;
        let priority: $crate::Priority = $priority;
        if ln.is_loggable(priority) {
            let error: &(dyn ::std::error::Error + 'static) = $err;
            ln.emit_args(priority, ::std::option::Option::Some(error), ::std::format_args!(""));
        }
    }};
    ($ln:expr, $priority:expr, $($arg:tt)+) => {{
        let ln: &$crate::Ln = &$ln;
        let priority: $crate::Priority = $priority;
        if ln.is_loggable(priority) {
            ln.emit_args(priority, ::std::option::Option::None, ::std::format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! ln_v {
    ($ln:expr, $($rest:tt)+) => { $crate::ln_log!($ln, $crate::Priority::Verbose, $($rest)+) };
}

#[macro_export]
macro_rules! ln_d {
    ($ln:expr, $($rest:tt)+) => { $crate::ln_log!($ln, $crate::Priority::Debug, $($rest)+) };
}

#[macro_export]
macro_rules! ln_i {
    ($ln:expr, $($rest:tt)+) => { $crate::ln_log!($ln, $crate::Priority::Info, $($rest)+) };
}

#[macro_export]
macro_rules! ln_w {
    ($ln:expr, $($rest:tt)+) => { $crate::ln_log!($ln, $crate::Priority::Warn, $($rest)+) };
}

#[macro_export]
macro_rules! ln_e {
    ($ln:expr, $($rest:tt)+) => { $crate::ln_log!($ln, $crate::Priority::Error, $($rest)+) };
}

#[macro_export]
macro_rules! ln_wtf {
    ($ln:expr, $($rest:tt)+) => { $crate::ln_log!($ln, $crate::Priority::Assert, $($rest)+) };
}
