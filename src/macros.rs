//! Logging macros with `format!`-style messages and inline fields.
//!
//! Fields follow the message after a `;` as `key => value` pairs. The call
//! site recorded in the line prefix is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use json_line_logger::prelude::*;
//! use json_line_logger::{error, info};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone(), LogLevel::Info, false);
//!
//! // Message only
//! info!(logger, "Server started");
//!
//! // Format arguments and fields
//! let port = 8080;
//! info!(logger, "Listening on port {}", port; "port" => port, "tls" => false);
//!
//! // Fields without format arguments
//! error!(logger, "disk full"; "path" => "/var/log");
//!
//! assert_eq!(sink.lines().len(), 3);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use json_line_logger::prelude::*;
/// # let logger = Logger::new(MemorySink::new(), LogLevel::Debug, false);
/// use json_line_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500; "retryable" => false);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(; $($key:expr => $value:expr),+)?) => {
        $logger.log(
            $level,
            format!($fmt $(, $arg)*),
            $crate::LogContext::new() $($(.with_field($key, $value))+)?,
        )
    };
}

/// Log a debug-level message.
///
/// ```
/// # use json_line_logger::prelude::*;
/// # let logger = Logger::new(MemorySink::new(), LogLevel::Debug, false);
/// use json_line_logger::debug;
/// debug!(logger, "Counter value: {}", 10; "counter" => "requests");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
