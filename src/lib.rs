//! # JSON Line Logger
//!
//! A minimal leveled logger. Each accepted call becomes one line:
//!
//! ```text
//! 2025/01/08 10:30:45 main.rs:42: ERROR {"level":"ERROR","message":"disk full","path":"/var/log"}
//! ```
//!
//! ## Features
//!
//! - **Leveled**: `DEBUG < INFO < WARN < ERROR` with a runtime threshold
//! - **Structured**: caller fields merged into a JSON record
//! - **Terminal friendly**: optional ANSI colors on the severity label
//! - **Thread Safe**: one lock around the final write, no torn lines
//! - **Never fails the caller**: problems end up in the log stream or stderr

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        default_logger, FieldValue, LogContext, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
    pub use crate::sinks::{FileSink, MemorySink};
}

pub use core::{
    colorize_label, default_logger, set_default_logger, FieldValue, LineWriter, LogContext,
    LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    TimestampFormat, MAX_FIELD_DEPTH, UNKNOWN_LEVEL,
};
pub use sinks::{FileSink, MemorySink};
