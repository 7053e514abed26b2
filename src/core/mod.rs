//! Core logger types

pub mod config;
pub mod error;
pub mod line_writer;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use line_writer::LineWriter;
pub use log_context::{FieldValue, LogContext, MAX_FIELD_DEPTH};
pub use log_level::{colorize_label, LogLevel, UNKNOWN_LEVEL};
pub use log_record::LogRecord;
pub use logger::{default_logger, set_default_logger, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
