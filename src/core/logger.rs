//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    line_writer::LineWriter,
    log_context::LogContext,
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Leveled logger writing one `<label> <json>` line per accepted call
///
/// Everything up to the final prefix-and-write step runs without a lock. That
/// step holds the writer mutex, so lines from concurrent callers never
/// interleave.
///
/// # Example
///
/// ```
/// use json_line_logger::{LogContext, LogLevel, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(sink.clone(), LogLevel::Warn, false);
///
/// logger.info("cache warmed", LogContext::new());
/// logger.error("disk full", LogContext::new().with_field("path", "/var/log"));
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with(r#"ERROR {"level":"ERROR","message":"disk full","path":"/var/log"}"#));
/// ```
pub struct Logger {
    min_level: AtomicU8,
    color: bool,
    writer: Mutex<LineWriter>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Wrap `sink` with the standard prefix: timestamp plus call-site location
    #[must_use]
    pub fn new<W>(sink: W, min_level: LogLevel, color: bool) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_writer(LineWriter::new(sink), min_level, color)
    }

    fn with_writer(writer: LineWriter, min_level: LogLevel, color: bool) -> Self {
        Self {
            min_level: AtomicU8::new(min_level as u8),
            color,
            writer: Mutex::new(writer),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from a validated configuration
    pub fn from_config<W>(sink: W, config: &LoggerConfig) -> Result<Self>
    where
        W: Write + Send + 'static,
    {
        config.validate()?;
        Ok(LoggerBuilder::from_config(config).sink(sink).build())
    }

    pub fn min_level(&self) -> LogLevel {
        // Only ever stored from a LogLevel
        LogLevel::from_repr(self.min_level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log `message` with `fields` at `level`
    ///
    /// Never fails from the caller's point of view. A record that cannot be
    /// serialized is replaced by a `Failed to marshal log entry` line, and a
    /// sink error is reported on stderr.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>, fields: LogContext) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let location = Location::caller();
        let record = LogRecord::new(level, message, fields);

        let json = match record.to_json() {
            Ok(json) => json,
            Err(e) => {
                self.metrics.record_serialization_failure();
                let diagnostic = format!("Failed to marshal log entry: {}", e);
                if let Err(e) = self.write_line(location, &diagnostic) {
                    self.report_write_failure(&e);
                }
                return;
            }
        };

        let body = format!("{} {}", level.label(self.color), json);
        match self.write_line(location, &body) {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(e) => self.report_write_failure(&e),
        }
    }

    fn write_line(&self, location: &Location<'_>, body: &str) -> io::Result<()> {
        self.writer.lock().write_line(Some(location), body)
    }

    fn report_write_failure(&self, error: &io::Error) {
        self.metrics.record_write_failure();
        eprintln!("[LOGGER ERROR] Failed to write log line: {}", error);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, fields: LogContext) {
        self.log(LogLevel::Debug, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>, fields: LogContext) {
        self.log(LogLevel::Info, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, fields: LogContext) {
        self.log(LogLevel::Warn, message, fields);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>, fields: LogContext) {
        self.log(LogLevel::Error, message, fields);
    }

    pub fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing log sink", "sink refused flush", e))
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use json_line_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .color(false)
    ///     .sink(MemorySink::new())
    ///     .build();
    /// assert!(logger.is_enabled(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("color", &self.color)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// The process-wide logger: stdout, `INFO` threshold, colored labels
///
/// Created on first use unless [`set_default_logger`] installed another one
/// earlier. Prefer handing a `&Logger` to components that log; this exists for
/// code with no better place to get one.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::new(io::stdout(), LogLevel::Info, true))
}

/// Install the process-wide logger before anything uses it
///
/// Returns the logger back if the default was already set or used.
pub fn set_default_logger(logger: Logger) -> std::result::Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    min_level: LogLevel,
    color: bool,
    timestamp_format: Option<TimestampFormat>,
    source_location: bool,
    sink: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            color: true,
            timestamp_format: Some(TimestampFormat::default()),
            source_location: true,
            sink: None,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            min_level: config.min_level,
            color: config.color,
            timestamp_format: config.effective_timestamp_format(),
            source_location: config.source_location,
            sink: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn without_timestamps(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn source_location(mut self, enabled: bool) -> Self {
        self.source_location = enabled;
        self
    }

    /// Set the output sink; stdout when never called
    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stdout()));
        let writer = LineWriter::from_boxed(sink)
            .with_timestamp_format(self.timestamp_format)
            .with_source_location(self.source_location);
        Logger::with_writer(writer, self.min_level, self.color)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
