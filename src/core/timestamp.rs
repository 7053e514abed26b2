//! Timestamp formatting for the line prefix
//!
//! The default matches the classic `YYYY/MM/DD hh:mm:ss` local-time prefix
//! of line-oriented loggers. Other formats suit log aggregation tools.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

const STANDARD_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Timestamp format options for the line prefix
///
/// # Examples
///
/// ```
/// use json_line_logger::core::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::Standard;
/// let timestamp = format.format(&Local::now());
/// assert_eq!(timestamp.len(), "2025/01/08 10:30:45".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second in the writer's zone: `2025/01/08 10:30:45`
    #[default]
    Standard,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with the writer's offset: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use json_line_logger::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// assert!(format.validate().is_ok());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp according to this format
    ///
    /// A custom format chrono cannot render falls back to [`TimestampFormat::Standard`].
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Standard => datetime.format(STANDARD_FORMAT).to_string(),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    out.clear();
                    out.push_str(&datetime.format(STANDARD_FORMAT).to_string());
                }
                out
            }
        }
    }

    /// Check that a custom format is non-empty and understood by chrono
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let TimestampFormat::Custom(format_str) = self {
            if format_str.trim().is_empty() {
                return Err("custom timestamp format is empty".to_string());
            }
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(format!(
                    "custom timestamp format '{}' is not valid strftime",
                    format_str
                ));
            }
        }
        Ok(())
    }
}
