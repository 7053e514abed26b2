//! Declarative logger configuration

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Settings for constructing a [`Logger`](super::Logger)
///
/// Missing keys take their defaults, which match the process-wide default
/// logger: `INFO` threshold, colored labels, standard timestamps and call-site
/// locations.
///
/// # Example
///
/// ```
/// use json_line_logger::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::from_json(r#"{"min_level": "warn", "color": false}"#).unwrap();
/// assert_eq!(config.min_level, LogLevel::Warn);
/// assert!(!config.color);
/// assert!(config.source_location);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Calls below this level produce no output
    pub min_level: LogLevel,
    /// Wrap severity labels in ANSI color sequences
    pub color: bool,
    /// Prefix each line with a timestamp
    pub timestamps: bool,
    pub timestamp_format: TimestampFormat,
    /// Prefix each line with the `file:line` of the log call
    pub source_location: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            color: true,
            timestamps: true,
            timestamp_format: TimestampFormat::default(),
            source_location: true,
        }
    }
}

impl LoggerConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.timestamp_format
            .validate()
            .map_err(|message| LoggerError::config("LoggerConfig", message))
    }

    /// The timestamp format to hand to the line writer, `None` when disabled
    pub fn effective_timestamp_format(&self) -> Option<TimestampFormat> {
        self.timestamps.then(|| self.timestamp_format.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(config.color);
        assert_eq!(
            config.effective_timestamp_format(),
            Some(TimestampFormat::Standard)
        );
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = LoggerConfig::from_json(
            r#"{
                "min_level": "ERROR",
                "color": false,
                "timestamps": false,
                "timestamp_format": "Rfc3339",
                "source_location": false
            }"#,
        )
        .unwrap();

        assert_eq!(config.min_level, LogLevel::Error);
        assert_eq!(config.timestamp_format, TimestampFormat::Rfc3339);
        assert_eq!(config.effective_timestamp_format(), None);
        assert!(!config.source_location);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let err = LoggerConfig::from_json(r#"{"min_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_invalid_timestamp_format_is_rejected() {
        let err = LoggerConfig::from_json(r#"{"timestamp_format": {"Custom": ""}}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
