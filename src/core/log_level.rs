//! Severity level definitions

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Label used for raw level values that do not name a known severity
pub const UNKNOWN_LEVEL: &str = "UNKNOWN";

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Map a raw numeric level back to a severity
    pub fn from_repr(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// String form of a raw numeric level, `"UNKNOWN"` when out of range
    pub fn label_for(raw: u8) -> &'static str {
        Self::from_repr(raw).map_or(UNKNOWN_LEVEL, |level| level.to_str())
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Cyan,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
        }
    }

    /// Severity label as it appears in front of the record
    ///
    /// With `color` set the label is wrapped in the level's ANSI foreground
    /// sequence and a reset. Terminal detection is not consulted: the caller
    /// decides.
    pub fn label(&self, color: bool) -> Cow<'static, str> {
        if color {
            Cow::Owned(colorize_label(self.to_str(), Some(*self)))
        } else {
            Cow::Borrowed(self.to_str())
        }
    }
}

/// Wrap `label` in the ANSI color of `level`; unrecognized levels pass through
pub fn colorize_label(label: &str, level: Option<LogLevel>) -> String {
    match level {
        Some(level) => format!(
            "\x1b[{}m{}{}",
            level.color_code().to_fg_str(),
            label,
            ANSI_RESET
        ),
        None => label.to_string(),
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
