//! The structured payload written after the severity label

use super::error::Result;
use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;

pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "message";

/// One log call merged into a single key/value mapping
///
/// `level` and `message` are inserted first, then the caller's fields. A
/// caller field reusing either key replaces the built-in value.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    fields: LogContext,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>, context: LogContext) -> Self {
        let mut fields = LogContext::new()
            .with_field(LEVEL_KEY, level.to_str())
            .with_field(MESSAGE_KEY, message.into());
        fields.extend(context);
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize to a single-line JSON object with keys in sorted order
    pub fn to_json(&self) -> Result<String> {
        let mut object = serde_json::Map::new();
        for (key, value) in self.fields.fields() {
            object.insert(key.clone(), value.to_json_value(key, 0)?);
        }
        Ok(serde_json::to_string(&serde_json::Value::Object(object))?)
    }
}
