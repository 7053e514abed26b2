//! Structured fields attached to a single log call
//!
//! `FieldValue` is a closed set of JSON-compatible shapes, so every way a
//! record can fail to serialize is known up front: non-finite floats and
//! nesting past [`MAX_FIELD_DEPTH`].

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Deepest list/map nesting accepted when serializing a field value
pub const MAX_FIELD_DEPTH: usize = 64;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Convert to `serde_json::Value`, rejecting what JSON cannot represent
    ///
    /// `path` names the field for the error message, where it appears quoted
    /// and escaped; `depth` is the current nesting level, starting at zero for
    /// a top-level field.
    pub fn to_json_value(&self, path: &str, depth: usize) -> Result<serde_json::Value> {
        if depth > MAX_FIELD_DEPTH {
            return Err(LoggerError::formatter(
                "JSON",
                format!(
                    "field {:?} nests deeper than {} levels",
                    path, MAX_FIELD_DEPTH
                ),
            ));
        }

        let value = match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    LoggerError::formatter(
                        "JSON",
                        format!("field {:?} holds non-finite float {}", path, f),
                    )
                })?,
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    out.push(item.to_json_value(&format!("{}[{}]", path, idx), depth + 1)?);
                }
                serde_json::Value::Array(out)
            }
            FieldValue::Map(entries) => {
                let mut out = serde_json::Map::new();
                for (key, item) in entries {
                    let child = item.to_json_value(&format!("{}.{}", path, key), depth + 1)?;
                    out.insert(key.clone(), child);
                }
                serde_json::Value::Object(out)
            }
        };
        Ok(value)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(i: u64) -> Self {
        i64::try_from(i).map_or(FieldValue::Float(i as f64), FieldValue::Int)
    }
}

impl From<usize> for FieldValue {
    fn from(i: usize) -> Self {
        i64::try_from(i).map_or(FieldValue::Float(i as f64), FieldValue::Int)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f64::from(f))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<BTreeMap<String, T>> for FieldValue {
    fn from(entries: BTreeMap<String, T>) -> Self {
        FieldValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<FieldValue>> From<HashMap<String, T>> for FieldValue {
    fn from(entries: HashMap<String, T>) -> Self {
        FieldValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => n.as_f64().map_or(FieldValue::Null, FieldValue::Float),
            },
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => {
                FieldValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Named fields supplied alongside a log message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogContext {
    fields: HashMap<String, FieldValue>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Add a field to the context
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    /// Get all fields
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Check if context has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl IntoIterator for LogContext {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for LogContext
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = LogContext::new();
        for (key, value) in iter {
            ctx.add_field(key, value);
        }
        ctx
    }
}

impl<K, V> Extend<(K, V)> for LogContext
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add_field(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_creation() {
        let ctx = LogContext::new();
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_log_context_with_fields() {
        let ctx = LogContext::new()
            .with_field("user_id", 123)
            .with_field("username", "john_doe")
            .with_field("active", true)
            .with_field("tags", vec!["a", "b"]);

        assert_eq!(ctx.len(), 4);
        assert_eq!(ctx.get("user_id"), Some(&FieldValue::Int(123)));
        assert_eq!(
            ctx.get("tags"),
            Some(&FieldValue::List(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn test_later_field_overwrites_earlier() {
        let ctx = LogContext::new()
            .with_field("attempt", 1)
            .with_field("attempt", 2);

        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.get("attempt"), Some(&FieldValue::Int(2)));
    }

    #[test]
    fn test_from_iterator() {
        let ctx: LogContext = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_option_and_large_unsigned_conversions() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::String("x".into()));
        assert_eq!(FieldValue::from(7_u64), FieldValue::Int(7));
        assert_eq!(FieldValue::from(u64::MAX), FieldValue::Float(u64::MAX as f64));
    }

    #[test]
    fn test_nested_value_to_json() {
        let mut inner = BTreeMap::new();
        inner.insert("port".to_string(), FieldValue::Int(8080));
        let value = FieldValue::List(vec![FieldValue::Map(inner), FieldValue::Bool(false)]);

        let json = value.to_json_value("servers", 0).unwrap();
        assert_eq!(json, serde_json::json!([{"port": 8080}, false]));
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        let value = FieldValue::List(vec![FieldValue::Float(1.5), FieldValue::Float(f64::NAN)]);
        let err = value.to_json_value("ratios", 0).unwrap_err();
        assert!(err.to_string().contains("\"ratios[1]\""));
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_error_path_escapes_control_characters() {
        let value = FieldValue::Map(BTreeMap::from([(
            "inner\nkey".to_string(),
            FieldValue::Float(f64::INFINITY),
        )]));
        let message = value.to_json_value("outer\r\nkey", 0).unwrap_err().to_string();

        assert!(!message.contains('\n'));
        assert!(!message.contains('\r'));
        assert!(message.contains(r#""outer\r\nkey.inner\nkey""#));
    }

    #[test]
    fn test_excessive_nesting_is_rejected() {
        let mut value = FieldValue::Null;
        for _ in 0..=MAX_FIELD_DEPTH {
            value = FieldValue::List(vec![value]);
        }
        let err = value.to_json_value("deep", 0).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));

        let mut shallow = FieldValue::Null;
        for _ in 0..MAX_FIELD_DEPTH {
            shallow = FieldValue::List(vec![shallow]);
        }
        assert!(shallow.to_json_value("shallow", 0).is_ok());
    }

    #[test]
    fn test_from_json_value() {
        let value = FieldValue::from(serde_json::json!({"a": [1, 2.5, null]}));
        let json = value.to_json_value("v", 0).unwrap();
        assert_eq!(json, serde_json::json!({"a": [1, 2.5, null]}));
    }
}
