//! Log record assembled for a single emission

use super::level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt;

/// Output key of the record timestamp.
pub const TIMESTAMP_KEY: &str = "t";
/// Output key of the request elapsed-time field.
///
/// The timestamp historically also used `"t"`, so whichever field was
/// serialized last silently won; the elapsed time now has its own key.
pub const ELAPSED_KEY: &str = "d";
/// Output key of the request correlation identifier.
pub const REQUEST_ID_KEY: &str = "id";
/// Output key of the error description on error-severity records.
pub const ERROR_KEY: &str = "error";
/// Output key of the integer error code.
pub const ERROR_CODE_KEY: &str = "c";

/// Timestamp rendering with millisecond precision, e.g. `07/08/26-14:03:09.123`.
pub const TIME_FORMAT: &str = "%d/%m/%y-%H:%M:%S%.3f";

/// Call-site location attached to a record when caller capture is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    /// Location of the caller of the function this is invoked from.
    #[track_caller]
    pub fn here() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Value type for extra fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
        }
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

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
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

/// One in-flight log event.
///
/// A record is built per emission, augmented by the owning logger's field
/// providers, and handed to every sink of the fan-out set. Extra fields keep
/// registration order; re-setting an existing key replaces its value, so the
/// last writer wins and a key appears at most once per record.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub caller: Option<Caller>,
    pub error: Option<String>,
    pub code: Option<i64>,
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Sanitize text destined for a single output line.
    ///
    /// Newlines, carriage returns, and tabs are escaped so that one emission
    /// is always exactly one line in every sink, and so attackers cannot
    /// inject fake records through message content.
    pub fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message: Self::sanitize(&message),
            timestamp: Utc::now(),
            caller: None,
            error: None,
            code: None,
            fields: Vec::new(),
        }
    }

    /// Attach an error description, sanitized like the message.
    pub fn set_error(&mut self, err: &dyn std::error::Error) {
        self.error = Some(Self::sanitize(&err.to_string()));
    }

    /// Set an extra field. Replaces the value if the key is already present.
    pub fn set_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Extra fields in registration order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Look up an extra field by key.
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitized() {
        let record = Record::new(LogLevel::Info, "a\nb\tc".to_string());
        assert_eq!(record.message, "a\\nb\\tc");
    }

    #[test]
    fn test_set_field_last_wins() {
        let mut record = Record::new(LogLevel::Info, "x".to_string());
        record.set_field("k", "first");
        record.set_field("other", 1);
        record.set_field("k", "second");

        assert_eq!(record.fields().len(), 2);
        assert_eq!(record.field("k"), Some(&FieldValue::String("second".into())));
    }

    #[test]
    fn test_fields_keep_registration_order() {
        let mut record = Record::new(LogLevel::Info, "x".to_string());
        record.set_field("a", 1);
        record.set_field("b", 2);
        record.set_field("c", 3);

        let keys: Vec<&str> = record.fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_timestamp_str_millisecond_precision() {
        let record = Record::new(LogLevel::Info, "x".to_string());
        let rendered = record.timestamp_str();
        // dd/mm/yy-HH:MM:SS.mmm
        assert_eq!(rendered.len(), 21);
        assert_eq!(&rendered[17..18], ".");
    }
}
