//! Record serialization
//!
//! Two renderings exist: the structured JSON line every sink defaults to, and
//! a colored human-readable line the console sink can opt into. Both produce
//! exactly one line per record.

use colored::Colorize;

use super::record::{Record, ERROR_CODE_KEY, ERROR_KEY, TIMESTAMP_KEY};

/// Console rendering mode, selected once at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum ConsoleFormat {
    /// Machine-parseable JSON, identical to what file sinks receive.
    #[default]
    Json,
    /// Human-readable rendering with colored level tags.
    Text,
}

/// Serialize a record as a single JSON object line (no trailing newline).
pub fn json_line(record: &Record) -> String {
    let mut obj = serde_json::Map::new();

    obj.insert(
        TIMESTAMP_KEY.to_string(),
        serde_json::Value::String(record.timestamp_str()),
    );
    obj.insert(
        "level".to_string(),
        serde_json::Value::String(record.level.to_str().to_string()),
    );
    if !record.message.is_empty() {
        obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );
    }
    if let Some(caller) = record.caller {
        obj.insert(
            "caller".to_string(),
            serde_json::Value::String(caller.to_string()),
        );
    }
    if let Some(ref error) = record.error {
        obj.insert(
            ERROR_KEY.to_string(),
            serde_json::Value::String(error.clone()),
        );
    }
    if let Some(code) = record.code {
        obj.insert(
            ERROR_CODE_KEY.to_string(),
            serde_json::Value::Number(code.into()),
        );
    }
    for (key, value) in record.fields() {
        obj.insert(key.clone(), value.to_json_value());
    }

    serde_json::Value::Object(obj).to_string()
}

/// Render a record as a human-readable line (no trailing newline).
pub fn text_line(record: &Record, use_colors: bool) -> String {
    let level_str = if use_colors {
        format!("{:5}", record.level.to_str())
            .color(record.level.color_code())
            .to_string()
    } else {
        format!("{:5}", record.level.to_str())
    };

    let mut line = format!(
        "[{}] [{}] {}",
        record.timestamp_str(),
        level_str,
        record.message
    );

    if let Some(ref error) = record.error {
        line.push_str(&format!(" {}=\"{}\"", ERROR_KEY, error));
    }
    if let Some(code) = record.code {
        line.push_str(&format!(" {}={}", ERROR_CODE_KEY, code));
    }
    if let Some(caller) = record.caller {
        line.push_str(&format!(" caller={}", caller));
    }
    for (key, value) in record.fields() {
        line.push_str(&format!(" {}={}", key, value));
    }

    line
}
