//! Option list editing, import and export
//!
//! The edit surface carries one option per line. Imports go through a
//! read-then-validate pipeline and only produce a list once the whole
//! document has been checked; exports are pretty-printed JSON arrays.

use serde_json::Value;

use crate::error::{ImportParseError, WheelError};

/// Turn free edit text into an option list
///
/// Lines are split on `\n` or `\r\n`, trimmed, and blank lines are dropped.
pub fn parse_edit_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text shown in the edit surface for an option list
pub fn editor_text(options: &[String]) -> String {
    options.join("\n")
}

/// Serialize an option list as a pretty-printed JSON array
pub fn export_options(options: &[String]) -> Result<String, WheelError> {
    serde_json::to_string_pretty(options).map_err(WheelError::Json)
}

/// Parse and validate an imported JSON document
///
/// `name` identifies the document in diagnostics. The document must be a
/// non-empty array; every element is coerced to a string and entries that
/// end up blank are dropped.
pub fn import_options(name: &str, text: &str) -> Result<Vec<String>, WheelError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| WheelError::ImportParse(Box::new(ImportParseError::new(name, text, e))))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(WheelError::ImportShape {
                message: format!("expected an array, found {}", describe(&other)),
            });
        }
    };

    if items.is_empty() {
        return Err(WheelError::ImportShape {
            message: "the array is empty".to_string(),
        });
    }

    let options: Vec<String> = items
        .iter()
        .map(coerce_to_string)
        .filter(|option| !option.trim().is_empty())
        .collect();

    if options.is_empty() {
        return Err(WheelError::ImportShape {
            message: "every entry is blank".to_string(),
        });
    }

    Ok(options)
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
