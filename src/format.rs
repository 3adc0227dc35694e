//! JSON formatting contract shared by all settings entities.
//!
//! Every entity serializes itself through [`AsJson`], delegating to its
//! children's implementations for nested structures. The settings API the
//! output is handed to treats absent keys as unset, so attributes whose value
//! is empty, `false`, or `0` are dropped from the output rather than emitted
//! explicitly. [`AttrMap`] enumerates that rule per attribute kind.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::SettingsError;

/// Produce the nested plain-data representation of an entity.
///
/// Implementations have no side effects and are idempotent; calling
/// [`AsJson::as_json`] repeatedly on an unmodified entity returns equal
/// values. Containers delegate to each child's `as_json`.
pub trait AsJson {
    /// Serialize the entity into a JSON value.
    fn as_json(&self) -> Value;
}

/// Attribute collector that drops unset and falsy values.
///
/// The omission rules mirror the consuming settings API: empty strings,
/// `false`, `0`, empty sequences, and empty mappings are all treated as
/// "not configured" and left out of the serialized form.
#[derive(Debug, Default)]
pub(crate) struct AttrMap(Map<String, Value>);

impl AttrMap {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a string attribute unless it is empty.
    pub fn text(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.0.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    /// Insert an optional string attribute unless unset or empty.
    pub fn opt_text(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.text(key, v);
        }
    }

    /// Insert a boolean attribute unless it is `false`.
    pub fn flag(&mut self, key: &str, value: bool) {
        if value {
            self.0.insert(key.to_string(), Value::Bool(true));
        }
    }

    /// Insert an integer attribute unless it is `0`.
    pub fn count(&mut self, key: &str, value: i64) {
        if value != 0 {
            self.0.insert(key.to_string(), Value::Number(value.into()));
        }
    }

    /// Insert a sequence attribute unless it is empty.
    pub fn items(&mut self, key: &str, items: Vec<Value>) {
        if !items.is_empty() {
            self.0.insert(key.to_string(), Value::Array(items));
        }
    }

    /// Insert a pre-serialized value unless it is null or empty.
    pub fn entry(&mut self, key: &str, value: Value) {
        let empty = match &value {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if !empty {
            self.0.insert(key.to_string(), value);
        }
    }

    /// Insert a string-to-string mapping unless it is empty.
    pub fn text_map(&mut self, key: &str, map: &HashMap<String, String>) {
        if map.is_empty() {
            return;
        }
        let obj: Map<String, Value> = map
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        self.0.insert(key.to_string(), Value::Object(obj));
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Join an attribute key onto a dot-separated path.
pub(crate) fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

pub(crate) fn type_mismatch(path: &str, expected: &str, actual: &Value) -> SettingsError {
    SettingsError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        actual: format!("{}", actual),
    }
}

/// Error for a required attribute that is absent from the payload.
pub(crate) fn missing(path: &str, expected: &str) -> SettingsError {
    SettingsError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        actual: "nothing".to_string(),
    }
}

pub(crate) fn expect_str(value: &Value, path: &str) -> Result<String, SettingsError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(type_mismatch(path, "string", value)),
    }
}

pub(crate) fn expect_bool(value: &Value, path: &str) -> Result<bool, SettingsError> {
    match value {
        Value::Bool(b) => Ok(*b),
        _ => Err(type_mismatch(path, "boolean", value)),
    }
}

pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, SettingsError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(type_mismatch(path, "object", value)),
    }
}

pub(crate) fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], SettingsError> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(type_mismatch(path, "array", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_attributes_are_dropped() {
        let mut attrs = AttrMap::new();
        attrs.text("title", "");
        attrs.opt_text("id", None);
        attrs.flag("hidden", false);
        attrs.count("default_value", 0);
        attrs.items("choices", Vec::new());
        attrs.entry("dependency", Value::Null);
        attrs.entry("callback", json!({}));
        attrs.text_map("html_attributes", &HashMap::new());
        assert_eq!(attrs.into_value(), json!({}));
    }

    #[test]
    fn test_set_attributes_are_kept() {
        let mut attrs = AttrMap::new();
        attrs.text("title", "Title");
        attrs.flag("hidden", true);
        attrs.count("default_value", 1);
        attrs.items("choices", vec![json!({"label": "a"})]);
        assert_eq!(
            attrs.into_value(),
            json!({
                "title": "Title",
                "hidden": true,
                "default_value": 1,
                "choices": [{"label": "a"}],
            })
        );
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join("", "label"), "label");
        assert_eq!(join("fields.0", "label"), "fields.0.label");
    }

    #[test]
    fn test_expect_str_rejects_null() {
        let err = expect_str(&Value::Null, "tooltip").unwrap_err();
        assert_eq!(
            err,
            SettingsError::TypeMismatch {
                path: "tooltip".to_string(),
                expected: "string".to_string(),
                actual: "null".to_string(),
            }
        );
    }

    #[test]
    fn test_expect_bool_rejects_string() {
        assert!(expect_bool(&json!("yes"), "required").is_err());
        assert_eq!(expect_bool(&json!(true), "required"), Ok(true));
    }
}
