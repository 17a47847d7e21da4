//! Readers for untyped records.
//!
//! Models are rebuilt from loosely-shaped JSON (form posts, stored pages).
//! Every reader here is permissive: absent or `null` keys read as `None`,
//! and a key holding the wrong JSON type reads as `None` with a warning.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A JSON object with string keys.
pub type Record = Map<String, Value>;

/// View `value` as an object, or `None` (with a warning) for any other JSON value.
pub fn as_record<'a>(value: &'a Value, kind: &str) -> Option<&'a Record> {
    match value {
        Value::Object(record) => Some(record),
        other => {
            tracing::warn!("Ignoring non-object {} record: {}", kind, other);
            None
        }
    }
}

/// Read a scalar (or any deserializable) field.
pub fn read_field<T: DeserializeOwned>(record: &Record, key: &str) -> Option<T> {
    match record.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Ignoring field {:?} with unexpected value {}: {}", key, value, e);
                None
            }
        },
    }
}

/// Read an array field, rebuilding every element with `build`.
pub fn read_list<T>(record: &Record, key: &str, build: impl Fn(&Value) -> T) -> Option<Vec<T>> {
    match record.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items.iter().map(build).collect()),
        Some(other) => {
            tracing::warn!("Ignoring field {:?}: expected an array, got {}", key, other);
            None
        }
    }
}

/// Copy the keys of `record` that are not in `known`.
pub fn extra_fields(record: &Record, known: &[&str]) -> Record {
    record
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
