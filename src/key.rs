//! Keypath elements.
//!
//! A keypath is a plain `[Key]` slice. Each [`Key`] is either a map member
//! name or a sequence index; negative indices count from the end.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// One step of a keypath.
///
/// Serialized untagged, so a keypath round-trips as a JSON array such as
/// `[2, "commit", "author", "date"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Member name, valid against a JSON object.
    Name(String),
    /// Element index, valid against a JSON array. `-1` is the last element.
    Index(i64),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        // Indices past i64::MAX can never be in range of a real array.
        Key::Index(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

/// Parse a keypath from a JSON array literal, e.g. `[2, "commit", "date"]`.
///
/// Only strings and integers are accepted as elements.
pub fn parse_keypath(text: &str) -> Result<Vec<Key>, AppError> {
    let parsed: Value = serde_json::from_str(text)
        .map_err(|e| AppError::Keypath(format!("not valid JSON: {e}")))?;

    let Value::Array(items) = parsed else {
        return Err(AppError::Keypath(format!(
            "expected a JSON array, got {}",
            kind_of(&parsed)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(pos, item)| match item {
            Value::String(name) => Ok(Key::Name(name)),
            Value::Number(n) => match (n.as_i64(), n.is_u64()) {
                (Some(i), _) => Ok(Key::Index(i)),
                // Past i64::MAX: still an index, just one no array can reach.
                (None, true) => Ok(Key::Index(i64::MAX)),
                (None, false) => Err(AppError::Keypath(format!(
                    "element {pos} is not an integer index: {n}"
                ))),
            },
            other => Err(AppError::Keypath(format!(
                "element {pos} is {}, expected a string or an integer",
                kind_of(&other)
            ))),
        })
        .collect()
}

/// Human-readable name of a JSON value's variant, for messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
