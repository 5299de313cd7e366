//! Keypath traversal into nested JSON values.
//!
//! [`resolve`] walks a keypath and borrows whatever it lands on; [`dig`]
//! wraps it into an owned [`Dug`] with default substitution. Neither ever
//! fails loudly: every unresolvable path collapses into `found == false`.
//!
//! # Examples
//! ```rust
//! use keydig::{dig, Key};
//! use serde_json::json;
//!
//! let source = json!([9, 8, 7]);
//! let dug = dig(&[Key::from(-1)], &source, None);
//! assert!(dug.found);
//! assert_eq!(dug.value, json!(7));
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::key::{Key, kind_of};

/// Outcome of a [`dig`].
///
/// `value` is the located value when `found` is true, even if that value is
/// `null`. On a miss it carries the caller's default, or `null` when no
/// default was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dug {
    pub found: bool,
    pub value: Value,
}

impl Dug {
    pub fn found(value: Value) -> Self {
        Self { found: true, value }
    }

    pub fn missing(default: Option<Value>) -> Self {
        Self {
            found: false,
            value: default.unwrap_or(Value::Null),
        }
    }

    /// `Some(value)` on a hit, `None` on a miss (the default is dropped).
    pub fn into_option(self) -> Option<Value> {
        self.found.then_some(self.value)
    }
}

/// Walk `keypath` into `source` and clone the value it lands on.
///
/// An empty keypath, or a `null`/empty source, is a miss.
pub fn dig(keypath: &[Key], source: &Value, default: Option<Value>) -> Dug {
    match resolve(keypath, source) {
        Some(value) => Dug::found(value.clone()),
        None => Dug::missing(default),
    }
}

/// Borrowing form of [`dig`]: `Some` exactly when `dig` would report `found`.
pub fn resolve<'a>(keypath: &[Key], source: &'a Value) -> Option<&'a Value> {
    let mut current = source;
    let mut remaining = keypath;

    loop {
        let Some((key, rest)) = remaining.split_first() else {
            trace!("empty keypath");
            return None;
        };
        let depth = keypath.len() - remaining.len();

        if is_empty_container(current) {
            trace!(depth, %key, kind = kind_of(current), "nothing to traverse");
            return None;
        }

        let value = step(current, key, depth)?;

        if rest.is_empty() {
            return Some(value);
        }
        if !matches!(value, Value::Object(_) | Value::Array(_)) {
            trace!(depth, %key, kind = kind_of(value), "keys remain past a scalar");
            return None;
        }

        current = value;
        remaining = rest;
    }
}

/// Null counts as empty: an absent source has nothing to traverse.
fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Resolve a single key against a single container.
fn step<'a>(container: &'a Value, key: &Key, depth: usize) -> Option<&'a Value> {
    let found = match (container, key) {
        (Value::Object(map), Key::Name(name)) => map.get(name),
        (Value::Array(items), Key::Index(i)) => {
            index_from_signed(*i, items.len()).and_then(|idx| items.get(idx))
        }
        _ => None,
    };

    if found.is_none() {
        trace!(depth, %key, kind = kind_of(container), "key did not resolve");
    }
    found
}

/// Map a possibly negative index onto `0..len`, or `None` when out of range.
fn index_from_signed(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok().filter(|&i| i < len)
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}
