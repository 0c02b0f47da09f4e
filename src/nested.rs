// Path-based access into parsed JSON payloads.
// Walks nested objects key by key and reports the first key that cannot be followed.

use serde_json::Value;

use crate::error::{Error, Result};

/// Walk `path` through nested JSON objects starting at `map`.
///
/// An empty path returns `map` itself. Fails with [`Error::KeyNotFound`]
/// naming the first key that is missing, or that is applied to a value
/// which is not an object.
pub fn access_nested_map<'a>(map: &'a Value, path: &[&str]) -> Result<&'a Value> {
    path.iter().try_fold(map, |current, key| {
        current
            .as_object()
            .and_then(|object| object.get(*key))
            .ok_or_else(|| Error::KeyNotFound((*key).to_string()))
    })
}

/// Like [`access_nested_map`], but the value at the end of the path must be a string.
pub fn access_nested_str<'a>(map: &'a Value, path: &[&str]) -> Result<&'a str> {
    let value = access_nested_map(map, path)?;
    value.as_str().ok_or_else(|| Error::UnexpectedType {
        key: path.last().copied().unwrap_or_default().to_string(),
        expected: "string",
    })
}
