//! JSON path resolution.
//!
//! Resolves dot-notation paths like "background.data.attributes.url" to values
//! in CMS records, plus lenient scalar conversions used by the mappers.

use serde_json::Value;

/// Resolve a dot-notation path to a value in JSON.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use travelsite_content::normalize::resolve_json_path;
/// let data = json!({"image": {"formats": {"medium": {"url": "/m.jpg"}}}});
/// let value = resolve_json_path(&data, "image.formats.medium.url");
/// assert_eq!(value, Some(&json!("/m.jpg")));
/// ```
pub fn resolve_json_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(data);
    }

    let mut current = data;
    for part in path.split('.') {
        match current {
            Value::Object(obj) => {
                current = obj.get(part)?;
            }
            Value::Array(arr) => {
                // "links.0.href"
                let index: usize = part.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Non-empty string at `path`, trimmed.
pub fn string_at(data: &Value, path: &str) -> Option<String> {
    resolve_json_path(data, path)
        .and_then(value_to_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Array at `path`, or an empty slice.
pub fn array_at<'a>(data: &'a Value, path: &str) -> &'a [Value] {
    resolve_json_path(data, path)
        .and_then(|v| v.as_array())
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

/// Convert a scalar JSON value to a string. Objects, arrays and null yield `None`.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Convert a JSON value to an integer if possible.
pub fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Convert a JSON value to an unsigned integer if possible.
pub fn value_to_u32(value: &Value) -> Option<u32> {
    value_to_int(value).and_then(|i| u32::try_from(i).ok())
}

/// Convert a JSON value to a boolean if possible.
pub fn value_to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        _ => None,
    }
}
