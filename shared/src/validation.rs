//! Presence checks for request fields
//!
//! A field is "supplied" when it is present and not the empty string.
//! An empty string therefore behaves exactly like an omitted field: it
//! fails required-field checks on create, and on update it leaves the
//! stored value untouched. There is no way to clear a field.
//!
//! Request fields take any JSON scalar. Numbers and `true` become their
//! text form; `null`, `false` and zero are falsy and read as omitted.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Whether a field was supplied with a non-empty value
#[inline]
pub fn is_supplied(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Keep the value only if it was supplied
#[inline]
pub fn supplied(value: Option<String>) -> Option<String> {
    if is_supplied(&value) {
        value
    } else {
        None
    }
}

/// Deserialize an optional request field from any JSON scalar
///
/// Arrays and objects are rejected.
pub fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err(de::Error::custom(
            "expected a string, number or boolean",
        )),
    }
}
