//! Forgiving deserializers for fields that hand-edited or older export files
//! get wrong without being unusable

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::dashboard::RoleRef;

/// Roles as a list of `{ id }`; anything other than an array reads as empty
/// and entries without a non-empty string `id` are dropped.
pub fn roles<'de, D>(deserializer: D) -> Result<Vec<RoleRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .filter_map(|item| item.get("id").and_then(Value::as_str))
        .filter(|id| !id.is_empty())
        .map(|id| RoleRef { id: id.to_string() })
        .collect())
}

/// A string, or `None` for null and non-string values.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
