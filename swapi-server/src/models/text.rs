//! Lenient text columns
//!
//! Body fields are stored as text whatever JSON scalar the client sent:
//! `66` becomes `"66"`, `true` becomes `"true"`. Only `null` is absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` helper for `Option<String>` body fields.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
