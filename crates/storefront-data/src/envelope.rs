//! Response envelope unwrapping.
//!
//! Every listing endpoint answers with `{ "data": { "<field>": [...] } }`.
//! A response that lacks the field is treated as an empty listing, never as
//! a failure.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::FetchError;

/// Extract the collection stored at `data.<field>`.
pub fn extract_collection<T: DeserializeOwned>(
    body: &[u8],
    field: &str,
) -> Result<Vec<T>, FetchError> {
    let root: Value = serde_json::from_slice(body)?;
    collection_from_value(root, field)
}

fn collection_from_value<T: DeserializeOwned>(
    mut root: Value,
    field: &str,
) -> Result<Vec<T>, FetchError> {
    let items = match root.get_mut("data").and_then(|data| data.get_mut(field)) {
        Some(items) => items.take(),
        None => Value::Null,
    };

    if items.is_null() {
        tracing::debug!(field, "envelope field missing, treating as empty");
        return Ok(Vec::new());
    }

    serde_json::from_value(items)
        .map_err(|e| FetchError::Parse(format!("data.{}: {}", field, e)))
}
