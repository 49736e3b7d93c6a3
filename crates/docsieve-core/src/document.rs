//! # Documents
//!
//! A [`Document`] is the string-keyed root map a schema validates. Callers
//! usually hold either raw JSON or a typed request struct; both are brought
//! into the document model here.
//!
//! Typed structs are normalized by a round trip through `serde_json`: the
//! struct is serialized to a JSON value and that value is converted. `None`
//! fields therefore arrive as [`Value::Null`], which the `required` rule
//! treats as missing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::value::Value;

/// Root of a validated document: field name to value.
pub type Document = BTreeMap<String, Value>;

/// Serialize `data` and convert the result into a [`Document`].
///
/// # Errors
///
/// Returns [`CoreError::Serialization`] if `data` cannot be represented as
/// JSON, and [`CoreError::NotAnObject`] if it does not serialize to a map.
pub fn to_document<T: Serialize + ?Sized>(data: &T) -> Result<Document, CoreError> {
    let json = serde_json::to_value(data)?;
    document_from_json(json)
}

/// Convert a JSON value into a [`Document`].
///
/// # Errors
///
/// Returns [`CoreError::NotAnObject`] unless `json` is a JSON object.
pub fn document_from_json(json: serde_json::Value) -> Result<Document, CoreError> {
    match Value::from(json) {
        Value::Map(map) => Ok(map),
        other => Err(CoreError::NotAnObject {
            found: other.kind(),
        }),
    }
}
