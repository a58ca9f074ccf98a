//! Reference collection decoding.
//!
//! The `_references` list of a query response is a flat array of records,
//! each with `_path`, `__typename` and type-specific fields.

use richref_types::ReferenceRecord;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{JsonError, JsonResult};

/// Decode a reference collection from JSON text.
pub fn decode_references_str(s: &str) -> JsonResult<Vec<ReferenceRecord>> {
    let value: Value = serde_json::from_str(s)?;
    decode_references(&value)
}

/// Decode a reference collection.
///
/// `null` decodes to an empty collection. Input order is preserved, since
/// the index resolves duplicate paths by position.
pub fn decode_references(value: &Value) -> JsonResult<Vec<ReferenceRecord>> {
    collection_items(value)?
        .iter()
        .enumerate()
        .map(|(index, item)| decode_record(index, item))
        .collect()
}

/// Decode a reference collection, skipping items that are not valid
/// records.
///
/// A skipped record can never be matched by an embed, so the embeds that
/// point at it degrade to unresolved while the rest of the document still
/// renders. Only a collection that is not an array is an error.
pub fn decode_references_lenient(value: &Value) -> JsonResult<Vec<ReferenceRecord>> {
    let records = collection_items(value)?
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match decode_record(index, item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "skipping invalid reference record");
                None
            }
        })
        .collect();
    Ok(records)
}

fn collection_items(value: &Value) -> JsonResult<&[Value]> {
    match value {
        Value::Null => Ok(&[][..]),
        Value::Array(items) => Ok(items.as_slice()),
        _ => Err(JsonError::InvalidNode {
            at: "/".to_string(),
            reason: "reference collection must be an array".to_string(),
        }),
    }
}

fn decode_record(index: usize, item: &Value) -> JsonResult<ReferenceRecord> {
    ReferenceRecord::deserialize(item).map_err(|e| JsonError::InvalidRecord {
        index,
        reason: e.to_string(),
    })
}
