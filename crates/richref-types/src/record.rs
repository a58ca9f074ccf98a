//! Reference records: metadata for assets and content fragments that a
//! rich-text document embeds by path.
//!
//! Records are supplied out of band, next to the document, as a flat list
//! (the `_references` collection of a query response). On the wire the path
//! is carried as `_path` and the declared type as `__typename`; every other
//! key is a type-specific field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;
use crate::fields::FieldMap;

/// Wire name of the record path field.
pub const PATH_FIELD: &str = "_path";

/// Wire name of the record type field.
pub const TYPE_NAME_FIELD: &str = "__typename";

/// Metadata describing an asset or content fragment referenced from a
/// rich-text document.
///
/// A record is immutable once built. `path` is never empty; it is the key
/// the reference index and embed nodes agree on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireRecord", into = "WireRecord")]
pub struct ReferenceRecord {
    path: String,
    type_name: String,
    fields: FieldMap,
}

impl ReferenceRecord {
    /// Create a record with no type-specific fields.
    pub fn new(path: impl Into<String>, type_name: impl Into<String>) -> Result<Self, TypeError> {
        Self::with_fields(path, type_name, FieldMap::new())
    }

    /// Create a record carrying the given type-specific fields.
    ///
    /// `_path` and `__typename` entries in `fields` are dropped; the explicit
    /// arguments are authoritative.
    pub fn with_fields(
        path: impl Into<String>,
        type_name: impl Into<String>,
        mut fields: FieldMap,
    ) -> Result<Self, TypeError> {
        let path = path.into();
        let type_name = type_name.into();
        if path.is_empty() {
            return Err(TypeError::EmptyPath);
        }
        if type_name.is_empty() {
            return Err(TypeError::EmptyTypeName { path });
        }
        fields.remove(PATH_FIELD);
        fields.remove(TYPE_NAME_FIELD);
        Ok(Self {
            path,
            type_name,
            fields,
        })
    }

    /// Builder-style helper that adds one field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != PATH_FIELD && key != TYPE_NAME_FIELD {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// The content repository path identifying this record.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The declared type, used to pick a renderer.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Type-specific fields (excluding path and type name).
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Look up a field by its wire name, including `_path` and `__typename`.
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            PATH_FIELD => Some(Value::String(self.path.clone())),
            TYPE_NAME_FIELD => Some(Value::String(self.type_name.clone())),
            _ => self.fields.get(key).cloned(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct WireRecord {
    #[serde(rename = "_path")]
    path: String,
    #[serde(rename = "__typename")]
    type_name: String,
    #[serde(flatten)]
    fields: FieldMap,
}

impl TryFrom<WireRecord> for ReferenceRecord {
    type Error = TypeError;

    fn try_from(wire: WireRecord) -> Result<Self, Self::Error> {
        ReferenceRecord::with_fields(wire.path, wire.type_name, wire.fields)
    }
}

impl From<ReferenceRecord> for WireRecord {
    fn from(record: ReferenceRecord) -> Self {
        Self {
            path: record.path,
            type_name: record.type_name,
            fields: record.fields,
        }
    }
}
