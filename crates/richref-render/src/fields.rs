//! Merged field access across an embed node and its resolved record.
//!
//! A renderer sees one logical set of fields: the resolved record's fields
//! layered over the embed node's local fields. Lookup is an explicit two-step
//! search, record first, so precedence never depends on map merge order.

use richref_types::{value_as_text, FieldMap, ReferenceRecord};
use serde_json::Value;

use crate::error::{RenderError, RenderResult};

/// Where a merged field value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSource {
    Record,
    Node,
}

/// The field view handed to a type renderer.
#[derive(Clone, Copy, Debug)]
pub struct MergedFields<'a> {
    record: &'a ReferenceRecord,
    node: &'a FieldMap,
}

impl<'a> MergedFields<'a> {
    pub fn new(record: &'a ReferenceRecord, node: &'a FieldMap) -> Self {
        Self { record, node }
    }

    /// The resolved record.
    pub fn record(&self) -> &'a ReferenceRecord {
        self.record
    }

    /// The embed node's local fields.
    pub fn node(&self) -> &'a FieldMap {
        self.node
    }

    /// Declared type of the resolved record.
    pub fn type_name(&self) -> &'a str {
        self.record.type_name()
    }

    /// Path of the resolved record.
    pub fn path(&self) -> &'a str {
        self.record.path()
    }

    /// Look up a field: record first, then the node.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.record
            .get(key)
            .or_else(|| self.node.get(key).cloned())
    }

    /// Which side a field would be read from, if present at all.
    pub fn source_of(&self, key: &str) -> Option<FieldSource> {
        if self.record.get(key).is_some() {
            Some(FieldSource::Record)
        } else if self.node.contains_key(key) {
            Some(FieldSource::Node)
        } else {
            None
        }
    }

    /// A scalar field rendered as text.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).as_ref().and_then(value_as_text)
    }

    /// A scalar field rendered as text, or a [`RenderError`] naming the
    /// missing or unusable field.
    pub fn require_str(&self, key: &str) -> RenderResult<String> {
        match self.get(key) {
            None | Some(Value::Null) => Err(RenderError::MissingField {
                type_name: self.type_name().to_string(),
                field: key.to_string(),
            }),
            Some(value) => value_as_text(&value).ok_or_else(|| RenderError::InvalidField {
                type_name: self.type_name().to_string(),
                field: key.to_string(),
                reason: "expected a scalar value".to_string(),
            }),
        }
    }

    /// Materialize the merged view as a single map.
    pub fn to_map(&self) -> FieldMap {
        let mut merged = self.node.clone();
        for (key, value) in self.record.fields() {
            merged.insert(key.clone(), value.clone());
        }
        merged.insert(
            richref_types::PATH_FIELD.to_string(),
            Value::String(self.path().to_string()),
        );
        merged.insert(
            richref_types::TYPE_NAME_FIELD.to_string(),
            Value::String(self.type_name().to_string()),
        );
        merged
    }
}
