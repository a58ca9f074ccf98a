//! Query response contracts for the event content model.
//!
//! These mirror what the data-fetch collaborator hands over after running a
//! persisted query: an `eventList` for the detail page (one item plus its
//! `_references`) and an `eventPaginated` page of edges for the list page.
//! Fetching, caching and pagination stay with the collaborator.

use richref_json::{decode_references, decode_references_lenient};
use richref_types::{value_as_text, DocumentNode, ReferenceRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{SdkError, SdkResult};

/// Strip the GraphQL `data` envelope if present.
fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut obj) if obj.contains_key("data") => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// One event content fragment as returned by the event queries.
///
/// Every field is optional on the wire; list rendering skips items that
/// lack the fields it needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_path", default)]
    pub path: Option<String>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<RichTextField>,
    #[serde(default)]
    pub teasing_image: Option<ImageAsset>,
    /// Number or string, depending on the model.
    #[serde(default)]
    pub capacity: Option<Value>,
    #[serde(default)]
    pub event_start: Option<String>,
    #[serde(default)]
    pub event_end: Option<String>,
}

impl Event {
    /// Capacity as display text.
    pub fn capacity_text(&self) -> Option<String> {
        self.capacity.as_ref().and_then(value_as_text)
    }

    /// Returns `true` if the event has what a list item needs:
    /// a path, a name and a teasing image.
    pub fn is_listable(&self) -> bool {
        let present = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.path) && present(&self.event_name) && self.teasing_image.is_some()
    }

    /// Decode the description into a document tree.
    ///
    /// A missing description decodes to an empty document.
    pub fn description_document(&self) -> SdkResult<DocumentNode> {
        match &self.description {
            Some(field) => field.document(),
            None => Ok(DocumentNode::container(richref_json::DOCUMENT_KIND, Vec::new())),
        }
    }
}

/// A multi-line rich-text field in its JSON rendition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextField {
    #[serde(default)]
    pub json: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<String>,
}

impl RichTextField {
    /// Decode the JSON rendition into a document tree.
    pub fn document(&self) -> SdkResult<DocumentNode> {
        match &self.json {
            Value::Null => Ok(DocumentNode::container(richref_json::DOCUMENT_KIND, Vec::new())),
            json => Ok(richref_json::decode_document(json)?),
        }
    }
}

/// An image asset reference on an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_publishUrl", default)]
    pub publish_url: Option<String>,
    #[serde(rename = "_path", default)]
    pub path: Option<String>,
}

impl ImageAsset {
    /// The URL to display: publish URL, or repository path as fallback.
    pub fn src(&self) -> Option<&str> {
        self.publish_url.as_deref().or(self.path.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Event detail
// ---------------------------------------------------------------------------

/// Response of the event-by-slug query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetailResponse {
    #[serde(rename = "eventList")]
    pub event_list: EventList,
}

/// The `eventList` payload: matching items plus the shared reference list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub items: Vec<Event>,
    #[serde(rename = "_references", default)]
    pub references: Value,
}

impl EventDetailResponse {
    /// Parse a response, with or without the GraphQL `data` envelope.
    pub fn from_value(value: Value) -> SdkResult<Self> {
        Ok(serde_json::from_value(unwrap_data(value))?)
    }

    /// Parse a response from JSON text.
    pub fn from_json_str(s: &str) -> SdkResult<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// The event, if the query matched exactly one.
    pub fn single_event(&self) -> Option<&Event> {
        match self.event_list.items.as_slice() {
            [event] => Some(event),
            _ => None,
        }
    }

    /// The event, or [`SdkError::NoEventFound`] with the item count.
    pub fn require_event(&self) -> SdkResult<&Event> {
        self.single_event()
            .ok_or(SdkError::NoEventFound(self.event_list.items.len()))
    }

    /// Decode the reference collection, skipping records without a usable
    /// `_path` or `__typename`.
    pub fn references(&self) -> SdkResult<Vec<ReferenceRecord>> {
        Ok(decode_references_lenient(&self.event_list.references)?)
    }

    /// Decode the reference collection, failing on the first invalid record.
    pub fn references_strict(&self) -> SdkResult<Vec<ReferenceRecord>> {
        Ok(decode_references(&self.event_list.references)?)
    }
}

// ---------------------------------------------------------------------------
// Event list
// ---------------------------------------------------------------------------

/// Response of the paginated events query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsPage {
    #[serde(rename = "eventPaginated")]
    pub event_paginated: EventConnection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventConnection {
    #[serde(default)]
    pub edges: Vec<EventEdge>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventEdge {
    pub node: Event,
}

impl EventsPage {
    /// Parse a page, with or without the GraphQL `data` envelope.
    pub fn from_value(value: Value) -> SdkResult<Self> {
        Ok(serde_json::from_value(unwrap_data(value))?)
    }

    pub fn from_json_str(s: &str) -> SdkResult<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// All events on the page, in order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.event_paginated.edges.iter().map(|e| &e.node)
    }

    /// Events that can be shown as list items, in order.
    pub fn listable_events(&self) -> Vec<&Event> {
        self.events()
            .filter(|event| {
                let ok = event.is_listable();
                if !ok {
                    debug!(path = ?event.path, "skipping event without path, name or image");
                }
                ok
            })
            .collect()
    }
}
