//! The rich-text document tree.
//!
//! A document is a closed tagged variant: text runs, containers of ordered
//! children, and embedded references. Child order is display order.

use serde::{Deserialize, Serialize};

use crate::fields::FieldMap;

/// A node in a rich-text document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum DocumentNode {
    /// A run of literal text, with optional formatting marks
    /// (e.g. `bold`, `italic`).
    Text {
        value: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<String>,
    },

    /// A structural node such as a paragraph, header, list or link.
    ///
    /// `kind` is opaque to the walker; `data` carries node attributes
    /// (header style, link href, ...).
    Container {
        kind: String,
        #[serde(default, skip_serializing_if = "FieldMap::is_empty")]
        data: FieldMap,
        #[serde(default)]
        children: Vec<DocumentNode>,
    },

    /// A placeholder for an asset or content fragment that must be resolved
    /// against the reference collection.
    ///
    /// `data` holds the node-local fields serialized with the embed.
    EmbedReference {
        key: EmbedKey,
        #[serde(default, skip_serializing_if = "FieldMap::is_empty")]
        data: FieldMap,
    },
}

impl DocumentNode {
    /// A plain text run.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
            marks: Vec::new(),
        }
    }

    /// A container with no attributes.
    pub fn container(kind: impl Into<String>, children: Vec<DocumentNode>) -> Self {
        Self::Container {
            kind: kind.into(),
            data: FieldMap::new(),
            children,
        }
    }

    /// An embed keyed by an asset-style path.
    pub fn embed_path(path: impl Into<String>) -> Self {
        Self::EmbedReference {
            key: EmbedKey::path(path),
            data: FieldMap::new(),
        }
    }

    /// An embed keyed by a fragment-style href.
    pub fn embed_href(href: impl Into<String>) -> Self {
        Self::EmbedReference {
            key: EmbedKey::href(href),
            data: FieldMap::new(),
        }
    }

    /// Returns `true` if this node is an embedded reference.
    pub fn is_embed(&self) -> bool {
        matches!(self, Self::EmbedReference { .. })
    }

    /// Number of embedded references in this subtree.
    pub fn embed_count(&self) -> usize {
        match self {
            Self::Text { .. } => 0,
            Self::EmbedReference { .. } => 1,
            Self::Container { children, .. } => children.iter().map(Self::embed_count).sum(),
        }
    }
}

/// The node-scoped key an embed is resolved by.
///
/// Asset embeds carry a `path`, fragment embeds an `href`. The serialized
/// form does not forbid both; see [`EmbedKey::lookup_key`] for the
/// precedence rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl EmbedKey {
    /// A path-style key.
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            href: None,
        }
    }

    /// An href-style key.
    pub fn href(href: impl Into<String>) -> Self {
        Self {
            path: None,
            href: Some(href.into()),
        }
    }

    /// The key to look up in the reference index.
    ///
    /// `path` wins over `href` when both are set. Empty strings count as
    /// unset. Returns `None` when neither key is usable.
    pub fn lookup_key(&self) -> Option<LookupKey<'_>> {
        fn non_empty(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|s| !s.is_empty())
        }
        non_empty(&self.path)
            .map(LookupKey::Path)
            .or_else(|| non_empty(&self.href).map(LookupKey::Href))
    }
}

/// The key actually used to resolve an embed, tagged with where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupKey<'a> {
    Path(&'a str),
    Href(&'a str),
}

impl<'a> LookupKey<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Path(s) | Self::Href(s) => s,
        }
    }
}
