//! The render-ready output tree.
//!
//! [`RenderedNode`] mirrors [`DocumentNode`](crate::DocumentNode) one to one,
//! except that embeds have been replaced by the output of their type
//! renderer, or by [`RenderedNode::UnresolvedEmbed`] when they could not be
//! resolved.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::FieldMap;

/// A node of the resolved document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RenderedNode {
    Text {
        value: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<String>,
    },
    Container {
        kind: String,
        #[serde(default, skip_serializing_if = "FieldMap::is_empty")]
        data: FieldMap,
        #[serde(default)]
        children: Vec<RenderedNode>,
    },
    /// An embed that was resolved and rendered by the renderer registered
    /// for `type_name`.
    ResolvedEmbed {
        type_name: String,
        output: RenderOutput,
    },
    /// An embed that renders nothing: dangling key or unknown type.
    UnresolvedEmbed,
}

impl RenderedNode {
    /// A plain text run.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
            marks: Vec::new(),
        }
    }

    /// A container with no attributes.
    pub fn container(kind: impl Into<String>, children: Vec<RenderedNode>) -> Self {
        Self::Container {
            kind: kind.into(),
            data: FieldMap::new(),
            children,
        }
    }

    /// Child nodes (empty for leaves).
    pub fn children(&self) -> &[RenderedNode] {
        match self {
            Self::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// All resolved embeds in this subtree, in display order.
    pub fn resolved_embeds(&self) -> Vec<(&str, &RenderOutput)> {
        let mut out = Vec::new();
        self.collect_resolved(&mut out);
        out
    }

    fn collect_resolved<'a>(&'a self, out: &mut Vec<(&'a str, &'a RenderOutput)>) {
        match self {
            Self::ResolvedEmbed { type_name, output } => out.push((type_name, output)),
            Self::Container { children, .. } => {
                for child in children {
                    child.collect_resolved(out);
                }
            }
            Self::Text { .. } | Self::UnresolvedEmbed => {}
        }
    }

    /// Number of unresolved embeds in this subtree.
    pub fn unresolved_count(&self) -> usize {
        match self {
            Self::UnresolvedEmbed => 1,
            Self::Container { children, .. } => children.iter().map(Self::unresolved_count).sum(),
            Self::Text { .. } | Self::ResolvedEmbed { .. } => 0,
        }
    }

    /// Concatenated text of all text runs in this subtree.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { value, .. } => out.push_str(value),
            Self::Container { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::ResolvedEmbed { .. } | Self::UnresolvedEmbed => {}
        }
    }
}

/// What a type renderer produces for one resolved embed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderOutput {
    /// An image-like primitive for asset references.
    Image { src: String, alt: String },
    /// A navigable link for content-fragment references.
    Link { href: String, label: String },
    /// Trusted, already rendered HTML.
    Markup { html: String },
    /// Application-defined structured output.
    Data { value: Value },
}

impl RenderOutput {
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            label: label.into(),
        }
    }

    pub fn data(value: impl Into<Value>) -> Self {
        Self::Data {
            value: value.into(),
        }
    }
}
